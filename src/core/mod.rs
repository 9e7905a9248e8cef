//! Core business logic - framework-agnostic cart, catalog, checkout and contact operations.

/// Shopping cart state, reducer and store
pub mod cart;
/// Read-only catalog queries
pub mod catalog;
/// Contact form validation and inbox
pub mod contact;
/// Search-as-you-type debouncing
pub mod search;
/// Subtotal, shipping and total derivation
pub mod summary;

pub use cart::{CartAction, CartState, CartStore};
pub use catalog::{Catalog, SortOrder};
pub use contact::{ContactDesk, ContactForm};
pub use search::{SearchDebouncer, SearchOutcome};
pub use summary::{OrderSummary, ShippingPolicy, format_price};
