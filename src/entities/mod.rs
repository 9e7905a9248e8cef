//! Entity module - Plain data records shared by the catalog, cart and contact desk.
//! These are serializable value types with no behavior beyond small derived helpers.

pub mod cart_item;
pub mod category;
pub mod inquiry;
pub mod product;

pub use cart_item::CartItem;
pub use category::Category;
pub use inquiry::{Inquiry, Subject};
pub use product::Product;
