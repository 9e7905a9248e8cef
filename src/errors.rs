//! Unified error types and result handling.
//!
//! Cart and catalog queries are total and never produce these errors. They come
//! from the fallible edges around them: configuration loading, catalog seed
//! validation, the stock-aware add helper, and contact form submission.

use thiserror::Error;

/// Every error the storefront can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings or catalog file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Catalog seed data breaks a catalog invariant (duplicate id, bad rating, ...)
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// Which record was rejected and why
        message: String,
    },

    /// No product with the given id exists in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// A product is sold out
    #[error("'{name}' is out of stock")]
    OutOfStock {
        /// Product name
        name: String,
    },

    /// Adding the requested quantity would put more in the cart than is in stock
    #[error("Only {available} of '{name}' available, cart would hold {requested}")]
    InsufficientStock {
        /// Product name
        name: String,
        /// Units in stock
        available: u32,
        /// Units the cart would contain after the add
        requested: u32,
    },

    /// A quantity of zero was passed where at least one unit is required
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: u32,
    },

    /// A contact form field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInquiry {
        /// Form field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// I/O error from the shell
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
