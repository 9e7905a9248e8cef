//! Shared test utilities.
//!
//! Helpers for building products, cart lines and catalogs with sensible defaults,
//! plus tracing setup for tests that want log output.

#![allow(clippy::unwrap_used)]

use crate::{
    core::catalog::Catalog,
    entities::{CartItem, Product},
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer tracing subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .with_test_writer()
        .try_init();
}

/// Creates a product with sensible defaults.
///
/// # Defaults
/// * `description`: `"A test plant"`
/// * `rating`: 4.5 with 10 reviews
/// * `stock`: 10
/// * `categories`: `["indoor"]`
pub fn sample_product(id: i64, name: &str, price: u64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: "A test plant".to_string(),
        price,
        old_price: None,
        image: format!("plant{id}.png"),
        rating: 4.5,
        review_count: 10,
        badge: None,
        stock: 10,
        benefits: vec!["Low maintenance".to_string()],
        categories: vec!["indoor".to_string()],
    }
}

/// Creates a cart line with quantity 1.
pub fn sample_item(id: i64, price: u64) -> CartItem {
    CartItem {
        id,
        name: format!("Plant {id}"),
        price,
        image: format!("plant{id}.png"),
        quantity: 1,
    }
}

/// The catalog built from the built-in seed data.
pub fn seeded_catalog() -> Catalog {
    Catalog::seeded().unwrap()
}
