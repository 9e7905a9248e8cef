//! Product entity - A plant offered in the catalog.
//!
//! Products are defined once when the catalog is built and never mutated afterwards.
//! The cart never holds a `Product` directly; it holds a [`CartItem`] projection so
//! that cart contents stay stable even if a catalog is rebuilt with new seed data.

use super::cart_item::CartItem;
use serde::{Deserialize, Serialize};

/// Product catalog record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: i64,
    /// Display name (e.g., "Monstera Deliciosa")
    pub name: String,
    /// Marketing description shown on the detail overlay
    pub description: String,
    /// Unit price in whole currency units
    pub price: u64,
    /// Previous price, shown struck through when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<u64>,
    /// Image reference (file name or URL)
    pub image: String,
    /// Average review rating, 0.0 to 5.0
    pub rating: f64,
    /// Number of reviews the rating is based on
    pub review_count: u32,
    /// Short promotional label (e.g., "Bestseller")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Units in stock
    pub stock: u32,
    /// Bullet points shown on the detail overlay
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Category tags used for filtering and search (e.g., "succulent")
    #[serde(default, rename = "category")]
    pub categories: Vec<String>,
}

impl Product {
    /// Whether at least one unit can be sold.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the "Only N left" indicator applies at the given threshold.
    #[must_use]
    pub const fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }

    /// Percentage saved against `old_price`, rounded to the nearest whole percent.
    ///
    /// Returns `None` when there is no old price or it is not higher than the current one.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u64> {
        let old = self.old_price?;
        if old <= self.price {
            return None;
        }
        let saved = old - self.price;
        Some((saved * 100 + old / 2) / old)
    }

    /// Whether the product carries the given category tag (exact, case-sensitive).
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// Projects this product into a cart line with a quantity of one.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_product;

    #[test]
    fn test_discount_percent() {
        let mut product = sample_product(1, "Monstera Deliciosa", 1299);
        assert_eq!(product.discount_percent(), None);

        product.old_price = Some(1499);
        // 200 / 1499 = 13.3%
        assert_eq!(product.discount_percent(), Some(13));

        product.old_price = Some(1299);
        assert_eq!(product.discount_percent(), None);

        product.old_price = Some(999);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_stock_helpers() {
        let mut product = sample_product(2, "Snake Plant", 899);
        product.stock = 5;
        assert!(product.is_in_stock());
        assert!(product.is_low_stock(5));
        assert!(!product.is_low_stock(4));

        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_to_cart_item() {
        let product = sample_product(7, "Alocasia Zebrina", 1299);
        let item = product.to_cart_item();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Alocasia Zebrina");
        assert_eq!(item.price, 1299);
        assert_eq!(item.image, product.image);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut product = sample_product(1, "Monstera Deliciosa", 1299);
        product.old_price = Some(1499);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["oldPrice"], 1499);
        assert_eq!(json["reviewCount"], product.review_count);
        assert!(json["category"].is_array());
        assert!(json.get("badge").is_none());
    }
}
