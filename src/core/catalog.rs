//! Catalog business logic - Read-only queries over the product list.
//!
//! The catalog is built once from seed data and never changes afterwards. All
//! queries are synchronous and infallible: lookups that find nothing return `None`
//! or an empty list, and results always come back in catalog order unless a
//! [`SortOrder`] says otherwise. [`Catalog::product`] is the one lookup that reports
//! a miss as an error, for the cart commands.

use crate::{
    config::catalog::{POPULAR_SEARCHES, seed_categories, seed_products},
    entities::{Category, Product},
    errors::{Error, Result},
};
use std::{cmp::Ordering, collections::HashSet, fmt, str::FromStr};
use tracing::{debug, info};

/// Number of products in each home-page section.
const SECTION_SIZE: usize = 6;

/// Orderings offered by the product list's "Sort by" selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Featured,
    /// Cheapest first
    PriceLowToHigh,
    /// Most expensive first
    PriceHighToLow,
    /// Most recently added (highest id) first
    Newest,
    /// Best rating first
    HighestRated,
}

impl SortOrder {
    /// Every order with its selector value.
    pub const ALL: [(Self, &'static str); 5] = [
        (Self::Featured, "featured"),
        (Self::PriceLowToHigh, "price-low"),
        (Self::PriceHighToLow, "price-high"),
        (Self::Newest, "newest"),
        (Self::HighestRated, "rating"),
    ];

    /// Selector value for this order.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(order, _)| *order == self)
            .map_or("featured", |(_, name)| *name)
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceLowToHigh => a.price.cmp(&b.price),
            Self::PriceHighToLow => b.price.cmp(&a.price),
            Self::Newest => b.id.cmp(&a.id),
            Self::HighestRated => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|(_, name)| *name == wanted)
            .map(|(order, _)| *order)
            .ok_or_else(|| Error::Config {
                message: format!("Unknown sort order '{s}'"),
            })
    }
}

/// The product catalog and its category directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog after validating the product list.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Two products share an id
    /// - A product name is empty or whitespace-only
    /// - A rating is outside 0.0 to 5.0
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(products.len());
        for product in &products {
            if !ids.insert(product.id) {
                return Err(Error::InvalidCatalog {
                    message: format!("Duplicate product id {}", product.id),
                });
            }
            if product.name.trim().is_empty() {
                return Err(Error::InvalidCatalog {
                    message: format!("Product {} has an empty name", product.id),
                });
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(Error::InvalidCatalog {
                    message: format!(
                        "Product {} has rating {} outside 0-5",
                        product.id, product.rating
                    ),
                });
            }
        }

        info!(
            "Catalog built with {} products and {} categories.",
            products.len(),
            categories.len()
        );
        Ok(Self {
            products,
            categories,
        })
    }

    /// Builds the catalog from the built-in seed data.
    ///
    /// # Errors
    /// Returns an error if the seed data fails validation.
    pub fn seeded() -> Result<Self> {
        Self::new(seed_products(), seed_categories())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    /// The product with the given id.
    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The product with the given id, for callers that treat a miss as an error.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if no product has this id.
    pub fn product(&self, id: i64) -> Result<&Product> {
        self.get_by_id(id).ok_or(Error::ProductNotFound { id })
    }

    /// Products tagged with `tag` (exact, case-sensitive), in catalog order.
    #[must_use]
    pub fn get_by_category(&self, tag: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.has_category(tag))
            .collect()
    }

    /// Case-insensitive substring search over names, descriptions and category tags.
    ///
    /// A query that is empty or only whitespace matches nothing. Otherwise the query
    /// is matched as typed (only lowercased), and results keep catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product
                        .categories
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect();

        debug!(query, matches = results.len(), "Catalog search");
        results
    }

    /// The home page's "Top Selling" section: the first six products.
    #[must_use]
    pub fn top_selling(&self) -> &[Product] {
        &self.products[..SECTION_SIZE.min(self.products.len())]
    }

    /// The home page's "Trendy Plants" section: products seven through twelve.
    #[must_use]
    pub fn trendy(&self) -> &[Product] {
        let start = SECTION_SIZE.min(self.products.len());
        let end = (SECTION_SIZE * 2).min(self.products.len());
        &self.products[start..end]
    }

    /// All products ordered by `order`. Ties keep catalog order.
    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        products.sort_by(|a, b| order.compare(a, b));
        products
    }

    /// The category directory in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category with the given id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Suggested search terms.
    #[must_use]
    pub const fn popular_searches(&self) -> &'static [&'static str] {
        &POPULAR_SEARCHES
    }
}
