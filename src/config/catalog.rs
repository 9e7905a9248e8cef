//! Catalog seed data and catalog file loading.
//!
//! The storefront ships with a built-in list of twelve plants and eight browsable
//! categories. An operator may replace the product list with a TOML file of
//! `[[products]]` tables; the category directory is always the built-in one.

use crate::{
    entities::{Category, Product},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Structure of a catalog TOML file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Products in catalog order
    pub products: Vec<Product>,
}

/// Loads a product list from a TOML catalog file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse as a list of products.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;

    let file: CatalogFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file {}: {e}", path_ref.display()),
    })?;
    Ok(file.products)
}

#[allow(clippy::too_many_arguments)]
fn plant(
    id: i64,
    name: &str,
    description: &str,
    price: u64,
    old_price: Option<u64>,
    image: &str,
    rating: f64,
    review_count: u32,
    badge: Option<&str>,
    stock: u32,
    benefits: &[&str],
    categories: &[&str],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        old_price,
        image: image.to_string(),
        rating,
        review_count,
        badge: badge.map(str::to_string),
        stock,
        benefits: benefits.iter().map(|b| (*b).to_string()).collect(),
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
    }
}

/// The built-in product list. The first six are the top sellers, the next six the trendy picks.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_products() -> Vec<Product> {
    vec![
        plant(
            1,
            "Monstera Deliciosa",
            "The iconic Swiss Cheese Plant with unique split leaves that create a dramatic tropical statement.",
            1299,
            Some(1499),
            "flower4.png",
            4.9,
            128,
            Some("Bestseller"),
            15,
            &["Air purifying", "Low maintenance", "Stunning foliage"],
            &["indoor", "tropical", "popular"],
        ),
        plant(
            2,
            "Snake Plant",
            "A virtually indestructible plant with striking upright leaves, perfect for beginners and busy plant parents.",
            899,
            None,
            "flower5.png",
            4.7,
            98,
            Some("Easy Care"),
            8,
            &["Air purifying", "Low light tolerant", "Drought resistant"],
            &["indoor", "succulent", "beginner-friendly"],
        ),
        plant(
            3,
            "Peace Lily",
            "Elegant white blooms and glossy leaves make this air-purifying plant a timeless favorite.",
            999,
            None,
            "flower6.png",
            4.8,
            112,
            Some("Air Purifier"),
            12,
            &["Air purifying", "Beautiful blooms", "Low light tolerant"],
            &["indoor", "flowering", "air-purifying"],
        ),
        plant(
            4,
            "Fiddle Leaf Fig",
            "The Instagram darling with large violin-shaped leaves that brings designer style to any room.",
            1599,
            Some(1899),
            "flower7.png",
            4.6,
            87,
            Some("Trending"),
            5,
            &["Statement plant", "Architectural shape", "Instagram favorite"],
            &["indoor", "tropical", "popular"],
        ),
        plant(
            5,
            "Pothos Golden",
            "Fast-growing vining plant with heart-shaped leaves variegated in green and golden yellow.",
            799,
            None,
            "flower8.png",
            4.9,
            156,
            None,
            20,
            &["Air purifying", "Fast growing", "Low maintenance"],
            &["indoor", "hanging", "beginner-friendly"],
        ),
        plant(
            6,
            "ZZ Plant",
            "Virtually unkillable plant with glossy leaves that thrives in low light and requires minimal water.",
            899,
            None,
            "flower9.png",
            4.8,
            92,
            None,
            10,
            &["Low maintenance", "Low light tolerant", "Drought resistant"],
            &["indoor", "tropical", "beginner-friendly"],
        ),
        plant(
            7,
            "Alocasia Zebrina",
            "Known for its striking zebra-patterned stems and large arrow-shaped leaves, this tropical plant adds exotic drama to any space.",
            1299,
            None,
            "flower2.png",
            4.8,
            94,
            Some("Trending"),
            7,
            &["Stunning zebra-patterned stems", "Bold tropical look", "Statement piece"],
            &["indoor", "tropical", "rare"],
        ),
        plant(
            8,
            "Calathea Orbifolia",
            "Featuring large, round leaves with stunning silver and green stripes that move throughout the day. A true plant collector's favorite.",
            799,
            None,
            "flower3.png",
            4.7,
            87,
            Some("Popular"),
            12,
            &["Air purifying", "Pet friendly", "Decorative leaves"],
            &["indoor", "tropical", "pet-friendly"],
        ),
        plant(
            9,
            "Philodendron Pink Princess",
            "One of the most sought-after houseplants with stunning dark green leaves splashed with vibrant pink variegation.",
            1999,
            Some(2499),
            "flower2.png",
            4.9,
            156,
            Some("Rare Find"),
            3,
            &["Stunning pink variegation", "Collector's item", "Fast growing"],
            &["indoor", "tropical", "rare"],
        ),
        plant(
            10,
            "Hoya Kerrii",
            "The adorable heart-shaped leaf plant, perfect for adding a touch of love to any space. Low maintenance and long-lasting.",
            599,
            None,
            "flower3.png",
            4.6,
            78,
            Some("Gift Favorite"),
            18,
            &["Heart-shaped leaves", "Long-lasting", "Low maintenance"],
            &["indoor", "succulent", "gift"],
        ),
        plant(
            11,
            "Pilea Peperomioides",
            "Chinese Money Plant with quirky coin-shaped leaves that brings a modern, minimalist aesthetic to any space.",
            699,
            None,
            "flower2.png",
            4.8,
            112,
            Some("Bestseller"),
            15,
            &["Unique coin-shaped leaves", "Produces baby plants", "Modern aesthetic"],
            &["indoor", "unique", "popular"],
        ),
        plant(
            12,
            "String of Pearls",
            "This succulent features cascading stems of bead-like leaves, creating a waterfall effect perfect for hanging displays.",
            549,
            None,
            "flower3.png",
            4.7,
            94,
            None,
            9,
            &["Drought tolerant", "Unique trailing habit", "Space-efficient"],
            &["indoor", "succulent", "hanging"],
        ),
    ]
}

fn category(id: &str, name: &str, description: &str, image: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// The built-in category directory, in display order.
#[must_use]
pub fn seed_categories() -> Vec<Category> {
    vec![
        category(
            "indoor",
            "Indoor Plants",
            "Perfect plants for brightening up your indoor spaces",
            "flower4.png",
        ),
        category(
            "tropical",
            "Tropical Plants",
            "Exotic tropical varieties to create your own indoor jungle",
            "flower2.png",
        ),
        category(
            "air-purifying",
            "Air Purifying",
            "Plants that help clean and purify your indoor air",
            "flower6.png",
        ),
        category(
            "succulent",
            "Succulents",
            "Low-maintenance, water-storing plants perfect for beginners",
            "flower5.png",
        ),
        category(
            "hanging",
            "Hanging Plants",
            "Trailing and cascading plants for hanging displays",
            "flower3.png",
        ),
        category(
            "beginner-friendly",
            "Beginner Friendly",
            "Easy to care for plants that are perfect for new plant parents",
            "flower9.png",
        ),
        category(
            "pet-friendly",
            "Pet Friendly",
            "Safe plants for homes with curious pets",
            "flower8.png",
        ),
        category(
            "rare",
            "Rare & Unique",
            "Special and hard-to-find varieties for collectors",
            "flower7.png",
        ),
    ]
}

/// Suggestion chips shown in the search overlay before anything is typed.
pub const POPULAR_SEARCHES: [&str; 5] = [
    "Monstera",
    "Air Purifying",
    "Succulents",
    "Low Light",
    "Pet Friendly",
];
