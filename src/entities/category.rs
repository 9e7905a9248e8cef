//! Category entity - A browsable section of the catalog.
//!
//! The category `id` doubles as the tag products carry in their category list,
//! so filtering a category is a tag lookup.

use serde::{Deserialize, Serialize};

/// Category directory entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Tag this category filters on (e.g., "pet-friendly")
    pub id: String,
    /// Display name (e.g., "Pet Friendly")
    pub name: String,
    /// One-line description shown on the category card
    pub description: String,
    /// Image reference for the category card
    pub image: String,
}
