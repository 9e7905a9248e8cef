/// Catalog seed data and catalog file loading
pub mod catalog;

/// Store settings loading from config.toml
pub mod settings;

pub use settings::{StoreSettings, load_store_settings};
