//! Store settings loading from config.toml
//!
//! Settings cover the knobs the storefront exposes to an operator: the currency
//! label, the shipping policy, the low-stock threshold and the search debounce
//! delay. Every field has a default, so a missing `config.toml` is not an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// The `[store]` table
    #[serde(default)]
    pub store: StoreSettings,
}

/// Storefront settings from the `[store]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Currency label prefixed to rendered prices (e.g., "Rs.")
    pub currency: String,
    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: u64,
    /// Shipping fee charged below the threshold
    pub flat_shipping_fee: u64,
    /// Stock level at or below which the "Only N left" indicator is shown
    pub low_stock_threshold: u32,
    /// Delay before a search-as-you-type query runs, in milliseconds
    pub search_debounce_ms: u64,
    /// Optional TOML file whose `[[products]]` replace the built-in catalog
    pub catalog_path: Option<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            currency: "Rs.".to_string(),
            free_shipping_threshold: 999,
            flat_shipping_fee: 99,
            low_stock_threshold: 5,
            search_debounce_ms: 300,
            catalog_path: None,
        }
    }
}

impl StoreSettings {
    /// Search debounce delay as a [`Duration`].
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the settings path from `STOREFRONT_CONFIG`, falling back to `./config.toml`.
#[must_use]
pub fn get_config_path() -> String {
    std::env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Loads store settings from the configured location.
///
/// The path comes from `STOREFRONT_CONFIG` and the catalog override from
/// `STOREFRONT_CATALOG`; see [`load_store_settings_from`].
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_store_settings() -> Result<StoreSettings> {
    load_store_settings_from(get_config_path(), std::env::var("STOREFRONT_CATALOG").ok())
}

/// Loads store settings from `path`, applying a catalog path override.
///
/// A missing file yields the defaults. `catalog_override`, when set, replaces
/// `catalog_path` from the file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_store_settings_from<P: AsRef<Path>>(
    path: P,
    catalog_override: Option<String>,
) -> Result<StoreSettings> {
    let path = path.as_ref();
    let mut settings = if path.exists() {
        let config = load_config(path)?;
        tracing::info!("Loaded store settings from {}", path.display());
        config.store
    } else {
        tracing::info!("No settings file at {}, using defaults", path.display());
        StoreSettings::default()
    };

    if let Some(catalog_path) = catalog_override {
        settings.catalog_path = Some(catalog_path);
    }

    Ok(settings)
}
