use dotenvy::dotenv;
use leafline::{
    config::{self, catalog::load_catalog_file},
    core::Catalog,
    errors::Result,
    shell::{self, ShellData},
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load store settings
    let settings = config::load_store_settings()
        .inspect_err(|e| error!("Failed to load store settings: {}", e))?;

    // 4. Build the catalog from a catalog file or the built-in seed
    let catalog = match &settings.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path);
            load_catalog_file(path)
                .and_then(|products| Catalog::new(products, config::catalog::seed_categories()))
        }
        None => Catalog::seeded(),
    }
    .inspect_err(|e| error!("Failed to build catalog: {}", e))?;

    // 5. Run the shell on stdin/stdout
    let mut data = ShellData::new(settings, Arc::new(catalog));
    shell::run_shell(&mut data, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
