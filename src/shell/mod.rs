//! Shell layer - a line-oriented storefront front end.
//!
//! The shell plays the part of the presentation layer: it reads one command per
//! line, forwards the shopper's intents to the cart, catalog and contact desk, and
//! prints what a page would render. It owns no business rules of its own.

/// Command parsing and handlers
pub mod commands;
/// Text rendering for replies
mod format;

use crate::{
    config::StoreSettings,
    core::{CartStore, Catalog, ContactDesk, SearchDebouncer, ShippingPolicy},
    errors::Result,
};
use commands::Reply;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

/// Session state available to every shell command.
/// Holds the shopper's cart alongside the shared catalog and store settings.
#[derive(Debug)]
pub struct ShellData {
    /// Store settings from config.toml
    pub settings: StoreSettings,
    /// The product catalog
    pub catalog: Arc<Catalog>,
    /// The shopper's cart
    pub cart: CartStore,
    /// Debounced search over the catalog
    pub search: SearchDebouncer,
    /// Contact form inbox
    pub contact: ContactDesk,
}

impl ShellData {
    /// Creates a session with an empty cart and inbox.
    #[must_use]
    pub fn new(settings: StoreSettings, catalog: Arc<Catalog>) -> Self {
        let search = SearchDebouncer::new(Arc::clone(&catalog), settings.search_debounce());
        Self {
            settings,
            catalog,
            cart: CartStore::new(),
            search,
            contact: ContactDesk::new(),
        }
    }

    /// Shipping policy derived from the settings.
    #[must_use]
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::from(&self.settings)
    }
}

/// Runs the shell until `quit` or end of input.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run_shell<R, W>(data: &mut ShellData, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Starting storefront shell...");
    output
        .write_all(b"Welcome to Leafline! Type `help` to see what you can do.\n")
        .await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match commands::execute(data, &line).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error in command `{}`: {:?}", line.trim(), e);
                Reply::Text(format!("An error occurred: {e}"))
            }
        };

        match reply {
            Reply::Text(text) => {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
                output.flush().await?;
            }
            Reply::Silent => {}
            Reply::Quit => {
                output.write_all(b"Goodbye!\n").await?;
                break;
            }
        }
    }

    output.flush().await?;
    info!("Shell finished.");
    Ok(())
}
