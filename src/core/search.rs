//! Search-as-you-type debouncing.
//!
//! [`SearchDebouncer`] sits between a text input and [`Catalog::search`]. Each
//! submitted query waits out the debounce delay and only runs if no newer query
//! arrived in the meantime. The catalog itself knows nothing about time.

use super::catalog::Catalog;
use crate::entities::Product;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tracing::trace;

/// What a debounced query resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query ran; matches in catalog order
    Results(Vec<Product>),
    /// A newer query was submitted before this one's delay elapsed
    Superseded,
}

impl SearchOutcome {
    /// The results, or `None` when superseded.
    #[must_use]
    pub fn into_results(self) -> Option<Vec<Product>> {
        match self {
            Self::Results(products) => Some(products),
            Self::Superseded => None,
        }
    }
}

/// Delays catalog searches and drops the ones overtaken by newer input.
#[derive(Debug)]
pub struct SearchDebouncer {
    catalog: Arc<Catalog>,
    delay: Duration,
    latest: AtomicU64,
}

impl SearchDebouncer {
    /// Creates a debouncer over a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            latest: AtomicU64::new(0),
        }
    }

    /// Submits the current input.
    ///
    /// A blank query resolves to no results at once and cancels any pending query.
    /// Any other query resolves after the delay, unless superseded first.
    pub async fn submit(&self, query: &str) -> SearchOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            return SearchOutcome::Results(Vec::new());
        }

        tokio::time::sleep(self.delay).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            trace!(query, ticket, "Search superseded");
            return SearchOutcome::Superseded;
        }

        let results = self.catalog.search(query).into_iter().cloned().collect();
        SearchOutcome::Results(results)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::seeded_catalog;
    use tokio::time::{Instant, sleep};

    fn debouncer() -> SearchDebouncer {
        SearchDebouncer::new(Arc::new(seeded_catalog()), Duration::from_millis(300))
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_query_wins() {
        let debouncer = debouncer();

        let (first, second) = tokio::join!(debouncer.submit("mon"), async {
            sleep(Duration::from_millis(100)).await;
            debouncer.submit("monstera").await
        });

        assert_eq!(first, SearchOutcome::Superseded);
        let results = second.into_results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Monstera Deliciosa");
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_queries_both_run() {
        let debouncer = debouncer();

        let started = Instant::now();
        let first = debouncer.submit("succulent").await;
        assert!(started.elapsed() >= Duration::from_millis(300));
        assert_eq!(first.into_results().unwrap().len(), 3);

        let second = debouncer.submit("fig").await;
        assert_eq!(second.into_results().unwrap()[0].name, "Fiddle Leaf Fig");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_resolves_immediately() {
        let debouncer = debouncer();
        let started = Instant::now();
        let outcome = debouncer.submit("   ").await;
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(outcome, SearchOutcome::Results(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_input_cancels_pending_query() {
        let debouncer = debouncer();

        let (pending, cleared) = tokio::join!(debouncer.submit("snake"), async {
            sleep(Duration::from_millis(50)).await;
            debouncer.submit("").await
        });

        assert_eq!(pending, SearchOutcome::Superseded);
        assert_eq!(cleared.into_results().unwrap(), Vec::new());
    }
}
