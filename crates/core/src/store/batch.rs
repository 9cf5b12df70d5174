//! Fan-out of synthesized queries to a file store.

use futures::future::join_all;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::query::Query;

use super::{FileStore, RawListingItem};

/// Submit every query to the store and union the results.
///
/// Submissions run concurrently. Results keep query order, then store order
/// within each query. A failed submission is logged and contributes nothing.
pub async fn search_all(
    store: &dyn FileStore,
    queries: &[Query],
    config: &StoreConfig,
) -> Vec<RawListingItem> {
    let start = Instant::now();
    let submissions: Vec<String> = queries
        .iter()
        .map(|q| config.submission(&q.expression()))
        .collect();

    let responses = join_all(submissions.iter().map(|s| store.list(s, config.page_size))).await;

    let mut items = Vec::new();
    let mut failed = 0usize;
    for (submission, response) in submissions.iter().zip(responses) {
        match response {
            Ok(found) => {
                debug!(store = store.name(), query = %submission, found = found.len(), "Query done");
                items.extend(found);
            }
            Err(e) => {
                failed += 1;
                warn!(store = store.name(), query = %submission, error = %e, "Query failed, skipping");
            }
        }
    }

    debug!(
        store = store.name(),
        queries = queries.len(),
        page_size = config.page_size,
        failed,
        items = items.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Store search complete"
    );
    items
}
