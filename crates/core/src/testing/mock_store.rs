//! Mock file store for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::store::{FileStore, RawListingItem, StoreError};

/// A query handler that produces results dynamically based on the submission.
type QueryHandler = Box<dyn Fn(&str) -> Result<Vec<RawListingItem>, StoreError> + Send + Sync>;

/// Mock implementation of the FileStore trait.
///
/// Returns the configured items for every submission unless a handler is
/// set, truncated to the requested page size, and records every submission
/// for assertions.
///
/// # Example
///
/// ```rust,ignore
/// use drivescout_core::testing::{MockFileStore, fixtures};
///
/// let store = MockFileStore::with_items(vec![
///     fixtures::listing_item("1", "Dune.2021.2160p.mkv"),
/// ]);
/// let items = store.list("name contains 'Dune'", 1000).await?;
/// assert_eq!(items.len(), 1);
/// assert_eq!(store.recorded_queries().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockFileStore {
    items: Arc<RwLock<Vec<RawListingItem>>>,
    queries: Arc<RwLock<Vec<String>>>,
    page_sizes: Arc<RwLock<Vec<u32>>>,
    handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFileStore")
            .field("items", &"<items>")
            .field("queries", &"<queries>")
            .field("page_sizes", &"<page_sizes>")
            .field("handler", &"<handler>")
            .finish()
    }
}

impl Default for MockFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileStore {
    /// Create a store that returns nothing.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            page_sizes: Arc::new(RwLock::new(Vec::new())),
            handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store returning `items` for every submission.
    pub fn with_items(items: Vec<RawListingItem>) -> Self {
        let store = Self::new();
        store.set_items(items);
        store
    }

    /// Replace the items returned for every submission.
    pub fn set_items(&self, items: Vec<RawListingItem>) {
        if let Ok(mut guard) = self.items.write() {
            *guard = items;
        }
    }

    /// Answer submissions with `handler` instead of the fixed items.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Result<Vec<RawListingItem>, StoreError> + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.handler.write() {
            *guard = Some(Box::new(handler));
        }
    }

    /// Submissions received so far, in arrival order.
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().map(|q| q.clone()).unwrap_or_default()
    }

    /// Page sizes requested so far, in arrival order.
    pub fn recorded_page_sizes(&self) -> Vec<u32> {
        self.page_sizes.read().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl FileStore for MockFileStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list(
        &self,
        expression: &str,
        page_size: u32,
    ) -> Result<Vec<RawListingItem>, StoreError> {
        if let Ok(mut guard) = self.queries.write() {
            guard.push(expression.to_string());
        }
        if let Ok(mut guard) = self.page_sizes.write() {
            guard.push(page_size);
        }

        let mut items = {
            let handler = self
                .handler
                .read()
                .map_err(|e| StoreError::Internal(e.to_string()))?;
            match handler.as_ref() {
                Some(handler) => handler(expression)?,
                None => self
                    .items
                    .read()
                    .map(|items| items.clone())
                    .map_err(|e| StoreError::Internal(e.to_string()))?,
            }
        };
        items.truncate(page_size as usize);
        Ok(items)
    }
}
