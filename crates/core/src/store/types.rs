//! Types for the remote file store.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Container used for items the store does not place in a shared drive.
pub const LOCAL_CONTAINER: &str = "local";

/// A file listing entry as returned by the store.
///
/// `name` is authoritative for all parsing. Deserializes from the store's
/// own field names (`driveId`, `md5Checksum`) as well as the neutral ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListingItem {
    /// Store-unique id.
    #[serde(default)]
    pub id: String,
    /// Filename.
    #[serde(default)]
    pub name: String,
    /// Size in bytes. The store reports it as a decimal string.
    #[serde(
        default,
        deserialize_with = "deserialize_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u64>,
    /// Logical drive grouping.
    #[serde(default, alias = "driveId", skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    /// Content checksum.
    #[serde(default, alias = "md5Checksum", skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl RawListingItem {
    /// Create an item with only id and name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: None,
            container_id: None,
            content_hash: None,
        }
    }

    /// Size in bytes, 0 when unknown.
    pub fn size_bytes(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// Container id, or [`LOCAL_CONTAINER`] when absent.
    pub fn container(&self) -> &str {
        self.container_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(LOCAL_CONTAINER)
    }

    /// Content hash, if present and non-empty.
    pub fn hash(&self) -> Option<&str> {
        self.content_hash.as_deref().filter(|h| !h.is_empty())
    }
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SizeRepr {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<SizeRepr>::deserialize(deserializer)? {
        Some(SizeRepr::Number(n)) => Some(n),
        Some(SizeRepr::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// One page of a store listing response: `{"files": [...], "nextPageToken": ...}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    #[serde(default)]
    pub files: Vec<RawListingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Parse a listing from JSON: either a listing page or a bare item array.
pub fn parse_listing(json: &str) -> Result<Vec<RawListingItem>, StoreError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Listing {
        Items(Vec<RawListingItem>),
        Page(ListingPage),
    }

    match serde_json::from_str::<Listing>(json) {
        Ok(Listing::Items(items)) => Ok(items),
        Ok(Listing::Page(page)) => Ok(page.files),
        Err(e) => Err(StoreError::ApiError(format!("Invalid listing: {}", e))),
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Store API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Trait for query-searchable file stores.
///
/// Implementations own authentication, pagination and retries. `list` gets a
/// complete submission (title expression plus boilerplate clauses).
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store name for logging.
    fn name(&self) -> &str;

    /// List files matching `expression`, at most `page_size` of them.
    async fn list(
        &self,
        expression: &str,
        page_size: u32,
    ) -> Result<Vec<RawListingItem>, StoreError>;
}
