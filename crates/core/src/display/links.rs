//! Store-access URL construction.

use std::sync::Arc;

use crate::config::LinksConfig;
use crate::store::RawListingItem;

/// Name used in URLs when the item has none.
const FALLBACK_FILE_NAME: &str = "file_name.vid";

const DIRECT_BASE_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Builds the URL a player uses to fetch a listing item.
pub trait LinkBuilder: Send + Sync {
    /// Builder name for logging.
    fn name(&self) -> &str;

    fn url(&self, item: &RawListingItem) -> String;
}

/// Streams through a proxy: `{proxy}/load/{id}/{name}`.
#[derive(Debug, Clone)]
pub struct ProxyLinkBuilder {
    base_url: String,
}

impl ProxyLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl LinkBuilder for ProxyLinkBuilder {
    fn name(&self) -> &str {
        "proxy"
    }

    fn url(&self, item: &RawListingItem) -> String {
        format!("{}/load/{}/{}", self.base_url, item.id, encoded_name(item))
    }
}

/// Fetches straight from the store's media endpoint. The caller supplies
/// authorization when playing.
#[derive(Debug, Clone, Default)]
pub struct DirectLinkBuilder;

impl LinkBuilder for DirectLinkBuilder {
    fn name(&self) -> &str {
        "direct"
    }

    fn url(&self, item: &RawListingItem) -> String {
        format!(
            "{}/{}?alt=media&file_name={}",
            DIRECT_BASE_URL,
            item.id,
            encoded_name(item)
        )
    }
}

/// Pick the link builder for `config`: proxy when a proxy URL is set.
pub fn link_builder_from_config(config: &LinksConfig) -> Arc<dyn LinkBuilder> {
    match config.proxy_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => Arc::new(ProxyLinkBuilder::new(url)),
        None => Arc::new(DirectLinkBuilder),
    }
}

fn encoded_name(item: &RawListingItem) -> String {
    if item.name.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        urlencoding::encode(&item.name).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_url() {
        let builder = ProxyLinkBuilder::new("https://proxy.example.com/");
        let item = RawListingItem::new("abc", "Dune (2021) 1080p.mkv");
        assert_eq!(
            builder.url(&item),
            "https://proxy.example.com/load/abc/Dune%20%282021%29%201080p.mkv"
        );
    }

    #[test]
    fn test_direct_url() {
        let item = RawListingItem::new("abc", "Dune.mkv");
        assert_eq!(
            DirectLinkBuilder.url(&item),
            "https://www.googleapis.com/drive/v3/files/abc?alt=media&file_name=Dune.mkv"
        );
    }

    #[test]
    fn test_empty_name_uses_fallback() {
        let item = RawListingItem::new("abc", "");
        assert!(DirectLinkBuilder.url(&item).ends_with("file_name=file_name.vid"));
    }

    #[test]
    fn test_builder_from_config() {
        let direct = link_builder_from_config(&LinksConfig::default());
        assert_eq!(direct.name(), "direct");

        let proxy = link_builder_from_config(&LinksConfig {
            proxy_url: Some("http://localhost:8787".to_string()),
        });
        assert_eq!(proxy.name(), "proxy");
    }
}
