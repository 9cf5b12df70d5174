//! Testing utilities and mock implementations.
//!
//! Provides an in-memory [`FileStore`](crate::store::FileStore) and listing
//! fixtures so the full search-and-resolve flow can run without a real store.
//!
//! # Example
//!
//! ```rust,ignore
//! use drivescout_core::testing::{fixtures, MockFileStore};
//!
//! let store = MockFileStore::with_items(vec![
//!     fixtures::sized_item("1", "Dune.2021.2160p.mkv", 4 * fixtures::GB),
//! ]);
//! let candidates = resolver.search_and_resolve(&store, &request).await;
//! ```

mod mock_store;

pub use mock_store::MockFileStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::store::RawListingItem;

    pub const GB: u64 = 1024 * 1024 * 1024;

    /// A listing item with only id and name, stored in the local container.
    pub fn listing_item(id: &str, name: &str) -> RawListingItem {
        RawListingItem::new(id, name)
    }

    /// A listing item with a size.
    pub fn sized_item(id: &str, name: &str, size: u64) -> RawListingItem {
        let mut item = RawListingItem::new(id, name);
        item.size = Some(size);
        item
    }

    /// A listing item placed in a shared drive with a content hash.
    pub fn drive_item(id: &str, name: &str, drive: &str, hash: &str) -> RawListingItem {
        let mut item = RawListingItem::new(id, name);
        item.container_id = Some(drive.to_string());
        item.content_hash = Some(hash.to_string());
        item.size = Some(2 * GB);
        item
    }

    /// Scene-style episode filename, e.g. `Breaking.Bad.S01E04.1080p.WEB-DL.mkv`.
    pub fn episode_name(title: &str, season: u32, episode: u32, resolution: &str) -> String {
        format!(
            "{}.S{:02}E{:02}.{}.WEB-DL.mkv",
            title.replace(' ', "."),
            season,
            episode,
            resolution
        )
    }

    /// Scene-style movie filename, e.g. `Dune.2021.2160p.BluRay.x265.mkv`.
    pub fn movie_name(title: &str, year: u32, resolution: &str) -> String {
        format!(
            "{}.{}.{}.BluRay.x265.mkv",
            title.replace(' ', "."),
            year,
            resolution
        )
    }
}
