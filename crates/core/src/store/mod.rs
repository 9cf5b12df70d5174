//! File store abstraction.
//!
//! The store itself (authentication, pagination, batching) lives outside
//! this crate behind the [`FileStore`] trait. This module owns the listing
//! item type, deduplication across drive replicas, and the query fan-out.

mod batch;
mod dedup;
mod types;

pub use batch::search_all;
pub use dedup::{deduplicate_items, identity_key};
pub use types::*;
