//! Deduplication of store listings across drive replicas.

use std::collections::HashSet;

use super::RawListingItem;

/// Identity of a listing item: its container joined with the content hash,
/// or with the item id when the store reports no hash.
///
/// Returns `None` when neither a hash nor an id is available.
pub fn identity_key(item: &RawListingItem) -> Option<String> {
    let suffix = item
        .hash()
        .or_else(|| Some(item.id.as_str()).filter(|id| !id.is_empty()))?;
    Some(format!("{}:{}", item.container(), suffix))
}

/// Collapse listing entries that refer to the same physical file.
///
/// The first occurrence in store order wins. Items without a computable
/// identity are always kept.
pub fn deduplicate_items(raw: Vec<RawListingItem>) -> Vec<RawListingItem> {
    let mut seen: HashSet<String> = HashSet::new();

    raw.into_iter()
        .filter(|item| match identity_key(item) {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}
