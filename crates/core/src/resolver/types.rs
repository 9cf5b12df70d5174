//! Resolution result types.

use serde::{Deserialize, Serialize};

use crate::parser::ParsedAttributes;
use crate::store::RawListingItem;

/// A listing item that survived filtering, with everything needed to play
/// and rank it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub item: RawListingItem,
    pub attributes: ParsedAttributes,
    /// Store-access URL.
    pub url: String,
    /// Ranking key; higher sorts first.
    pub sort_key: i64,
}
