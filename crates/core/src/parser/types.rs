//! Parsed filename attributes.

use serde::{Deserialize, Serialize};

/// Attributes extracted from a filename.
///
/// Every field is best-effort and may be absent; accessors supply the
/// defaults the matching and ranking code relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Year token as it appeared in the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Seasons covered by the file (more than one for season packs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<u32>,
    /// Episodes covered by the file (more than one for multi-episode files).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<u32>,
    /// Resolution token (`1080p`, `4k`, `1920x1080`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdr: Vec<String>,
    /// Release group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ParsedAttributes {
    /// Parsed title, or `fallback` when the parser found none.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(fallback)
    }

    /// Year as a number; `None` when absent or non-numeric.
    pub fn year_number(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.trim().parse().ok())
    }

    pub fn has_season(&self, season: u32) -> bool {
        self.seasons.contains(&season)
    }

    pub fn has_episode(&self, episode: u32) -> bool {
        self.episodes.contains(&episode)
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// Best-effort filename parser.
///
/// Never fails: a name it cannot understand yields all-absent attributes.
pub trait FilenameParser: Send + Sync {
    /// Parser name for logging.
    fn name(&self) -> &str;

    fn parse(&self, filename: &str) -> ParsedAttributes;
}
