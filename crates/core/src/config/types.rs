use serde::{Deserialize, Serialize};

use crate::query::{escape_literal, ChainOperator, SearchField};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

/// Query synthesis configuration.
///
/// Field targeting used to be implicit (numbers went to full text, words to
/// the name); it is spelled out here so callers can retarget either side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Operator joining the title tokens of one query.
    #[serde(default)]
    pub chain: ChainOperator,
    /// Field searched for purely numeric tokens.
    #[serde(default = "default_numeric_field")]
    pub numeric_field: SearchField,
    /// Field searched for every other token.
    #[serde(default = "default_text_field")]
    pub text_field: SearchField,
    /// Field searched for episode markers (`S01E04`, `1x04`, ...).
    #[serde(default = "default_text_field")]
    pub marker_field: SearchField,
    /// Drop stop-words when enough strong tokens remain.
    #[serde(default = "default_true")]
    pub drop_stop_words: bool,
    /// Strong tokens required before stop-words are dropped.
    #[serde(default = "default_min_strong_tokens")]
    pub min_strong_tokens: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            chain: ChainOperator::default(),
            numeric_field: default_numeric_field(),
            text_field: default_text_field(),
            marker_field: default_text_field(),
            drop_stop_words: true,
            min_strong_tokens: default_min_strong_tokens(),
        }
    }
}

fn default_numeric_field() -> SearchField {
    SearchField::FullText
}

fn default_text_field() -> SearchField {
    SearchField::Name
}

fn default_true() -> bool {
    true
}

fn default_min_strong_tokens() -> usize {
    2
}

/// Candidate filter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Allowed distance between the requested and the parsed movie year.
    #[serde(default = "default_year_tolerance")]
    pub year_tolerance: u32,
    /// Variants up to this many tokens must appear as an exact phrase.
    #[serde(default = "default_phrase_max_tokens")]
    pub phrase_max_tokens: usize,
    /// Strong-token count from which one missing token is tolerated.
    #[serde(default = "default_miss_tolerance_min_tokens")]
    pub miss_tolerance_min_tokens: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            year_tolerance: default_year_tolerance(),
            phrase_max_tokens: default_phrase_max_tokens(),
            miss_tolerance_min_tokens: default_miss_tolerance_min_tokens(),
        }
    }
}

fn default_year_tolerance() -> u32 {
    1
}

fn default_phrase_max_tokens() -> usize {
    2
}

fn default_miss_tolerance_min_tokens() -> usize {
    4
}

/// Ranking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    /// One resolution band; also the unit of every penalty.
    #[serde(default = "default_band")]
    pub band: i64,
    /// Break score ties by file size (largest first) instead of store order.
    #[serde(default)]
    pub prefer_larger_on_tie: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            band: default_band(),
            prefer_larger_on_tie: false,
        }
    }
}

fn default_band() -> i64 {
    2160
}

/// File store submission configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Page size requested per query (the store caps it at 1000).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Append `trashed=false` to every submission.
    #[serde(default = "default_true")]
    pub exclude_trashed: bool,
    /// Restrict results to this MIME prefix (`video/` by default).
    #[serde(default = "default_mime_prefix")]
    pub mime_prefix: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            exclude_trashed: true,
            mime_prefix: default_mime_prefix(),
        }
    }
}

impl StoreConfig {
    /// Combine a synthesized expression with the fixed boilerplate clauses.
    ///
    /// The expression is parenthesized so the boilerplate constrains all of
    /// it, whatever operator chains its clauses.
    pub fn submission(&self, expression: &str) -> String {
        let mut boilerplate = Vec::new();
        if self.exclude_trashed {
            boilerplate.push("trashed=false".to_string());
        }
        if let Some(prefix) = &self.mime_prefix {
            boilerplate.push(format!("mimeType contains '{}'", escape_literal(prefix)));
        }

        if boilerplate.is_empty() {
            expression.to_string()
        } else {
            format!("({}) and {}", expression, boilerplate.join(" and "))
        }
    }
}

fn default_page_size() -> u32 {
    1000
}

fn default_mime_prefix() -> Option<String> {
    Some("video/".to_string())
}

/// Store-access link configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LinksConfig {
    /// Streaming proxy base URL. Direct store links are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}
