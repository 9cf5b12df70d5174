//! Title normalization into search tokens.

use crate::config::QueryConfig;
use crate::text::{is_numeric, is_stop_word, words};

/// Turns a loose title string into the tokens a query is built from.
///
/// Tokens keep their original case; the store matches case-insensitively.
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    drop_stop_words: bool,
    min_strong_tokens: usize,
}

impl TitleNormalizer {
    /// Create a normalizer with default settings.
    pub fn new() -> Self {
        Self::from_config(&QueryConfig::default())
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            drop_stop_words: config.drop_stop_words,
            min_strong_tokens: config.min_strong_tokens,
        }
    }

    /// Normalize a title into search tokens.
    ///
    /// Single-character tokens are dropped unless numeric. Stop-words are
    /// dropped only when at least `min_strong_tokens` strong tokens remain, so
    /// "The Rip" keeps "The" while "The Carpenter's Son" loses it. Never
    /// returns an empty list for a title with any alphanumeric character.
    pub fn normalize(&self, title: &str) -> Vec<String> {
        let raw = words(title);

        let kept: Vec<String> = raw
            .iter()
            .filter(|t| t.chars().count() > 1 || is_numeric(t))
            .cloned()
            .collect();

        let strong: Vec<String> = kept.iter().filter(|t| !is_stop_word(t)).cloned().collect();

        let chosen = if self.drop_stop_words && strong.len() >= self.min_strong_tokens {
            strong
        } else {
            kept
        };

        if chosen.is_empty() {
            raw
        } else {
            chosen
        }
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
