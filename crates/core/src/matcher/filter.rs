//! Relevance filter for store listing items.
//!
//! The store matches with substring semantics, so a query for "Us" also
//! returns "Virus". Everything the store returns is re-checked here against
//! the requested title variants and, for movies, the requested year.

use tracing::trace;

use crate::config::FilterConfig;
use crate::parser::ParsedAttributes;
use crate::request::MediaRequest;
use crate::text::{folded_words, is_stop_word, significant_words, spells};

/// Decides whether a parsed filename refers to the requested item.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    config: FilterConfig,
}

impl CandidateFilter {
    /// Create a filter with default tolerances.
    pub fn new() -> Self {
        Self::from_config(&FilterConfig::default())
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Accept a candidate when its title matches any requested variant and,
    /// for movies, its year is within tolerance.
    ///
    /// `filename` is used as the title when the parser found none.
    pub fn accept(&self, filename: &str, attrs: &ParsedAttributes, request: &MediaRequest) -> bool {
        let title = attrs.title_or(filename);

        if !self.title_matches(title, request.titles()) {
            trace!(filename = filename, title = title, "Rejected: title mismatch");
            return false;
        }

        if !request.kind().is_episode() && !self.year_matches(attrs, request) {
            trace!(
                filename = filename,
                year = ?attrs.year,
                requested = ?request.year(),
                "Rejected: year out of tolerance"
            );
            return false;
        }

        true
    }

    /// Whether `candidate_title` matches at least one of `variants`.
    pub fn title_matches(&self, candidate_title: &str, variants: &[String]) -> bool {
        let candidate = folded_words(candidate_title);
        variants
            .iter()
            .any(|variant| self.variant_matches(&candidate, &folded_words(variant)))
    }

    fn variant_matches(&self, candidate: &[String], variant: &[String]) -> bool {
        if variant.is_empty() {
            return false;
        }

        // Possessives fold to a stray `s`; a release may glue it back on.
        if spells(candidate, &variant.concat()) {
            return true;
        }

        let significant = significant_words(variant);
        if significant.len() <= self.config.phrase_max_tokens {
            return contains_phrase(candidate, &significant);
        }

        let strong: Vec<&String> = significant.iter().filter(|t| !is_stop_word(t)).collect();
        let required: Vec<&String> = if strong.is_empty() {
            significant.iter().collect()
        } else {
            strong
        };

        let missing = required
            .iter()
            .filter(|token| !candidate.contains(token))
            .count();
        let allowed = if required.len() >= self.config.miss_tolerance_min_tokens {
            1
        } else {
            0
        };

        if missing <= allowed {
            return true;
        }

        let strong_spelling: String = variant
            .iter()
            .filter(|t| !is_stop_word(t))
            .map(String::as_str)
            .collect();
        spells(candidate, &strong_spelling)
    }

    /// Year check for movie requests.
    ///
    /// An absent or non-numeric parsed year is accepted: web releases often
    /// leave it out.
    pub fn year_matches(&self, attrs: &ParsedAttributes, request: &MediaRequest) -> bool {
        let (Some(requested), Some(found)) = (request.year_number(), attrs.year_number()) else {
            return true;
        };
        requested.abs_diff(found) <= self.config.year_tolerance
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `phrase` appears as a contiguous run of whole words in `words`.
fn contains_phrase(words: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase)
}
