//! Candidate ranking.
//!
//! The sort key is the resolution score minus band-sized penalties. Penalties
//! demote without excluding: a correct 720p file must beat a wrong 2160p one,
//! but the wrong one stays visible as a last resort.

use std::cmp::Ordering;

use crate::config::RankingConfig;
use crate::parser::ParsedAttributes;
use crate::request::MediaRequest;
use crate::text::{ends_spelling, folded_words, significant_words};

/// Score for a candidate whose resolution is unknown.
pub const UNKNOWN_RESOLUTION_SCORE: i64 = 1;

/// Map a resolution token to its score.
///
/// Known tokens map to 720, 1080 or 2160. Anything else present scores the
/// first run of digits it contains; no digits at all scores
/// [`UNKNOWN_RESOLUTION_SCORE`].
pub fn resolution_score(resolution: Option<&str>) -> i64 {
    let Some(token) = resolution.map(|r| r.trim().to_lowercase()) else {
        return UNKNOWN_RESOLUTION_SCORE;
    };

    match token.as_str() {
        "720" | "720p" | "hd" | "1280x720" | "1280x720p" => 720,
        "1080" | "1080p" | "1080i" | "fhd" | "1920x1080" | "1920x1080p" => 1080,
        "2160" | "2160p" | "4k" | "uhd" | "3840x2160" => 2160,
        other => {
            let digits: String = other
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits
                .parse::<i64>()
                .ok()
                .filter(|score| *score > 0)
                .unwrap_or(UNKNOWN_RESOLUTION_SCORE)
        }
    }
}

/// Computes sort keys and orders candidates.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    /// Create an engine with the default 2160 band.
    pub fn new() -> Self {
        Self::from_config(&RankingConfig::default())
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Sort key for one candidate. Higher ranks first.
    ///
    /// `filename` stands in for the title when the parser found none.
    pub fn sort_key(&self, filename: &str, attrs: &ParsedAttributes, request: &MediaRequest) -> i64 {
        let mut key = resolution_score(attrs.resolution());

        if !title_ends_with_variant(attrs.title_or(filename), request.titles()) {
            key -= self.config.band;
        }

        if request.kind().is_episode() && !episode_matches(attrs, request) {
            key -= 2 * self.config.band;
        }

        key
    }

    /// Order two scored candidates, best first.
    ///
    /// Equal keys keep their incoming order unless `prefer_larger_on_tie` is
    /// set, in which case the larger file wins.
    pub fn compare(&self, a: (i64, u64), b: (i64, u64)) -> Ordering {
        let by_key = b.0.cmp(&a.0);
        if self.config.prefer_larger_on_tie {
            by_key.then_with(|| b.1.cmp(&a.1))
        } else {
            by_key
        }
    }

    /// Stable sort of `items`, best first. `score` returns `(sort key, size)`.
    pub fn rank<T, F>(&self, items: &mut [T], score: F)
    where
        F: Fn(&T) -> (i64, u64),
    {
        items.sort_by(|a, b| self.compare(score(a), score(b)));
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the candidate's title tokens end with the tokens of any variant.
/// A possessive `s` may be glued on or left out.
fn title_ends_with_variant(title: &str, variants: &[String]) -> bool {
    let candidate = folded_words(title);
    variants.iter().any(|variant| {
        let variant = folded_words(variant);
        !variant.is_empty()
            && (candidate.ends_with(&variant)
                || candidate.ends_with(&significant_words(&variant))
                || ends_spelling(&candidate, &variant.concat()))
    })
}

/// Whether the parsed season and episode cover the requested ones.
/// Absent values on either side count as a mismatch.
fn episode_matches(attrs: &ParsedAttributes, request: &MediaRequest) -> bool {
    match (request.season(), request.episode_number()) {
        (Some(season), Some(episode)) => attrs.has_season(season) && attrs.has_episode(episode),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{FilenameParser, SceneNameParser};

    fn key(engine: &RankingEngine, filename: &str, request: &MediaRequest) -> i64 {
        let attrs = SceneNameParser::new().parse(filename);
        engine.sort_key(filename, &attrs, request)
    }

    #[test]
    fn test_resolution_score() {
        assert_eq!(resolution_score(Some("720p")), 720);
        assert_eq!(resolution_score(Some("1080p")), 1080);
        assert_eq!(resolution_score(Some("2160p")), 2160);
        assert_eq!(resolution_score(Some("4K")), 2160);
        assert_eq!(resolution_score(Some("1920x1080")), 1080);
    }

    #[test]
    fn test_resolution_score_fallbacks() {
        assert_eq!(resolution_score(Some("480p")), 480);
        assert_eq!(resolution_score(Some("1440x1080")), 1440);
        assert_eq!(resolution_score(Some("sd")), UNKNOWN_RESOLUTION_SCORE);
        assert_eq!(resolution_score(Some("0p")), UNKNOWN_RESOLUTION_SCORE);
        assert_eq!(resolution_score(None), UNKNOWN_RESOLUTION_SCORE);
    }

    #[test]
    fn test_weak_title_penalty() {
        let engine = RankingEngine::new();
        let request = MediaRequest::movie(["Dune"], Some("2021")).unwrap();

        assert_eq!(key(&engine, "Dune.2021.1080p.mkv", &request), 1080);
        assert_eq!(
            key(&engine, "Dune.Part.Two.2024.2160p.mkv", &request),
            2160 - 2160
        );
    }

    #[test]
    fn test_possessive_title_is_not_penalized() {
        let engine = RankingEngine::new();
        let request = MediaRequest::movie(["Schindler's List"], Some("1993")).unwrap();

        assert_eq!(key(&engine, "Schindlers.List.1993.1080p.BluRay.mkv", &request), 1080);
        assert_eq!(key(&engine, "Schindler.List.1993.720p.mkv", &request), 720);
        assert_eq!(
            key(&engine, "Schindlers.List.Extras.1993.2160p.mkv", &request),
            2160 - 2160
        );
    }

    #[test]
    fn test_episode_ranking_order() {
        let engine = RankingEngine::new();
        let request = MediaRequest::episode(["Breaking Bad"], 1, 4).unwrap();
        let parser = SceneNameParser::new();

        let mut names = vec![
            "Breaking.Bad.S01E05.2160p.mkv",
            "Breaking.Bad.S01E04.1080p.mkv",
            "Breaking.Bad.S01E04.720p.mkv",
        ];
        engine.rank(&mut names, |name| {
            (engine.sort_key(name, &parser.parse(name), &request), 0)
        });

        assert_eq!(
            names,
            vec![
                "Breaking.Bad.S01E04.1080p.mkv",
                "Breaking.Bad.S01E04.720p.mkv",
                "Breaking.Bad.S01E05.2160p.mkv",
            ]
        );
        assert_eq!(key(&engine, "Breaking.Bad.S01E05.2160p.mkv", &request), 2160 - 4320);
    }

    #[test]
    fn test_missing_episode_is_penalized() {
        let engine = RankingEngine::new();
        let request = MediaRequest::episode(["Breaking Bad"], 1, 4).unwrap();
        assert_eq!(key(&engine, "Breaking.Bad.1080p.mkv", &request), 1080 - 4320);
    }

    #[test]
    fn test_multi_episode_file_matches() {
        let engine = RankingEngine::new();
        let request = MediaRequest::episode(["Show"], 2, 2).unwrap();
        assert_eq!(key(&engine, "Show.S02E01-E03.720p.mkv", &request), 720);
    }

    #[test]
    fn test_ties_keep_store_order() {
        let engine = RankingEngine::new();
        let mut items = vec![("a", 1080, 10), ("b", 1080, 99), ("c", 720, 500)];
        engine.rank(&mut items, |(_, key, size)| (*key, *size));
        assert_eq!(
            items.iter().map(|i| i.0).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_prefer_larger_on_tie() {
        let engine = RankingEngine::from_config(&RankingConfig {
            prefer_larger_on_tie: true,
            ..Default::default()
        });
        let mut items = vec![("a", 1080, 10), ("b", 1080, 99), ("c", 720, 500)];
        engine.rank(&mut items, |(_, key, size)| (*key, *size));
        assert_eq!(
            items.iter().map(|i| i.0).collect::<Vec<_>>(),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_custom_band() {
        let engine = RankingEngine::from_config(&RankingConfig {
            band: 10_000,
            ..Default::default()
        });
        let request = MediaRequest::movie(["Dune"], None).unwrap();
        assert_eq!(key(&engine, "Arrival.1080p.mkv", &request), 1080 - 10_000);
    }
}
