//! Query synthesis from media requests.
//!
//! One query is produced per title variant; callers issue all of them and
//! union the results. Movie queries carry the title only: filenames often
//! disagree with the catalog year by one, so the year is checked later with
//! tolerance instead of at the store.

use tracing::debug;

use crate::config::QueryConfig;
use crate::request::{MediaKind, MediaRequest};
use crate::text::is_numeric;

use super::normalizer::TitleNormalizer;
use super::types::{Clause, Query};

/// Builds store search expressions from a [`MediaRequest`].
#[derive(Debug, Clone)]
pub struct QuerySynthesizer {
    config: QueryConfig,
    normalizer: TitleNormalizer,
}

impl QuerySynthesizer {
    /// Create a synthesizer with default config.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    /// Create a synthesizer with custom config.
    pub fn with_config(config: QueryConfig) -> Self {
        let normalizer = TitleNormalizer::from_config(&config);
        Self { config, normalizer }
    }

    /// Build one query per title variant, in variant order.
    ///
    /// Variants that normalize to nothing (pure punctuation) are skipped, as
    /// are variants whose tokens duplicate an earlier variant's query.
    pub fn build_queries(&self, request: &MediaRequest) -> Vec<Query> {
        let markers = match request.kind() {
            MediaKind::Episode => self.episode_markers(
                request.season().unwrap_or(0),
                request.episode_number().unwrap_or(0),
            ),
            MediaKind::Movie => Vec::new(),
        };

        let mut queries: Vec<Query> = Vec::new();
        for variant in request.titles() {
            let clauses = self.title_clauses(variant);
            if clauses.is_empty() {
                debug!(variant = %variant, "Title variant produced no tokens, skipping");
                continue;
            }
            if queries.iter().any(|q| q.clauses == clauses) {
                continue;
            }
            queries.push(Query {
                variant: variant.clone(),
                clauses,
                chain: self.config.chain,
                markers: markers.clone(),
            });
        }

        debug!(
            kind = ?request.kind(),
            variants = request.titles().len(),
            queries = queries.len(),
            "Synthesized store queries"
        );
        queries
    }

    /// Map normalized title tokens to clauses.
    ///
    /// Numeric tokens target `numeric_field`, everything else `text_field`.
    pub fn title_clauses(&self, title: &str) -> Vec<Clause> {
        self.normalizer
            .normalize(title)
            .into_iter()
            .map(|token| {
                let field = if is_numeric(&token) {
                    self.config.numeric_field
                } else {
                    self.config.text_field
                };
                Clause::new(field, token)
            })
            .collect()
    }

    /// Surface forms of a season/episode pair, ORed together by the query.
    ///
    /// Always includes `S01E04`, `S01 E04`, `1x04` and `01.04`.
    pub fn episode_markers(&self, season: u32, episode: u32) -> Vec<Clause> {
        let forms = [
            format!("S{:02}E{:02}", season, episode),
            format!("S{:02} E{:02}", season, episode),
            format!("{}x{:02}", season, episode),
            format!("{:02}.{:02}", season, episode),
        ];

        let mut markers: Vec<Clause> = Vec::with_capacity(forms.len());
        for form in forms {
            if markers.iter().all(|m| m.value != form) {
                markers.push(Clause::new(self.config.marker_field, form));
            }
        }
        markers
    }
}

impl Default for QuerySynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ChainOperator, SearchField};

    fn values(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn test_movie_queries_one_per_variant() {
        let synthesizer = QuerySynthesizer::new();
        let request =
            MediaRequest::movie(vec!["The Carpenter's Son", "Le Fils du Charpentier"], Some("2025"))
                .unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(queries.len(), 2);
        assert_eq!(
            queries[0].expression(),
            "name contains 'Carpenter' and name contains 'Son'"
        );
        assert_eq!(queries[1].variant, "Le Fils du Charpentier");
        assert!(queries.iter().all(|q| q.markers.is_empty()));
    }

    #[test]
    fn test_movie_query_never_embeds_year() {
        let synthesizer = QuerySynthesizer::new();
        let request = MediaRequest::movie(vec!["Dune Part Two"], Some("2024")).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert!(!queries[0].expression().contains("2024"));
    }

    #[test]
    fn test_numeric_tokens_target_full_text() {
        let synthesizer = QuerySynthesizer::new();
        let clauses = synthesizer.title_clauses("Blade Runner 2049");

        assert_eq!(clauses[0].field, SearchField::Name);
        assert_eq!(clauses[1].field, SearchField::Name);
        assert_eq!(clauses[2], Clause::new(SearchField::FullText, "2049"));
    }

    #[test]
    fn test_numeric_field_is_configurable() {
        let synthesizer = QuerySynthesizer::with_config(QueryConfig {
            numeric_field: SearchField::Name,
            ..Default::default()
        });
        let clauses = synthesizer.title_clauses("1917");
        assert_eq!(clauses, vec![Clause::new(SearchField::Name, "1917")]);
    }

    #[test]
    fn test_single_token_variant_is_not_skipped() {
        let synthesizer = QuerySynthesizer::new();
        let request = MediaRequest::movie(vec!["Oppenheimer"], None).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].expression(), "name contains 'Oppenheimer'");
    }

    #[test]
    fn test_episode_markers_forms() {
        let synthesizer = QuerySynthesizer::new();
        let markers = synthesizer.episode_markers(1, 4);
        let forms = values(&markers);

        assert!(forms.contains(&"S01E04"));
        assert!(forms.contains(&"S01 E04"));
        assert!(forms.contains(&"1x04"));
        assert!(forms.contains(&"01.04"));
        assert!(markers.iter().all(|m| m.field == SearchField::Name));
    }

    #[test]
    fn test_episode_query_combines_title_and_markers() {
        let synthesizer = QuerySynthesizer::new();
        let request = MediaRequest::episode(vec!["Breaking Bad"], 1, 4).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].expression(),
            "(name contains 'Breaking' and name contains 'Bad') and \
             (name contains 'S01E04' or name contains 'S01 E04' or \
             name contains '1x04' or name contains '01.04')"
        );
    }

    #[test]
    fn test_chain_operator_from_config() {
        let synthesizer = QuerySynthesizer::with_config(QueryConfig {
            chain: ChainOperator::Or,
            ..Default::default()
        });
        let request = MediaRequest::movie(vec!["Blade Runner"], None).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(
            queries[0].expression(),
            "name contains 'Blade' or name contains 'Runner'"
        );
    }

    #[test]
    fn test_variants_with_identical_tokens_collapse() {
        let synthesizer = QuerySynthesizer::new();
        let request = MediaRequest::movie(vec!["Spider-Man", "Spider Man"], None).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].variant, "Spider-Man");
    }

    #[test]
    fn test_punctuation_only_variant_skipped() {
        let synthesizer = QuerySynthesizer::new();
        let request = MediaRequest::movie(vec!["???", "Heat"], None).unwrap();

        let queries = synthesizer.build_queries(&request);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].variant, "Heat");
    }
}
