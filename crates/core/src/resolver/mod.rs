//! End-to-end resolution of a media request into ranked candidates.
//!
//! `resolve` runs the synchronous pipeline over items the caller already
//! fetched: dedupe, parse, filter, score, sort. `search_and_resolve` adds
//! the store round-trip in front of it.

mod types;

pub use types::Candidate;

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{Config, StoreConfig};
use crate::display::{link_builder_from_config, LinkBuilder};
use crate::matcher::{CandidateFilter, RankingEngine};
use crate::parser::{FilenameParser, SceneNameParser};
use crate::query::{Query, QuerySynthesizer};
use crate::request::MediaRequest;
use crate::store::{deduplicate_items, search_all, FileStore, RawListingItem};

/// Resolves media requests into ranked playable candidates.
///
/// Holds no per-request state; one instance serves any number of requests.
pub struct Resolver {
    synthesizer: QuerySynthesizer,
    filter: CandidateFilter,
    ranking: RankingEngine,
    store_config: StoreConfig,
    parser: Arc<dyn FilenameParser>,
    links: Arc<dyn LinkBuilder>,
}

impl Resolver {
    /// Create a resolver with the scene parser and the link builder chosen
    /// by `config.links`.
    pub fn new(config: &Config) -> Self {
        Self {
            synthesizer: QuerySynthesizer::with_config(config.query.clone()),
            filter: CandidateFilter::from_config(&config.filter),
            ranking: RankingEngine::from_config(&config.ranking),
            store_config: config.store.clone(),
            parser: Arc::new(SceneNameParser::new()),
            links: link_builder_from_config(&config.links),
        }
    }

    /// Use a different filename parser.
    pub fn with_parser(mut self, parser: Arc<dyn FilenameParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Use a different link builder.
    pub fn with_link_builder(mut self, links: Arc<dyn LinkBuilder>) -> Self {
        self.links = links;
        self
    }

    /// Store queries for `request`, one per distinct title variant.
    pub fn build_queries(&self, request: &MediaRequest) -> Vec<Query> {
        self.synthesizer.build_queries(request)
    }

    /// Complete store submissions for `request`, boilerplate included.
    pub fn submissions(&self, request: &MediaRequest) -> Vec<String> {
        self.build_queries(request)
            .iter()
            .map(|q| self.store_config.submission(&q.expression()))
            .collect()
    }

    /// Turn raw listing items into ranked candidates.
    ///
    /// Deterministic: the same request and items always give the same
    /// output. Equal keys keep store order.
    pub fn resolve(&self, request: &MediaRequest, raw_items: Vec<RawListingItem>) -> Vec<Candidate> {
        let received = raw_items.len();
        let items = deduplicate_items(raw_items);
        let unique = items.len();

        let mut candidates: Vec<Candidate> = items
            .into_iter()
            .filter_map(|item| {
                let attributes = self.parser.parse(&item.name);
                if !self.filter.accept(&item.name, &attributes, request) {
                    return None;
                }
                let sort_key = self.ranking.sort_key(&item.name, &attributes, request);
                let url = self.links.url(&item);
                Some(Candidate {
                    item,
                    attributes,
                    url,
                    sort_key,
                })
            })
            .collect();

        self.ranking
            .rank(&mut candidates, |c| (c.sort_key, c.item.size_bytes()));

        debug!(
            parser = self.parser.name(),
            received,
            unique,
            accepted = candidates.len(),
            "Resolved listing items"
        );
        candidates
    }

    /// Query `store` for `request` and resolve whatever it returns.
    pub async fn search_and_resolve(
        &self,
        store: &dyn FileStore,
        request: &MediaRequest,
    ) -> Vec<Candidate> {
        let queries = self.build_queries(request);
        let items = search_all(store, &queries, &self.store_config).await;
        let candidates = self.resolve(request, items);

        info!(
            store = store.name(),
            titles = ?request.titles(),
            queries = queries.len(),
            candidates = candidates.len(),
            "Search complete"
        );
        candidates
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
