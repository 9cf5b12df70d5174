pub mod config;
pub mod display;
pub mod matcher;
pub mod parser;
pub mod query;
pub mod request;
pub mod resolver;
pub mod store;
pub mod tags;
pub mod testing;
pub mod text;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, FilterConfig,
    LinksConfig, QueryConfig, RankingConfig, StoreConfig,
};
pub use display::{hr_size, DirectLinkBuilder, LinkBuilder, ProxyLinkBuilder, StreamLabel};
pub use matcher::{resolution_score, CandidateFilter, RankingEngine};
pub use parser::{FilenameParser, ParsedAttributes, SceneNameParser};
pub use query::{ChainOperator, Clause, Query, QuerySynthesizer, SearchField, TitleNormalizer};
pub use request::{MediaKind, MediaRequest, RequestError};
pub use resolver::{Candidate, Resolver};
pub use store::{
    deduplicate_items, identity_key, parse_listing, search_all, FileStore, RawListingItem,
    StoreError,
};
