//! Candidate filtering and ranking.
//!
//! Both operate on already-fetched listing items and parsed attributes. They
//! are pure and synchronous.

mod filter;
mod ranking;

pub use filter::CandidateFilter;
pub use ranking::{resolution_score, RankingEngine, UNKNOWN_RESOLUTION_SCORE};
