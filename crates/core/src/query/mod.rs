//! Store query synthesis.
//!
//! Titles are normalized into tokens ([`TitleNormalizer`]) and turned into
//! boolean `field contains 'token'` expressions ([`QuerySynthesizer`]).
//! Series requests additionally AND an ORed set of episode markers.
//!
//! ```text
//! "The Carpenter's Son"   ->  name contains 'Carpenter' and name contains 'Son'
//! "Lost" S01E04           ->  (name contains 'Lost') and
//!                             (name contains 'S01E04' or name contains 'S01 E04' or ...)
//! ```

mod normalizer;
mod synthesizer;
mod types;

pub use normalizer::TitleNormalizer;
pub use synthesizer::QuerySynthesizer;
pub use types::{escape_literal, ChainOperator, Clause, Query, SearchField};
