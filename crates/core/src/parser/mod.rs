//! Release filename parsing.

mod scene;
mod types;

pub use scene::SceneNameParser;
pub use types::{FilenameParser, ParsedAttributes};
