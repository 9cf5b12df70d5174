//! Media requests: the canonical identity a resolution starts from.

mod types;

pub use types::{MediaKind, MediaRequest, RequestError};
