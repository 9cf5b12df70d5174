//! Presentation helpers: candidate labels and store-access links.

mod labels;
mod links;

pub use labels::{clean_filename, hr_size, resolution_label, StreamLabel};
pub use links::{link_builder_from_config, DirectLinkBuilder, LinkBuilder, ProxyLinkBuilder};
