//! Core types - pure helpers shared across the codebase.

mod glob;
mod url;

pub use glob::{IgnorePattern, first_match};
pub use url::{
    TrailingSlash, absolute_url, apply_trailing_slash, join_base_url, last_segment,
    normalize_base_url, parse_origin,
};
