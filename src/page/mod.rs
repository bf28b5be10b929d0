//! Route data supplied by the site generator.
//!
//! - `meta`: per-route head metadata (noindex detection)
//! - `manifest`: JSON file listing routes and their head metadata

mod manifest;
mod meta;

pub use manifest::RouteManifest;
pub use meta::{MetaTag, RouteHead, RouteMetadata};
