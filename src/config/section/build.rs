//! `[build]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the route manifest is read from and the sitemap is written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to the config file).
    pub output: PathBuf,
    /// Route manifest emitted by the site generator.
    pub manifest: PathBuf,
    /// Strip whitespace from the written XML.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "build".into(),
            manifest: "build/routes.json".into(),
            minify: true,
        }
    }
}
