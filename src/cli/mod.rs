//! Command-line interface module.

mod args;
pub mod build;
pub mod check;

pub use args::{BuildArgs, Cli, Commands, SourceArgs};

use crate::{config::SiteConfig, debug, page::RouteManifest};
use anyhow::Result;

/// Load the route manifest named by the config.
fn load_manifest(config: &SiteConfig) -> Result<RouteManifest> {
    let manifest = RouteManifest::load(&config.build.manifest)?;
    debug!(
        "manifest";
        "{} routes, {} with head metadata",
        manifest.routes.len(),
        manifest.head.len()
    );
    Ok(manifest)
}
