//! `docmap check`: explain which routes end up in the sitemap.

use super::load_manifest;
use crate::{
    config::SiteConfig,
    generator::sitemap::{Exclusion, SitemapBuilder},
    log,
    page::RouteManifest,
};
use anyhow::Result;
use owo_colors::OwoColorize;

/// Outcome for one route.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteReport {
    pub route: String,
    /// Absolute URL when indexed, exclusion reason otherwise.
    pub outcome: std::result::Result<String, Exclusion>,
}

/// Classify every route in manifest order.
pub fn check_routes(config: &SiteConfig, manifest: &RouteManifest) -> Result<Vec<RouteReport>> {
    let builder = SitemapBuilder::new(&config.site, &config.sitemap)?;

    let reports = manifest
        .routes
        .iter()
        .map(|route| {
            let outcome = match builder.classify(route, &manifest.head) {
                Some(reason) => Err(reason),
                None => Ok(builder.url_for(route)?),
            };
            Ok(RouteReport {
                route: route.clone(),
                outcome,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(reports)
}

/// Run the check command.
pub fn check(config: &SiteConfig) -> Result<()> {
    let manifest = load_manifest(config)?;
    let reports = check_routes(config, &manifest)?;

    for report in &reports {
        match &report.outcome {
            Ok(url) => println!("{} {} -> {}", "+".green(), report.route, url),
            Err(reason) => println!("{} {} ({})", "-".red(), report.route, reason.dimmed()),
        }
    }

    let kept = reports.iter().filter(|r| r.outcome.is_ok()).count();
    if kept == 0 {
        log!("check"; "no indexable routes, no sitemap would be written");
    } else {
        log!("check"; "{} of {} routes indexed", kept, reports.len());
    }
    Ok(())
}
