//! Sitemap generation.
//!
//! Turns the route list from the site generator into a sitemap document
//! listing every indexable page.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.org/docs/intro/</loc>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! # Filtering
//!
//! Routes are kept in input order. A route is dropped when, in this order:
//!
//! 1. its last segment is `404.html`
//! 2. it matches one of `sitemap.ignore_patterns`
//! 3. its head metadata has `<meta name="robots" content="noindex">`
//!
//! When nothing survives, no document is produced at all.

use crate::{
    config::{ChangeFreq, SiteConfig, SiteInfoConfig, SitemapConfig},
    core::{
        IgnorePattern, TrailingSlash, absolute_url, apply_trailing_slash, first_match,
        join_base_url, last_segment, normalize_base_url, parse_origin,
    },
    debug,
    generator::minify_xml,
    log,
    page::{RouteHead, RouteManifest, RouteMetadata},
};
use anyhow::Context;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{fmt, fs, io, path::PathBuf};
use thiserror::Error;
use url::Url;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Terminal segment of the not-found page, never indexed.
const NOT_FOUND_PAGE: &str = "404.html";

/// Errors from sitemap generation.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Site configuration cannot produce absolute URLs. Aborts the build.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("cannot build URL for route `{route}`")]
    InvalidRoute {
        route: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to serialize sitemap")]
    Serialize(#[from] io::Error),
}

/// Why a route was left out of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    NotFoundPage,
    Ignored(String),
    NoIndex,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFoundPage => f.write_str("not-found page"),
            Self::Ignored(pattern) => write!(f, "matches ignore pattern `{pattern}`"),
            Self::NoIndex => f.write_str("robots noindex"),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Filters routes and builds sitemap entries for one site build.
#[derive(Debug)]
pub struct SitemapBuilder {
    origin: Url,
    base_url: String,
    trailing_slash: TrailingSlash,
    changefreq: ChangeFreq,
    priority: f64,
    patterns: Vec<IgnorePattern>,
}

impl SitemapBuilder {
    /// Check the site configuration and compile ignore patterns.
    ///
    /// Fails with [`SitemapError::Configuration`] when the site URL is
    /// missing, blank or unparsable, or when the priority is outside
    /// `0.0..=1.0`.
    pub fn new(site: &SiteInfoConfig, options: &SitemapConfig) -> Result<Self, SitemapError> {
        let url_field = SiteInfoConfig::FIELDS.url;
        let hostname = site.hostname().ok_or_else(|| {
            SitemapError::Configuration(format!(
                "{url_field} cannot be empty when generating a sitemap"
            ))
        })?;
        let origin = parse_origin(hostname).map_err(|e| {
            SitemapError::Configuration(format!("{url_field} `{hostname}` is not a valid URL: {e}"))
        })?;

        // NaN fails the range check too
        if !(0.0..=1.0).contains(&options.priority) {
            return Err(SitemapError::Configuration(format!(
                "{} must be between 0.0 and 1.0, got {}",
                SitemapConfig::FIELDS.priority,
                options.priority
            )));
        }

        Ok(Self {
            origin,
            base_url: normalize_base_url(&site.base_url),
            trailing_slash: site.trailing_slash,
            changefreq: options.changefreq,
            priority: options.priority,
            patterns: options.compiled_patterns(),
        })
    }

    /// First reason `route` is excluded, or `None` if it is indexable.
    ///
    /// Routes without head metadata are indexable.
    pub fn classify(&self, route: &str, head: &RouteMetadata) -> Option<Exclusion> {
        if last_segment(route) == NOT_FOUND_PAGE {
            return Some(Exclusion::NotFoundPage);
        }

        if let Some(pattern) = first_match(&self.patterns, route) {
            return Some(Exclusion::Ignored(pattern.as_str().to_string()));
        }

        if head.get(route).is_some_and(RouteHead::is_noindex) {
            return Some(Exclusion::NoIndex);
        }

        None
    }

    /// Indexable routes, in input order.
    pub fn filter<'r>(&self, routes: &'r [String], head: &RouteMetadata) -> Vec<&'r str> {
        routes
            .iter()
            .map(String::as_str)
            .filter(|route| self.classify(route, head).is_none())
            .collect()
    }

    /// Absolute URL for a route: base path, trailing slash, then resolved
    /// against the site origin.
    pub fn url_for(&self, route: &str) -> Result<String, SitemapError> {
        let path = join_base_url(&self.base_url, route);
        let path = apply_trailing_slash(&path, self.trailing_slash, &self.base_url);
        absolute_url(&self.origin, &path)
            .map(String::from)
            .map_err(|source| SitemapError::InvalidRoute {
                route: route.to_string(),
                source,
            })
    }

    /// Build the sitemap, or `None` when no route is indexable.
    pub fn build(
        &self,
        routes: &[String],
        head: &RouteMetadata,
    ) -> Result<Option<Sitemap>, SitemapError> {
        let urls = self
            .filter(routes, head)
            .into_iter()
            .map(|route| {
                Ok(UrlEntry {
                    loc: self.url_for(route)?,
                    changefreq: self.changefreq,
                    priority: self.priority,
                })
            })
            .collect::<Result<Vec<_>, SitemapError>>()?;

        if urls.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Sitemap { urls }))
        }
    }
}

/// Generate the sitemap document for a set of routes.
///
/// Returns `Ok(None)` when every route was filtered out, so callers can
/// tell "nothing to index" apart from a failure.
pub fn generate(
    site: &SiteInfoConfig,
    routes: &[String],
    head: &RouteMetadata,
    options: &SitemapConfig,
) -> Result<Option<String>, SitemapError> {
    let builder = SitemapBuilder::new(site, options)?;
    builder
        .build(routes, head)?
        .map(Sitemap::into_xml)
        .transpose()
}

// ============================================================================
// Document
// ============================================================================

/// A built sitemap: one entry per indexable route.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// One `<url>` record.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    pub priority: f64,
}

impl Sitemap {
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Serialize to an indented XML document.
    pub fn into_xml(self) -> Result<String, SitemapError> {
        let mut writer = Writer::new_with_indent(Vec::with_capacity(4096), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))?;

        for entry in &self.urls {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            writer
                .create_element("loc")
                .write_text_content(BytesText::new(&entry.loc))?;
            writer
                .create_element("changefreq")
                .write_text_content(BytesText::new(entry.changefreq.as_str()))?;
            writer
                .create_element("priority")
                .write_text_content(BytesText::new(&format_priority(entry.priority)))?;
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut xml = String::from_utf8(writer.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        xml.push('\n');
        Ok(xml)
    }
}

/// Print priority with at least one decimal digit (`1` -> `1.0`).
fn format_priority(priority: f64) -> String {
    if priority.fract() == 0.0 {
        format!("{priority:.1}")
    } else {
        format!("{priority}")
    }
}

// ============================================================================
// Build step
// ============================================================================

/// Generate and write the sitemap for a site build.
///
/// Callers check `sitemap.enable` first. Returns the written path, or
/// `None` when no route is indexable.
pub fn build_sitemap(config: &SiteConfig, manifest: &RouteManifest) -> anyhow::Result<Option<PathBuf>> {
    let builder = SitemapBuilder::new(&config.site, &config.sitemap)?;

    if crate::logger::is_verbose() {
        for route in &manifest.routes {
            if let Some(reason) = builder.classify(route, &manifest.head) {
                debug!("sitemap"; "skip {}: {}", route, reason);
            }
        }
    }

    let Some(sitemap) = builder.build(&manifest.routes, &manifest.head)? else {
        log!("sitemap"; "no indexable routes among {}, nothing written", manifest.routes.len());
        return Ok(None);
    };

    let count = sitemap.len();
    let xml = sitemap.into_xml()?;
    let xml = minify_xml(&xml, config.build.minify);

    let sitemap_path = config.sitemap_path();
    if let Some(parent) = sitemap_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&sitemap_path, xml.as_bytes())
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    log!(
        "sitemap";
        "{} ({} of {} routes)",
        sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
        count,
        manifest.routes.len()
    );
    Ok(Some(sitemap_path))
}
