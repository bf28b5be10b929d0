//! docmap - sitemap generator for static documentation sites.
//!
//! The site generator renders every page and hands over a route manifest;
//! docmap turns it into `sitemap.xml`.
//!
//! ```ignore
//! use docmap::{config::SiteConfig, generator::sitemap::generate};
//!
//! let config = SiteConfig::from_str(include_str!("docmap.toml"))?;
//! let xml = generate(&config.site, &routes, &head, &config.sitemap)?;
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod logger;
pub mod page;

pub use generator::sitemap::{SitemapBuilder, SitemapError, generate};
