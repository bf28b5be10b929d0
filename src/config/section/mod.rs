//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docmap.toml`:
//!
//! | Module    | TOML Section | Purpose                                   |
//! |-----------|--------------|-------------------------------------------|
//! | `site`    | `[site]`     | Hostname, base path, trailing slash       |
//! | `build`   | `[build]`    | Output directory, route manifest, minify  |
//! | `sitemap` | `[sitemap]`  | Change frequency, priority, ignore rules  |

mod build;
mod site;
mod sitemap;

pub use build::BuildConfig;
pub use site::SiteInfoConfig;
pub use sitemap::{ChangeFreq, SitemapConfig};
