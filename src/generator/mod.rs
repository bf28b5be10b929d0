//! Content generators for static site output.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//!
//! Generators work from the route manifest handed over by the site
//! generator; nothing here renders pages or scans the filesystem.

pub mod sitemap;

use std::borrow::Cow;

/// Strip indentation and blank lines from generated XML when enabled.
///
/// Only safe for documents whose text nodes never span lines, which holds
/// for everything this crate emits.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    Cow::Owned(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<String>(),
    )
}
