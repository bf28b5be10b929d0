//! Glob-style route patterns for `sitemap.ignore_patterns`.
//!
//! # Syntax
//!
//! | Pattern  | Matches                                         |
//! |----------|-------------------------------------------------|
//! | `**`     | zero or more whole path segments                |
//! | `*`      | any run of characters inside one segment        |
//! | `?`      | exactly one character inside one segment        |
//! | other    | itself (case-sensitive)                         |
//!
//! Patterns are anchored: the entire route must match. A trailing `/` is a
//! segment boundary like any other, so `/tags` does not match `/tags/`.
//!
//! ```ignore
//! let pattern = IgnorePattern::new("/tags/**");
//! assert!(pattern.matches("/tags/rust/"));
//! assert!(!pattern.matches("/docs/tags"));
//! ```

use std::fmt;

/// One `/`-separated piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**`: zero or more segments.
    DoubleWildcard,
    /// A segment containing `*` or `?`.
    Wildcard(Vec<char>),
    /// Plain text.
    Literal(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw == "**" {
            Self::DoubleWildcard
        } else if raw.contains(['*', '?']) {
            Self::Wildcard(raw.chars().collect())
        } else {
            Self::Literal(raw.to_string())
        }
    }

    /// Match a single route segment (never called for `**`).
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::DoubleWildcard => true,
            Self::Literal(lit) => lit == name,
            Self::Wildcard(pattern) => {
                let name: Vec<char> = name.chars().collect();
                wildcard_match(pattern, &name)
            }
        }
    }
}

/// Iterative `*`/`?` matcher with single-star backtracking.
fn wildcard_match(pattern: &[char], name: &[char]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, n));
                p += 1;
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(c) if *c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((sp, sn)) => {
                    p = sp + 1;
                    n = sn + 1;
                    star = Some((sp, sn + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

/// A compiled ignore pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    source: String,
    segments: Vec<Segment>,
}

impl IgnorePattern {
    /// Compile a pattern. Every string is a valid pattern.
    ///
    /// Runs of `**` collapse into one; `/**/**/x` matches exactly what
    /// `/**/x` does.
    pub fn new(pattern: &str) -> Self {
        let mut segments: Vec<Segment> = split_segments(pattern).map(Segment::parse).collect();
        segments.dedup_by(|a, b| *a == Segment::DoubleWildcard && *b == Segment::DoubleWildcard);
        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as written in config.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether `route` matches this pattern in full.
    pub fn matches(&self, route: &str) -> bool {
        let names: Vec<&str> = split_segments(route).collect();
        match_segments(&self.segments, &names)
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Find the first pattern in `patterns` that matches `route`.
pub fn first_match<'a>(patterns: &'a [IgnorePattern], route: &str) -> Option<&'a IgnorePattern> {
    patterns.iter().find(|p| p.matches(route))
}

/// Split on `/` after dropping one leading slash.
///
/// `/a/b/` -> `["a", "b", ""]`, `/` -> `[""]`
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

fn match_segments(pattern: &[Segment], names: &[&str]) -> bool {
    match pattern.split_first() {
        None => names.is_empty(),
        Some((Segment::DoubleWildcard, rest)) => {
            // Try consuming 0..=len segments
            (0..=names.len()).any(|skip| match_segments(rest, &names[skip..]))
        }
        Some((segment, rest)) => match names.split_first() {
            Some((name, remaining)) => segment.matches(name) && match_segments(rest, remaining),
            None => false,
        },
    }
}

// ============================================================================
// tests
// ============================================================================
