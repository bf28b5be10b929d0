//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a URL, without surrounding slashes.
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("https://example.com:8080/path?q=1")     -> Some("path")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find a config file by walking up from `start`.
///
/// An absolute `config_name` that exists is returned as-is.
///
/// ```text
/// /home/user/site/docs/guides/  ← start
/// /home/user/site/docmap.toml   ← found
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-project/"),
            Some("my-project".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.github.io/a/b/c"),
            Some("a/b/c".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(extract_url_path("https://example.com/"), Some(String::new()));
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_extract_url_path_ignores_port_query_fragment() {
        assert_eq!(
            extract_url_path("https://example.com:8080/path?query=1#top"),
            Some("path".to_string())
        );
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/guides");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docmap.toml"), "").unwrap();

        let found = find_config_file(Path::new("docmap.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("docmap.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-config-4f2a.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(&path, dir.path()).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }
}
