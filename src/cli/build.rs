//! `docmap build`: write the sitemap into the output directory.

use super::load_manifest;
use crate::{config::SiteConfig, generator::sitemap::build_sitemap, log};
use anyhow::Result;

/// Run the build command.
pub fn build(config: &SiteConfig) -> Result<()> {
    if !config.sitemap.enable {
        log!("sitemap"; "disabled in config, nothing to do");
        return Ok(());
    }

    let manifest = load_manifest(config)?;
    build_sitemap(config, &manifest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disabled_skips_manifest_and_output() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.sitemap.enable = false;
        config.build.output = dir.path().join("out");
        config.build.manifest = dir.path().join("missing.json");

        assert!(build(&config).is_ok());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_enabled_writes_sitemap() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("routes.json");
        std::fs::write(&manifest, r#"{"routes": ["/", "/docs/"]}"#).unwrap();

        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.org".into());
        config.build.output = dir.path().join("out");
        config.build.manifest = manifest;

        build(&config).unwrap();
        let xml = std::fs::read_to_string(dir.path().join("out/sitemap.xml")).unwrap();
        assert!(xml.contains("https://example.org/docs/"));
    }
}
