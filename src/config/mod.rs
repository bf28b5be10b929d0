//! Site configuration management for `docmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── build      # [build]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # URL path extraction, config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Hostname, base path, trailing slash policy       |
//! | `[build]`   | Output directory, route manifest, minification   |
//! | `[sitemap]` | Enable flag, file name, changefreq, priority, ignore patterns |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, ChangeFreq, SiteInfoConfig, SitemapConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands, SourceArgs};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docmap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site URL settings
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Build input/output settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap generation options
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd to find the config file; the project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(
                "config file '{}' not found in {} or any parent directory",
                cli.config.display(),
                cwd.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.finalize(config_path, cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::new();
            for field in &ignored {
                diag.warn(format!("unknown field `{field}` ignored"));
            }
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Set paths and apply CLI options after parsing.
    fn finalize(&mut self, config_path: PathBuf, cli: &Cli) {
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.config_path = config_path;
        self.apply_command_options(cli);
        self.normalize_paths(&root);
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Where the sitemap file is written.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.sitemap.filename)
    }

    /// Whether the manifest is read from stdin.
    pub fn manifest_from_stdin(&self) -> bool {
        self.build.manifest == Path::new("-")
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { args } => {
                self.apply_source_args(&args.source);
                Self::update_option(&mut self.build.output, args.output.as_ref());
                Self::update_option(&mut self.build.minify, args.minify.as_ref());
                Self::update_option(&mut self.sitemap.enable, args.sitemap.as_ref());
            }
            Commands::Check { args } => {
                self.apply_source_args(args);
            }
        }
    }

    /// Apply arguments shared by every command.
    fn apply_source_args(&mut self, args: &SourceArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.manifest, args.manifest.as_ref());

        // Override site URL if provided via CLI
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve relative paths against the project root.
    fn normalize_paths(&mut self, root: &Path) {
        self.build.output = root.join(&self.build.output);
        if !self.manifest_from_stdin() {
            self.build.manifest = root.join(&self.build.manifest);
        }
        // sitemap.filename stays relative; it is resolved against output at write time.
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.sitemap.enable, &mut diag);
        self.sitemap.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
