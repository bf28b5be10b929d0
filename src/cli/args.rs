//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap generator for static documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docmap.toml)
    #[arg(short = 'C', long, global = true, default_value = "docmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the sitemap from the route manifest
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Show which routes would be indexed, and why others are not
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: SourceArgs,
    },
}

/// Inputs shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Route manifest written by the site generator. Use `-` for stdin.
    #[arg(short = 'M', long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the one in docmap.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from(["docmap", "-C", "site.toml", "build", "-m", "--sitemap=false", "-V"]);
        assert!(cli.is_build());
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Build { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.minify, Some(true));
        assert_eq!(args.sitemap, Some(false));
        assert!(args.source.verbose);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_check_alias_and_stdin_manifest() {
        let cli = Cli::parse_from(["docmap", "c", "--manifest", "-"]);
        assert!(cli.is_check());
        let Commands::Check { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.manifest, Some(PathBuf::from("-")));
    }
}
