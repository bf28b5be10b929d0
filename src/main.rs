//! docmap - sitemap generator for static documentation sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docmap::cli::{self, Cli, Commands};
use docmap::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build(&config),
        Commands::Check { .. } => cli::check::check(&config),
    }
}
