//! lookmlint CLI tool.
//!
//! Usage:
//! ```bash
//! lookmlint lint [OPTIONS] [REPO]
//! lookmlint list-checks
//! lookmlint init [REPO]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for LookML repositories
#[derive(Parser)]
#[command(name = "lookmlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (.yml, .yaml or .toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a LookML repository
    Lint {
        /// Repository to lint (default: current directory)
        #[arg(default_value = ".")]
        repo: PathBuf,

        /// Read parser output from this JSON file instead of running lookml-parser
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Parser executable to run
        #[arg(long, env = "LOOKMLINT_PARSER", default_value = lookmlint_core::DEFAULT_PARSER_PROGRAM)]
        parser: String,

        /// Only run specific checks (comma-separated names or codes)
        #[arg(long)]
        checks: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available checks
    ListChecks,

    /// Initialize configuration file
    Init {
        /// Repository to write the config into (default: current directory)
        #[arg(default_value = ".")]
        repo: PathBuf,

        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Titled YAML sections.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// A single YAML document.
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lint {
            repo,
            json,
            parser,
            checks,
            format,
        } => {
            let config_file = config_resolver::locate(&repo, cli.config.as_deref());
            let options = commands::lint::LintOptions {
                repo,
                json,
                parser,
                checks,
                format,
            };
            commands::lint::run(&options, config_file.as_ref())
        }
        Commands::ListChecks => {
            commands::list_checks::run();
            Ok(())
        }
        Commands::Init { repo, force } => commands::init::run(&repo, force),
    }
}
