//! CLI parse: clap types for snipgen. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// snipgen - expand snippet templates into generated snippets
#[derive(Parser, Debug)]
#[command(name = "snipgen")]
#[command(about = "Expand snippet templates into generated snippets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds snipgen.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Toml,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate snippets from a template directory
    Generate {
        /// Template directory (defaults to source.directory from config)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (defaults to output.directory from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only read templates directly inside the source directory
        #[arg(long)]
        top_level_only: bool,

        /// Skip the alternative-shortcut pass
        #[arg(long)]
        no_alternative_shortcuts: bool,

        /// Output file format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Report template errors and keep going instead of stopping at the first
        #[arg(long)]
        keep_going: bool,

        /// Generate without writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Check that every template can be generated from
    Check {
        /// Template directory (defaults to source.directory from config)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Only read templates directly inside the source directory
        #[arg(long)]
        top_level_only: bool,
    },
}
