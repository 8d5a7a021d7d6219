//! Top-level argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::build::BuildArgs;
use crate::cli::commands::classify::ClassifyArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;

/// Derive crop, end-product and ingredient catalogs from game recipe datasets
#[derive(Parser, Debug)]
#[command(name = "rcat", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Configuration file (default: ./rcat.yaml, then the user config dir)
    #[arg(long, short = 'c', global = true, env = "RCAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for listings
    #[arg(long, short = 'f', global = true, value_enum, default_value = "auto")]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline and write the catalog files
    Build(BuildArgs),

    /// Show how every recipe is classified
    Classify(ClassifyArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions(CompletionsArgs),
}

/// Stdout format for listing commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pick a sensible format for the command
    #[default]
    Auto,
    /// Tab-separated values
    Tsv,
    Json,
    Csv,
    Yaml,
    /// Markdown table
    Md,
}
