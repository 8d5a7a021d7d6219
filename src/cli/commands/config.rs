//! `rcat config` command - Show or create the configuration file

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{load_config, status};
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::LOCAL_CONFIG_FILE;
use crate::core::CatalogConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to a file
    Init(InitArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the file
    #[arg(default_value = LOCAL_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Init(args) => run_init(args, global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let (config, source) = load_config(global)?;

    match effective_format(global.format, false) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config).into_diagnostic()?);
        }
        _ => {
            println!("# source: {}", source);
            print!("{}", config.to_yaml()?);
        }
    }
    Ok(())
}

fn run_init(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    CatalogConfig::default().write_to(&args.path, args.force)?;
    status(global, format!("Created {}", args.path.display()));
    Ok(())
}
