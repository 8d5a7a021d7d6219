//! Shared helper functions for CLI commands

use console::style;
use miette::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalOpts;
use crate::core::{CatalogConfig, ConfigSource};

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over the verbosity flags when set. Logs go to stderr so
/// listings on stdout stay pipeable.
pub fn init_logging(global: &GlobalOpts) {
    let level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Resolve the effective configuration for a command
pub fn load_config(global: &GlobalOpts) -> Result<(CatalogConfig, ConfigSource)> {
    let (config, source) = CatalogConfig::discover(global.config.as_deref())?;
    tracing::info!(source = %source, "using configuration");
    Ok((config, source))
}

/// Print a status line unless `--quiet`
pub fn status(global: &GlobalOpts, message: impl std::fmt::Display) {
    if !global.quiet {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
