//! CLI command implementations

pub mod build;
pub mod classify;
pub mod completions;
pub mod config;
