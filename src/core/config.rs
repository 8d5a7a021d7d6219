//! Catalog configuration - every rule parameter the classifier and reducer use
//!
//! Values default to the rule set the game's data pipeline has always used.
//! A YAML file can override any subset of fields; unknown keys are rejected
//! so a typo never silently falls back to a default.

use clap::ValueEnum;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::yaml::{parse_yaml_file, YamlError};

/// File name looked up in the working directory when no path is given
pub const LOCAL_CONFIG_FILE: &str = "rcat.yaml";

/// How crop (raw resource) recipes are recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CropStrategy {
    /// Recipe requires one of the gathering skills
    Skill,
    /// Recipe name starts with the crop prefix
    Prefix,
    /// Either of the above
    #[default]
    Both,
}

impl CropStrategy {
    pub fn uses_skills(self) -> bool {
        matches!(self, CropStrategy::Skill | CropStrategy::Both)
    }

    pub fn uses_prefix(self) -> bool {
        matches!(self, CropStrategy::Prefix | CropStrategy::Both)
    }
}

impl std::fmt::Display for CropStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropStrategy::Skill => write!(f, "skill"),
            CropStrategy::Prefix => write!(f, "prefix"),
            CropStrategy::Both => write!(f, "both"),
        }
    }
}

/// What the `amount` column of an emitted product holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// The recipe's first-product yield
    #[default]
    Yield,
    /// Always 0, a target for manual editing downstream
    Placeholder,
}

impl std::fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountPolicy::Yield => write!(f, "yield"),
            AmountPolicy::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Rule parameters for classification, reduction and emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Skills that mark a recipe as raw-resource gathering
    pub gathering_skills: BTreeSet<String>,

    /// Skills that make a recipe a product candidate
    pub cooking_skills: BTreeSet<String>,

    /// Case-insensitive substrings of the table name that exclude a recipe
    pub excluded_tables: Vec<String>,

    /// Case-insensitive substrings of the table or recipe name that exclude a recipe
    pub excluded_phrases: Vec<String>,

    /// Ingredient tag that makes a recipe a product candidate regardless of skill
    pub oil_tag: String,

    /// Product-name substring that keeps a product even when it is an ingredient
    pub oil_substring: String,

    /// Product-name substring that always drops a product
    pub butcher_substring: String,

    /// Literal recipe-name prefix of crop recipes
    pub crop_prefix: String,

    pub crop_strategy: CropStrategy,

    pub amount_policy: AmountPolicy,

    /// Track crops in the item catalog and emit them
    pub emit_crops: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            gathering_skills: ["Gathering", "Farming", "Milling"]
                .into_iter()
                .map(String::from)
                .collect(),
            cooking_skills: [
                "Campfire Cooking",
                "Baking",
                "Advanced Baking",
                "Cooking",
                "Advanced Cooking",
                "Butchery",
                "Milling",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            excluded_tables: vec!["laboratory".into(), "placeholdertable".into()],
            excluded_phrases: vec!["research paper".into(), "skill".into(), "book".into()],
            oil_tag: "Oil".into(),
            oil_substring: "oil".into(),
            butcher_substring: "butcher".into(),
            crop_prefix: "Grow ".into(),
            crop_strategy: CropStrategy::default(),
            amount_policy: AmountPolicy::default(),
            emit_crops: true,
        }
    }
}

/// Errors loading a configuration file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    #[diagnostic(
        code(rcat::config::not_found),
        help("create one with `rcat config init` or drop the --config option")
    )]
    NotFound { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("failed to serialize config: {0}")]
    #[diagnostic(code(rcat::config::serialize))]
    Serialize(#[from] serde_yml::Error),

    #[error("{} already exists", .path.display())]
    #[diagnostic(code(rcat::config::exists), help("pass --force to overwrite it"))]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    #[diagnostic(code(rcat::config::write))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl CatalogConfig {
    /// Load a configuration file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let config: Self = parse_yaml_file(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Otherwise `./rcat.yaml` is tried, then
    /// the user config directory, then the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())));
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)).chain(user_config_path());
        for path in candidates {
            if path.is_file() {
                let config = Self::load(&path)?;
                return Ok((config, ConfigSource::File(path)));
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Write this configuration to `path`, refusing to clobber unless `force`
    pub fn write_to(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<user config dir>/rcat/config.yaml`, when the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "rcat").map(|dirs| dirs.config_dir().join("config.yaml"))
}
