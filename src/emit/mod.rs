//! Catalog emitters - JSON document and CSV tables
//!
//! Rendering is separated from writing: every artifact is rendered into
//! memory first and files are only touched once all of them succeeded.

pub mod csv;
pub mod json;

use clap::ValueEnum;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{AmountPolicy, Catalog, CatalogConfig};
use crate::entities::Amount;

pub use self::csv::{
    render_crops_csv, render_product_ingredients_csv, render_products_csv, CROPS_CSV,
    PRODUCTS_CSV, PRODUCT_INGREDIENTS_CSV,
};
pub use self::json::{render_json, DEFAULT_JSON_FILE};

/// Which artifacts a build produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmitFormat {
    /// Single combined JSON document
    #[default]
    Json,
    /// crops.csv, products.csv and product_ingredients.csv
    Csv,
    /// Both of the above
    All,
}

impl EmitFormat {
    pub fn includes_json(self) -> bool {
        matches!(self, EmitFormat::Json | EmitFormat::All)
    }

    pub fn includes_csv(self) -> bool {
        matches!(self, EmitFormat::Csv | EmitFormat::All)
    }
}

/// Emitter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub amount_policy: AmountPolicy,
    pub include_crops: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl EmitOptions {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            amount_policy: config.amount_policy,
            include_crops: config.emit_crops,
        }
    }

    /// The amount emitted for a product with the given yield
    pub fn product_amount(&self, yield_amount: &Amount) -> Amount {
        match self.amount_policy {
            AmountPolicy::Yield => yield_amount.clone(),
            AmountPolicy::Placeholder => Amount::from(0),
        }
    }
}

/// Errors rendering or writing output
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("failed to render JSON: {0}")]
    #[diagnostic(code(rcat::emit::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to render CSV: {0}")]
    #[diagnostic(code(rcat::emit::csv))]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(rcat::emit::io))]
    Io(#[from] std::io::Error),

    #[error("invalid JSON file name '{name}': {reason}")]
    #[diagnostic(
        code(rcat::emit::json_name),
        help("use a plain file name such as combined.json")
    )]
    InvalidJsonName { name: String, reason: &'static str },

    #[error("failed to write {}: {source}", .path.display())]
    #[diagnostic(code(rcat::emit::write), help("check that the output directory is writable"))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Check that the JSON document lands inside the output directory and
/// doesn't clobber one of the CSV tables
pub fn validate_json_name(name: &str) -> Result<(), EmitError> {
    let reason = if name.is_empty() || name == "." || name == ".." {
        Some("not a file name")
    } else if name.contains(['/', '\\']) {
        Some("must not contain a path separator")
    } else if [CROPS_CSV, PRODUCTS_CSV, PRODUCT_INGREDIENTS_CSV].contains(&name) {
        Some("collides with a CSV table")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EmitError::InvalidJsonName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Render every artifact `format` asks for
pub fn render_all(
    catalog: &Catalog,
    options: &EmitOptions,
    format: EmitFormat,
    json_file: &str,
) -> Result<Vec<Artifact>, EmitError> {
    let mut artifacts = Vec::new();

    if format.includes_json() {
        validate_json_name(json_file)?;
        artifacts.push(Artifact {
            file_name: json_file.to_string(),
            contents: render_json(catalog, options)?.into_bytes(),
        });
    }

    if format.includes_csv() {
        if options.include_crops {
            artifacts.push(Artifact {
                file_name: CROPS_CSV.to_string(),
                contents: render_crops_csv(catalog)?,
            });
        }
        artifacts.push(Artifact {
            file_name: PRODUCTS_CSV.to_string(),
            contents: render_products_csv(catalog, options)?,
        });
        artifacts.push(Artifact {
            file_name: PRODUCT_INGREDIENTS_CSV.to_string(),
            contents: render_product_ingredients_csv(catalog)?,
        });
    }

    Ok(artifacts)
}

/// Write rendered artifacts into `dir`, creating it if needed
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, EmitError> {
    std::fs::create_dir_all(dir).map_err(|source| EmitError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.contents).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = artifact.contents.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
