//! Dataset loading - reads `Recipes.json` into memory

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::{Dataset, RawRecipe, Recipe};

/// Errors reading the input dataset; all of them are fatal for a run
///
/// Only the document as a whole can fail. Bad individual records are
/// handled in [`recipes`].
#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("input file not found: {}", .path.display())]
    #[diagnostic(code(rcat::input::not_found), help("pass the path to an exported Recipes.json"))]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(rcat::input::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid recipe dataset {filename}: {message}")]
    #[diagnostic(code(rcat::input::parse))]
    Parse {
        filename: String,
        message: String,

        #[source_code]
        src: NamedSource<String>,

        #[label("here")]
        span: Option<SourceSpan>,
    },
}

/// Read and parse a dataset file
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    if !path.is_file() {
        return Err(DatasetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(&content, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        recipes = dataset.recipes.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse dataset JSON text
pub fn parse_dataset(content: &str, filename: &str) -> Result<Dataset, DatasetError> {
    serde_json::from_str(content).map_err(|e| {
        let span = (e.line() > 0).then(|| {
            let offset = line_column_offset(content, e.line(), e.column());
            SourceSpan::new(SourceOffset::from(offset), 1)
        });
        DatasetError::Parse {
            filename: filename.to_string(),
            message: e.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    })
}

/// Normalize every record of a dataset
///
/// Records that aren't JSON objects are skipped with a warning; wrong-typed
/// fields inside an object fall back to their defaults.
pub fn recipes(dataset: Dataset) -> Vec<Recipe> {
    dataset
        .recipes
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match RawRecipe::deserialize(value) {
            Ok(raw) => Some(Recipe::from(raw)),
            Err(err) => {
                tracing::warn!(index, %err, "skipping malformed recipe record");
                None
            }
        })
        .collect()
}

/// Byte offset of a 1-based line/column pair, clamped to the content
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_dataset() {
        let dataset = parse_dataset(r#"{"Recipes": [{"CraftingTable": "Oven"}]}"#, "r.json").unwrap();
        assert_eq!(dataset.recipes.len(), 1);
    }

    #[test]
    fn test_missing_recipes_key_is_empty() {
        let dataset = parse_dataset(r#"{"Version": 3}"#, "r.json").unwrap();
        assert!(dataset.recipes.is_empty());
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = parse_dataset("{\n  \"Recipes\": [\n    {,}\n  ]\n}", "r.json").unwrap_err();
        match err {
            DatasetError::Parse { filename, span, .. } => {
                assert_eq!(filename, "r.json");
                let span = span.expect("span");
                // error sits on the third line
                assert!(span.offset() >= 2 + 15);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = parse_dataset(r#"{"Recipes": {"not": "a list"}}"#, "r.json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_malformed_records_do_not_abort() {
        let dataset = parse_dataset(
            r#"{"Recipes": [
                {"CraftingTable": "Oven", "Variants": [{"Name": "Bread"}]},
                "not a recipe",
                {"CraftingTable": 7, "Variants": [{"Name": "Soup", "Ingredients": [{"Name": "Water", "Ammount": "1"}]}]},
                null
            ]}"#,
            "r.json",
        )
        .unwrap();
        assert_eq!(dataset.recipes.len(), 4);

        let all = recipes(dataset);
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Soup"]);
        assert_eq!(all[1].table, "");
        assert_eq!(all[1].ingredients[0].amount.to_string(), "0");
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_dataset(&tmp.path().join("Recipes.json")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn test_load_and_normalize() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Recipes.json");
        std::fs::write(
            &path,
            r#"{"Recipes": [{"CraftingTable": "Oven", "Variants": [{"Name": "Bread"}]}]}"#,
        )
        .unwrap();

        let all = recipes(load_dataset(&path).unwrap());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Bread");
    }

    #[test]
    fn test_line_column_offset() {
        let text = "ab\ncd\nef";
        assert_eq!(line_column_offset(text, 1, 1), 0);
        assert_eq!(line_column_offset(text, 2, 2), 4);
        assert_eq!(line_column_offset(text, 9, 9), text.len() - 1);
    }
}
