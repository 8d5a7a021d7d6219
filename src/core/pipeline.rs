//! Load → classify → reduce in one call

use std::path::Path;

use crate::core::catalog::Catalog;
use crate::core::classifier::{ClassifiedRecipe, Classifier};
use crate::core::config::CatalogConfig;
use crate::core::loader::{load_dataset, recipes, DatasetError};
use crate::core::reducer::Reducer;
use crate::entities::Dataset;

/// Classify every recipe of a dataset
pub fn classify_dataset(dataset: Dataset, config: &CatalogConfig) -> Vec<ClassifiedRecipe> {
    Classifier::new(config).classify_all(recipes(dataset))
}

/// Derive the catalog of an in-memory dataset
pub fn build_catalog(dataset: Dataset, config: &CatalogConfig) -> Catalog {
    let classified = classify_dataset(dataset, config);
    Reducer::new(config).reduce(&classified)
}

/// Derive the catalog of a dataset file
pub fn build_catalog_from_file(path: &Path, config: &CatalogConfig) -> Result<Catalog, DatasetError> {
    let dataset = load_dataset(path)?;
    Ok(build_catalog(dataset, config))
}
