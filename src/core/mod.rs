//! Core module - configuration, classification and reduction

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod loader;
pub mod naming;
pub mod pipeline;
pub mod reducer;

pub use catalog::{Catalog, CatalogStats, EndProduct, IngredientEdge};
pub use classifier::{Category, ClassifiedRecipe, Classifier};
pub use config::{AmountPolicy, CatalogConfig, ConfigError, ConfigSource, CropStrategy};
pub use loader::{load_dataset, parse_dataset, DatasetError};
pub use pipeline::{build_catalog, build_catalog_from_file, classify_dataset};
pub use reducer::Reducer;
