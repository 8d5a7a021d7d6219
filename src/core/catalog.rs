//! Catalog output types

use crate::core::naming::catalog_cmp;
use crate::entities::Amount;

/// One product→ingredient row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientEdge {
    pub product: String,
    pub ingredient: String,
    pub amount: Amount,
}

impl IngredientEdge {
    /// Row order of the flattened ingredient table
    pub fn catalog_cmp(&self, other: &Self) -> std::cmp::Ordering {
        catalog_cmp(&self.product, &other.product)
            .then_with(|| catalog_cmp(&self.ingredient, &other.ingredient))
            .then_with(|| self.amount.to_string().cmp(&other.amount.to_string()))
    }
}

/// A product that is not consumed as an ingredient elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndProduct {
    pub name: String,
    pub table: String,
    pub yield_amount: Amount,
    /// Ingredient rows in source recipe order
    pub recipe: Vec<IngredientEdge>,
}

/// Recipe counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub recipes: usize,
    pub excluded: usize,
    pub crops: usize,
    pub candidates: usize,
    pub unused: usize,
    pub end_products: usize,
}

/// Everything derived from one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Every known item name, sorted
    pub items: Vec<String>,
    /// End products, sorted by name
    pub products: Vec<EndProduct>,
    /// Crop display names, sorted; empty when crops are not tracked
    pub crops: Vec<String>,
    /// Ingredient rows of every product candidate, sorted by product then ingredient
    pub edges: Vec<IngredientEdge>,
    pub stats: CatalogStats,
}

impl Catalog {
    /// Look up an end product by exact name
    pub fn product(&self, name: &str) -> Option<&EndProduct> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }
}
