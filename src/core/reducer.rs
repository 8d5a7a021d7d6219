//! End-product reduction
//!
//! A product candidate normally stops being an end product as soon as any
//! other candidate consumes it as an ingredient. Two name overrides apply on
//! top of that:
//!
//! - names containing the oil substring are always kept
//! - names containing the butcher substring are always dropped
//!
//! ```text
//! keep = (is_oil || !used_as_ingredient.contains(name)) && !is_butcher
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::core::catalog::{Catalog, CatalogStats, EndProduct, IngredientEdge};
use crate::core::classifier::{Category, ClassifiedRecipe};
use crate::core::config::CatalogConfig;
use crate::core::naming::{catalog_cmp, contains_lowercase, sort_names};
use crate::entities::Recipe;

/// Builds a [`Catalog`] from classified recipes
pub struct Reducer<'a> {
    config: &'a CatalogConfig,
    oil: String,
    butcher: String,
}

impl<'a> Reducer<'a> {
    pub fn new(config: &'a CatalogConfig) -> Self {
        Self {
            config,
            oil: config.oil_substring.to_lowercase(),
            butcher: config.butcher_substring.to_lowercase(),
        }
    }

    /// End-product membership test for a candidate name
    pub fn is_end_product(&self, name: &str, used_as_ingredient: &BTreeSet<String>) -> bool {
        let is_oil = contains_lowercase(name, &self.oil);
        let is_butcher = contains_lowercase(name, &self.butcher);
        (is_oil || !used_as_ingredient.contains(name)) && !is_butcher
    }

    pub fn reduce(&self, classified: &[ClassifiedRecipe]) -> Catalog {
        let mut stats = CatalogStats {
            recipes: classified.len(),
            ..CatalogStats::default()
        };
        for c in classified {
            match c.category {
                Category::Excluded => stats.excluded += 1,
                Category::Crop { .. } => stats.crops += 1,
                Category::ProductCandidate => stats.candidates += 1,
                Category::Unused => stats.unused += 1,
            }
        }

        let candidates: Vec<(&Recipe, Vec<IngredientEdge>)> = classified
            .iter()
            .filter(|c| c.is_candidate())
            .map(|c| (&c.recipe, recipe_edges(&c.recipe)))
            .collect();

        let used_as_ingredient: BTreeSet<String> = candidates
            .iter()
            .flat_map(|(_, edges)| edges.iter().map(|e| e.ingredient.clone()))
            .collect();

        let mut products: Vec<EndProduct> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (recipe, edges) in &candidates {
            if !self.is_end_product(&recipe.name, &used_as_ingredient) {
                tracing::debug!(name = %recipe.name, "dropped: intermediate or butcher output");
                continue;
            }
            if used_as_ingredient.contains(&recipe.name) {
                tracing::debug!(name = %recipe.name, "kept by oil override");
            }

            match by_name.get(&recipe.name) {
                Some(&idx) => products[idx].recipe.extend(edges.iter().cloned()),
                None => {
                    by_name.insert(recipe.name.clone(), products.len());
                    products.push(EndProduct {
                        name: recipe.name.clone(),
                        table: recipe.table.clone(),
                        yield_amount: recipe.yield_amount.clone(),
                        recipe: edges.clone(),
                    });
                }
            }
        }
        products.sort_by(|a, b| catalog_cmp(&a.name, &b.name));
        stats.end_products = products.len();

        let crops = if self.config.emit_crops {
            sort_names(
                classified
                    .iter()
                    .filter_map(|c| c.crop_name().map(str::to_string)),
            )
        } else {
            Vec::new()
        };

        let items = sort_names(
            used_as_ingredient
                .iter()
                .cloned()
                .chain(products.iter().map(|p| p.name.clone()))
                .chain(crops.iter().cloned()),
        );

        let mut edges: Vec<IngredientEdge> = candidates
            .into_iter()
            .flat_map(|(_, edges)| edges)
            .collect();
        edges.sort_by(|a, b| a.catalog_cmp(b));

        tracing::info!(
            items = items.len(),
            products = products.len(),
            crops = crops.len(),
            edges = edges.len(),
            "reduced catalog"
        );

        Catalog {
            items,
            products,
            crops,
            edges,
            stats,
        }
    }
}

/// Ingredient rows of one candidate recipe, in source order
///
/// Lines with neither a name nor a tag have nothing to point at and are skipped.
fn recipe_edges(recipe: &Recipe) -> Vec<IngredientEdge> {
    recipe
        .ingredients
        .iter()
        .filter_map(|ing| match ing.id() {
            Some(id) => Some(IngredientEdge {
                product: recipe.name.clone(),
                ingredient: id.to_string(),
                amount: ing.amount.clone(),
            }),
            None => {
                tracing::warn!(product = %recipe.name, "ingredient without name or tag skipped");
                None
            }
        })
        .collect()
}
