//! Recipe classification
//!
//! Every recipe lands in exactly one [`Category`]. Rules are checked in a
//! fixed order and the first match wins:
//!
//! 1. **Excluded** - the table contains an excluded-table substring, or the
//!    table or name contains an excluded phrase (case-insensitive).
//! 2. **Crop** - a gathering skill is required, or the name carries the crop
//!    prefix (depending on [`CropStrategy`](crate::core::config::CropStrategy)).
//! 3. **Product candidate** - a cooking skill is required, or an ingredient
//!    carries the oil tag.
//! 4. **Unused** - nothing matched.

use crate::core::config::CatalogConfig;
use crate::core::naming::{contains_lowercase, crop_display_name};
use crate::entities::Recipe;

/// Outcome of classifying a single recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Excluded,
    Crop { display_name: String },
    ProductCandidate,
    Unused,
}

impl Category {
    /// Short label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Excluded => "excluded",
            Category::Crop { .. } => "crop",
            Category::ProductCandidate => "product",
            Category::Unused => "unused",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A recipe paired with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecipe {
    pub recipe: Recipe,
    pub category: Category,
}

impl ClassifiedRecipe {
    pub fn is_candidate(&self) -> bool {
        self.category == Category::ProductCandidate
    }

    /// The crop display name, if this recipe is a crop
    pub fn crop_name(&self) -> Option<&str> {
        match &self.category {
            Category::Crop { display_name } => Some(display_name),
            _ => None,
        }
    }
}

/// Applies the catalog rules of one [`CatalogConfig`]
pub struct Classifier<'a> {
    config: &'a CatalogConfig,
    excluded_tables: Vec<String>,
    excluded_phrases: Vec<String>,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a CatalogConfig) -> Self {
        Self {
            config,
            excluded_tables: lowercase_all(&config.excluded_tables),
            excluded_phrases: lowercase_all(&config.excluded_phrases),
        }
    }

    /// Whether a table/name pair falls under the exclusion lists
    pub fn is_excluded(&self, table: &str, name: &str) -> bool {
        self.excluded_tables
            .iter()
            .any(|ex| contains_lowercase(table, ex))
            || self
                .excluded_phrases
                .iter()
                .any(|ph| contains_lowercase(table, ph) || contains_lowercase(name, ph))
    }

    /// Crop display name if the recipe is a crop under the configured strategy
    ///
    /// Prefix-named recipes get the derived name; skill-based crops keep
    /// their raw name.
    pub fn crop_name(&self, recipe: &Recipe) -> Option<String> {
        let strategy = self.config.crop_strategy;

        if strategy.uses_prefix() {
            if let Some(name) = crop_display_name(&recipe.name, &self.config.crop_prefix) {
                return Some(name);
            }
        }

        if strategy.uses_skills()
            && !recipe.name.trim().is_empty()
            && !recipe.skills.is_disjoint(&self.config.gathering_skills)
        {
            return Some(recipe.name.clone());
        }

        None
    }

    /// Whether the recipe qualifies as a product candidate
    pub fn is_product_candidate(&self, recipe: &Recipe) -> bool {
        let by_skill = !recipe.skills.is_disjoint(&self.config.cooking_skills);
        let by_oil = recipe
            .ingredients
            .iter()
            .any(|ing| ing.has_tag(&self.config.oil_tag));
        by_skill || by_oil
    }

    pub fn classify(&self, recipe: &Recipe) -> Category {
        if self.is_excluded(&recipe.table, &recipe.name) {
            tracing::trace!(name = %recipe.name, table = %recipe.table, "excluded");
            return Category::Excluded;
        }

        if let Some(display_name) = self.crop_name(recipe) {
            tracing::trace!(name = %recipe.name, crop = %display_name, "crop");
            return Category::Crop { display_name };
        }

        if self.is_product_candidate(recipe) {
            tracing::trace!(name = %recipe.name, table = %recipe.table, "product candidate");
            return Category::ProductCandidate;
        }

        tracing::trace!(name = %recipe.name, "unused");
        Category::Unused
    }

    /// Classify a whole dataset, preserving input order
    pub fn classify_all<I>(&self, recipes: I) -> Vec<ClassifiedRecipe>
    where
        I: IntoIterator<Item = Recipe>,
    {
        let classified: Vec<ClassifiedRecipe> = recipes
            .into_iter()
            .map(|recipe| {
                let category = self.classify(&recipe);
                ClassifiedRecipe { recipe, category }
            })
            .collect();

        tracing::debug!(
            total = classified.len(),
            candidates = classified.iter().filter(|c| c.is_candidate()).count(),
            crops = classified.iter().filter(|c| c.crop_name().is_some()).count(),
            "classified recipes"
        );

        classified
    }
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
