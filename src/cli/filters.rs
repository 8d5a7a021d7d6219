//! Filter enums for CLI listings

use clap::ValueEnum;

use crate::core::Category;

/// Category filter for `rcat classify`
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Excluded by table or phrase
    Excluded,
    /// Raw resources
    Crop,
    /// Product candidates
    Product,
    /// Recipes no rule picked up
    Unused,
    /// Crops and product candidates
    Kept,
    /// Everything - default
    #[default]
    All,
}

impl CategoryFilter {
    /// Check if a Category matches this filter
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::Excluded => *category == Category::Excluded,
            CategoryFilter::Crop => matches!(category, Category::Crop { .. }),
            CategoryFilter::Product => *category == Category::ProductCandidate,
            CategoryFilter::Unused => *category == Category::Unused,
            CategoryFilter::Kept => matches!(
                category,
                Category::Crop { .. } | Category::ProductCandidate
            ),
            CategoryFilter::All => true,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::Excluded => write!(f, "excluded"),
            CategoryFilter::Crop => write!(f, "crop"),
            CategoryFilter::Product => write!(f, "product"),
            CategoryFilter::Unused => write!(f, "unused"),
            CategoryFilter::Kept => write!(f, "kept"),
            CategoryFilter::All => write!(f, "all"),
        }
    }
}
