//! Entity type definitions

pub mod recipe;

pub use recipe::{Amount, Dataset, Ingredient, RawRecipe, Recipe};
