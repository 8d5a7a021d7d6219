//! RCAT: Recipe Catalog
//!
//! Derives crop lists, end-product lists and flattened product→ingredient
//! tables from a game's exported recipe dataset.

pub mod cli;
pub mod core;
pub mod emit;
pub mod entities;
pub mod yaml;
