//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get an rcat command isolated from the user's own config
pub fn rcat_in(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("rcat"));
    cmd.current_dir(tmp.path())
        .env_remove("RCAT_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", tmp.path().join(".xdg"))
        .env("HOME", tmp.path());
    cmd
}

/// Helper to get an rcat command without a working directory
pub fn rcat() -> Command {
    Command::new(cargo::cargo_bin!("rcat"))
}

/// Write a dataset file into the temp dir and return its path
pub fn write_dataset(tmp: &TempDir, json: &str) -> PathBuf {
    let path = tmp.path().join("Recipes.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Read a file as a string
pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Two recipes: bread baked from flour, and flour made in an excluded laboratory
pub const BREAD_AND_FLOUR: &str = r#"{
  "Recipes": [
    {
      "CraftingTable": "Oven",
      "SkillNeeds": [{"Skill": "Baking"}],
      "Variants": [
        {
          "Name": "Bread",
          "Ingredients": [{"Name": "Flour", "Ammount": 2}],
          "Products": [{"Ammount": 1}]
        }
      ]
    },
    {
      "CraftingTable": "Laboratory",
      "SkillNeeds": [],
      "Variants": [
        {
          "Name": "Flour",
          "Ingredients": [{"Name": "Wheat", "Ammount": 1}],
          "Products": [{"Ammount": 1}]
        }
      ]
    }
  ]
}"#;

/// A dataset touching every rule: oil and butcher overrides, both crop
/// strategies, exclusions and recipes no rule picks up
pub const KITCHEN: &str = r#"{
  "Recipes": [
    {
      "CraftingTable": "Oven",
      "SkillNeeds": [{"Skill": "Baking"}],
      "Variants": [
        {
          "Name": "Bread",
          "Ingredients": [{"Name": "Flour", "Ammount": 2}, {"Tag": "Oil", "Ammount": 1}],
          "Products": [{"Ammount": 2}]
        }
      ]
    },
    {
      "CraftingTable": "Press",
      "SkillNeeds": [{"Skill": "Cooking"}],
      "Variants": [
        {
          "Name": "Crude Oil",
          "Ingredients": [{"Name": "Olives", "Ammount": 4}],
          "Products": [{"Ammount": 1}]
        }
      ]
    },
    {
      "CraftingTable": "Stove",
      "SkillNeeds": [{"Skill": "Cooking"}],
      "Variants": [
        {
          "Name": "Fried Fish",
          "Ingredients": [{"Name": "Crude Oil", "Ammount": 1}, {"Name": "Fish", "Ammount": 1}]
        }
      ]
    },
    {
      "CraftingTable": "Butcher Block",
      "SkillNeeds": [{"Skill": "Butchery"}],
      "Variants": [
        {
          "Name": "Butchered Venison",
          "Ingredients": [{"Name": "Venison Carcass", "Ammount": 1}],
          "Products": [{"Ammount": 3}]
        }
      ]
    },
    {
      "CraftingTable": "Farm Plot",
      "Variants": [{"Name": "Grow SunflowerSeed"}]
    },
    {
      "CraftingTable": "Field",
      "SkillNeeds": [{"Skill": "Gathering"}],
      "Variants": [{"Name": "Wild Berries"}]
    },
    {
      "CraftingTable": "Laboratory Annex",
      "SkillNeeds": [{"Skill": "Cooking"}],
      "Variants": [{"Name": "Test Soup", "Ingredients": [{"Name": "Mystery Broth", "Ammount": 1}]}]
    },
    {
      "CraftingTable": "Workbench",
      "SkillNeeds": [{"Skill": "Smithing"}],
      "Variants": [{"Name": "Hammer", "Ingredients": [{"Name": "Iron Bar", "Ammount": 2}]}]
    }
  ]
}"#;
