//! Recipe records - the on-disk dataset shape and its normalized form
//!
//! The raw structs mirror the game's `Recipes.json` export field for field
//! (including its `Ammount` spelling). Every field is optional; `null` and a
//! value of the wrong type are treated the same as a missing key, so one
//! malformed record never aborts the batch. [`Recipe`] is the normalized view
//! the classifier works on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

/// A quantity as it appears in the dataset (`2`, `0.5`, ...)
///
/// Kept as a JSON number so integers round-trip without gaining a `.0`.
pub type Amount = serde_json::Number;

/// Amount used when an ingredient line has no `Ammount`
pub fn default_ingredient_amount() -> Amount {
    Amount::from(0)
}

/// Amount used when a variant has no product line or the line has no `Ammount`
pub fn default_yield_amount() -> Amount {
    Amount::from(1)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Record field that falls back to its default when the value has the wrong type
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(&value).unwrap_or_else(|err| {
        tracing::warn!(%value, %err, "ignoring malformed field value");
        T::default()
    }))
}

/// Top-level dataset document
///
/// Records stay untyped here; each one is converted on its own so a record
/// that isn't even an object can be skipped without losing the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(rename = "Recipes", default, deserialize_with = "null_as_default")]
    pub recipes: Vec<serde_json::Value>,
}

/// One element of the `Recipes` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipe {
    #[serde(rename = "CraftingTable", default, deserialize_with = "lenient")]
    pub crafting_table: Option<String>,

    #[serde(rename = "Variants", default, deserialize_with = "lenient")]
    pub variants: Vec<RawVariant>,

    #[serde(rename = "SkillNeeds", default, deserialize_with = "lenient")]
    pub skill_needs: Vec<RawSkillNeed>,
}

/// A recipe variant; only the first one of a recipe is ever consulted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVariant {
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(rename = "Ingredients", default, deserialize_with = "lenient")]
    pub ingredients: Vec<RawIngredient>,

    #[serde(rename = "Products", default, deserialize_with = "lenient")]
    pub products: Vec<RawProduct>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIngredient {
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(rename = "Tag", default, deserialize_with = "lenient")]
    pub tag: Option<String>,

    #[serde(rename = "Ammount", default, deserialize_with = "lenient")]
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "Ammount", default, deserialize_with = "lenient")]
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSkillNeed {
    #[serde(rename = "Skill", default, deserialize_with = "lenient")]
    pub skill: Option<String>,
}

/// An ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Concrete item name, if the line names one
    pub name: Option<String>,
    /// Category tag (e.g. "Oil"), used when no concrete name is given
    pub tag: Option<String>,
    pub amount: Amount,
}

impl Ingredient {
    /// The identifier this line contributes to the item graph
    ///
    /// The concrete name wins; the tag is the fallback. Empty strings count
    /// as absent. Returns `None` when the line has neither.
    pub fn id(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.tag.as_deref()))
    }

    /// Whether the line's tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|t| t.to_lowercase() == tag.to_lowercase())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// A recipe reduced to the fields the catalog rules look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Crafting station, `""` when the dataset has none
    pub table: String,
    /// Product display name from the first variant
    pub name: String,
    /// Skills required to craft; unnamed skill entries are dropped
    pub skills: BTreeSet<String>,
    /// Ingredient lines in source order
    pub ingredients: Vec<Ingredient>,
    /// First product's yield
    pub yield_amount: Amount,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        let variant = raw.variants.into_iter().next().unwrap_or_default();

        let yield_amount = variant
            .products
            .into_iter()
            .next()
            .and_then(|p| p.amount)
            .unwrap_or_else(default_yield_amount);

        let ingredients = variant
            .ingredients
            .into_iter()
            .map(|ing| Ingredient {
                name: ing.name,
                tag: ing.tag,
                amount: ing.amount.unwrap_or_else(default_ingredient_amount),
            })
            .collect();

        Self {
            table: raw.crafting_table.unwrap_or_default(),
            name: variant.name.unwrap_or_default(),
            skills: raw.skill_needs.into_iter().filter_map(|s| s.skill).collect(),
            ingredients,
            yield_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Recipe {
        let raw: RawRecipe = serde_json::from_str(json).unwrap();
        Recipe::from(raw)
    }

    #[test]
    fn test_full_record_normalizes() {
        let recipe = parse(
            r#"{
                "CraftingTable": "Oven",
                "Variants": [
                    {
                        "Name": "Bread",
                        "Ingredients": [{"Name": "Flour", "Ammount": 2}],
                        "Products": [{"Ammount": 3}, {"Ammount": 9}]
                    },
                    {"Name": "Ignored Variant"}
                ],
                "SkillNeeds": [{"Skill": "Baking"}]
            }"#,
        );

        assert_eq!(recipe.table, "Oven");
        assert_eq!(recipe.name, "Bread");
        assert!(recipe.skills.contains("Baking"));
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].id(), Some("Flour"));
        assert_eq!(recipe.ingredients[0].amount, Amount::from(2));
        assert_eq!(recipe.yield_amount, Amount::from(3));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let recipe = parse(r#"{"Variants": [{"Ingredients": [{"Tag": "Oil"}]}], "SkillNeeds": [{}]}"#);

        assert_eq!(recipe.table, "");
        assert_eq!(recipe.name, "");
        assert!(recipe.skills.is_empty());
        assert_eq!(recipe.ingredients[0].amount, Amount::from(0));
        assert_eq!(recipe.yield_amount, Amount::from(1));
    }

    #[test]
    fn test_empty_variants_is_not_fatal() {
        let recipe = parse(r#"{"CraftingTable": "Oven", "Variants": []}"#);
        assert_eq!(recipe.name, "");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.yield_amount, Amount::from(1));
    }

    #[test]
    fn test_nulls_treated_as_absent() {
        let recipe = parse(
            r#"{"CraftingTable": null, "Variants": null, "SkillNeeds": null}"#,
        );
        assert_eq!(recipe.table, "");
        assert!(recipe.skills.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_fall_back_to_defaults() {
        let recipe = parse(
            r#"{
                "CraftingTable": 7,
                "SkillNeeds": [{"Skill": "Cooking"}],
                "Variants": [
                    {
                        "Name": "Soup",
                        "Ingredients": [{"Name": "Water", "Ammount": "1"}, {"Name": 4, "Tag": "Oil"}],
                        "Products": [{"Ammount": "many"}]
                    }
                ]
            }"#,
        );

        assert_eq!(recipe.table, "");
        assert_eq!(recipe.name, "Soup");
        assert!(recipe.skills.contains("Cooking"));
        assert_eq!(recipe.ingredients[0].id(), Some("Water"));
        assert_eq!(recipe.ingredients[0].amount, Amount::from(0));
        assert_eq!(recipe.ingredients[1].id(), Some("Oil"));
        assert_eq!(recipe.yield_amount, Amount::from(1));
    }

    #[test]
    fn test_non_list_variants_is_empty() {
        let recipe = parse(r#"{"CraftingTable": "Oven", "Variants": "Bread"}"#);
        assert_eq!(recipe.table, "Oven");
        assert_eq!(recipe.name, "");
    }

    #[test]
    fn test_fractional_amount_preserved() {
        let recipe = parse(
            r#"{"Variants": [{"Name": "X", "Ingredients": [{"Name": "Salt", "Ammount": 0.5}]}]}"#,
        );
        assert_eq!(recipe.ingredients[0].amount.to_string(), "0.5");
    }

    #[test]
    fn test_ingredient_id_prefers_name_over_tag() {
        let ing = Ingredient {
            name: Some("Olive Oil".into()),
            tag: Some("Oil".into()),
            amount: Amount::from(1),
        };
        assert_eq!(ing.id(), Some("Olive Oil"));

        let tagged = Ingredient {
            name: Some(String::new()),
            tag: Some("Oil".into()),
            amount: Amount::from(1),
        };
        assert_eq!(tagged.id(), Some("Oil"));

        let bare = Ingredient {
            name: None,
            tag: None,
            amount: Amount::from(1),
        };
        assert_eq!(bare.id(), None);
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let ing = Ingredient {
            name: None,
            tag: Some("OIL".into()),
            amount: Amount::from(1),
        };
        assert!(ing.has_tag("oil"));
        assert!(!ing.has_tag("Fat"));
    }
}
