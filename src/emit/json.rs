//! Combined JSON document consumed by the game-data viewer

use serde::Serialize;

use super::{EmitError, EmitOptions};
use crate::core::Catalog;
use crate::entities::Amount;

pub const DEFAULT_JSON_FILE: &str = "combined.json";

#[derive(Serialize)]
struct JsonCatalog<'a> {
    items: &'a [String],
    products: Vec<JsonProduct<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crops: Option<&'a [String]>,
}

#[derive(Serialize)]
struct JsonProduct<'a> {
    name: &'a str,
    table: &'a str,
    amount: Amount,
    recipe: Vec<JsonIngredient<'a>>,
}

#[derive(Serialize)]
struct JsonIngredient<'a> {
    id: &'a str,
    amount: &'a Amount,
}

/// Render `{items, products, crops}` as pretty JSON with a trailing newline
pub fn render_json(catalog: &Catalog, options: &EmitOptions) -> Result<String, EmitError> {
    let doc = JsonCatalog {
        items: &catalog.items,
        products: catalog
            .products
            .iter()
            .map(|p| JsonProduct {
                name: &p.name,
                table: &p.table,
                amount: options.product_amount(&p.yield_amount),
                recipe: p
                    .recipe
                    .iter()
                    .map(|e| JsonIngredient {
                        id: &e.ingredient,
                        amount: &e.amount,
                    })
                    .collect(),
            })
            .collect(),
        crops: options.include_crops.then_some(catalog.crops.as_slice()),
    };

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
