//! CSV tables
//!
//! Headers are written explicitly so empty tables still carry them.

use serde::Serialize;

use super::{EmitError, EmitOptions};
use crate::core::Catalog;
use crate::entities::Amount;

pub const CROPS_CSV: &str = "crops.csv";
pub const PRODUCTS_CSV: &str = "products.csv";
pub const PRODUCT_INGREDIENTS_CSV: &str = "product_ingredients.csv";

#[derive(Serialize)]
struct CropRow<'a> {
    crop_name: &'a str,
}

#[derive(Serialize)]
struct ProductRow<'a> {
    product_name: &'a str,
    table: &'a str,
    amount: Amount,
}

#[derive(Serialize)]
struct IngredientRow<'a> {
    product_name: &'a str,
    ingredient_id: &'a str,
    ingredient_amount: &'a Amount,
}

fn render_table<R, I>(header: &[&str], rows: I) -> Result<Vec<u8>, EmitError>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.into_inner().map_err(|e| EmitError::Io(e.into_error()))
}

/// `crops.csv`: one `crop_name` column
pub fn render_crops_csv(catalog: &Catalog) -> Result<Vec<u8>, EmitError> {
    render_table(
        &["crop_name"],
        catalog.crops.iter().map(|c| CropRow { crop_name: c }),
    )
}

/// `products.csv`: end products with table and amount
pub fn render_products_csv(catalog: &Catalog, options: &EmitOptions) -> Result<Vec<u8>, EmitError> {
    render_table(
        &["product_name", "table", "amount"],
        catalog.products.iter().map(|p| ProductRow {
            product_name: &p.name,
            table: &p.table,
            amount: options.product_amount(&p.yield_amount),
        }),
    )
}

/// `product_ingredients.csv`: every candidate's ingredient rows
pub fn render_product_ingredients_csv(catalog: &Catalog) -> Result<Vec<u8>, EmitError> {
    render_table(
        &["product_name", "ingredient_id", "ingredient_amount"],
        catalog.edges.iter().map(|e| IngredientRow {
            product_name: &e.product,
            ingredient_id: &e.ingredient,
            ingredient_amount: &e.amount,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AmountPolicy, EndProduct, IngredientEdge};

    fn edge(product: &str, ingredient: &str, amount: i64) -> IngredientEdge {
        IngredientEdge {
            product: product.into(),
            ingredient: ingredient.into(),
            amount: Amount::from(amount),
        }
    }

    fn sample() -> Catalog {
        let recipe = vec![edge("Bread", "Flour", 2)];
        Catalog {
            items: vec!["Bread".into(), "Flour".into()],
            products: vec![EndProduct {
                name: "Bread".into(),
                table: "Oven, Large".into(),
                yield_amount: Amount::from(3),
                recipe: recipe.clone(),
            }],
            crops: vec!["Wheat".into()],
            edges: recipe,
            stats: Default::default(),
        }
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_empty_tables_keep_headers() {
        let catalog = Catalog::default();
        assert_eq!(text(render_crops_csv(&catalog).unwrap()), "crop_name\n");
        assert_eq!(
            text(render_products_csv(&catalog, &EmitOptions::default()).unwrap()),
            "product_name,table,amount\n"
        );
        assert_eq!(
            text(render_product_ingredients_csv(&catalog).unwrap()),
            "product_name,ingredient_id,ingredient_amount\n"
        );
    }

    #[test]
    fn test_products_csv_quotes_and_amounts() {
        let catalog = sample();
        let out = text(render_products_csv(&catalog, &EmitOptions::default()).unwrap());
        assert_eq!(out, "product_name,table,amount\nBread,\"Oven, Large\",3\n");

        let placeholder = EmitOptions {
            amount_policy: AmountPolicy::Placeholder,
            include_crops: true,
        };
        let out = text(render_products_csv(&catalog, &placeholder).unwrap());
        assert_eq!(out, "product_name,table,amount\nBread,\"Oven, Large\",0\n");
    }

    #[test]
    fn test_ingredients_and_crops_csv() {
        let catalog = sample();
        assert_eq!(
            text(render_product_ingredients_csv(&catalog).unwrap()),
            "product_name,ingredient_id,ingredient_amount\nBread,Flour,2\n"
        );
        assert_eq!(text(render_crops_csv(&catalog).unwrap()), "crop_name\nWheat\n");
    }
}
