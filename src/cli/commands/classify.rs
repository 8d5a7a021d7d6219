//! `rcat classify` command - Show the category of every recipe
//!
//! Useful when tuning skill sets and exclusion lists: the listing shows
//! exactly which rule picked each recipe up.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::filters::CategoryFilter;
use crate::cli::helpers::{load_config, truncate_str};
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{classify_dataset, load_dataset, ClassifiedRecipe, CropStrategy};

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Recipe dataset (Recipes.json)
    pub input: PathBuf,

    /// Only list recipes in this category
    #[arg(long, short = 'k', value_enum, default_value = "all")]
    pub category: CategoryFilter,

    /// How crops are detected (overrides config)
    #[arg(long, value_enum)]
    pub crop_strategy: Option<CropStrategy>,

    /// Limit number of rows
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

/// One listing row
#[derive(Debug, Clone, Serialize, Tabled)]
struct ClassifyRow {
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "TABLE")]
    table: String,
    #[tabled(rename = "RECIPE")]
    name: String,
    #[tabled(rename = "CROP NAME")]
    #[serde(skip_serializing_if = "String::is_empty")]
    crop_name: String,
}

impl From<&ClassifiedRecipe> for ClassifyRow {
    fn from(c: &ClassifiedRecipe) -> Self {
        Self {
            category: c.category.label().to_string(),
            table: c.recipe.table.clone(),
            name: c.recipe.name.clone(),
            crop_name: c.crop_name().unwrap_or_default().to_string(),
        }
    }
}

pub fn run(args: ClassifyArgs, global: &GlobalOpts) -> Result<()> {
    let (mut config, _) = load_config(global)?;
    if let Some(strategy) = args.crop_strategy {
        config.crop_strategy = strategy;
    }

    let dataset = load_dataset(&args.input)?;
    let classified = classify_dataset(dataset, &config);

    let mut rows: Vec<ClassifyRow> = classified
        .iter()
        .filter(|c| args.category.matches(&c.category))
        .map(ClassifyRow::from)
        .collect();

    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.count {
        println!("{}", rows.len());
        return Ok(());
    }

    if rows.is_empty() {
        println!("No recipes match category '{}'.", args.category);
        return Ok(());
    }

    match global.format {
        OutputFormat::Auto => print_table(&rows, false),
        OutputFormat::Md => print_table(&rows, true),
        format => print_rows(&rows, effective_format(format, true))?,
    }

    Ok(())
}

fn print_table(rows: &[ClassifyRow], markdown: bool) {
    let display: Vec<ClassifyRow> = rows
        .iter()
        .map(|r| ClassifyRow {
            table: truncate_str(&r.table, 28),
            name: truncate_str(&r.name, 40),
            ..r.clone()
        })
        .collect();

    let mut table = Table::new(display);
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::sharp());
    }
    println!("{}", table);
    println!();
    println!("{} recipe(s)", style(rows.len()).cyan());
}

fn print_rows(rows: &[ClassifyRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(rows).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer
                .write_record(["category", "table", "recipe", "crop_name"])
                .into_diagnostic()?;
            for row in rows {
                writer
                    .write_record([&row.category, &row.table, &row.name, &row.crop_name])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        _ => {
            println!("category\ttable\trecipe\tcrop_name");
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.category, row.table, row.name, row.crop_name
                );
            }
        }
    }
    Ok(())
}
