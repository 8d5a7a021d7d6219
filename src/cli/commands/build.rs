//! `rcat build` command - Run the pipeline and write catalog files

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{load_config, status};
use crate::cli::GlobalOpts;
use crate::core::{build_catalog_from_file, AmountPolicy, CatalogStats, CropStrategy};
use crate::emit::{render_all, write_artifacts, EmitFormat, EmitOptions, DEFAULT_JSON_FILE};

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Recipe dataset (Recipes.json)
    pub input: PathBuf,

    /// Directory to write into (created if missing)
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,

    /// Which files to write
    #[arg(long, short = 'e', value_enum, default_value = "json")]
    pub emit: EmitFormat,

    /// File name of the combined JSON document (no directories)
    #[arg(long, default_value = DEFAULT_JSON_FILE)]
    pub json_name: String,

    /// Product amount: true yield or a 0 placeholder (overrides config)
    #[arg(long, value_enum)]
    pub amount: Option<AmountPolicy>,

    /// How crops are detected (overrides config)
    #[arg(long, value_enum, conflicts_with = "no_crops")]
    pub crop_strategy: Option<CropStrategy>,

    /// Don't track or emit crops
    #[arg(long)]
    pub no_crops: bool,
}

pub fn run(args: BuildArgs, global: &GlobalOpts) -> Result<()> {
    let (mut config, _) = load_config(global)?;
    if let Some(amount) = args.amount {
        config.amount_policy = amount;
    }
    if let Some(strategy) = args.crop_strategy {
        config.crop_strategy = strategy;
    }
    if args.no_crops {
        config.emit_crops = false;
    }

    // Everything is rendered before the first file is touched
    let catalog = build_catalog_from_file(&args.input, &config)?;
    let options = EmitOptions::from_config(&config);
    let artifacts = render_all(&catalog, &options, args.emit, &args.json_name)?;
    let written = write_artifacts(&args.out_dir, &artifacts)?;

    for path in &written {
        status(global, format!("Wrote {}", style(path.display()).cyan()));
    }
    if !global.quiet {
        print_summary(&catalog.stats, catalog.items.len(), catalog.crops.len());
    }

    Ok(())
}

fn print_summary(stats: &CatalogStats, items: usize, crops: usize) {
    println!();
    println!("{}", style("Catalog Summary").bold());
    println!("{}", style("─".repeat(40)).dim());
    println!("  Recipes read:    {}", style(stats.recipes).cyan());
    println!("  Excluded:        {}", style(stats.excluded).red());
    println!("  Unused:          {}", style(stats.unused).dim());
    println!("  Candidates:      {}", style(stats.candidates).cyan());
    println!("  End products:    {}", style(stats.end_products).green());
    println!("  Crops:           {}", style(crops).green());
    println!("  Items:           {}", style(items).green());
}
