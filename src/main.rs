use clap::Parser;
use miette::Result;
use rcat::cli::helpers::init_logging;
use rcat::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(&cli.global);

    match cli.command {
        Commands::Build(args) => rcat::cli::commands::build::run(args, &cli.global),
        Commands::Classify(args) => rcat::cli::commands::classify::run(args, &cli.global),
        Commands::Config(cmd) => rcat::cli::commands::config::run(cmd, &cli.global),
        Commands::Completions(args) => rcat::cli::commands::completions::run(args),
    }
}
