//! Rejoin - merge, enrich and split train/test CSV files

use clap::Parser;
use miette::Diagnostic;

use rejoin::cli::{Cli, Commands};
use rejoin::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Features(args) => commands::features::run(args),
        Commands::Split(args) => commands::split::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Interactive => commands::interactive::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
