mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let result = Context::load(cli.config.as_deref(), cli.verbose).and_then(|ctx| match cli.command {
        Commands::Links(args) => commands::links::run(ctx, args),
        Commands::Tiles(args) => commands::tiles::run(ctx, args),
        Commands::Download(args) => commands::download::run(ctx, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
