mod cli;
mod commands;
mod config;
mod feed;
mod format;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, SourceArgs};
use config::{Config, SourceOverrides};
use feed::FeedSource;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the feed source from config and command-line overrides
fn feed_source(args: SourceArgs) -> Result<FeedSource> {
    let config = Config::load()?;
    Ok(config.source(&SourceOverrides::from(args)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        // Config is not read here so init works over an unreadable file
        Commands::Init { force } => {
            commands::init::run(force)?;
        }
        Commands::Home { json } => {
            commands::home::run(&feed_source(cli.source)?, json, cli.quiet)?;
        }
        Commands::Episodes { search, json } => {
            let source = feed_source(cli.source)?;
            commands::episodes::run(&source, search.as_deref(), json, cli.quiet)?;
        }
        Commands::Episode { id, json } => {
            commands::episode::run(&feed_source(cli.source)?, &id, json, cli.quiet)?;
        }
    }

    Ok(())
}
