use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SourceOverrides;

#[derive(Parser)]
#[command(name = "podcatalog")]
#[command(about = "Browse a podcast's episode catalog from its RSS or Atom feed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Feed location overrides (take precedence over the config file)
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Feed URL to load
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Proxy prefix the encoded feed URL is appended to
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Read the feed from a local file instead of the network
    #[arg(long, global = true)]
    pub feed_file: Option<PathBuf>,
}

impl From<SourceArgs> for SourceOverrides {
    fn from(args: SourceArgs) -> Self {
        SourceOverrides {
            feed_url: args.feed_url,
            proxy: args.proxy,
            feed_file: args.feed_file,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the podcast overview and latest episodes
    Home {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all episodes
    Episodes {
        /// Only show episodes whose title or description contains this term
        #[arg(long, short)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show full details for one episode
    Episode {
        /// Episode id as shown by `episodes`
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a config file interactively
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
