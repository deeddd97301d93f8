use crate::commands::render::{print_episode_summary, print_json};
use crate::feed::{load_catalog_blocking, FeedSource};
use anyhow::Result;
use colored::Colorize;

pub fn run(source: &FeedSource, search: Option<&str>, json: bool, quiet: bool) -> Result<()> {
    let catalog = load_catalog_blocking(source)?;
    let term = search.unwrap_or("");
    let matches = catalog.search(term);

    if json {
        return print_json(&matches);
    }

    if !quiet {
        println!("{}", catalog.podcast.title.bold());
        println!("{}", "─".repeat(40));
    }

    for episode in &matches {
        print_episode_summary(episode);
    }

    if matches.is_empty() && !term.trim().is_empty() {
        println!("No episodes match \"{}\"", term.trim());
    } else if !quiet {
        println!();
        println!("{} of {} episodes", matches.len(), catalog.episodes.len());
    }

    Ok(())
}
