use crate::commands::render::{print_episode_summary, print_json, print_podcast_header};
use crate::feed::{load_catalog_blocking, Episode, FeedSource, PodcastInfo};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Number of episodes shown on the overview
const LATEST_COUNT: usize = 3;

#[derive(Serialize)]
struct HomeView<'a> {
    podcast: &'a PodcastInfo,
    latest: &'a [Episode],
}

pub fn run(source: &FeedSource, json: bool, quiet: bool) -> Result<()> {
    let catalog = load_catalog_blocking(source)?;
    let latest = catalog.latest(LATEST_COUNT);

    if json {
        return print_json(&HomeView {
            podcast: &catalog.podcast,
            latest,
        });
    }

    print_podcast_header(&catalog.podcast, quiet);

    println!();
    println!("{}", "Latest episodes:".cyan());
    for episode in latest {
        print_episode_summary(episode);
    }

    if !quiet {
        println!();
        println!(
            "{} episodes in total. Run {} to see them all.",
            catalog.episodes.len(),
            "podcatalog episodes".cyan()
        );
    }

    Ok(())
}
