use crate::commands::render::{print_field, print_json, print_wrapped};
use crate::feed::{load_catalog_blocking, Episode, FeedSource};
use crate::format::{format_date, format_duration};
use anyhow::{bail, Result};
use colored::Colorize;

pub fn run(source: &FeedSource, id: &str, json: bool, quiet: bool) -> Result<()> {
    let catalog = load_catalog_blocking(source)?;

    let Some(episode) = catalog.find(id) else {
        bail!("Episode not found: {}", id);
    };

    if json {
        return print_json(episode);
    }

    if !quiet {
        println!("{}", catalog.podcast.title.dimmed());
    }
    print_detail(episode);

    Ok(())
}

fn print_detail(episode: &Episode) {
    println!("{}", episode.title.bold());
    println!("{}", "─".repeat(40));

    print_field("Published", Some(&format_date(&episode.pub_date)));
    print_field("Duration", Some(&format_duration(&episode.duration)));

    let placement = match (episode.season, episode.episode_number) {
        (Some(s), Some(e)) => Some(format!("Season {}, Episode {}", s, e)),
        (None, Some(e)) => Some(format!("Episode {}", e)),
        (Some(s), None) => Some(format!("Season {}", s)),
        (None, None) => None,
    };
    print_field("Episode", placement.as_deref());

    if episode.audio_url.is_empty() {
        print_field("Audio", Some("(no audio available)"));
    } else {
        print_field("Audio", Some(&episode.audio_url));
    }
    print_field("Image", episode.image_url.as_deref());
    print_field("Id", Some(&episode.id));

    println!();
    println!("{}", "Description:".cyan());
    print_wrapped(&episode.description, 80);
}
