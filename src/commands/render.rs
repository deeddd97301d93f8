//! Terminal rendering shared by the views

use crate::feed::{Episode, PodcastInfo};
use crate::format::{format_date, format_duration};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_field(label: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        println!("{:>12}: {}", label.cyan(), v);
    }
}

pub fn print_podcast_header(podcast: &PodcastInfo, quiet: bool) {
    println!("{}", podcast.title.bold());
    if quiet {
        return;
    }
    println!("{}", "─".repeat(40));

    print_field("Author", Some(&podcast.author));
    print_field("Category", Some(&podcast.category));
    print_field("Language", Some(&podcast.language));
    print_field("Link", Some(&podcast.link));
    print_field("Image", Some(&podcast.image_url));

    println!();
    print_wrapped(&podcast.description, 80);
}

/// One-line-per-field summary used by the home and list views
pub fn print_episode_summary(episode: &Episode) {
    let number = episode
        .episode_number
        .map(|n| format!("#{} ", n))
        .unwrap_or_default();
    println!("{}{}", number.dimmed(), episode.title.bold());
    println!(
        "  {}  {}  {}",
        format_date(&episode.pub_date),
        format_duration(&episode.duration).yellow(),
        episode.id.dimmed()
    );
}

pub fn print_wrapped(text: &str, width: usize) {
    for line in textwrap_simple(text, width) {
        println!("  {}", line);
    }
}

/// Simple text wrapping without external dependency
fn textwrap_simple(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let mut current_line = String::new();

        for word in words {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textwrap_respects_width() {
        let lines = textwrap_simple("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_textwrap_keeps_paragraphs() {
        let lines = textwrap_simple("first\n\nsecond", 80);
        assert_eq!(lines, vec!["first", "second"]);
    }
}
