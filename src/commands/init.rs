use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use crate::config::{Config, FeedConfig};
use crate::feed::{proxied_url, DEFAULT_FEED_URL, DEFAULT_PROXY_BASE};

/// Run the init command - interactively create a config file
pub fn run(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;

    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    println!("{}", "podcatalog configuration".bold());
    println!();
    println!(
        "This will create a config file at: {}",
        config_path.display().to_string().cyan()
    );
    println!();

    let url = prompt_feed_url()?;
    let proxy = prompt_proxy()?;

    // Create config directory
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let config_content = render_config(&url, &proxy)?;

    std::fs::write(&config_path, &config_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!();
    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("Requests will go to:");
    println!("  {}", proxied_url(&proxy, &url).dimmed());
    println!();
    println!("You can now use:");
    println!(
        "  {} - podcast overview and latest episodes",
        "podcatalog home".cyan()
    );
    println!(
        "  {} - list or search all episodes",
        "podcatalog episodes".cyan()
    );

    Ok(())
}

fn render_config(url: &str, proxy: &str) -> Result<String> {
    let config = Config {
        feed: FeedConfig {
            url: Some(url.to_string()),
            proxy: Some(proxy.to_string()),
        },
    };
    let body = toml::to_string(&config).context("Failed to serialize config")?;
    Ok(format!("# podcatalog configuration\n\n{}", body))
}

fn prompt(label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default.green());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    })
}

fn prompt_feed_url() -> Result<String> {
    println!("{}", "Step 1: Choose a feed".bold());
    println!();
    println!("Any RSS 2.0 or Atom podcast feed URL works.");
    println!();

    let url = prompt("Enter feed URL", DEFAULT_FEED_URL)?;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("Feed URL must start with http:// or https://");
    }

    println!();
    Ok(url)
}

fn prompt_proxy() -> Result<String> {
    println!("{}", "Step 2: Choose a proxy".bold());
    println!();
    println!("The encoded feed URL is appended to this prefix.");
    println!();

    let proxy = prompt("Enter proxy prefix", DEFAULT_PROXY_BASE)?;

    println!();
    Ok(proxy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_config_round_trips() {
        let content =
            render_config("https://example.com/rss", "https://p.example.com/?url=").unwrap();
        assert!(content.starts_with("# podcatalog configuration\n"));
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.feed.url.as_deref(), Some("https://example.com/rss"));
        assert_eq!(
            config.feed.proxy.as_deref(),
            Some("https://p.example.com/?url=")
        );
    }

    #[test]
    fn test_rendered_config_escapes_quotes_and_backslashes() {
        let url = r#"https://example.com/rss?q="a\b""#;
        let content = render_config(url, "https://p.example.com/?url=").unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.feed.url.as_deref(), Some(url));
    }
}
