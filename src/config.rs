use crate::feed::FeedSource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/podcatalog/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Where to load the feed from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedConfig {
    /// Feed URL (RSS or Atom)
    pub url: Option<String>,

    /// Proxy prefix the percent-encoded feed URL is appended to
    /// Example: "https://api.allorigins.win/raw?url="
    pub proxy: Option<String>,
}

/// Command-line overrides for the feed source
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub feed_url: Option<String>,
    pub proxy: Option<String>,
    pub feed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path (~/.config/podcatalog/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("podcatalog").join("config.toml"))
    }

    /// Resolve the feed source, with CLI overrides taking precedence.
    /// A local feed file wins over any URL.
    pub fn source(&self, overrides: &SourceOverrides) -> FeedSource {
        if let Some(path) = &overrides.feed_file {
            return FeedSource::File(path.clone());
        }

        let url = overrides.feed_url.as_deref().or(self.feed.url.as_deref());
        let proxy = overrides.proxy.as_deref().or(self.feed.proxy.as_deref());
        FeedSource::remote(url, proxy)
    }
}
