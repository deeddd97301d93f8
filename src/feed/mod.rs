//! Feed acquisition, parsing and normalization

pub mod fallback;
mod fetch;
pub mod model;
mod parse;
mod xml;

pub use fetch::{
    fetch_feed, proxied_url, FeedSource, DEFAULT_FEED_URL, DEFAULT_PROXY_BASE,
};
pub use model::{Catalog, Episode, PodcastInfo};
pub use parse::{parse_feed, ParsedFeed, UNKNOWN_DURATION};

use anyhow::Context;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error};

/// Failures that make a whole feed unusable
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Feed request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Feed response was empty")]
    EmptyBody,

    #[error("Failed to read feed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("No channel or feed element found")]
    NoChannel,
}

/// Failures confined to a single item; the item is skipped
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("enclosure has no url attribute")]
    EnclosureMissingUrl,

    #[error("enclosure url is blank")]
    EnclosureBlankUrl,
}

async fn fetch_and_parse(
    client: &reqwest::Client,
    source: &FeedSource,
) -> Result<ParsedFeed, FeedError> {
    let text = fetch_feed(client, source).await?;
    parse_feed(&text)
}

/// Load the catalog from a source. Never fails: any feed-level error is
/// logged and replaced by the fallback catalog.
pub async fn load_catalog(client: &reqwest::Client, source: &FeedSource) -> Catalog {
    match fetch_and_parse(client, source).await {
        Ok(parsed) => {
            debug!(
                "Parsed {} episodes ({} skipped) from {}",
                parsed.episodes.len(),
                parsed.skipped,
                source
            );
            parsed.into_catalog()
        }
        Err(e) => {
            error!("Failed to load feed from {}: {}", source, e);
            if matches!(e, FeedError::Transport(_)) {
                error!("Network error - check the proxy and feed URL");
            }
            fallback::catalog()
        }
    }
}

/// Synchronous wrapper for `load_catalog` using a tokio runtime
pub fn load_catalog_blocking(source: &FeedSource) -> anyhow::Result<Catalog> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let client = reqwest::Client::new();
    let catalog = rt.block_on(load_catalog(&client, source));
    if catalog.is_fallback() {
        debug!("Using fallback catalog");
    }
    Ok(catalog)
}
