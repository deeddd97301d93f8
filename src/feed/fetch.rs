//! Single-shot feed retrieval through the CORS proxy, or from a local file

use crate::feed::FeedError;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_FEED_URL: &str = "https://media.zencast.fm/episode-1-1052053/rss";
pub const DEFAULT_PROXY_BASE: &str = "https://api.allorigins.win/raw?url=";

const USER_AGENT: &str = concat!("podcatalog/", env!("CARGO_PKG_VERSION"));

/// Where the raw feed text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Remote { url: String, proxy_base: String },
    File(PathBuf),
}

impl FeedSource {
    /// Remote source; blank values resolve to the defaults
    pub fn remote(url: Option<&str>, proxy_base: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        FeedSource::Remote {
            url: pick(url, DEFAULT_FEED_URL),
            proxy_base: pick(proxy_base, DEFAULT_PROXY_BASE),
        }
    }
}

impl Default for FeedSource {
    fn default() -> Self {
        Self::remote(None, None)
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Remote { url, .. } => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Build the request URL: proxy base followed by the percent-encoded feed URL
pub fn proxied_url(proxy_base: &str, feed_url: &str) -> String {
    format!("{}{}", proxy_base, urlencoding::encode(feed_url))
}

/// Fetch the raw feed text. One attempt, no retries.
pub async fn fetch_feed(client: &reqwest::Client, source: &FeedSource) -> Result<String, FeedError> {
    let text = match source {
        FeedSource::Remote { url, proxy_base } => fetch_remote(client, url, proxy_base).await?,
        FeedSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FeedError::Read {
                path: path.clone(),
                source: e,
            })?,
    };

    ensure_body(text)
}

async fn fetch_remote(
    client: &reqwest::Client,
    url: &str,
    proxy_base: &str,
) -> Result<String, FeedError> {
    let request_url = proxied_url(proxy_base, url);
    debug!("Fetching feed via {}", request_url);

    let response = client
        .get(&request_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status));
    }

    Ok(response.text().await?)
}

fn ensure_body(text: String) -> Result<String, FeedError> {
    if text.trim().is_empty() {
        return Err(FeedError::EmptyBody);
    }
    Ok(text)
}
