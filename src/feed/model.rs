use serde::{Deserialize, Serialize};

/// Show-level metadata extracted from a feed's channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastInfo {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author: String,
    pub category: String,
    pub language: String,
    pub link: String,
}

/// A single episode record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Raw publish date as found in the feed, may be unparsable
    pub pub_date: String,
    /// Either whole seconds ("125") or colon-delimited ("12:34", "1:02:03")
    pub duration: String,
    /// Empty when the item has no playable media
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
}

/// Where a catalog's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Feed,
    Fallback,
}

/// The podcast plus its episodes, as handed to the views
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub podcast: PodcastInfo,
    pub episodes: Vec<Episode>,
    #[serde(skip)]
    pub origin: Origin,
}

impl Catalog {
    /// The first `count` episodes in feed order
    pub fn latest(&self, count: usize) -> &[Episode] {
        &self.episodes[..count.min(self.episodes.len())]
    }

    /// Case-insensitive substring match against title and description.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Episode> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.episodes.iter().collect();
        }

        self.episodes
            .iter()
            .filter(|ep| {
                ep.title.to_lowercase().contains(&needle)
                    || ep.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.id == id)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }
}
