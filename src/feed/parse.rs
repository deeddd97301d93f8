//! RSS / Atom parsing into `PodcastInfo` and `Episode` records

use crate::feed::fallback;
use crate::feed::model::{Catalog, Episode, Origin, PodcastInfo};
use crate::feed::xml::{first_of, is_item, Lookup, Scope, Tag};
use crate::feed::{FeedError, ItemError};
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashSet;
use tracing::warn;

/// Duration recorded when an item has none
pub const UNKNOWN_DURATION: &str = "00:00";

const NO_DESCRIPTION: &str = "No description available";

// Podcast-level fallback chains
const PODCAST_TITLE: &[Lookup] = &[Lookup::Text(Tag::Plain("title"))];
const PODCAST_DESCRIPTION: &[Lookup] = &[
    Lookup::Text(Tag::Plain("description")),
    Lookup::Text(Tag::Itunes("summary")),
    Lookup::Text(Tag::Plain("summary")),
    Lookup::Text(Tag::Plain("subtitle")),
];
const PODCAST_IMAGE: &[Lookup] = &[
    Lookup::ChildText(Tag::Plain("image"), Tag::Plain("url")),
    Lookup::Attr(Tag::Itunes("image"), "href"),
    Lookup::Attr(Tag::Plain("image"), "href"),
];
const PODCAST_AUTHOR: &[Lookup] = &[
    Lookup::Text(Tag::Itunes("author")),
    Lookup::Text(Tag::Plain("managingEditor")),
    Lookup::Text(Tag::Plain("author")),
];
const PODCAST_CATEGORY: &[Lookup] = &[
    Lookup::Attr(Tag::Itunes("category"), "text"),
    Lookup::Text(Tag::Plain("category")),
    Lookup::Attr(Tag::Plain("category"), "term"),
];
const PODCAST_LANGUAGE: &[Lookup] = &[Lookup::Text(Tag::Plain("language"))];
const PODCAST_LINK: &[Lookup] = &[Lookup::LinkText, Lookup::PageLink];

// Item-level fallback chains
const ITEM_GUID: &[Lookup] = &[
    Lookup::Text(Tag::Plain("guid")),
    Lookup::Text(Tag::Plain("id")),
];
const ITEM_TITLE: &[Lookup] = &[Lookup::Text(Tag::Plain("title"))];
const ITEM_DESCRIPTION: &[Lookup] = &[
    Lookup::Text(Tag::Plain("description")),
    Lookup::Text(Tag::Itunes("summary")),
    Lookup::Text(Tag::Plain("summary")),
    Lookup::Text(Tag::Plain("content")),
];
const ITEM_PUB_DATE: &[Lookup] = &[
    Lookup::Text(Tag::Plain("pubDate")),
    Lookup::Text(Tag::Plain("published")),
    Lookup::Text(Tag::Plain("updated")),
];
const ITEM_DURATION: &[Lookup] = &[Lookup::Text(Tag::Itunes("duration"))];
const ITEM_AUDIO_LINK: &[Lookup] = &[Lookup::TypedLink("audio")];
const ITEM_IMAGE: &[Lookup] = &[Lookup::Attr(Tag::Itunes("image"), "href")];
const ITEM_EPISODE: &[Lookup] = &[Lookup::Text(Tag::Itunes("episode"))];
const ITEM_SEASON: &[Lookup] = &[Lookup::Text(Tag::Itunes("season"))];

/// Result of a structurally valid parse. `episodes` may be empty.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub podcast: PodcastInfo,
    pub episodes: Vec<Episode>,
    /// Items dropped because their extraction failed
    pub skipped: usize,
}

impl ParsedFeed {
    /// Keep the parsed podcast; substitute the fallback episodes if none parsed
    pub fn into_catalog(self) -> Catalog {
        let episodes = if self.episodes.is_empty() {
            warn!("No episodes found in feed, using fallback episodes");
            fallback::episodes()
        } else {
            self.episodes
        };

        Catalog {
            podcast: self.podcast,
            episodes,
            origin: Origin::Feed,
        }
    }
}

/// Parse raw feed text
pub fn parse_feed(text: &str) -> Result<ParsedFeed, FeedError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(text.trim_start(), options)?;
    let root = resolve_root(&doc).ok_or(FeedError::NoChannel)?;

    let podcast = extract_podcast(Scope::channel(root));

    let mut items: Vec<Node> = if is_item(root) {
        vec![root]
    } else {
        root.descendants().filter(|n| is_item(*n)).collect()
    };
    // RSS 1.0 keeps items beside the channel rather than inside it
    if items.is_empty() {
        items = doc
            .root_element()
            .descendants()
            .filter(|n| is_item(*n))
            .collect();
    }

    let mut episodes = Vec::with_capacity(items.len());
    let mut taken = HashSet::new();
    let mut skipped = 0;

    for (index, item) in items.into_iter().enumerate() {
        let position = index + 1;
        match extract_episode(Scope::item(item), position, &podcast) {
            Ok(mut episode) => {
                episode.id = disambiguate(episode.id, &mut taken);
                episodes.push(episode);
            }
            Err(e) => {
                warn!("Failed to parse episode {}: {}", position, e);
                skipped += 1;
            }
        }
    }

    Ok(ParsedFeed {
        podcast,
        episodes,
        skipped,
    })
}

/// `rss > channel`, then any `channel`, then Atom `feed`, then the root element
fn resolve_root<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    let channel = Tag::Plain("channel");
    let root = doc.root_element();

    if Tag::Plain("rss").matches(root) {
        if let Some(node) = root.children().find(|n| channel.matches(*n)) {
            return Some(node);
        }
    }

    doc.descendants()
        .find(|n| channel.matches(*n))
        .or_else(|| doc.descendants().find(|n| Tag::Plain("feed").matches(*n)))
        .or_else(|| doc.root().first_element_child())
}

fn extract_podcast(scope: Scope<'_, '_>) -> PodcastInfo {
    let field = |chain: &[Lookup], default: &str| {
        first_of(scope, chain).unwrap_or_else(|| default.to_string())
    };

    PodcastInfo {
        title: field(PODCAST_TITLE, fallback::DEFAULT_TITLE),
        description: field(PODCAST_DESCRIPTION, fallback::PARSED_DESCRIPTION),
        image_url: field(PODCAST_IMAGE, fallback::DEFAULT_IMAGE_URL),
        author: field(PODCAST_AUTHOR, fallback::DEFAULT_AUTHOR),
        category: field(PODCAST_CATEGORY, fallback::DEFAULT_CATEGORY),
        language: field(PODCAST_LANGUAGE, fallback::DEFAULT_LANGUAGE),
        link: field(PODCAST_LINK, fallback::DEFAULT_LINK),
    }
}

fn extract_episode(
    scope: Scope<'_, '_>,
    position: usize,
    podcast: &PodcastInfo,
) -> Result<Episode, ItemError> {
    let audio_url = audio_url(scope)?;

    let guid = first_of(scope, ITEM_GUID).unwrap_or_else(|| format!("episode-{}", position));

    Ok(Episode {
        id: sanitize_id(&guid),
        title: first_of(scope, ITEM_TITLE).unwrap_or_else(|| format!("Episode {}", position)),
        description: first_of(scope, ITEM_DESCRIPTION)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        pub_date: first_of(scope, ITEM_PUB_DATE).unwrap_or_else(now_timestamp),
        duration: first_of(scope, ITEM_DURATION).unwrap_or_else(|| UNKNOWN_DURATION.to_string()),
        audio_url,
        image_url: Some(first_of(scope, ITEM_IMAGE).unwrap_or_else(|| podcast.image_url.clone())),
        episode_number: first_of(scope, ITEM_EPISODE)
            .and_then(|v| leading_int(&v))
            .or_else(|| u32::try_from(position).ok()),
        season: first_of(scope, ITEM_SEASON)
            .and_then(|v| leading_int(&v))
            .or(Some(1)),
    })
}

/// Enclosure url, else an audio-typed link, else empty.
/// An enclosure without a usable url makes the item malformed.
fn audio_url(scope: Scope<'_, '_>) -> Result<String, ItemError> {
    if let Some(enclosure) = scope.first(Tag::Plain("enclosure")) {
        let url = enclosure
            .attribute("url")
            .ok_or(ItemError::EnclosureMissingUrl)?
            .trim();
        if url.is_empty() {
            return Err(ItemError::EnclosureBlankUrl);
        }
        return Ok(url.to_string());
    }

    Ok(first_of(scope, ITEM_AUDIO_LINK).unwrap_or_default())
}

/// Replace every character outside `[A-Za-z0-9-]` with `-`, then lowercase
pub fn sanitize_id(guid: &str) -> String {
    guid.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// First occurrence keeps its id; later ones get `-2`, `-3`, ...
fn disambiguate(id: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(id.clone()) {
        return id;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", id, n);
        if taken.insert(candidate.clone()) {
            warn!("Duplicate episode id '{}', using '{}'", id, candidate);
            return candidate;
        }
        n += 1;
    }
}

/// Integer prefix after optional whitespace and `+`, e.g. "12abc" -> 12
fn leading_int(value: &str) -> Option<u32> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
