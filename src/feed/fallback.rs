//! Fixed podcast and episode records used when no feed can be loaded

use crate::feed::model::{Catalog, Episode, Origin, PodcastInfo};

pub const DEFAULT_TITLE: &str = "Shut Up Dude";
pub const DEFAULT_DESCRIPTION: &str = "A hilarious podcast where friends debate everything from conspiracy theories to pop culture, all while trying to out-roast each other. No topic is too weird, no argument too petty.";
pub const DEFAULT_IMAGE_URL: &str = "https://images.pexels.com/photos/4792509/pexels-photo-4792509.jpeg?auto=compress&cs=tinysrgb&w=800";
pub const DEFAULT_AUTHOR: &str = "The Dudes";
pub const DEFAULT_CATEGORY: &str = "Comedy";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_LINK: &str = "https://shutupdude.podcast.com";

/// Shorter blurb used when a parsed feed has no description of its own
pub const PARSED_DESCRIPTION: &str = "A hilarious podcast where friends debate everything.";

const PLACEHOLDER_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

pub fn podcast_info() -> PodcastInfo {
    PodcastInfo {
        title: DEFAULT_TITLE.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        image_url: DEFAULT_IMAGE_URL.to_string(),
        author: DEFAULT_AUTHOR.to_string(),
        category: DEFAULT_CATEGORY.to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
        link: DEFAULT_LINK.to_string(),
    }
}

pub fn episodes() -> Vec<Episode> {
    vec![
        fallback_episode(
            "001",
            "Is Cereal Soup? The Great Food Classification Debate",
            "The dudes dive deep into the age-old question: Is cereal soup? What about hot dogs and sandwiches? This episode gets heated as we classify every food known to mankind. Featuring special guest appearances from our fridges.",
            "2024-01-15T10:00:00Z",
            "45:23",
            "https://images.pexels.com/photos/5946620/pexels-photo-5946620.jpeg?auto=compress&cs=tinysrgb&w=400",
            1,
        ),
        fallback_episode(
            "002",
            "Why Pineapple on Pizza is Actually a Government Conspiracy",
            "We uncover the truth behind the pineapple pizza controversy. Spoiler alert: Big Pineapple has been pulling the strings all along. Plus, we rank every pizza topping from best to 'why does this exist?'",
            "2024-01-08T10:00:00Z",
            "52:17",
            "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=400",
            2,
        ),
        fallback_episode(
            "003",
            "Ranking Childhood Cartoons While Completely Missing the Point",
            "Join us as we completely overthink every cartoon from the 90s and 2000s. We discover hidden meanings that definitely weren't intended and get way too emotional about SpongeBob. Tissues recommended.",
            "2024-01-01T10:00:00Z",
            "38:45",
            "https://images.pexels.com/photos/5082976/pexels-photo-5082976.jpeg?auto=compress&cs=tinysrgb&w=400",
            3,
        ),
    ]
}

/// Fallback podcast and episodes together
pub fn catalog() -> Catalog {
    Catalog {
        podcast: podcast_info(),
        episodes: episodes(),
        origin: Origin::Fallback,
    }
}

fn fallback_episode(
    id: &str,
    title: &str,
    description: &str,
    pub_date: &str,
    duration: &str,
    image_url: &str,
    number: u32,
) -> Episode {
    Episode {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        pub_date: pub_date.to_string(),
        duration: duration.to_string(),
        audio_url: PLACEHOLDER_AUDIO_URL.to_string(),
        image_url: Some(image_url.to_string()),
        episode_number: Some(number),
        season: Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_three_episodes() {
        let eps = episodes();
        assert_eq!(eps.len(), 3);
        let numbers: Vec<_> = eps.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
        assert!(eps.iter().all(|e| e.season == Some(1)));
    }

    #[test]
    fn test_shared_audio_distinct_images() {
        let eps = episodes();
        assert!(eps.iter().all(|e| e.audio_url == PLACEHOLDER_AUDIO_URL));
        let images: HashSet<_> = eps.iter().map(|e| e.image_url.clone()).collect();
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_catalog_is_marked_fallback() {
        let catalog = catalog();
        assert!(catalog.is_fallback());
        assert_eq!(catalog.podcast, podcast_info());
    }
}
