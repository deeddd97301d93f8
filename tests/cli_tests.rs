use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
  <channel>
    <title>Integration Show</title>
    <description>Testing the whole pipeline</description>
    <itunes:author>CI Bot</itunes:author>
    <item>
      <title>Pilot Episode</title>
      <guid>pilot/01</guid>
      <description>Where it all begins</description>
      <pubDate>Mon, 15 Jan 2024 10:00:00 GMT</pubDate>
      <itunes:duration>3665</itunes:duration>
      <enclosure url="https://cdn.example.com/pilot.mp3" type="audio/mpeg"/>
    </item>
    <item>
      <title>Broken Episode</title>
      <guid>broken</guid>
      <enclosure type="audio/mpeg"/>
    </item>
    <item>
      <guid>untitled</guid>
      <itunes:duration>12:34</itunes:duration>
    </item>
  </channel>
</rss>"#;

/// Command isolated from the user's config file
fn podcatalog(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("podcatalog").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write_feed(dir: &TempDir) -> String {
    let path = dir.path().join("feed.xml");
    std::fs::write(&path, FEED).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    podcatalog(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("podcatalog"));
}

#[test]
fn test_episodes_help() {
    let temp = TempDir::new().unwrap();
    podcatalog(temp.path())
        .args(["episodes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List all episodes"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--feed-file"));
}

#[test]
fn test_home_from_feed_file() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    podcatalog(temp.path())
        .args(["home", "--feed-file", &feed])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration Show"))
        .stdout(predicate::str::contains("CI Bot"))
        .stdout(predicate::str::contains("Pilot Episode"))
        .stdout(predicate::str::contains("January 15, 2024"))
        .stdout(predicate::str::contains("1:01:05"));
}

#[test]
fn test_malformed_item_is_skipped() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    let output = podcatalog(temp.path())
        .args(["episodes", "--json", "--feed-file", &feed])
        .output()
        .unwrap();
    assert!(output.status.success());

    let episodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let episodes = episodes.as_array().unwrap();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0]["id"], "pilot-01");
    assert_eq!(episodes[1]["id"], "untitled");
    // Position counts the skipped item too
    assert_eq!(episodes[1]["title"], "Episode 3");
    assert_eq!(episodes[1]["episodeNumber"], 3);
}

#[test]
fn test_search_filters_case_insensitively() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    podcatalog(temp.path())
        .args(["episodes", "--search", "BEGINS", "--feed-file", &feed])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pilot Episode"))
        .stdout(predicate::str::contains("untitled").not());
}

#[test]
fn test_search_without_matches() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    podcatalog(temp.path())
        .args(["episodes", "-s", "zebra", "--feed-file", &feed])
        .assert()
        .success()
        .stdout(predicate::str::contains("No episodes match \"zebra\""));
}

#[test]
fn test_episode_detail() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    podcatalog(temp.path())
        .args(["episode", "untitled", "--feed-file", &feed])
        .assert()
        .success()
        .stdout(predicate::str::contains("Episode 3"))
        .stdout(predicate::str::contains("12:34"))
        .stdout(predicate::str::contains("(no audio available)"))
        .stdout(predicate::str::contains("No description available"));
}

#[test]
fn test_unknown_episode_fails() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(&temp);
    podcatalog(temp.path())
        .args(["episode", "does-not-exist", "--feed-file", &feed])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Episode not found: does-not-exist"));
}

#[test]
fn test_missing_feed_file_shows_fallback() {
    let temp = TempDir::new().unwrap();
    podcatalog(temp.path())
        .args(["home", "--feed-file", "/nonexistent/feed.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shut Up Dude"))
        .stdout(predicate::str::contains("Is Cereal Soup?"));
}

#[test]
fn test_empty_feed_file_shows_all_fallback_episodes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.xml");
    std::fs::write(&path, "  \n").unwrap();

    let output = podcatalog(temp.path())
        .args(["episodes", "--json", "--feed-file", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let episodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = episodes
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["001", "002", "003"]);
}

#[test]
fn test_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("podcatalog");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[feed]\nurl = \"https://example.com/rss\"\nproxy = \"http://127.0.0.1:1/?url=\"\n",
    )
    .unwrap();

    // Unreachable proxy from config: still succeeds with fallback data
    podcatalog(temp.path())
        .args(["home", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shut Up Dude"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("podcatalog");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[feed]\n").unwrap();

    podcatalog(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config already exists"));
}
