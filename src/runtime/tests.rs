use std::path::Path;

use super::session::run_session;
use super::startup::build_playlist;
use crate::audio::{RenderError, Renderer};
use crate::config::{PlaybackSettings, Settings, TrackEntry};

/// Succeeds for everything except locators containing "broken".
#[derive(Default)]
struct ScriptedRenderer {
    calls: Vec<String>,
}

impl Renderer for ScriptedRenderer {
    fn render(&mut self, locator: &str) -> Result<(), RenderError> {
        self.calls.push(locator.to_string());
        if locator.contains("broken") {
            return Err(RenderError::Output("no device".to_string()));
        }
        Ok(())
    }
}

fn entry(title: &str, source: &str) -> TrackEntry {
    TrackEntry {
        title: title.into(),
        source: source.into(),
    }
}

#[test]
fn build_playlist_uses_configured_tracks_without_dir() {
    let settings = Settings::default();
    let playlist = build_playlist(None, &settings).unwrap();
    let titles: Vec<&str> = playlist.iter().map(|t| t.title.as_str()).collect();
    let expected: Vec<&str> = settings.tracks.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, expected);
}

#[test]
fn build_playlist_scans_dir_when_given() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    std::fs::write(dir.path().join("a.mp3"), b"x").unwrap();

    let playlist = build_playlist(Some(dir.path()), &Settings::default()).unwrap();
    let titles: Vec<&str> = playlist.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["a", "b"]);
}

#[test]
fn build_playlist_fails_for_missing_dir() {
    let missing = Path::new("/definitely/not/here/carousel");
    assert!(build_playlist(Some(missing), &Settings::default()).is_err());
}

#[test]
fn session_plays_removes_and_plays_again() {
    let settings = Settings {
        tracks: vec![
            entry("One", "one.mp3"),
            entry("Two", "broken.mp3"),
            entry("Three", "three.mp3"),
        ],
        playback: PlaybackSettings {
            first_pass: 2,
            second_pass: 1,
            remove_title: Some("Three".into()),
        },
        ..Settings::default()
    };
    let mut playlist = build_playlist(None, &settings).unwrap();
    let mut renderer = ScriptedRenderer::default();
    let mut out = Vec::new();

    run_session(&mut playlist, &settings.playback, &mut renderer, &mut out).unwrap();

    assert_eq!(
        renderer.calls,
        [
            "one.mp3",
            "broken.mp3",
            "three.mp3",
            "one.mp3",
            "broken.mp3",
            "three.mp3",
            "one.mp3",
            "broken.mp3",
        ]
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Playlist:\nOne\nTwo\nThree\n"));
    assert!(text.contains("\nPlaylist after removing 'Three':\nOne\nTwo\n"));
    assert_eq!(text.matches("Error playing Two: ").count(), 3);
    assert!(text.contains("Playing all tracks 2 time(s):"));
    assert!(text.contains("Playing remaining tracks 1 time(s):"));
}

#[test]
fn session_with_unknown_remove_title_keeps_playlist() {
    let settings = Settings {
        tracks: vec![entry("One", "one.mp3")],
        playback: PlaybackSettings {
            first_pass: 0,
            second_pass: 1,
            remove_title: Some("Missing".into()),
        },
        ..Settings::default()
    };
    let mut playlist = build_playlist(None, &settings).unwrap();
    let mut renderer = ScriptedRenderer::default();
    let mut out = Vec::new();

    run_session(&mut playlist, &settings.playback, &mut renderer, &mut out).unwrap();

    assert_eq!(playlist.len(), 1);
    assert_eq!(renderer.calls, ["one.mp3"]);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("after removing"));
}
