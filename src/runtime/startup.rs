use std::path::Path;

use crate::config::Settings;
use crate::library::{LibraryError, Track, scan};
use crate::playlist::Playlist;

/// Build the playlist from `dir` when given, else from the configured tracks.
pub fn build_playlist(dir: Option<&Path>, settings: &Settings) -> Result<Playlist, LibraryError> {
    let playlist: Playlist = match dir {
        Some(dir) => scan(dir, &settings.library)?.into_iter().collect(),
        None => settings
            .tracks
            .iter()
            .map(|e| Track::new(&e.title, &e.source))
            .collect(),
    };
    match playlist.head() {
        Some(first) => log::info!(
            "playlist has {} tracks, starting at {}",
            playlist.len(),
            first.title
        ),
        None => log::warn!("playlist is empty, nothing will play"),
    }
    Ok(playlist)
}
