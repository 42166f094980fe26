use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::display::title_from_fields;
use super::model::{LibraryError, Track};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Read `(title, artist)` tags from `path`, if it carries any.
fn read_tags(path: &Path) -> (Option<String>, Option<String>) {
    let Ok(tagged) = lofty::read_from_path(path) else {
        log::debug!("no readable tags in {}", path.display());
        return (None, None);
    };
    match tagged.primary_tag().or_else(|| tagged.first_tag()) {
        Some(tag) => (
            tag.title().map(|v| v.into_owned()),
            tag.artist().map(|v| v.into_owned()),
        ),
        None => (None, None),
    }
}

/// Scan `dir` for audio files and turn each into a `Track`.
///
/// Tracks are sorted case-insensitively by title so the playlist order is
/// stable across runs.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, LibraryError> {
    if !dir.is_dir() {
        return Err(LibraryError::NotADirectory(dir.to_path_buf()));
    }

    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN");
        let (title, artist) = read_tags(path);

        let title = title_from_fields(
            stem,
            title.as_deref(),
            artist.as_deref(),
            &settings.title_fields,
            &settings.title_separator,
        );

        tracks.push(Track::new(title, path.to_string_lossy()));
    }

    tracks.sort_by_key(|t| t.title.to_lowercase());
    log::info!("found {} tracks under {}", tracks.len(), dir.display());
    Ok(tracks)
}
