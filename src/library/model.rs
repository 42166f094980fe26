use std::path::PathBuf;

use thiserror::Error;

/// A playable item: a title used for display and lookup, and an opaque
/// locator handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub source: String,
}

impl Track {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{0} is not a readable directory")]
    NotADirectory(PathBuf),
}
