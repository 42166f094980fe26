//! Track model and library scanning.
//!
//! A `Track` is the unit the playlist stores: a display title plus an opaque
//! source locator. `scan` turns a directory of audio files into tracks.

mod display;
mod model;
mod scan;

pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
