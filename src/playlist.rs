//! The circular playlist.
//!
//! `Playlist` keeps tracks on a single cycle starting at a head node. The
//! playback driver walks it with a `Cursor`; listings use `iter`.

mod ring;

pub use ring::*;
