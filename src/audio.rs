//! Audio module: renders tracks and drives playback over a playlist.
//!
//! `Renderer` is the seam between the driver and the audio backend. The
//! rodio-backed implementation lives in `sink`; `player` holds `play_all`.

mod player;
mod sink;
mod types;

pub use player::*;
pub use sink::RodioRenderer;
pub use types::*;
