//! Renderer capability and its error type.

use std::io;

use rodio::decoder::DecoderError;
use thiserror::Error;

/// Why a single track could not be played.
///
/// The underlying error is folded into the message; there is no `source` chain.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The locator could not be opened.
    #[error("failed to open {locator}: {error}")]
    Open {
        locator: String,
        error: io::Error,
    },
    /// The payload opened but is not decodable audio.
    #[error("failed to decode {locator}: {error}")]
    Decode {
        locator: String,
        error: DecoderError,
    },
    /// No output device, or the device refused the stream.
    #[error("audio output failed: {0}")]
    Output(String),
}

/// Plays one track to completion.
///
/// `render` blocks until the audio behind `locator` has been fully written
/// to the output, and releases everything it opened before returning,
/// whether it succeeds or not.
pub trait Renderer {
    fn render(&mut self, locator: &str) -> Result<(), RenderError>;
}
