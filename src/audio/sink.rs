//! Rodio-backed renderer.
//!
//! Each call opens the file, decodes it and plays it on a fresh output
//! stream. Every handle is a local, so all of them are dropped when
//! `render` returns on any path.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;

use super::types::{RenderError, Renderer};

pub struct RodioRenderer {
    volume: f32,
}

impl RodioRenderer {
    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            volume: settings.volume,
        }
    }
}

impl Renderer for RodioRenderer {
    fn render(&mut self, locator: &str) -> Result<(), RenderError> {
        let file = File::open(locator).map_err(|error| RenderError::Open {
            locator: locator.to_string(),
            error,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|error| RenderError::Decode {
            locator: locator.to_string(),
            error,
        })?;
        log::debug!("decoded {locator}");

        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| RenderError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped; that would interleave
        // with the progress lines.
        stream.log_on_drop(false);

        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.sleep_until_end();
        log::debug!("finished {locator}");
        Ok(())
    }
}
