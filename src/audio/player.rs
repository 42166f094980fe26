use std::io::{self, Write};

use crate::playlist::Playlist;

use super::types::Renderer;

/// A track that failed to render during `play_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackFailure {
    pub title: String,
    pub error: String,
}

/// What happened during one `play_all` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Render attempts, one per track per pass.
    pub attempts: usize,
    pub failures: Vec<TrackFailure>,
}

impl PlaybackReport {
    pub fn succeeded(&self) -> usize {
        self.attempts - self.failures.len()
    }
}

/// Play every track of `playlist`, in order, `repetitions` times.
///
/// A `Now playing:` line is written to `out` before each track and an
/// `Error playing` line after each one that fails. A failed track never stops
/// the pass or the remaining repetitions; render errors end up in the report.
/// Only write errors on `out` are returned.
pub fn play_all<R, W>(
    playlist: &Playlist,
    repetitions: u32,
    renderer: &mut R,
    out: &mut W,
) -> io::Result<PlaybackReport>
where
    R: Renderer + ?Sized,
    W: Write + ?Sized,
{
    let mut report = PlaybackReport::default();
    if playlist.is_empty() {
        log::debug!("playlist is empty, skipping {repetitions} pass(es)");
        return Ok(report);
    }
    let Some(mut cursor) = playlist.cursor() else {
        return Ok(report);
    };

    for pass in 1..=repetitions {
        log::debug!("starting pass {pass}/{repetitions}");
        loop {
            let track = cursor.track();
            writeln!(out, "Now playing: {}", track.title)?;
            report.attempts += 1;

            if let Err(err) = renderer.render(&track.source) {
                writeln!(out, "Error playing {}: {err}", track.title)?;
                report.failures.push(TrackFailure {
                    title: track.title.clone(),
                    error: err.to_string(),
                });
            }

            cursor.advance();
            if cursor.is_at_head() {
                break;
            }
        }
    }

    Ok(report)
}
