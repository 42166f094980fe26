use std::io::{self, Write};

use crate::audio::{PlaybackReport, Renderer, play_all};
use crate::config::PlaybackSettings;
use crate::playlist::Playlist;

/// List, play, drop one title, list again, play again.
///
/// Track failures are reported on `out` and in the log but never end the
/// session; only write errors on `out` do.
pub fn run_session<R, W>(
    playlist: &mut Playlist,
    playback: &PlaybackSettings,
    renderer: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: Renderer + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Playlist:")?;
    write!(out, "{playlist}")?;

    writeln!(out, "\nPlaying all tracks {} time(s):", playback.first_pass)?;
    let report = play_all(playlist, playback.first_pass, renderer, out)?;
    log_summary("first pass", &report);

    match playback.remove_title.as_deref() {
        Some(title) => {
            if playlist.remove(title).is_some() {
                writeln!(out, "\nPlaylist after removing '{title}':")?;
            } else {
                log::warn!("'{title}' is not in the playlist, nothing removed");
                writeln!(out, "\nPlaylist:")?;
            }
        }
        None => writeln!(out, "\nPlaylist:")?,
    }
    write!(out, "{playlist}")?;

    writeln!(
        out,
        "\nPlaying remaining tracks {} time(s):",
        playback.second_pass
    )?;
    let report = play_all(playlist, playback.second_pass, renderer, out)?;
    log_summary("second pass", &report);

    Ok(())
}

fn log_summary(label: &str, report: &PlaybackReport) {
    log::info!(
        "{label}: {} of {} tracks played",
        report.succeeded(),
        report.attempts
    );
    for failure in &report.failures {
        log::debug!("{label}: {} failed: {}", failure.title, failure.error);
    }
}
