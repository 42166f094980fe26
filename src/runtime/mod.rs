use std::env;
use std::io;
use std::path::Path;

use crate::audio::RodioRenderer;

mod session;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = settings::load_settings();

    // Optional directory to scan; without it the configured playlist is used.
    let dir = env::args().nth(1);
    let mut playlist = startup::build_playlist(dir.as_deref().map(Path::new), &settings)?;

    let mut renderer = RodioRenderer::new(&settings.audio);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    session::run_session(&mut playlist, &settings.playback, &mut renderer, &mut out)?;
    Ok(())
}
