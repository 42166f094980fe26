mod audio;
mod config;
mod library;
mod playlist;
mod runtime;

fn main() {
    if let Err(e) = runtime::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
