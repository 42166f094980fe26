use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/carousel/config.toml` or `~/.config/carousel/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CAROUSEL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    /// The fixed playlist used when no directory is given on the command line.
    pub tracks: Vec<TrackEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            playback: PlaybackSettings::default(),
            library: LibrarySettings::default(),
            tracks: default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<TrackEntry> {
    [
        ("Dorothy - Black Sheep", "Music/Dorothy - Black Sheep (320).mp3"),
        ("Anjulie - Boom", "Music/Anjulie - Boom (lyrics) (320).mp3"),
        (
            "Serena Ryder - Got Your Number",
            "Music/Serena Ryder - Got Your Number (Official Video) (320).mp3",
        ),
        (
            "Nova Twins - Antagonist",
            "Music/Nova Twins - Antagonist (Official Audio) (320).mp3",
        ),
        (
            "Black Sheep (Brie Larson Vocal Version)",
            "Music/Black Sheep (Brie Larson Vocal Version) (320).mp3",
        ),
    ]
    .into_iter()
    .map(|(title, source)| TrackEntry {
        title: title.to_string(),
        source: source.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output volume multiplier (1.0 = unchanged).
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// How many times the full playlist is played first.
    pub first_pass: u32,
    /// How many times the playlist is played after `remove_title` is dropped.
    pub second_pass: u32,
    /// Title removed between the two passes. Nothing is removed when unset.
    pub remove_title: Option<String>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            first_pass: 2,
            second_pass: 1,
            remove_title: Some("Nova Twins - Antagonist".to_string()),
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleField {
    Artist,
    Title,
    #[serde(alias = "stem")]
    Filename,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which tag fields make up a scanned track's title, in order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub title_fields: Vec<TitleField>,
    /// Separator used to join `title_fields`.
    pub title_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            title_fields: vec![TitleField::Artist, TitleField::Title],
            title_separator: " - ".to_string(),
        }
    }
}

/// One `[[tracks]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackEntry {
    pub title: String,
    pub source: String,
}
