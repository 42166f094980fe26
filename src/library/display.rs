use crate::config::TitleField;

/// Build a track title from tag values according to `fields` and `sep`.
///
/// Empty parts are skipped. When nothing is produced the tag title is used,
/// and failing that the file stem.
pub fn title_from_fields(
    stem: &str,
    title: Option<&str>,
    artist: Option<&str>,
    fields: &[TitleField],
    sep: &str,
) -> String {
    let title = title.map(str::trim).filter(|s| !s.is_empty());
    let artist = artist.map(str::trim).filter(|s| !s.is_empty());

    let mut parts: Vec<&str> = Vec::new();
    for f in fields {
        let part = match f {
            TitleField::Artist => artist,
            TitleField::Title => title,
            TitleField::Filename => Some(stem.trim()).filter(|s| !s.is_empty()),
        };
        if let Some(p) = part {
            parts.push(p);
        }
    }

    if parts.is_empty() {
        title.unwrap_or(stem).to_string()
    } else {
        parts.join(sep)
    }
}
