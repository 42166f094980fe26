use super::display::title_from_fields;
use crate::config::TitleField;

#[test]
fn title_from_fields_joins_artist_and_title() {
    let fields = [TitleField::Artist, TitleField::Title];
    assert_eq!(
        title_from_fields("file", Some("Boom"), Some("Anjulie"), &fields, " - "),
        "Anjulie - Boom"
    );
    assert_eq!(
        title_from_fields("file", Some("Boom"), Some("  Anjulie  "), &fields, " - "),
        "Anjulie - Boom"
    );
}

#[test]
fn title_from_fields_skips_missing_parts() {
    let fields = [TitleField::Artist, TitleField::Title];
    assert_eq!(
        title_from_fields("file", Some("Boom"), None, &fields, " - "),
        "Boom"
    );
    assert_eq!(
        title_from_fields("file", Some("Boom"), Some("   "), &fields, " - "),
        "Boom"
    );
}

#[test]
fn title_from_fields_falls_back_to_stem_without_tags() {
    let fields = [TitleField::Artist, TitleField::Title];
    assert_eq!(
        title_from_fields("Dorothy - Black Sheep (320)", None, None, &fields, " - "),
        "Dorothy - Black Sheep (320)"
    );
}

#[test]
fn title_from_fields_can_use_filename() {
    assert_eq!(
        title_from_fields("track01", Some("Boom"), None, &[TitleField::Filename], "::"),
        "track01"
    );
}
