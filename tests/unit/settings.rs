use super::*;
use tempfile::tempdir;

#[test]
fn empty_object_gives_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.emojis.len(), DEFAULT_EMOJIS.len());
    assert_eq!(settings.form.field_id, "selected-emoji");
    assert_eq!(settings.form.field_name, "emoji");
}

#[test]
fn partial_settings_keep_other_defaults() {
    let settings: Settings = serde_json::from_str(
        r##"{ "emojis": ["😀", "😂"], "theme": { "selected_bg": "#e0e7ff" } }"##,
    )
    .unwrap();
    assert_eq!(settings.emojis, vec!["😀", "😂"]);
    assert_eq!(settings.theme.selected_bg.as_deref(), Some("#e0e7ff"));
    assert_eq!(settings.theme.selected_ring, None);
    assert_eq!(settings.form, FormSettings::default());
}

#[test]
fn load_settings_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "emojis": ["🎉"], "form": { "field_id": "mood", "field_name": "mood" } }"#,
    )
    .unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.emojis, vec!["🎉"]);
    assert_eq!(settings.form.field_id, "mood");
}

#[test]
fn empty_emoji_list_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "emojis": [] }"#).unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.emojis.len(), DEFAULT_EMOJIS.len());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_settings(&path), Err(SettingsError::Parse(_))));
    assert_eq!(load_or_default(Some(path.as_path())), Settings::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(load_or_default(Some(path.as_path())), Settings::default());
}

#[test]
fn default_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_if_missing(&path).unwrap();
    assert_eq!(load_settings(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{ "emojis": ["🌱"] }"#).unwrap();
    write_default_if_missing(&path).unwrap();
    assert_eq!(load_settings(&path).unwrap().emojis, vec!["🌱"]);
}
