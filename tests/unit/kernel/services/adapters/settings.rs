use super::*;
use crate::kernel::services::ports::{Geometry, Size};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings {
        geometry: Some(Geometry {
            x: 5,
            y: 6,
            width: 1000,
            height: 720,
        }),
        maximised: true,
        size: Size::new(1000, 720),
        log_panel_visible: true,
        last_file_path: Some(PathBuf::from("/w/foo.cob")),
        ..Settings::default()
    };
    settings.push_recent_file(PathBuf::from("/w/foo.cob"));
    settings.compiler.extra_args = vec!["-free".to_string()];

    save_settings_to(&path, &settings).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_settings_from(&path).unwrap(), settings);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "fullscreen": true }"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(settings.fullscreen);
    assert!(settings.navigation_panel_visible);
    assert_eq!(settings.compiler.command, "cobc");
    assert_eq!(settings.size, Size::new(1200, 800));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
}
