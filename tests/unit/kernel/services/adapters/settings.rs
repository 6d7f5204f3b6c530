use super::*;
use crate::kernel::services::ports::WindowGeometry;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_settings_path_location() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(".hypermd/settings.json"));
}

#[test]
fn test_open_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let store = JsonSettingsStore::open(dir.path().join("nested/settings.json"));
    assert_eq!(
        store.get(SettingKey::WindowGeometry),
        SettingValue::WindowGeometry(WindowGeometry::default())
    );
    assert!(!store.path().exists());
}

#[test]
fn test_set_writes_through() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/settings.json");
    let mut store = JsonSettingsStore::open(&path);

    let geometry = WindowGeometry {
        width: 800,
        height: 600,
        x: 10,
        y: 20,
    };
    store
        .set(SettingKey::WindowGeometry, SettingValue::WindowGeometry(geometry))
        .unwrap();
    store
        .set(SettingKey::SidebarWidth, SettingValue::Int(320))
        .unwrap();

    let reopened = JsonSettingsStore::open(&path);
    assert_eq!(reopened.settings().window, geometry);
    assert_eq!(reopened.settings().sidebar_width, 320);
}

#[test]
fn test_mismatched_value_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut store = JsonSettingsStore::open(&path);

    let err = store
        .set(SettingKey::SidebarWidth, SettingValue::WindowGeometry(WindowGeometry::default()))
        .unwrap_err();
    assert!(matches!(err, Error::Settings(_)));
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
    let store = JsonSettingsStore::open(&path);
    assert_eq!(store.settings().sidebar_width, 250);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "sidebar_width": 180, "roots": ["/notes"] }"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.sidebar_width, 180);
    assert_eq!(settings.window, WindowGeometry::default());
    assert_eq!(settings.roots, [std::path::PathBuf::from("/notes")]);
}
