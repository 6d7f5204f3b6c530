use super::*;

#[test]
fn settings_missing_fields_take_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"sidebar_width": 0}"#).unwrap();
    assert_eq!(settings.sidebar_width, 0);
    assert_eq!(settings.window, WindowGeometry::default());
    assert!(settings.roots.is_empty());
    assert!(settings.asset_root.is_none());

    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.sidebar_width, DEFAULT_SIDEBAR_WIDTH);
}

#[test]
fn settings_serialize_skips_empty_optionals() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"window\""));
    assert!(!json.contains("roots"));
    assert!(!json.contains("asset_root"));
}

#[test]
fn settings_get_set_by_key() {
    let mut settings = Settings::default();
    let geometry = WindowGeometry {
        width: 800,
        height: 600,
        x: 10,
        y: 20,
    };

    assert!(settings.set(
        SettingKey::WindowGeometry,
        SettingValue::WindowGeometry(geometry)
    ));
    assert!(settings.set(SettingKey::SidebarWidth, SettingValue::Int(300)));
    assert!(!settings.set(SettingKey::SidebarWidth, SettingValue::WindowGeometry(geometry)));

    assert_eq!(
        settings.get(SettingKey::WindowGeometry),
        SettingValue::WindowGeometry(geometry)
    );
    assert_eq!(settings.get(SettingKey::SidebarWidth), SettingValue::Int(300));
}

#[test]
fn memory_store_counts_writes_and_rejects_mismatches() {
    let mut store = MemorySettingsStore::default();
    store
        .set(SettingKey::SidebarWidth, SettingValue::Int(120))
        .unwrap();
    assert_eq!(store.writes(), 1);
    assert_eq!(store.settings().sidebar_width, 120);

    let err = store
        .set(
            SettingKey::WindowGeometry,
            SettingValue::Int(1),
        )
        .unwrap_err();
    assert!(matches!(err, crate::Error::Settings(_)));
    assert_eq!(store.writes(), 1);
}
