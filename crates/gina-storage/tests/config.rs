use std::fs;

use gina_storage::StoreConfig;
use gina_storage::config::{load_config, load_or_init, save_config};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gina").join("config.json");
    let config = StoreConfig::new(dir.path().join("data"));

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded, config);
    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("config.json")]);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = StoreConfig::new("/var/lib/gina");
    config.config_version = 0;

    save_config(&path, &config).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], 1);
}

#[test]
fn unversioned_config_is_stamped_current() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "data_dir": "/srv/gina" }"#).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir, std::path::PathBuf::from("/srv/gina"));
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "config_version": 99, "data_dir": "/srv/gina" }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn load_or_init_creates_then_reuses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let created = load_or_init(&path, dir.path().join("first")).unwrap();
    assert!(path.is_file());

    let reused = load_or_init(&path, dir.path().join("second")).unwrap();
    assert_eq!(reused, created);
    assert_eq!(reused.data_dir, dir.path().join("first"));
}

#[test]
fn save_replaces_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    save_config(&path, &StoreConfig::new("/srv/old")).unwrap();
    save_config(&path, &StoreConfig::new("/srv/new")).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.data_dir, std::path::PathBuf::from("/srv/new"));
}
