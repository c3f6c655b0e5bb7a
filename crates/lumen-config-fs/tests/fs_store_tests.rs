// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_app_core::{ConfigError, ConfigService, ConfigStore};
use lumen_config_fs::FsConfigStore;

#[test]
fn round_trips_blobs_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("universe"), Err(ConfigError::NotFound)));
    store.save_raw("universe", br#"{"c":1.0}"#).unwrap();
    assert_eq!(store.load_raw("universe").unwrap(), br#"{"c":1.0}"#.to_vec());
    assert!(dir.path().join("universe.json").is_file());
}

#[test]
fn creates_missing_base_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::at(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.base(), nested.as_path());
}

#[test]
fn service_reads_json_written_by_store() {
    let dir = tempfile::tempdir().unwrap();
    let svc = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    svc.save("numbers", &serde_json::json!({"t_max": 5.0})).unwrap();
    let loaded: Option<serde_json::Value> = svc.load("numbers").unwrap();
    assert_eq!(loaded, Some(serde_json::json!({"t_max": 5.0})));
}

#[test]
fn path_like_keys_never_reach_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(
        store.save_raw("../escape", b"x"),
        Err(ConfigError::InvalidKey(_))
    ));
    assert_eq!(std::fs::read_dir(store.base()).unwrap().count(), 0);
}
