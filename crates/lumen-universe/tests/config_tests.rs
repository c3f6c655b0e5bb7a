// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_app_core::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
use lumen_core::Kinematics;
use lumen_universe::{load_config, load_config_from_dir, UniverseConfig, UniverseError, CONFIG_KEY};

#[test]
fn missing_config_uses_defaults() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    assert_eq!(load_config(&svc).unwrap(), UniverseConfig::default());
}

#[test]
fn stored_config_overrides_defaults() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let custom = UniverseConfig {
        c: 3.0,
        kinematics: Kinematics::Galilean,
        ..UniverseConfig::default()
    };
    svc.save(CONFIG_KEY, &custom).unwrap();
    assert_eq!(load_config(&svc).unwrap(), custom);
}

#[test]
fn partial_config_fills_in_defaults() {
    let store = MemoryConfigStore::new();
    store
        .save_raw(CONFIG_KEY, br#"{ "t_max": 8.0, "kinematics": "galilean" }"#)
        .unwrap();
    let loaded = load_config(&ConfigService::new(store)).unwrap();
    assert_eq!(loaded.t_max, 8.0);
    assert_eq!(loaded.kinematics, Kinematics::Galilean);
    assert_eq!(loaded.c, 1.0);
}

#[test]
fn out_of_range_config_is_rejected() {
    let store = MemoryConfigStore::new();
    store.save_raw(CONFIG_KEY, br#"{ "easing": 1.5 }"#).unwrap();
    assert!(matches!(
        load_config(&ConfigService::new(store)),
        Err(UniverseError::InvalidConfig(_))
    ));
}

#[test]
fn unknown_fields_are_a_config_error() {
    let store = MemoryConfigStore::new();
    store.save_raw(CONFIG_KEY, br#"{ "speed_of_light": 2.0 }"#).unwrap();
    assert!(matches!(
        load_config(&ConfigService::new(store)),
        Err(UniverseError::Config(ConfigError::Serde(_)))
    ));
}

#[test]
fn empty_config_dir_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_config_from_dir(dir.path()).unwrap(), UniverseConfig::default());
}

#[test]
fn config_file_on_disk_is_loaded_and_validated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("universe.json"), br#"{ "c": 2.0, "adjust_t_max": true }"#).unwrap();
    let loaded = load_config_from_dir(dir.path()).unwrap();
    assert_eq!(loaded.c, 2.0);
    assert!(loaded.adjust_t_max);

    std::fs::write(dir.path().join("universe.json"), br#"{ "t_max": -1.0 }"#).unwrap();
    assert!(matches!(
        load_config_from_dir(dir.path()),
        Err(UniverseError::InvalidConfig(_))
    ));
}
