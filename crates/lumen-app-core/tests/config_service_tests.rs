// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_app_core::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
struct Sample {
    c: f64,
    label: String,
}

#[test]
fn missing_key_loads_as_none() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let loaded: Option<Sample> = svc.load("scene").unwrap();
    assert!(loaded.is_none());
    let fallback: Sample = svc.load_or_default("scene").unwrap();
    assert_eq!(fallback, Sample::default());
}

#[test]
fn saved_value_loads_back() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    let value = Sample {
        c: 2.5,
        label: "twins".into(),
    };
    svc.save("scene", &value).unwrap();
    assert_eq!(svc.load::<Sample>("scene").unwrap(), Some(value));
    assert_eq!(svc.store().len(), 1);
}

#[test]
fn empty_blob_is_treated_as_missing() {
    let store = MemoryConfigStore::new();
    store.save_raw("scene", b"").unwrap();
    let svc = ConfigService::new(store);
    assert!(svc.load::<Sample>("scene").unwrap().is_none());
}

#[test]
fn malformed_blob_is_a_serde_error() {
    let store = MemoryConfigStore::new();
    store.save_raw("scene", b"{ not json").unwrap();
    let svc = ConfigService::new(store);
    assert!(matches!(svc.load::<Sample>("scene"), Err(ConfigError::Serde(_))));
}

#[test]
fn keys_with_separators_are_rejected() {
    let svc = ConfigService::new(MemoryConfigStore::new());
    for key in ["", "../etc", "a/b", "scene.json"] {
        assert!(
            matches!(svc.save(key, &Sample::default()), Err(ConfigError::InvalidKey(_))),
            "{key}"
        );
    }
    assert!(svc.into_inner().is_empty());
}
