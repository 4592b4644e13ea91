//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, defaults, and
//! validation.

use std::io::Write;

use fpsim_core::common::error::ConfigError;
use fpsim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_results);
    assert_eq!(config.scheduler.div_slots, 4);
    assert_eq!(config.scheduler.div_full_policy, DivFullPolicy::Stall);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "scheduler": { "div_slots": 2 } }"#).unwrap();
    assert_eq!(config.scheduler.div_slots, 2);
    assert_eq!(config.scheduler.div_full_policy, DivFullPolicy::Stall);
    assert!(!config.general.trace_results);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "trace_results": true },
        "scheduler": { "div_slots": 8, "div_full_policy": "Drop" }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace_results);
    assert_eq!(config.scheduler.div_slots, 8);
    assert_eq!(config.scheduler.div_full_policy, DivFullPolicy::Drop);
}

#[test]
fn test_policy_lowercase_alias() {
    let config = Config::from_json(r#"{ "scheduler": { "div_full_policy": "drop" } }"#).unwrap();
    assert_eq!(config.scheduler.div_full_policy, DivFullPolicy::Drop);
}

#[test]
fn test_zero_div_slots_rejected() {
    let err = Config::from_json(r#"{ "scheduler": { "div_slots": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDivSlots(0)));
}

#[test]
fn test_unknown_policy_rejected() {
    let err = Config::from_json(r#"{ "scheduler": { "div_full_policy": "Spin" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        Config::from_json("{ scheduler"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "scheduler": {{ "div_slots": 1 }} }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.scheduler.div_slots, 1);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_serialize_round_trip() {
    let config = Config {
        general: GeneralConfig { trace_results: true },
        scheduler: SchedulerConfig {
            div_slots: 3,
            div_full_policy: DivFullPolicy::Drop,
        },
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}
