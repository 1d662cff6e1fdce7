//! Configuration parsing and defaults.

use mipsim_core::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.memory.data_base, 0x1001_0000);
    assert_eq!(config.memory.initial_sp, 0x7FFF_FFFC);
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(Config::from_json("{}").ok(), Some(Config::default()));
}

#[test]
fn test_partial_sections() {
    let config = Config::from_json(r#"{"memory": {"initial_sp": 4096}}"#)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.memory.initial_sp, 4096);
    assert_eq!(config.memory.data_base, 0x1001_0000);
    assert_eq!(config.general, Config::default().general);
}

#[test]
fn test_invalid_json_is_rejected() {
    assert!(Config::from_json("{ general: }").is_err());
    assert!(Config::from_json(r#"{"general": {"max_steps": "many"}}"#).is_err());
}

#[test]
fn test_serializes_back() {
    let mut config = Config::default();
    config.general.max_steps = Some(10);
    let json = serde_json::to_string(&config).unwrap_or_default();
    assert_eq!(Config::from_json(&json).ok(), Some(config));
}
