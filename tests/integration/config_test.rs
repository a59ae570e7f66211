// Tests for persistent tool configuration

use retime::core::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.vault_path.is_none());
    assert_eq!(config.audio_dir, "audio");
    assert_eq!(config.note_dir, "notes");
}

#[test]
fn test_config_set_and_get_vault_path() {
    let mut config = Config::default();
    config.set_vault_path("/tmp/vault".to_string());
    assert_eq!(config.get_vault_path(), Some(&"/tmp/vault".to_string()));
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = Config {
        vault_path: Some("/home/user/vault".to_string()),
        audio_dir: "03_audio".to_string(),
        note_dir: "21_transcripts".to_string(),
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.vault_path.as_deref(), Some("/home/user/vault"));
    assert_eq!(loaded.audio_dir, "03_audio");
    assert_eq!(loaded.note_dir, "21_transcripts");
}

#[test]
fn test_load_from_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&temp_dir.path().join("none.json")).unwrap();
    assert!(loaded.vault_path.is_none());
    assert_eq!(loaded.audio_dir, "audio");
}

#[test]
fn test_load_from_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "   \n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(loaded.vault_path.is_none());
}

#[test]
fn test_load_from_corrupt_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json at all").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(loaded.vault_path.is_none());
    assert_eq!(loaded.note_dir, "notes");
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"vault_path": "/v"}"#).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.vault_path.as_deref(), Some("/v"));
    assert_eq!(loaded.audio_dir, "audio");
    assert_eq!(loaded.note_dir, "notes");
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("retime").join("config.json");

    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}
