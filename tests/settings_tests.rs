//! Settings tests - TOML file layer and environment overrides

use std::path::PathBuf;

use blockfall::core::GameConfig;
use blockfall::settings::{self, SettingsError, ENV_HEIGHT, ENV_SEED};

fn write_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "blockfall-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = write_config("partial", "width = 12\ndifficulty = 0.25\n");
    let config = settings::load_with_env(Some(&path), |_| None).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.width, 12);
    assert_eq!(config.difficulty, 0.25);
    assert_eq!(config.height, GameConfig::default().height);
    assert_eq!(config.gravity_ms, GameConfig::default().gravity_ms);
}

#[test]
fn test_env_beats_file() {
    let path = write_config("layered", "height = 30\nseed = 5\n");
    let config = settings::load_with_env(Some(&path), |var| match var {
        ENV_SEED => Some("77".to_string()),
        _ => None,
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.height, 30);
    assert_eq!(config.seed, 77);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let path = write_config("malformed", "width = \"wide\"\n");
    let err = settings::load_with_env(Some(&path), |_| None).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, SettingsError::TomlParse(_)));
}

#[test]
fn test_invalid_merged_config_is_rejected() {
    let path = write_config("invalid", "width = 10\n");
    let err = settings::load_with_env(Some(&path), |var| {
        (var == ENV_HEIGHT).then(|| "2".to_string())
    })
    .unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, SettingsError::Invalid(_)));
    assert!(err.to_string().contains("height"));
}
