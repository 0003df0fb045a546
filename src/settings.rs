//! Layered loading of [`GameConfig`]
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file, then
//! `BLOCKFALL_*` environment variables. The merged result is validated before
//! it is returned.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::core::{ConfigError, GameConfig};

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_GRAVITY_MS: &str = "BLOCKFALL_GRAVITY_MS";
pub const ENV_ROW_CLEAR_PAUSE_MS: &str = "BLOCKFALL_ROW_CLEAR_PAUSE_MS";
pub const ENV_DIFFICULTY: &str = "BLOCKFALL_DIFFICULTY";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";

/// Load from `path` (if any) and the process environment.
pub fn load(path: Option<&Path>) -> Result<GameConfig, SettingsError> {
    load_with_env(path, |var| std::env::var(var).ok())
}

/// Same as [`load`], reading variables through `env`.
pub fn load_with_env(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<GameConfig, SettingsError> {
    let mut config = match path {
        Some(path) => from_file(path)?,
        None => GameConfig::default(),
    };

    override_from_env(&mut config.width, ENV_WIDTH, &env)?;
    override_from_env(&mut config.height, ENV_HEIGHT, &env)?;
    override_from_env(&mut config.gravity_ms, ENV_GRAVITY_MS, &env)?;
    override_from_env(&mut config.row_clear_pause_ms, ENV_ROW_CLEAR_PAUSE_MS, &env)?;
    override_from_env(&mut config.difficulty, ENV_DIFFICULTY, &env)?;
    override_from_env(&mut config.seed, ENV_SEED, &env)?;

    config.validate()?;
    debug!(?config, "settings loaded");
    Ok(config)
}

/// Parse a TOML file; keys it leaves out keep their defaults.
pub fn from_file(path: &Path) -> Result<GameConfig, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

fn override_from_env<T: FromStr>(
    slot: &mut T,
    var: &'static str,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<(), SettingsError> {
    let Some(raw) = env(var) else {
        return Ok(());
    };
    *slot = raw
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidEnv { var, value: raw })?;
    Ok(())
}
