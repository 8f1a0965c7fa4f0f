//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use svctrack_core::error::{Result, SvcTrackError};

pub use schema::{LimitsSection, ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SVCTRACK_CONFIG";
/// Path tried when `SVCTRACK_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "svctrack.yaml";

/// Resolve the config from the environment.
///
/// Missing file at the default path yields built-in defaults; a path given
/// explicitly must exist.
pub fn load() -> Result<ServerConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                Ok(ServerConfig::default())
            }
            Err(e) => Err(SvcTrackError::Config(format!(
                "read {DEFAULT_CONFIG_PATH} failed: {e}"
            ))),
        },
    }
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SvcTrackError::Config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| SvcTrackError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
