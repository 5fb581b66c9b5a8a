//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings for the movie browser. Loads and saves
//! settings as TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Base URL of the public movie API.
pub const DEFAULT_API_BASE: &str = "https://freetestapi.com/api/v1";

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the movie REST API (`{api_base}/movies`, `{api_base}/movies/{id}`).
    pub api_base: String,
    /// Quiescence interval before a search keystroke commits as a query.
    #[serde(with = "humantime_serde")]
    pub debounce: Duration,
    /// How long the splash screen lingers before the list appears.
    #[serde(with = "humantime_serde")]
    pub splash_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            debounce: Duration::from_millis(500),
            splash_duration: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns defaults when no file exists.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/reel/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::config_path()?;
        if path.exists() {
            let text: String =
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| AppError::ConfigIo {
                        path: path.clone(),
                        source,
                    })?;
            let cfg: Config = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path: PathBuf = Self::config_path()?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let toml_str: String =
            toml::to_string_pretty(self).map_err(|e| AppError::Other(e.to_string()))?;
        tokio::fs::write(&path, toml_str).await?;
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs: ProjectDirs = ProjectDirs::from("dev", "reel", "reel")
            .ok_or_else(|| AppError::Other("could not determine config directory".to_string()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.debounce, Duration::from_millis(500));
        assert_eq!(cfg.splash_duration, Duration::from_secs(3));
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let cfg: Config = toml::from_str("debounce = \"250ms\"").expect("valid toml");
        assert_eq!(cfg.debounce, Duration::from_millis(250));
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }
}
