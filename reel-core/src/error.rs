//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the Movie Browser
//!
//! Defines the error enum (`AppError`) used across the application. Each
//! variant carries enough context for diagnostics, and all fallible library
//! code returns `Result<T, AppError>`. Nothing here is fatal: API failures
//! are logged at the call site and the UI keeps its last good state.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all movie browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Network-level failure: unreachable host, timeout, broken connection.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-200 status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    /// The body arrived but did not decode into the expected shape.
    #[error("Malformed response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// True for every failure an API call can produce: transport, status,
    /// or decode. The list and detail screens treat all three identically.
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_) | AppError::Http { .. } | AppError::Decode { .. }
        )
    }
}
