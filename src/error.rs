//! Error types for generating command streams.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a config or writing a stream.
///
/// None of these are retried. A failed write leaves whatever was already
/// written in place, so the artifact must not be fed to the engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config at {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("record count {count} is above the largest supported count {max}")]
    RecordCount { count: u64, max: u64 },
}
