//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from a [`PreferenceStore`](crate::PreferenceStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference store at {} is not a JSON object of strings: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from loading a [`ThemeConfig`](crate::ThemeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors surfaced by the resolver and event loop.
///
/// Missing UI elements are not errors; operations that need them do nothing.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
