//! Error types for configuration handling and event delivery.
//!
//! None of these reach the host application through the reporting API: delivery
//! failures are logged and dropped at the fire-and-forget boundary. They exist so
//! the pieces underneath can use `?` and be tested directly.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint returned {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to start delivery runtime: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a 24-character hex board id")]
pub struct InvalidBoardId(pub String);
