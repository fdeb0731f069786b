//! # Configuration Management Module
//!
//! Settings for the tracker, stored as TOML in the platform config directory so
//! a deployment can point the reporter at a different backend without a rebuild.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-safe defaults**: a missing or corrupt file never stops the host application
//! 2. **Partial files**: any field left out of the file keeps its default
//! 3. **Platform compliance**: config lives where the OS expects it
//!
//! ## Configuration Storage Locations
//!
//! - **Windows**: `%APPDATA%\mentor-tracker\config.toml`
//! - **macOS**: `~/Library/Application Support/mentor-tracker/config.toml`
//! - **Linux**: `~/.config/mentor-tracker/config.toml`

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_LOAD_REPORT_DELAY_MS, DEFAULT_MENTOR_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    FRONTEND_LOG_PATH,
};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Tracker configuration
///
/// ## Field Descriptions
///
/// - `enabled`: master switch; when false every report is a no-op
/// - `api_url`: backend service URL the board id is extracted from
/// - `mentor_api_base_url`: where diagnostic events are posted
/// - `load_report_delay_ms`: wait before the startup report is sent
/// - `request_timeout_seconds`: per-request delivery timeout
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    pub enabled: bool,
    pub api_url: String,
    pub mentor_api_base_url: String,
    pub load_report_delay_ms: u64,
    pub request_timeout_seconds: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_API_URL.to_string(),
            mentor_api_base_url: DEFAULT_MENTOR_API_BASE_URL.to_string(),
            load_report_delay_ms: DEFAULT_LOAD_REPORT_DELAY_MS,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the platform config file, using defaults if it is
    /// missing or invalid.
    ///
    /// 1. Try to load and parse the existing config file
    /// 2. If the file doesn't exist, use the default configuration
    /// 3. If the file exists but is corrupt, log a warning and use defaults
    /// 4. If the config directory can't be determined, use defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("Failed to get config path: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults when the file is
    /// missing, unreadable or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, falling back to defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path, surfacing any failure
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to the platform config file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Platform-appropriate configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("mentor-tracker").join("config.toml"))
    }

    /// Full URL of the frontend runtime error collector
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.mentor_api_base_url.trim_end_matches('/'), FRONTEND_LOG_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn load_report_delay(&self) -> Duration {
        Duration::from_millis(self.load_report_delay_ms)
    }
}
