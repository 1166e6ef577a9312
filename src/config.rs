//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/i3nav/config.json`.  The top-level schema is split into
//! sections so the file can be extended later without breaking backward
//! compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "ipc": {
//!     "socket_path": "/run/user/1000/i3/ipc-socket.1234",
//!     "timeout_ms": 2000
//!   },
//!   "navigation": {
//!     "wrap": true,
//!     "tiled_relation": "border",
//!     "floating_relation": "center"
//!   }
//! }
//! ```

use crate::planar::Relation;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Connection to the window manager.
    #[serde(default)]
    pub ipc: IpcConfig,

    /// How focus moves.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IpcConfig {
    /// IPC socket to use instead of discovering one.
    pub socket_path: Option<PathBuf>,
    /// How long to wait for the window manager on each read or write (ms).
    /// `0` waits forever.
    pub timeout_ms: u64,
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            timeout_ms: 2000,
        }
    }
}

impl IpcConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Wrap around at the edges even without `--wrap`.
    pub wrap: bool,
    /// Relation used to move between tiled windows.
    pub tiled_relation: Relation,
    /// Relation used to move between floating windows.
    pub floating_relation: Relation,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            tiled_relation: Relation::Border,
            floating_relation: Relation::Center,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file is `Ok(None)` rather than
    /// an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::metadata(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            _ => Self::load(path).map(Some),
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
