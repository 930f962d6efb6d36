//! Configuration management for gate.
//!
//! Loads configuration from ${GATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for gate configuration and data directories.
    //!
    //! GATE_HOME resolution order:
    //! 1. GATE_HOME environment variable (if set)
    //! 2. ~/.config/gate (default)

    use std::path::PathBuf;

    /// Returns the gate home directory.
    ///
    /// Checks GATE_HOME env var first, falls back to ~/.config/gate
    pub fn gate_home() -> PathBuf {
        if let Ok(home) = std::env::var("GATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("gate"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        gate_home().join("config.toml")
    }

    /// Returns the path to the persisted state file.
    pub fn state_path() -> PathBuf {
        gate_home().join("state.json")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        gate_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before whole-form validity is recomputed, in
    /// milliseconds.
    pub debounce_delay_ms: u64,
}

impl Config {
    const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 500;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Debounce quiet period as a `Duration`.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_delay_ms: Self::DEFAULT_DEBOUNCE_DELAY_MS,
        }
    }
}
