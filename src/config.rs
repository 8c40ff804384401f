//! Configuration: defaults, an optional user config file, and environment
//! overrides, applied in that order (later wins). CLI flags override all of
//! these in `main`.
//!
//! ## Environment variables
//! - `TASKFLOW_CONFIG_PATH` - explicit config file (overrides discovery)
//! - `TASKFLOW_DB_PATH` - database path

use crate::error::Result;
use crate::types::{Category, Priority};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG_PATH: &str = "TASKFLOW_CONFIG_PATH";
/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "TASKFLOW_DB_PATH";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the task database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Priority assigned to new tasks when none is given on the command line.
    #[serde(default)]
    pub default_priority: Priority,

    /// Category assigned to new tasks when none is given on the command line.
    #[serde(default)]
    pub default_category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            default_priority: Priority::default(),
            default_category: Category::default(),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("taskflow").join("tasks.db"))
        .unwrap_or_else(|| PathBuf::from("taskflow.db"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly requested file (CLI flag or `TASKFLOW_CONFIG_PATH`) that
    /// cannot be read or parsed is a hard error. A *discovered* user file
    /// that is malformed only warns and falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::discovered_path() {
                Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|err| {
                    warn!(path = %path.display(), error = %err, "ignoring malformed config file");
                    Self::default()
                }),
                _ => Self::default(),
            },
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// The user config file location: `<config dir>/taskflow/config.yaml`.
    pub fn discovered_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskflow").join("config.yaml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_path) = std::env::var(ENV_DB_PATH) {
            self.db_path = PathBuf::from(db_path);
        }
    }
}
