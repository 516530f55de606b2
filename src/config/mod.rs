//! Configuration for Dictator
//!
//! A single TOML file at `~/.dictator/config.toml` holding user settings.
//! Loading falls back to defaults when the file is absent; saving is
//! atomic and lock-guarded so a concurrent scheduler invocation cannot
//! corrupt it.

mod io;
mod settings;

pub use settings::Settings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the global data directory path (~/.dictator/)
    pub fn global_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dictator")
    }

    /// Get the global config file path (~/.dictator/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_dir().join("config.toml")
    }

    /// Get the default database path (~/.dictator/dictator.db)
    pub fn global_db_path() -> PathBuf {
        Self::global_dir().join("dictator.db")
    }
}
