//! # Configuration Management Module
//!
//! TOML-backed configuration for GridHunt, with validation, defaults, and a
//! starter-file writer used by `gridhunt init`.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! grid_size = 5
//! treasures = ["coin", "gem", "chalice", "crown", "scepter", "orb"]
//!
//! [logging]
//! level = "info"
//! # file = "gridhunt.log"
//! ```
//!
//! Values are validated on load. The capacity rule (`treasures + 2` must fit on
//! the board) is enforced here because the placement allocator deliberately has
//! no failure path: it would loop forever on a saturated grid, so the board is
//! checked once, up front, before a session ever starts.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::game::DEFAULT_GRID_SIZE;

/// Game session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board. Coordinates run from 1 to `grid_size`.
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,
    /// Treasure names, hidden in this order.
    #[serde(default = "default_treasures")]
    pub treasures: Vec<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; appended to when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_grid_size() -> i32 {
    DEFAULT_GRID_SIZE
}

fn default_treasures() -> Vec<String> {
    ["coin", "gem", "chalice", "crown", "scepter", "orb"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: default_grid_size(),
            treasures: default_treasures(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a starter configuration file with default values.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config)?;
        fs::write(path, serialized).await?;
        Ok(())
    }

    /// Check every configured value. Also called after CLI overrides are
    /// applied, since `--grid-size` can shrink the board under a treasure list
    /// that no longer fits.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            return Err(anyhow!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            ));
        }
        if self.treasures.is_empty() {
            return Err(anyhow!("at least one treasure is required"));
        }
        if self.treasures.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow!("treasure names must not be empty"));
        }
        let capacity = (self.grid_size as usize) * (self.grid_size as usize);
        // Player start + monster + every treasure need distinct cells.
        if self.treasures.len() + 2 > capacity {
            return Err(anyhow!(
                "{} treasures plus player and monster do not fit on a {}x{} grid",
                self.treasures.len(),
                self.grid_size,
                self.grid_size
            ));
        }
        Ok(())
    }
}
