//! # Tracker Configuration
//!
//! Settings are read from a single YAML file. Every key is optional and a
//! missing file yields the defaults.
//!
//! ## YAML Format
//!
//! ```yaml
//! week_start: sunday        # or monday
//! log_level: info
//! load_sample_data: true
//! upcoming_window_days: 30
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::calendar::WeekStart;

/// Longest look-ahead accepted for the next-appointment card
pub const MAX_UPCOMING_WINDOW_DAYS: u32 = 366;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// First column of the month grid and week strip
    pub week_start: WeekStart,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
    /// Seed the demo children and hospitals on startup
    pub load_sample_data: bool,
    /// How many days ahead the home summary looks for an appointment
    pub upcoming_window_days: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            log_level: "info".to_string(),
            load_sample_data: true,
            upcoming_window_days: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}', expected one of error, warn, info, debug, trace")]
    UnknownLogLevel(String),
    #[error("upcoming_window_days must be between 1 and {max}, got {0}", max = MAX_UPCOMING_WINDOW_DAYS)]
    InvalidUpcomingWindow(u32),
}

impl TrackerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: TrackerConfig = serde_yaml::from_str(yaml).context("Failed to parse tracker config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when no path is given or the file does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config path given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml_str(&yaml_content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the config, replacing any existing file in one rename
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, self.to_yaml()?)?;
        fs::rename(&temp_path, path)?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::UnknownLogLevel(self.log_level.clone()));
        }
        if self.upcoming_window_days == 0 || self.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS {
            return Err(ConfigError::InvalidUpcomingWindow(self.upcoming_window_days));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.log_level, "info");
        assert!(config.load_sample_data);
        assert_eq!(config.upcoming_window_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = TrackerConfig::from_yaml_str("week_start: monday\n").unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.upcoming_window_days, 30);
        assert!(config.load_sample_data);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(TrackerConfig::from_yaml_str("week_start: tuesday\n").is_err());

        let err = TrackerConfig::from_yaml_str("log_level: loud\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownLogLevel("loud".to_string()))
        );

        let err = TrackerConfig::from_yaml_str("upcoming_window_days: 0\n").unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::InvalidUpcomingWindow(0)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig::load(Some(&temp_dir.path().join("missing.yaml"))).unwrap();
        assert_eq!(config, TrackerConfig::default());

        assert_eq!(TrackerConfig::load(None).unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracker.yaml");

        let config = TrackerConfig {
            week_start: WeekStart::Monday,
            log_level: "debug".to_string(),
            load_sample_data: false,
            upcoming_window_days: 14,
        };
        config.save(&path).unwrap();

        assert!(!path.with_extension("tmp").exists());
        assert_eq!(TrackerConfig::load(Some(&path)).unwrap(), config);
    }
}
