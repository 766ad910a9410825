//! Configuration for study tracker.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Study goals.
    #[serde(default)]
    pub goals: GoalsConfig,
    /// Session timer settings.
    #[serde(default)]
    pub timer: TimerConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goals: GoalsConfig::default(),
            timer: TimerConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default path.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save configuration to default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "study-tracker")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Get database path.
    pub fn db_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "study-tracker")
            .map(|d| d.data_dir().join("study.db"))
    }
}

/// Study goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Weekly hours target used by goal achievements.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours_target: f64,
}

fn default_weekly_hours() -> f64 {
    14.0
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            weekly_hours_target: 14.0,
        }
    }
}

/// Session timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Session length used for subjects without their own target.
    #[serde(default = "default_session_mins")]
    pub default_session_mins: u32,
}

fn default_session_mins() -> u32 {
    25
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_session_mins: 25,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// First day of week.
    #[serde(default)]
    pub week_start: WeekStart,
    /// Date format string.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            date_format: default_date_format(),
        }
    }
}

/// First day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.goals.weekly_hours_target, 14.0);
        assert_eq!(config.timer.default_session_mins, 25);
        assert_eq!(config.display.week_start, WeekStart::Monday);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[goals]\nweekly_hours_target = 10.0\n").unwrap();
        assert_eq!(config.goals.weekly_hours_target, 10.0);
        assert_eq!(config.timer.default_session_mins, 25);
    }
}
