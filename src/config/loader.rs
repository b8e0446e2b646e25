use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::session::{MAX_PHASE_MS, MAX_TICK_INTERVAL_MS};

const APP_DIR: &str = "innerflame";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/innerflame/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Default log file location, next to the config file.
    pub fn default_log_path() -> PathBuf {
        app_dir().join("innerflame.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one cycle count is allowed
    /// - The default cycle count is one of the allowed ones
    /// - Every duration and the tick interval are non-zero
    /// - The tick interval is at most `MAX_TICK_INTERVAL_MS`
    /// - No phase, including the longest hold, exceeds `MAX_PHASE_MS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let session = &self.session;
        if session.allowed_cycles.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one cycle count must be allowed".to_string(),
            });
        }

        if !session.allowed_cycles.contains(&session.default_cycles) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Default cycle count {} is not in allowed_cycles",
                    session.default_cycles
                ),
            });
        }

        let timing = &self.timing;
        let durations = [
            ("tick_interval_ms", timing.tick_interval_ms),
            ("breath_ms", timing.breath_ms),
            ("transition_ms", timing.transition_ms),
            ("hold_ms_per_cycle", timing.hold_ms_per_cycle),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("timing.{} must be greater than zero", name),
            });
        }

        if timing.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "timing.tick_interval_ms must be at most {}",
                    MAX_TICK_INTERVAL_MS
                ),
            });
        }

        let longest_hold = session
            .allowed_cycles
            .iter()
            .map(|count| u64::from(count.get()))
            .max()
            .unwrap_or(0)
            .saturating_mul(timing.hold_ms_per_cycle);
        let phases = [
            ("breath_ms", timing.breath_ms),
            ("transition_ms", timing.transition_ms),
            ("hold_ms_per_cycle", longest_hold),
        ];
        if let Some((name, _)) = phases.iter().find(|(_, value)| *value > MAX_PHASE_MS) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "timing.{} gives a phase longer than {} ms",
                    name, MAX_PHASE_MS
                ),
            });
        }

        Ok(())
    }

    /// Log file from config, or the default location.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}

fn app_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join(APP_DIR)
}
