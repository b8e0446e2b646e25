use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::session::{CycleCount, PhaseTimings};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cycle count selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Cycle count selected at startup (default: 10).
    #[serde(default = "default_cycles")]
    pub default_cycles: CycleCount,
    /// Cycle counts the user may pick from (default: 5, 10, 15).
    #[serde(default = "default_allowed_cycles")]
    pub allowed_cycles: Vec<CycleCount>,
}

/// Phase durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Countdown granularity (default: 100).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Each inhale and exhale of the loop (default: 2000).
    #[serde(default = "default_breath_ms")]
    pub breath_ms: u64,
    /// Transitional inhale and final exhale (default: 3000).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Hold length per cycle (default: 1000).
    #[serde(default = "default_hold_ms_per_cycle")]
    pub hold_ms_per_cycle: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `innerflame.log` next to the config file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_cycles() -> CycleCount {
    CycleCount::INTERMEDIATE
}

fn default_allowed_cycles() -> Vec<CycleCount> {
    vec![
        CycleCount::BEGINNER,
        CycleCount::INTERMEDIATE,
        CycleCount::ADVANCED,
    ]
}

fn default_tick_interval_ms() -> u64 {
    PhaseTimings::default().tick_interval_ms
}

fn default_breath_ms() -> u64 {
    PhaseTimings::default().breath_ms
}

fn default_transition_ms() -> u64 {
    PhaseTimings::default().transition_ms
}

fn default_hold_ms_per_cycle() -> u64 {
    PhaseTimings::default().hold_ms_per_cycle
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_cycles: default_cycles(),
            allowed_cycles: default_allowed_cycles(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            breath_ms: default_breath_ms(),
            transition_ms: default_transition_ms(),
            hold_ms_per_cycle: default_hold_ms_per_cycle(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl From<&TimingConfig> for PhaseTimings {
    fn from(timing: &TimingConfig) -> Self {
        Self {
            tick_interval_ms: timing.tick_interval_ms,
            breath_ms: timing.breath_ms,
            transition_ms: timing.transition_ms,
            hold_ms_per_cycle: timing.hold_ms_per_cycle,
        }
    }
}
