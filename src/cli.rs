//! Command-line flags. Anything set here overrides the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::session::CycleCount;

#[derive(Debug, Parser)]
#[command(name = "innerflame", version, about = "Guided Tummo breathing timer")]
pub struct Cli {
    /// Cycles before the holds (must be one of the allowed counts).
    #[arg(short, long)]
    pub cycles: Option<u32>,

    /// Config file path (default: <config dir>/innerflame/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print phases line by line instead of drawing the TUI.
    #[arg(long)]
    pub plain: bool,

    /// Log filter directive, e.g. "debug" or "innerflame=trace".
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log file path (TUI mode only; plain mode logs to stderr).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold flag overrides into `config`. Validation happens afterwards.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), String> {
        if let Some(cycles) = self.cycles {
            config.session.default_cycles = CycleCount::new(cycles)
                .ok_or_else(|| "--cycles must be greater than zero".to_string())?;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(())
    }
}
