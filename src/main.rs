use anyhow::{Context, Result};
use clap::Parser;
use innerflame::cli::Cli;
use innerflame::config::Config;
use innerflame::logging::{init_tracing, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    cli.apply_to(&mut config).map_err(anyhow::Error::msg)?;
    config.validate().context("invalid configuration")?;

    if cli.plain {
        let _log_guard = init_tracing(&config.logging.level, LogTarget::Stderr)
            .context("initialising logging")?;
        tracing::info!(cycles = config.session.default_cycles.get(), "Starting plain session");
        innerflame::plain::run(&config).await?;
    } else {
        let log_path = config.log_path();
        let _log_guard = init_tracing(&config.logging.level, LogTarget::File(&log_path))
            .with_context(|| format!("opening log file {}", log_path.display()))?;
        innerflame::ui::runtime::run(&config)
            .await
            .context("running terminal UI")?;
    }
    Ok(())
}
