use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;
use vacancy_scout::cli::{handle_command, Cli};
use vacancy_scout::core::{ConfigManager, FsOps};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load()?.with_overrides(cli.store.clone(), cli.data_dir.clone());
    init_logging(&config.environment.log_file)?;

    info!("Starting vacancy-scout");
    info!("Data directory: {}", config.environment.data_path.display());
    info!("API: {}", config.service.api_url);

    handle_command(cli, config).await
}

/// JSON logs go to a file so they never mix with the console output
fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        FsOps::ensure_dir_exists(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}
