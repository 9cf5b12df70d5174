mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drivescout_core::{load_config, validate_config, Config, ConfigError};

use commands::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_path = std::env::var("DRIVESCOUT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("drivescout.toml"));
    let config = read_config(&config_path)?;
    validate_config(&config).context("Configuration validation failed")?;

    match cli.command {
        Command::Queries(args) => commands::print_queries(&config, &args),
        Command::Rank(args) => commands::print_ranked(&config, &args),
    }
}

/// Load the config file, falling back to defaults when it does not exist.
fn read_config(path: &Path) -> Result<Config> {
    match load_config(path) {
        Ok(config) => {
            info!("Configuration loaded from {:?}", path);
            Ok(config)
        }
        Err(ConfigError::FileNotFound(_)) => {
            info!("No configuration at {:?}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load config from {:?}", path)),
    }
}
