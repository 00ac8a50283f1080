//! Shrugman - terminal guessing game.

#![warn(missing_docs)]

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shrugman::{AppConfig, Catalog, Cli, Command, LobbyController, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;

    // The log file comes from the config, so loading it logs to stderr.
    let early_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let config = AppConfig::load_with_early_logging(
        cli.config.as_deref(),
        &cwd,
        std::io::stderr,
        early_filter,
    )?;

    let command = cli.command.unwrap_or_default();
    let catalog = match &command {
        Command::Play { catalog, .. } | Command::Categories { catalog } => catalog.clone(),
    };
    let config = config.with_catalog_override(catalog);
    init_tracing(&config)?;
    info!(?config, "Config resolved");

    match command {
        Command::Play { category, .. } => play(&config, category.as_deref()),
        Command::Categories { .. } => list_categories(&config),
    }
}

/// Sends logs to the configured file so they never interfere with the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    Ok(Catalog::load(config.catalog().as_deref())?)
}

/// Runs the interactive game until the player quits.
#[instrument(skip(config))]
fn play(config: &AppConfig, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config)?;

    let preselected = match category {
        Some(name) => match catalog.find(name) {
            Some(index) => Some(index),
            None => bail!(
                "Unknown category '{}'. Available: {}",
                name,
                catalog.names().join(", ")
            ),
        },
        None => None,
    };

    info!(?preselected, "Starting Shrugman");
    let mut controller = LobbyController::new(catalog, preselected, StdRng::from_entropy())?;
    run_tui(&mut controller)?;

    println!("See you next time! 👋");
    Ok(())
}

/// Prints the categories of the active catalog.
#[instrument(skip(config))]
fn list_categories(config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    for (i, category) in catalog.categories().iter().enumerate() {
        println!(
            "{}. {} ({} titles)",
            i + 1,
            category.name(),
            category.titles().len()
        );
    }
    Ok(())
}
