//! Command-line interface for shrugman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shrugman - guess the title before the shrug completes
#[derive(Parser, Debug)]
#[command(name = "shrugman")]
#[command(about = "Guess the title letter by letter before ¯\\_(ツ)_/¯ completes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./shrugman.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play rounds in the terminal UI
    Play {
        /// Category to play every round with (skips the category menu)
        #[arg(short, long)]
        category: Option<String>,

        /// TOML catalog replacing the built-in titles
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the available categories
    Categories {
        /// TOML catalog replacing the built-in titles
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            category: None,
            catalog: None,
        }
    }
}
