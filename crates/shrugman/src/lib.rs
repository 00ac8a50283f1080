//! Shrugman terminal game.
//!
//! Wraps the [`strictly_shrugman`] engine with a title catalog, TOML
//! configuration and a ratatui front end.
//!
//! # Architecture
//!
//! - **Catalog**: categories of titles, built-in or loaded from TOML
//! - **Config**: optional `shrugman.toml` with the catalog and logging settings
//! - **Lobby**: screen state machine (category select, in game, round over)
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use shrugman::{Catalog, LobbyController, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut controller = LobbyController::new(Catalog::builtin(), None, StdRng::from_entropy())?;
//! run_tui(&mut controller)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod cli;
mod config;
mod lobby;
pub mod shrug;

// Crate-level exports - Catalog
pub use catalog::{Catalog, CatalogError, Category};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Lobby
pub use lobby::{
    ActiveScreen, CategorySelectScreen, InGameScreen, LobbyController, Notice, Round,
    RoundOverScreen, Screen, ScreenTransition, run_tui,
};
