//! # GridHunt - a turn-based treasure hunt for the terminal
//!
//! GridHunt drops the player onto a small square grid with a handful of hidden
//! treasures and one hidden, stationary monster. Single-letter commands move the
//! player one cell at a time; the only sensory input is a growl warning whenever
//! the monster is in an adjacent cell. Find every treasure before stumbling onto
//! the monster.
//!
//! ## Features
//!
//! - **Compact Command UI**: Single-letter moves (`L`/`R`/`U`/`D`) plus `Q` to quit,
//!   case-insensitive, with friendly rejections for anything else.
//! - **Pure Game Core**: The turn logic is a plain function from a raw command and
//!   a mutable [`game::GameState`] to a continue/stop flag plus message strings -
//!   no I/O inside the core, which keeps it fully unit-testable.
//! - **Random Placement**: Monster and treasures land on distinct random cells,
//!   never on the player's starting square.
//! - **Configurable Session**: Grid size and treasure names come from a TOML
//!   config file, with CLI overrides at startup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gridhunt::config::Config;
//! use gridhunt::console;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     console::run(&config.game, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Core game model: grid points, placement, state, turn processing
//! - [`console`] - The interactive stdin/stdout loop driving the core
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log sanitization helpers for raw user input

pub mod config;
pub mod console;
pub mod game;
pub mod logutil;
