//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Config**: TOML play settings ([`PlayConfig`])
//! - **Players**: sources of human-side moves ([`Player`])
//! - **Orchestrator**: the render / read / reply loop ([`Orchestrator`])
//! - **Commands**: one-shot `analyze` and `selfplay`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
mod config;
mod orchestrator;
mod players;

pub use config::{ConfigError, PlayConfig, DEFAULT_CONFIG_FILE};
pub use orchestrator::{render_board, Orchestrator};
pub use players::{Input, PerfectPlayer, Player, TerminalPlayer};
