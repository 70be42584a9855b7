//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::Side;

/// Tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect alpha-beta engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game (you are O and move first)
    Play {
        /// Path to the play configuration file
        #[arg(short, long, default_value = crate::DEFAULT_CONFIG_FILE)]
        config: std::path::PathBuf,

        /// Override the pause before the engine's reply
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the best move for a position, e.g. "XX./OO./..."
    Analyze {
        /// Board in row notation: X/A, O/B, '.' for empty, '/' between rows
        board: String,

        /// Side to find a move for
        #[arg(long, value_enum, default_value = "a")]
        side: SideArg,

        /// Visit every node instead of pruning
        #[arg(long)]
        no_pruning: bool,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play a perfect opponent
    Selfplay,
}

/// Side selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// Maximizing side (X)
    A,
    /// Minimizing side (O)
    B,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::A => Side::A,
            SideArg::B => Side::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["tictactoe", "analyze", "XX./OO./...", "--side", "b", "--json"]);
        match cli.command {
            Command::Analyze { board, side, no_pruning, json } => {
                assert_eq!(board, "XX./OO./...");
                assert_eq!(Side::from(side), Side::B);
                assert!(!no_pruning);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["tictactoe", "play"]);
        match cli.command {
            Command::Play { config, delay_ms } => {
                assert_eq!(config, std::path::PathBuf::from("tictactoe.toml"));
                assert_eq!(delay_ms, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
