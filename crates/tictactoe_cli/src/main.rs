//! Tic-tac-toe - play against a perfect engine in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufReader};
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::{commands, Orchestrator, PlayConfig, TerminalPlayer};
use tictactoe_engine::Pruning;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, delay_ms } => run_play(&config, delay_ms),
        Command::Analyze {
            board,
            side,
            no_pruning,
            json,
        } => {
            let pruning = if no_pruning {
                Pruning::Disabled
            } else {
                Pruning::AlphaBeta
            };
            commands::analyze(&board, side.into(), pruning, json, io::stdout().lock())?;
            Ok(())
        }
        Command::Selfplay => {
            commands::selfplay(io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(fields(config_path = %config_path.display()))]
fn run_play(config_path: &std::path::Path, delay_ms: Option<u64>) -> Result<()> {
    let mut config = PlayConfig::load_or_default(config_path)?;
    if let Some(delay) = delay_ms {
        info!(delay, "Overriding engine delay");
        config = config.with_engine_delay_ms(delay);
    }

    println!("You are O and move first. Enter \"row col\" (0-2), a square 0-8, or a name like \"center\".");
    println!("Type \"reset\" for a new game or \"quit\" to leave.");

    let player = TerminalPlayer::new(
        config.player_name().clone(),
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    let mut orchestrator = Orchestrator::new(Box::new(player), config, io::stdout());

    while orchestrator.run()?.is_some() {
        println!("Type \"reset\" to play again or \"quit\" to leave.");
        if !orchestrator.await_rematch()? {
            break;
        }
    }

    info!("Leaving");
    Ok(())
}
