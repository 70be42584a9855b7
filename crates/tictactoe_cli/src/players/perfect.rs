//! Player that answers with the engine's own search.

use super::{Input, Player};
use anyhow::Result;
use tictactoe_engine::{best_move_for, GameSession};
use tracing::debug;

/// Plays the human side perfectly. Used for engine self-play.
pub struct PerfectPlayer {
    name: String,
}

impl PerfectPlayer {
    /// Creates a new perfect player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for PerfectPlayer {
    fn next_input(&mut self, session: &GameSession) -> Result<Input> {
        match best_move_for(session.board(), session.human()) {
            Some(mv) => {
                debug!(player = %self.name, position = %mv, "Perfect player chose move");
                Ok(Input::Play(mv))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
