//! Sources of human-side moves.

mod perfect;
mod terminal;

pub use perfect::PerfectPlayer;
pub use terminal::TerminalPlayer;

use anyhow::Result;
use tictactoe_engine::{GameSession, Move};

/// What the human side wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Play(Move),
    /// Abandon this game and start a new one.
    Reset,
    /// Stop playing.
    Quit,
}

/// Anything that can decide the human side's turn.
pub trait Player {
    /// Chooses the next action for the current session.
    fn next_input(&mut self, session: &GameSession) -> Result<Input>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
