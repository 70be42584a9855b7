//! Game loop between a human-side player and the engine.

use crate::config::PlayConfig;
use crate::players::{Input, Player};
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tictactoe_engine::{Board, GameSession, Outcome, SessionError};
use tracing::{debug, info, warn};

/// Drives a [`GameSession`] and renders it to `out`.
pub struct Orchestrator<W> {
    session: GameSession,
    player: Box<dyn Player>,
    config: PlayConfig,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator with a fresh session.
    pub fn new(player: Box<dyn Player>, config: PlayConfig, out: W) -> Self {
        Self {
            session: GameSession::new(),
            player,
            config,
            out,
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays one game. Returns `None` if the player quit first.
    ///
    /// A reset request discards the current game and starts over.
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        info!(player = %self.player.name(), "Starting game orchestration");
        self.render()?;

        loop {
            if let Some(outcome) = self.session.outcome() {
                writeln!(self.out, "{}", self.session.status_line())?;
                return Ok(Some(outcome));
            }

            debug!(player = %self.player.name(), "Waiting for move");
            match self.player.next_input(&self.session)? {
                Input::Quit => {
                    info!("Player quit");
                    return Ok(None);
                }
                Input::Reset => {
                    self.session = self.session.reset();
                    writeln!(self.out, "New game.")?;
                    self.render()?;
                }
                Input::Play(mv) => self.play(mv)?,
            }
        }
    }

    /// After a finished game, waits for a reset or quit.
    ///
    /// Returns true when a new game has been started.
    pub fn await_rematch(&mut self) -> Result<bool> {
        loop {
            match self.player.next_input(&self.session)? {
                Input::Quit => return Ok(false),
                Input::Reset => {
                    self.session = self.session.reset();
                    writeln!(self.out, "New game.")?;
                    return Ok(true);
                }
                Input::Play(_) => writeln!(self.out, "{}", SessionError::GameOver)?,
            }
        }
    }

    fn play(&mut self, mv: tictactoe_engine::Move) -> Result<()> {
        let turn = match self.session.submit_human_move(mv) {
            Ok(turn) => turn,
            Err(e @ (SessionError::InvalidMove(_) | SessionError::NotYourTurn(_))) => {
                warn!(error = %e, "Move rejected");
                writeln!(self.out, "{e}")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(self.out, "{} played {}.", self.player.name(), mv.label())?;

        if let Some(reply) = turn.engine {
            let delay = *self.config.engine_delay_ms();
            if delay > 0 {
                writeln!(self.out, "Engine is thinking...")?;
                self.out.flush()?;
                std::thread::sleep(Duration::from_millis(delay));
            }
            writeln!(self.out, "Engine played {}.", reply.label())?;
        }

        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let board = render_board(self.session.board(), *self.config.show_coordinates());
        writeln!(self.out, "\n{board}\n")?;
        if !self.session.is_over() {
            writeln!(self.out, "{}", self.session.status_line())?;
        }
        Ok(())
    }
}

/// Renders a board, optionally with row and column guides.
pub fn render_board(board: &Board, show_coordinates: bool) -> String {
    if !show_coordinates {
        return board.to_string();
    }

    let mut out = String::from("    0   1   2\n");
    for (row, line) in board.to_string().lines().enumerate() {
        if row % 2 == 0 {
            out.push_str(&format!("{}  {}\n", row / 2, line));
        } else {
            out.push_str(&format!("   {}\n", line));
        }
    }
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_coordinates() {
        let board: Board = "X../.O./...".parse().unwrap();
        let shown = render_board(&board, true);
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "    0   1   2");
        assert_eq!(lines[1], "0   X | . | . ");
        assert_eq!(lines[2], "   ---+---+---");
    }

    #[test]
    fn test_render_plain() {
        let board = Board::new();
        assert_eq!(render_board(&board, false), board.to_string());
    }
}
