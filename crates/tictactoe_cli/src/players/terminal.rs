//! Human player reading moves from a line-oriented terminal.

use super::{Input, Player};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameSession, Move};
use tracing::debug;

/// Human player typing moves, one per line.
///
/// Unreadable or occupied cells are reported and asked for again.
pub struct TerminalPlayer<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    /// Creates a player reading from `input` and prompting on `prompt`.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn next_input(&mut self, session: &GameSession) -> Result<Input> {
        loop {
            write!(self.prompt, "{} > ", self.name)?;
            self.prompt.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Ok(Input::Quit);
            };

            match line.trim().to_lowercase().as_str() {
                "" => continue,
                "q" | "quit" | "exit" => return Ok(Input::Quit),
                "r" | "reset" | "new" => return Ok(Input::Reset),
                _ => {}
            }

            match Move::parse(&line) {
                Ok(_) if session.is_over() => {
                    writeln!(self.prompt, "The game is over. Type \"reset\" or \"quit\".")?;
                }
                Ok(mv) if session.is_cell_disabled(mv) => {
                    writeln!(self.prompt, "{} is taken, pick another square.", mv.label())?;
                }
                Ok(mv) => return Ok(Input::Play(mv)),
                Err(e) => {
                    writeln!(self.prompt, "{e}. Try \"row col\", 0-8, or a name like \"center\".")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(script: &str) -> TerminalPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPlayer::new("You", Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_move() {
        let mut p = player("1 1\n");
        let input = p.next_input(&GameSession::new()).unwrap();
        assert_eq!(input, Input::Play(Move::new(1, 1).unwrap()));
    }

    #[test]
    fn test_reprompts_after_garbage() {
        let mut p = player("hello\n\ncenter\n");
        let input = p.next_input(&GameSession::new()).unwrap();
        assert_eq!(input, Input::Play(Move::new(1, 1).unwrap()));
        let shown = String::from_utf8(p.prompt.clone()).unwrap();
        assert!(shown.contains("Cannot read a move"));
    }

    #[test]
    fn test_rejects_taken_square() {
        let mut session = GameSession::new();
        session.submit_human_move(Move::new(0, 0).unwrap()).unwrap();

        let mut p = player("0 0\n2 2\n");
        let input = p.next_input(&session).unwrap();
        // The engine may have taken (2, 2); either way (0, 0) was refused.
        let shown = String::from_utf8(p.prompt.clone()).unwrap();
        assert!(shown.contains("Top-left is taken"));
        if let Input::Play(mv) = input {
            assert!(!session.is_cell_disabled(mv));
        }
    }

    #[test]
    fn test_commands_and_eof() {
        assert_eq!(player("quit\n").next_input(&GameSession::new()).unwrap(), Input::Quit);
        assert_eq!(player("r\n").next_input(&GameSession::new()).unwrap(), Input::Reset);
        assert_eq!(player("").next_input(&GameSession::new()).unwrap(), Input::Quit);
    }
}
