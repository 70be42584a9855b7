//! Non-interactive commands.

use crate::config::PlayConfig;
use crate::orchestrator::{render_board, Orchestrator};
use crate::players::PerfectPlayer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tictactoe_engine::{rules, Board, Outcome, Pruning, Searcher, Side};
use tracing::{info, instrument};

/// Analysis output, also the JSON shape of `analyze --json`.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board as given.
    pub board: String,
    /// Classification of the position.
    pub status: tictactoe_engine::Status,
    /// Search result.
    pub report: tictactoe_engine::SearchReport,
    /// Label of the chosen cell.
    pub label: Option<&'static str>,
}

/// Searches `board` for `side` and writes the result.
#[instrument(skip(out))]
pub fn analyze(
    board: &str,
    side: Side,
    pruning: Pruning,
    json: bool,
    mut out: impl Write,
) -> Result<Analysis> {
    let parsed: Board = board.parse().context("Invalid board")?;
    let report = Searcher::new(pruning).analyze(&parsed, side);
    let analysis = Analysis {
        board: board.to_string(),
        status: rules::status(&parsed),
        label: report.best_move.map(|mv| mv.label()),
        report,
    };

    if json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
        return Ok(analysis);
    }

    writeln!(out, "{}\n", render_board(&parsed, true))?;
    match (report.best_move, report.score) {
        (Some(mv), Some(score)) => {
            writeln!(out, "Best move for {side}: {mv} {}", mv.label())?;
            writeln!(out, "Score: {score}")?;
        }
        _ => writeln!(out, "No move: position is {:?}", analysis.status)?,
    }
    writeln!(out, "Nodes searched: {} ({:?})", report.nodes, pruning)?;

    Ok(analysis)
}

/// Plays the engine against a perfect human side and reports the result.
#[instrument(skip(out))]
pub fn selfplay(mut out: impl Write) -> Result<Outcome> {
    let config = PlayConfig::default().with_engine_delay_ms(0);
    let player = Box::new(PerfectPlayer::new("Perfect O"));
    let mut orchestrator = Orchestrator::new(player, config, &mut out);

    let outcome = orchestrator
        .run()?
        .context("Self-play stopped before the game ended")?;
    info!(%outcome, "Self-play finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text() {
        let mut out = Vec::new();
        let analysis = analyze("XX./OO./...", Side::A, Pruning::AlphaBeta, false, &mut out).unwrap();
        assert_eq!(analysis.label, Some("Top-right"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Best move for X: (0, 2) Top-right"));
        assert!(text.contains("Score: 9"));
    }

    #[test]
    fn test_analyze_json() {
        let mut out = Vec::new();
        analyze("XOX/XOO/OX.", Side::A, Pruning::Disabled, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "InProgress");
        assert_eq!(value["report"]["best_move"]["row"], 2);
        assert_eq!(value["report"]["best_move"]["col"], 2);
        assert_eq!(value["report"]["score"], 0);
        assert_eq!(value["label"], "Bottom-right");
    }

    #[test]
    fn test_analyze_finished_board() {
        let mut out = Vec::new();
        let analysis = analyze("XXX/OO./...", Side::B, Pruning::AlphaBeta, false, &mut out).unwrap();
        assert_eq!(analysis.report.best_move, None);
        assert!(String::from_utf8(out).unwrap().contains("No move"));
    }

    #[test]
    fn test_analyze_bad_board() {
        let err = analyze("XX", Side::A, Pruning::AlphaBeta, false, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
    }

    #[test]
    fn test_selfplay_draws() {
        let mut out = Vec::new();
        assert_eq!(selfplay(&mut out).unwrap(), Outcome::Draw);
        assert!(String::from_utf8(out).unwrap().contains("It's a tie!"));
    }
}
