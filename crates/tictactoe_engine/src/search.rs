//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Side A maximizes and side B minimizes. [`best_move`] always searches as A.
//! Scores of terminal positions are adjusted by their depth so that a quicker
//! win for A scores higher (`10 - depth`) and a later win for B scores higher
//! for A (`-10 + depth`).

use crate::rules::{self, Score, A_WIN, B_WIN, NEUTRAL};
use crate::{Board, Move, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether the search may skip branches that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Visit every node. Used to check that pruning never changes the answer.
    Disabled,
}

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Side the search chose a move for.
    pub side: Side,
    /// Chosen move, `None` when the position is already decided.
    pub best_move: Option<Move>,
    /// Backed-up value of the chosen move.
    pub score: Option<Score>,
    /// Trial moves made during the search.
    pub nodes: u64,
}

/// Reusable search state.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pruning: Pruning,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with the given pruning mode.
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning, nodes: 0 }
    }

    /// Returns the pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Finds the best move for `side` on a snapshot of `board`.
    ///
    /// Moves are tried in row-major order and a later move replaces the
    /// current best only if it is strictly better, so the first of several
    /// equally valued moves wins. Returns an empty report for a board that is
    /// full or already won.
    #[instrument(skip(self, board), fields(pruning = ?self.pruning))]
    pub fn analyze(&mut self, board: &Board, side: Side) -> SearchReport {
        self.nodes = 0;

        if rules::status(board).is_terminal() {
            debug!("position already decided, no move to search");
            return SearchReport {
                side,
                best_move: None,
                score: None,
                nodes: 0,
            };
        }

        let mut board = board.clone();
        let (best_move, score) = match side {
            Side::A => self.root_max(&mut board),
            Side::B => self.root_min(&mut board),
        };

        debug!(nodes = self.nodes, ?best_move, ?score, "search complete");
        SearchReport {
            side,
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn root_max(&mut self, board: &mut Board) -> (Option<Move>, Option<Score>) {
        let mut best = Score::MIN;
        let mut best_move = None;
        let mut alpha = Score::MIN;
        let beta = Score::MAX;

        for mv in board.empty_cells() {
            board.place(mv, Side::A);
            self.nodes += 1;
            let value = self.minimize(board, 1, alpha, beta);
            board.undo_move(mv);

            if value > best {
                best = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
        }

        (best_move, best_move.map(|_| best))
    }

    fn root_min(&mut self, board: &mut Board) -> (Option<Move>, Option<Score>) {
        let mut best = Score::MAX;
        let mut best_move = None;
        let alpha = Score::MIN;
        let mut beta = Score::MAX;

        for mv in board.empty_cells() {
            board.place(mv, Side::B);
            self.nodes += 1;
            let value = self.maximize(board, 1, alpha, beta);
            board.undo_move(mv);

            if value < best {
                best = value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
        }

        (best_move, best_move.map(|_| best))
    }

    /// Score of a decided position seen `depth` plies below the root.
    fn terminal(board: &Board, depth: Score) -> Option<Score> {
        match rules::evaluate(board) {
            A_WIN => Some(A_WIN - depth),
            B_WIN => Some(B_WIN + depth),
            _ if board.is_full() => Some(NEUTRAL),
            _ => None,
        }
    }

    fn cutoff(&self, alpha: Score, beta: Score) -> bool {
        self.pruning == Pruning::AlphaBeta && beta <= alpha
    }

    fn maximize(&mut self, board: &mut Board, depth: Score, mut alpha: Score, beta: Score) -> Score {
        if let Some(score) = Self::terminal(board, depth) {
            return score;
        }

        let mut best = Score::MIN;
        for mv in board.empty_cells() {
            board.place(mv, Side::A);
            self.nodes += 1;
            let value = self.minimize(board, depth + 1, alpha, beta);
            board.undo_move(mv);

            best = best.max(value);
            alpha = alpha.max(best);
            if self.cutoff(alpha, beta) {
                break;
            }
        }
        best
    }

    fn minimize(&mut self, board: &mut Board, depth: Score, alpha: Score, mut beta: Score) -> Score {
        if let Some(score) = Self::terminal(board, depth) {
            return score;
        }

        let mut best = Score::MAX;
        for mv in board.empty_cells() {
            board.place(mv, Side::B);
            self.nodes += 1;
            let value = self.maximize(board, depth + 1, alpha, beta);
            board.undo_move(mv);

            best = best.min(value);
            beta = beta.min(best);
            if self.cutoff(alpha, beta) {
                break;
            }
        }
        best
    }
}

/// Best move for side A, the engine's side.
///
/// Returns `None` when the board is full or already won; callers check the
/// position with [`rules::status`] before treating the result as a move.
pub fn best_move(board: &Board) -> Option<Move> {
    best_move_for(board, Side::A)
}

/// Best move for an explicit side. Side B minimizes the same score.
pub fn best_move_for(board: &Board, side: Side) -> Option<Move> {
    Searcher::default().analyze(board, side).best_move
}
