//! Serializable view state for rendering one step of a game.

use crate::game::Game;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};

/// Everything a view needs to render the current step.
///
/// A snapshot is a detached value: it carries copies of the derived fields
/// the machine never stores, so it stays valid (and serializable) while the
/// machine moves on. Views act back on the machine only through
/// [`Game::apply_move`] and [`Game::jump_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board at the current step.
    pub board: Board,
    /// Outcome of the current board.
    pub outcome: Outcome,
    /// Index of the current step in the history.
    pub step: usize,
    /// Number of recorded snapshots, counting the empty opening board.
    pub history_len: usize,
    /// Player to move next, while the game is still in play.
    pub to_move: Option<Player>,
    /// The completed line when there is a winner, for highlighting.
    pub winning_line: Option<[Position; 3]>,
    /// Human-readable status line.
    pub status: String,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        let board = game.board().clone();
        let outcome = game.outcome();
        Self {
            outcome,
            step: game.pointer(),
            history_len: game.history().len(),
            to_move: outcome.is_ongoing().then(|| game.to_move()),
            winning_line: rules::winning_line(&board),
            status: game.status_string(),
            board,
        }
    }
}

impl Snapshot {
    /// Returns the winner, if the step shows a finished, won game.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns true if the step shows a finished game.
    pub fn is_over(&self) -> bool {
        !self.outcome.is_ongoing()
    }
}
