//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots
//! according to tic-tac-toe rules. Rules never touch game history or
//! turn order, so they compose into contracts and invariants without
//! dragging the state machine along.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, WINNING_LINES};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board snapshot to an outcome.
///
/// Total over all possible square assignments: a completed line wins,
/// a full board with no line is a draw, anything else is ongoing. When
/// an unreachable board carries more than one completed line, the first
/// line in [`WINNING_LINES`] order decides the winner.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = win::check_winner(board) {
        Outcome::Winner(winner)
    } else if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
