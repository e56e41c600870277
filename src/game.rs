//! History-based game engine for tic-tac-toe.
//!
//! The engine stores every board the game has passed through and a pointer
//! to the snapshot currently on display. Moves always act on the pointed-at
//! snapshot, so rewinding and branching fall out of two operations:
//! [`Game::apply_move`] and [`Game::jump_to`].

use crate::action::Move;
use crate::contracts::{self, Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game with a replayable move history.
///
/// State is two fields: the list of board snapshots from the empty opening
/// board onward, and a pointer selecting the current one. Everything else a
/// caller can observe - whose turn it is, the outcome, the move list - is
/// derived from those two fields on demand:
///
/// - turn order follows pointer parity (even means X moves next),
/// - the outcome comes from re-evaluating the pointed-at snapshot,
/// - moves come from diffing consecutive snapshots.
///
/// Because nothing derived is stored, no stored field can go stale when the
/// pointer jumps backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots in play order. Index 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the current snapshot in `history`.
    pub(crate) pointer: usize,
}

/// Error returned when a jump targets a snapshot that does not exist.
///
/// Unlike a move against a finished game or an occupied square, an
/// out-of-range step cannot come from ordinary play - only from a caller
/// holding a stale index - so it surfaces as an error instead of a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step is outside the recorded history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// The step that was requested.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

impl Game {
    /// Creates a new game holding only the empty opening board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            pointer: 0,
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// The mark belongs to whichever player is due at the current snapshot;
    /// callers choose where, never who. If the pointer sits in the middle of
    /// the history, the snapshots after it are discarded first, so the move
    /// starts a new branch and the abandoned line is unreachable afterwards.
    ///
    /// A move against a finished game or an occupied square is ignored:
    /// the state is left untouched and the reason is logged at debug level.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn apply_move(&mut self, position: Position) {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "ignoring move");
            return;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut next = self.board().clone();
        next.set(position, Square::Occupied(self.to_move()));

        let discarded = self.history.len() - (self.pointer + 1);
        if discarded > 0 {
            debug!(discarded, "dropping abandoned snapshots before branching");
        }
        self.history.truncate(self.pointer + 1);
        self.history.push(next);
        self.pointer = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("apply_move postcondition failed: {descriptions}");
        }
    }

    /// Moves the pointer to the given step without touching the history.
    ///
    /// Step 0 is the empty opening board; step `n` is the board after the
    /// n-th move. Jumping backwards keeps the later snapshots in place -
    /// they are only discarded if a move is applied from the earlier step.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` has no snapshot.
    /// The game is left unchanged in that case.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "rejecting jump outside recorded history");
            return Err(JumpError::StepOutOfRange { step, len });
        }
        self.pointer = step;
        contracts::assert_invariants(self);
        Ok(())
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.pointer]
    }

    /// Evaluates the current board to an outcome.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Returns the player who moves next at the current step.
    ///
    /// Derived from pointer parity: X moves from even steps, O from odd.
    /// After a jump this is the player who was due at that point of the game.
    pub fn to_move(&self) -> Player {
        if self.pointer % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns true if the current board has a winner or is a draw.
    pub fn is_over(&self) -> bool {
        !self.outcome().is_ongoing()
    }

    /// Returns the index of the current step.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Returns all recorded board snapshots in play order.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Reconstructs the move that produced the snapshot at `step`.
    ///
    /// The move is derived by diffing the snapshot against its predecessor,
    /// so it is always consistent with the boards on either side. Returns
    /// `None` for step 0 (no move produced the opening board) and for steps
    /// outside the history.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 || step >= self.history.len() {
            return None;
        }
        let before = &self.history[step - 1];
        let after = &self.history[step];
        before
            .squares()
            .iter()
            .zip(after.squares().iter())
            .enumerate()
            .find_map(|(index, (b, a))| match (b, a) {
                (Square::Empty, Square::Occupied(player)) => {
                    Position::from_index(index).map(|position| Move::new(*player, position))
                }
                _ => None,
            })
    }

    /// Returns a human-readable status line for the current step.
    pub fn status_string(&self) -> String {
        match self.outcome() {
            Outcome::Ongoing => format!("In progress. Player {:?} to move.", self.to_move()),
            Outcome::Winner(player) => format!("Game over. Player {:?} wins!", player),
            Outcome::Draw => "Game over. Draw!".to_string(),
        }
    }

    /// Captures the current step as a detached, render-ready snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
