//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::IgnoredMove;
use crate::game::Game;
use crate::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use crate::position::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Why the precondition rejected the action.
    ///
    /// Rejections are not always errors: move preconditions reject with
    /// [`IgnoredMove`], which callers drop silently.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The current snapshot must still be in play.
pub struct GameOngoing;

impl GameOngoing {
    /// Checks that the pointed-at board has no winner and is not a draw.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoredMove> {
        if game.outcome().is_ongoing() {
            Ok(())
        } else {
            Err(IgnoredMove::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that the position is unoccupied on the current board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), IgnoredMove> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(position))
        }
    }
}

/// Composite precondition: A move is legal if the game is still in play
/// and the square is empty.
///
/// The outcome gate runs first, so a move on a finished game reports
/// [`IgnoredMove::GameOver`] even when the square is also occupied.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), IgnoredMove> {
        GameOngoing::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game must still be in play at the current snapshot
/// - Square must be empty
///
/// Postconditions:
/// - All game invariants still hold
/// - The pointer advanced by exactly one step
/// - The move landed at the end of the (possibly truncated) history
/// - Exactly one square changed between the old and new boards
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    type Rejection = IgnoredMove;

    fn pre(game: &Game, action: &Position) -> Result<(), IgnoredMove> {
        LegalMove::check(*action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TicTacToeInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if after.pointer() != before.pointer() + 1 {
            violations.push(InvariantViolation::new(
                "Pointer advances by exactly one step per move",
            ));
        }

        if after.history().len() != after.pointer() + 1 {
            violations.push(InvariantViolation::new(
                "A move lands at the end of the history",
            ));
        }

        let changed = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares().iter())
            .filter(|(b, a)| b != a)
            .count();
        if changed != 1 {
            violations.push(InvariantViolation::new(
                "Exactly one square changes per move",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        TicTacToeInvariants::check_all(game).is_ok(),
        "game invariants violated"
    );
}
