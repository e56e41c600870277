//! Tic-tac-toe game logic with a replayable move history.
//!
//! The crate splits the game into two components with strict roles:
//!
//! - **Rules**: pure functions evaluating a single board snapshot
//!   (win and draw detection), total over any square assignment
//! - **Game**: a state machine recording every board the game passes
//!   through, with a pointer for time travel and branching
//!
//! Turn order, outcome, and the move list are derived from the history on
//! demand rather than stored, so rewinding the pointer can never leave a
//! stale field behind. Rendering and input stay outside the crate;
//! [`Snapshot`] packages one step for whatever view sits on top.
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{Game, Outcome, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::TopLeft); // X
//! game.apply_move(Position::Center);  // O
//! assert_eq!(game.outcome(), Outcome::Ongoing);
//!
//! // Rewind to the empty board; the recorded line stays in place.
//! game.jump_to(0)?;
//! assert_eq!(game.history().len(), 3);
//!
//! // Moving from here discards the old line and starts a new one.
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), replay_tictactoe::JumpError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod action;
pub mod contracts;
pub mod game;
pub mod invariants;
mod kani_support;
pub mod position;
pub mod rules;
pub mod snapshot;
pub mod types;

// Crate-level exports - core domain types
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - positions and actions
pub use action::{IgnoredMove, Move};
pub use position::Position;

// Crate-level exports - game engine
pub use game::{Game, JumpError};

// Crate-level exports - view state
pub use snapshot::Snapshot;

// Crate-level exports - contracts and invariants
pub use contracts::{
    assert_invariants, Contract, GameOngoing, LegalMove, MoveContract, SquareIsEmpty,
};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicHistoryInvariant, PointerInRangeInvariant, TicTacToeInvariants,
};
