//! Pointer range invariant: the current step always exists.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: The history is never empty and the pointer stays inside it.
///
/// The machine guarantees a snapshot to display at all times: the history
/// starts with the empty opening board and every pointer value indexes a
/// recorded snapshot. Reads like `Game::board` rely on this to stay total.
pub struct PointerInRangeInvariant;

impl Invariant<Game> for PointerInRangeInvariant {
    fn holds(game: &Game) -> bool {
        !game.history().is_empty()
            && game.pointer() < game.history().len()
            && game.history()[0] == Board::new()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the pointer indexes a recorded snapshot"
    }
}
