//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: Players alternate turns along the history.
///
/// The mark added at step 1 belongs to X, step 2 to O, and so on. Turn
/// order is pinned to the step index rather than a stored field, so it
/// stays correct across jumps and branches.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = Player::X;
        for step in 1..game.history().len() {
            let Some(mov) = game.move_at(step) else {
                // No single-mark diff between the snapshots
                return false;
            };
            if mov.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }

        true
    }

    fn description() -> &'static str {
        "Marks along the history alternate X, O, X, O, ... starting with X"
    }
}
