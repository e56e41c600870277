//! Monotonic history invariant: each step adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: History grows one mark at a time and never un-places.
///
/// Snapshot `k` carries exactly `k` occupied squares, and each snapshot
/// differs from its predecessor by a single Empty -> Occupied transition.
/// Together these rule out overwritten marks, cleared squares, and
/// snapshots inserted out of order.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        for (step, board) in game.history().iter().enumerate() {
            if board.occupied_count() != step {
                return false;
            }
        }

        for pair in game.history().windows(2) {
            let mut placed = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares().iter()) {
                match (before, after) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(_)) => placed += 1,
                    // Occupied -> Empty or a changed mark
                    _ => return false,
                }
            }
            if placed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark to the previous board"
    }
}
