//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses check the machine's guarantees for ALL values
//! within a small bound, not just the cases the unit tests pick.

#[cfg(kani)]
mod proofs {
    use crate::{rules, Board, Game, InvariantSet, Position, TicTacToeInvariants};

    /// Prove: evaluate is total - no 9-square assignment can panic it.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_evaluate_total() {
        let board: Board = kani::any();
        let _ = rules::evaluate(&board);
    }

    /// Prove: the first move preserves every machine invariant,
    /// wherever it lands.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_first_move_preserves_invariants() {
        let mut game = Game::new();
        let position: Position = kani::any();

        game.apply_move(position);

        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    /// Prove: replaying an occupied square leaves the game untouched.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_occupied_square_is_a_no_op() {
        let mut game = Game::new();
        let position: Position = kani::any();
        game.apply_move(position);

        let before = game.clone();
        game.apply_move(position);

        assert_eq!(game, before);
    }
}
