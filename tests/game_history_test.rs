//! Tests for the history-based game engine.

use replay_tictactoe::{Game, JumpError, Move, Outcome, Player, Position, Square};

#[test]
fn test_new_game_starts_at_empty_board() {
    let game = Game::new();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.pointer(), 0);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert!(!game.is_over());
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_moves_alternate_players() {
    let mut game = Game::new();

    game.apply_move(Position::TopLeft);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.to_move(), Player::O);

    game.apply_move(Position::Center);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_each_move_appends_a_snapshot() {
    let mut game = Game::new();

    game.apply_move(Position::TopLeft);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.pointer(), 1);

    game.apply_move(Position::Center);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.pointer(), 2);

    // Earlier snapshots are untouched
    assert!(game.history()[0].is_empty(Position::TopLeft));
    assert!(game.history()[1].is_empty(Position::Center));
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    let before = game.clone();

    // O tries the same square
    game.apply_move(Position::Center);

    assert_eq!(game, before);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_finished_game_ignores_moves() {
    let mut game = Game::new();
    // X: 0, O: 3, X: 1, O: 4, X: 2 - X wins the top row
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::MiddleLeft);
    game.apply_move(Position::TopCenter);
    game.apply_move(Position::Center);
    game.apply_move(Position::TopRight);

    assert_eq!(game.outcome(), Outcome::Winner(Player::X));
    assert!(game.is_over());
    assert_eq!(game.history().len(), 6);

    let before = game.clone();
    game.apply_move(Position::MiddleRight);

    assert_eq!(game, before);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));
}

#[test]
fn test_open_game_stays_ongoing() {
    let mut game = Game::new();
    // X: 0, O: 4, X: 1, O: 3, X: 8 - no line is complete
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::Center);
    game.apply_move(Position::TopCenter);
    game.apply_move(Position::MiddleLeft);
    game.apply_move(Position::BottomRight);

    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.pointer(), 5);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_jump_back_rewinds_derived_state() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::MiddleLeft);
    game.apply_move(Position::TopCenter);
    game.apply_move(Position::Center);
    game.apply_move(Position::TopRight);
    assert_eq!(game.outcome(), Outcome::Winner(Player::X));

    game.jump_to(2).expect("step 2 is recorded");

    // Board shows exactly the first two marks
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::MiddleLeft), Square::Occupied(Player::O));
    assert_eq!(game.board().occupied_count(), 2);

    // Derived state follows the pointer
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::Ongoing);

    // The later snapshots are retained until a move branches
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_move_after_jump_discards_the_future() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::MiddleLeft);
    game.apply_move(Position::TopCenter);
    game.apply_move(Position::Center);
    game.apply_move(Position::TopRight);

    game.jump_to(2).expect("step 2 is recorded");
    game.apply_move(Position::BottomRight); // X branches here

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.pointer(), 3);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.board().get(Position::BottomRight), Square::Occupied(Player::X));

    // The abandoned line is gone
    assert!(game.board().is_empty(Position::TopCenter));
    assert_eq!(game.move_at(3), Some(Move::new(Player::X, Position::BottomRight)));
}

#[test]
fn test_jump_to_current_step_is_noop() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);
    let before = game.clone();

    game.jump_to(game.pointer()).expect("current step exists");

    assert_eq!(game, before);
}

#[test]
fn test_jump_out_of_range_errors_without_mutating() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    let before = game.clone();

    let result = game.jump_to(7);

    assert_eq!(result, Err(JumpError::StepOutOfRange { step: 7, len: 2 }));
    assert_eq!(game, before);

    let message = result.expect_err("jump must fail").to_string();
    assert_eq!(message, "Step 7 is out of range (history has 2 snapshots)");
}

#[test]
fn test_draw_game() {
    let mut game = Game::new();
    for position in [
        Position::TopLeft,      // X
        Position::Center,       // O
        Position::TopRight,     // X
        Position::TopCenter,    // O
        Position::MiddleLeft,   // X
        Position::MiddleRight,  // O
        Position::BottomCenter, // X
        Position::BottomLeft,   // O
        Position::BottomRight,  // X
    ] {
        game.apply_move(position);
    }

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.status_string(), "Game over. Draw!");

    let before = game.clone();
    game.apply_move(Position::Center);
    assert_eq!(game, before);
}

#[test]
fn test_status_strings() {
    let mut game = Game::new();
    assert_eq!(game.status_string(), "In progress. Player X to move.");

    game.apply_move(Position::Center);
    assert_eq!(game.status_string(), "In progress. Player O to move.");

    // X: 0, O: 3, X: 1, O: 4, X: 2 wins the top row in a fresh game
    let mut won = Game::new();
    won.apply_move(Position::TopLeft);
    won.apply_move(Position::MiddleLeft);
    won.apply_move(Position::TopCenter);
    won.apply_move(Position::Center);
    won.apply_move(Position::TopRight);
    assert_eq!(won.status_string(), "Game over. Player X wins!");
}

#[test]
fn test_move_list_is_derived_from_history() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::BottomRight);

    assert_eq!(game.move_at(0), None);
    assert_eq!(game.move_at(1), Some(Move::new(Player::X, Position::Center)));
    assert_eq!(game.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
    assert_eq!(game.move_at(3), Some(Move::new(Player::X, Position::BottomRight)));
    assert_eq!(game.move_at(4), None);

    let first = game.move_at(1).expect("move 1 exists");
    assert_eq!(first.to_string(), "X -> Center");
}

#[test]
fn test_board_display_numbers_open_squares() {
    let mut game = Game::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);

    assert_eq!(game.board().display(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
}

#[test]
fn test_jump_then_replay_matches_fresh_game() {
    let mut replayed = Game::new();
    replayed.apply_move(Position::TopLeft);
    replayed.apply_move(Position::Center);
    replayed.apply_move(Position::TopRight);
    replayed.jump_to(0).expect("step 0 is recorded");
    replayed.apply_move(Position::BottomLeft);
    replayed.apply_move(Position::BottomCenter);

    let mut fresh = Game::new();
    fresh.apply_move(Position::BottomLeft);
    fresh.apply_move(Position::BottomCenter);

    assert_eq!(replayed, fresh);
}
