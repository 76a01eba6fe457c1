//! Subtract square integration tests through the `Game` wrapper.

use turn_games::{Game, GameError, GameResult, GameState, Move, Player, State, SubtractSquareState};

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_starting_moves_are_squares() {
    let game = Game::subtract_square(Player::P1, 20);
    let moves: Vec<Move> = game.current_state().possible_moves().into_iter().collect();
    assert_eq!(
        moves,
        vec![
            Move::Subtract(1),
            Move::Subtract(4),
            Move::Subtract(9),
            Move::Subtract(16)
        ]
    );
}

#[test]
fn test_starting_value_from_input() {
    let game = Game::subtract_square_from_input(Player::P2, "17").unwrap();
    assert_eq!(
        game.current_state().to_string(),
        "p2's turn to move; the current value is 17."
    );

    assert!(matches!(
        Game::subtract_square_from_input(Player::P1, "-3"),
        Err(GameError::InvalidStartingValue { .. })
    ));
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_value_one_scenario() {
    let mut game = Game::subtract_square(Player::P1, 1);
    assert_eq!(
        game.current_state().possible_moves().as_slice(),
        &[Move::Subtract(1)]
    );

    let mv = game.str_to_move("1").unwrap();
    let state = game.play(mv).unwrap();
    assert_eq!(state, &State::from(SubtractSquareState::new(Player::P2, 0)));
    assert!(state.possible_moves().is_empty());

    assert!(game.is_over(game.current_state()));
    assert!(game.is_winner(Player::P1));
    assert!(!game.is_winner(Player::P2));
    assert_eq!(game.result(), Some(GameResult::Winner(Player::P1)));
}

#[test]
fn test_full_game_alternates_players() {
    let mut game = Game::subtract_square(Player::P1, 10);

    for (raw, mover) in [("9", Player::P1), ("1", Player::P2)] {
        assert_eq!(game.current_state().active_player(), mover);
        let mv = game.str_to_move(raw).unwrap();
        game.play(mv).unwrap();
    }

    assert!(game.is_winner(Player::P2));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[1].player, Player::P2);
}

#[test]
fn test_non_square_is_rejected() {
    let mut game = Game::subtract_square(Player::P1, 10);
    let mv = game.str_to_move(" 3 ").unwrap();

    assert!(matches!(game.play(mv), Err(GameError::IllegalMove { .. })));
    assert!(game.history().is_empty());
    assert_eq!(game.current_state().active_player(), Player::P1);
}

#[test]
fn test_square_above_value_is_rejected() {
    let mut game = Game::subtract_square(Player::P1, 3);
    assert!(game.play(Move::Subtract(4)).is_err());
}

#[test]
fn test_malformed_input() {
    let game = Game::subtract_square(Player::P1, 10);
    for raw in ["", "four", "4.0", "-4"] {
        assert!(
            matches!(game.str_to_move(raw), Err(GameError::MalformedMove { .. })),
            "{raw:?} should not parse"
        );
    }
}
