//! Scenario tests for placements, passes and the end of the game.

use reversi_rules::test_utils::positions;
use reversi_rules::{
    Board, Cell, Game, GameStatus, Location, MoveError, Outcome, PassEvent, Player, Score,
};

#[test]
fn initial_position() {
    let game = Game::new();
    let board = game.board();

    assert_eq!(board.score().total(), 4);
    assert_eq!(board.cell(3, 3), Cell::White);
    assert_eq!(board.cell(4, 4), Cell::White);
    assert_eq!(board.cell(3, 4), Cell::Black);
    assert_eq!(board.cell(4, 3), Cell::Black);
    assert_eq!(game.active_player(), Some(Player::Black));
}

#[test]
fn opening_capture_flips_one_stone() {
    let mut game = Game::new();
    let report = game.attempt_move_at(2, 3, Player::Black).unwrap();

    assert_eq!(
        report.captured.collect::<Vec<_>>(),
        vec![Location::from_coords(3, 3)]
    );

    let mut expected: Board = "
        ........
        ........
        ...X....
        ...XX...
        ...XO...
        ........
        ........
        ........"
        .parse()
        .unwrap();
    assert_eq!(report.board, expected);
    assert_eq!(game.board(), expected);

    // White replies at C3 (2,2), capturing D4 (3,3) along the diagonal.
    let report = game.attempt_move_at(2, 2, Player::White).unwrap();
    assert_eq!(report.captured.len(), 1);
    expected = "
        ........
        ........
        ..OX....
        ...OX...
        ...XO...
        ........
        ........
        ........"
        .parse()
        .unwrap();
    assert_eq!(game.board(), expected);
    assert_eq!(game.active_player(), Some(Player::Black));
}

#[test]
fn opening_non_capture_is_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.attempt_move_at(2, 2, Player::Black),
        Err(MoveError::Illegal {
            location: Location::from_coords(2, 2)
        })
    );
    assert_eq!(game.board(), Board::new());
    assert_eq!(game.active_player(), Some(Player::Black));
}

#[test]
fn all_black_board_is_already_over() {
    let game = Game::from_position(positions::all_black(), Player::Black);
    let outcome = game.outcome().unwrap();

    assert_eq!(outcome.score, Score { black: 64, white: 0 });
    assert_eq!(outcome.winner(), Some(Player::Black));
    assert_eq!(outcome.to_string(), "Black wins (64 to 0)");
}

#[test]
fn opponent_without_moves_passes() {
    let mut game = Game::from_position(positions::white_must_pass(), Player::Black);
    assert_eq!(game.active_player(), Some(Player::Black));

    let report = game.attempt_move_at(0, 2, Player::Black).unwrap();
    assert_eq!(
        report.pass,
        Some(PassEvent {
            player: Player::White
        })
    );
    assert_eq!(report.status, GameStatus::AwaitingMove(Player::Black));
    assert_eq!(game.active_player(), Some(Player::Black));
    assert!(game.legal_moves(Player::White).is_empty());

    // Black plays again and takes White's last stone, which ends the game.
    let report = game.attempt_move_at(7, 2, Player::Black).unwrap();
    assert_eq!(report.pass, None);
    assert_eq!(
        report.outcome(),
        Some(Outcome {
            score: Score { black: 6, white: 0 }
        })
    );
    assert!(game.is_finished());
}

#[test]
fn constructed_position_announces_forced_pass() {
    let game = Game::from_position(positions::white_must_pass(), Player::White);
    assert_eq!(game.active_player(), Some(Player::Black));
    assert_eq!(
        game.last_pass(),
        Some(PassEvent {
            player: Player::White
        })
    );

    let game = Game::from_position(positions::white_must_pass(), Player::Black);
    assert_eq!(game.last_pass(), None);
}

#[test]
fn last_pass_follows_each_placement() {
    let mut game = Game::from_position(positions::white_must_pass(), Player::Black);
    game.attempt_move_at(0, 2, Player::Black).unwrap();
    assert_eq!(
        game.last_pass(),
        Some(PassEvent {
            player: Player::White
        })
    );

    game.attempt_move_at(7, 2, Player::Black).unwrap();
    assert_eq!(game.last_pass(), None);
}

#[test]
fn white_cannot_play_out_of_turn_during_a_pass() {
    let mut game = Game::from_position(positions::white_must_pass(), Player::Black);
    game.attempt_move_at(0, 2, Player::Black).unwrap();

    assert_eq!(
        game.attempt_move_at(7, 2, Player::White),
        Err(MoveError::WrongPlayer {
            expected: Player::Black,
            found: Player::White
        })
    );
}

#[test]
fn lockout_ends_game_before_board_is_full() {
    let mut game = Game::from_position(positions::lockout_after_capture(), Player::Black);
    let report = game.attempt_move_at(0, 2, Player::Black).unwrap();

    assert!(!report.board.is_full());
    assert_eq!(report.next_player(), None);
    assert_eq!(
        report.outcome().map(|o| o.score),
        Some(Score { black: 3, white: 0 })
    );
}

#[test]
fn constructed_lockout_is_over() {
    let game = Game::from_position(positions::mutual_lockout(), Player::White);
    let outcome = game.outcome().unwrap();

    assert_eq!(outcome.winner(), None);
    assert_eq!(outcome.to_string(), "Draw (1 to 1)");
}

#[test]
fn filling_the_board_ends_the_game() {
    let mut game = Game::from_position(positions::one_move_to_full(), Player::Black);
    assert_eq!(game.active_player(), Some(Player::Black));

    let report = game.attempt_move_at(7, 7, Player::Black).unwrap();
    assert!(report.board.is_full());
    // G8, H5-H7 and E5-G7.
    assert_eq!(report.captured.len(), 7);

    let outcome = report.outcome().unwrap();
    assert_eq!(
        outcome.score,
        Score {
            black: 46,
            white: 18
        }
    );
    assert_eq!(outcome.winner(), Some(Player::Black));
}

#[test]
fn inactive_side_starts_when_nominal_side_cannot_move() {
    // White has no move in this position, so Black takes the turn.
    let game = Game::from_position(positions::white_must_pass(), Player::White);
    assert_eq!(game.active_player(), Some(Player::Black));
}

#[test]
fn game_over_rejects_everything() {
    let mut game = Game::from_position(positions::lockout_after_capture(), Player::Black);
    game.attempt_move_at(0, 2, Player::Black).unwrap();

    assert_eq!(
        game.attempt_move_at(5, 5, Player::Black),
        Err(MoveError::GameOver)
    );
    assert_eq!(
        game.attempt_move_at(5, 5, Player::White),
        Err(MoveError::GameOver)
    );
}

#[test]
fn independent_games_do_not_interact() {
    let mut first = Game::new();
    let second = Game::new();

    first.attempt_move_at(2, 3, Player::Black).unwrap();
    assert_eq!(second.board(), Board::new());
    assert_ne!(first.board(), second.board());
}
