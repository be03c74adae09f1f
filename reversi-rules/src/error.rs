//! Error types for rules operations and text parsing.

use crate::game::Player;
use crate::location::Location;
use derive_more::{Display, Error};

/// Reasons a placement request is rejected. A rejected request never
/// changes the board or the active player.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The target cell already holds a stone.
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },

    /// The target cell is empty but captures nothing in any direction.
    #[display(fmt = "{} does not capture any stones", location)]
    Illegal { location: Location },

    /// The request names a player who is not the active player.
    #[display(fmt = "it is {}'s turn, not {}'s", expected, found)]
    WrongPlayer { expected: Player, found: Player },

    /// The game has already ended.
    #[display(fmt = "the game is over")]
    GameOver,

    /// Coordinates off the board.
    #[display(fmt = "{}", _0)]
    OutOfBounds(OutOfBoundsError),
}

impl From<OutOfBoundsError> for MoveError {
    fn from(err: OutOfBoundsError) -> Self {
        MoveError::OutOfBounds(err)
    }
}

/// Coordinates outside `[0, 7] x [0, 7]`.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "({}, {}) is off the board", row, col)]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Failures parsing the 64-character board text format.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} at cell {}", character, index)]
    BadCharacter { character: char, index: usize },

    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        let location = Location::from_coords(2, 3);
        assert_eq!(
            MoveError::Occupied { location }.to_string(),
            "D3 is already occupied"
        );
        assert_eq!(
            MoveError::Illegal { location }.to_string(),
            "D3 does not capture any stones"
        );
        assert_eq!(
            MoveError::WrongPlayer {
                expected: Player::Black,
                found: Player::White
            }
            .to_string(),
            "it is Black's turn, not White's"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn out_of_bounds_converts() {
        let err: MoveError = OutOfBoundsError { row: 9, col: 0 }.into();
        assert_eq!(err.to_string(), "(9, 0) is off the board");
    }

    #[test]
    fn parse_board_error_display() {
        let err = ParseBoardError::BadCharacter {
            character: 'z',
            index: 5,
        };
        assert!(err.to_string().contains("'z'"));
        assert_eq!(
            ParseBoardError::WrongLength { found: 63 }.to_string(),
            "expected 64 cells, found 63"
        );
    }
}
