//! Parsing of the lines a player types at the prompt.

use derive_more::{Display, Error};
use reversi_rules::{Location, OutOfBoundsError};
use std::str::FromStr;

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a stone for the active player.
    Place(Location),
    /// List the active player's legal cells.
    Moves,
    /// Abandon the current game and start again.
    New,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[display(fmt = "empty input")]
    Empty,

    #[display(fmt = "unrecognised command")]
    Unrecognised,

    #[display(fmt = "{}", _0)]
    OffBoard(OutOfBoundsError),
}

pub const HELP: &str = "\
Commands:
  d3        place a stone at column D, row 3
  2 3       place a stone at row 2, column 3 (zero-based)
  moves     list the cells where the active player may place
  new       start a new game
  help      show this message
  quit      leave";

/// Accepts algebraic notation ("d3"), a zero-based "row col" pair, or a keyword.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        match line.to_ascii_lowercase().as_str() {
            "moves" | "m" => return Ok(Command::Moves),
            "new" | "n" => return Ok(Command::New),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        if let Ok(loc) = line.parse::<Location>() {
            return Ok(Command::Place(loc));
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => {
                let row: usize = row.parse().map_err(|_| ParseCommandError::Unrecognised)?;
                let col: usize = col.parse().map_err(|_| ParseCommandError::Unrecognised)?;
                Location::try_from_coords(row, col)
                    .map(Command::Place)
                    .map_err(ParseCommandError::OffBoard)
            }
            _ => Err(ParseCommandError::Unrecognised),
        }
    }
}
