//! The board state and the capture resolver.
//!
//! [`Board`] stores one [`Bitboard`] per colour. Reads are public; the only
//! writes go through [`Board::commit`], which is private to the crate so that
//! the presentation layer can only ever hold snapshots.

use crate::bitboard::{self, Bitboard};
use crate::error::ParseBoardError;
use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use std::fmt;

/// The contents of one cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Character used by the board text format.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    /// The player owning a stone in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Stone counts for both colours.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// The player with more stones, or `None` for a draw.
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Total stones on the board.
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// The result of validating a placement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    /// Whether at least one direction confirmed a capture.
    pub legal: bool,
    /// Every opponent stone the placement flips.
    pub captured: LocationList,
}

impl MoveOutcome {
    const REJECTED: Self = Self {
        legal: false,
        captured: LocationList::EMPTY,
    };

    fn from_captures(captured: Bitboard) -> Self {
        Self {
            legal: !captured.is_empty(),
            captured: captured.into(),
        }
    }
}

/// An 8x8 Reversi board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// The canonical starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The canonical starting position: White at (3,3) and (4,4),
    /// Black at (3,4) and (4,3).
    pub const fn new() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// A board with no stones.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Build a board from per-colour masks. Panics if the masks overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Self {
        assert!(!black.intersects(white), "a cell cannot hold two stones");
        Self { black, white }
    }

    /// The stones of one player.
    #[inline]
    pub fn stones(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.occupied_mask().is_full()
    }

    /// Read the cell at `loc`.
    pub fn get(self, loc: Location) -> Cell {
        let mask: Bitboard = loc.into();
        if mask.intersects(self.black) {
            Cell::Black
        } else if mask.intersects(self.white) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Read the cell at `(row, col)`. Panics on coordinates off the board.
    pub fn cell(self, row: usize, col: usize) -> Cell {
        self.get(Location::from_coords(row, col))
    }

    /// A row-major grid of every cell, for renderers.
    pub fn cells(self) -> [[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut grid = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for loc in Location::all() {
            let (row, col) = loc.to_coords();
            grid[row][col] = self.get(loc);
        }
        grid
    }

    /// Count the stones of both colours.
    pub fn score(self) -> Score {
        Score {
            black: self.black.count_occupied(),
            white: self.white.count_occupied(),
        }
    }

    /// Every empty cell where `player` would capture at least one stone.
    #[inline]
    pub fn legal_moves(self, player: Player) -> LocationList {
        bitboard::get_move_mask(self.stones(player), self.stones(!player)).into()
    }

    /// Whether `player` has any legal placement.
    #[inline]
    pub fn has_legal_move(self, player: Player) -> bool {
        !self.legal_moves(player).is_empty()
    }

    /// Check a placement of `player` at `loc` without changing the board.
    /// An occupied cell is never legal.
    pub fn probe(self, loc: Location, player: Player) -> MoveOutcome {
        let mask: Bitboard = loc.into();
        if !mask.intersects(self.empty_mask()) {
            return MoveOutcome::REJECTED;
        }

        MoveOutcome::from_captures(bitboard::captures(
            self.stones(player),
            self.stones(!player),
            mask,
        ))
    }

    /// Place a stone for `player` at `loc` and flip every confirmed run.
    /// An illegal placement leaves the board untouched and reports `legal: false`.
    pub(crate) fn commit(&mut self, loc: Location, player: Player) -> MoveOutcome {
        let outcome = self.probe(loc, player);
        if !outcome.legal {
            return outcome;
        }

        let (active, opponent) =
            bitboard::apply_move(self.stones(player), self.stones(!player), loc.into());
        *self = match player {
            Player::Black => Self::from_bitboards(active, opponent),
            Player::White => Self::from_bitboards(opponent, active),
        };
        outcome
    }

    /// Set a single empty cell to `player`'s colour.
    #[inline]
    fn set(&mut self, loc: Location, player: Player) {
        let mask: Bitboard = loc.into();
        match player {
            Player::Black => self.black |= mask,
            Player::White => self.white |= mask,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        utils::format_grid(cells.iter().flatten().map(|cell| cell.to_char()), f)
    }
}

/// Parse a board from 64 cell characters in row-major order.
/// `X`/`B` is black, `O`/`W` is white, `.`/`-` is empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut index = 0;

        for character in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match character {
                'X' | 'x' | 'B' | 'b' => Cell::Black,
                'O' | 'o' | 'W' | 'w' => Cell::White,
                '.' | '-' => Cell::Empty,
                _ => return Err(ParseBoardError::BadCharacter { character, index }),
            };

            if index < NUM_SPACES {
                if let Some(player) = cell.player() {
                    board.set(Location::from_index(index), player);
                }
            }
            index += 1;
        }

        if index != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: index });
        }

        Ok(board)
    }
}
