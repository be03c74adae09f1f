//! Low-level bitboard operations.
//!
//! These operations are unchecked: passing overlapping masks for the two
//! players, or a move mask with more than one bit set, produces meaningless
//! results. [`Board`](crate::Board) is the checked layer on top.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board (row 0, column 0), and uses
//! row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on a Reversi board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: (3,4) and (4,3).
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: (3,3) and (4,4).
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

// Column 0 and column 7. Shifts that move a stone sideways must clear the
// column it would wrap into.
const LEFT_EDGE: u64 = 0x8080808080808080;
const RIGHT_EDGE: u64 = 0x0101010101010101;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every location is set.
    #[inline]
    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// Return true if any location is set in both bitboards.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// One of the eight compass directions on the board.
/// North is towards row 0, east is towards column 7.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step of this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Move every set location one step in this direction.
    /// Locations that would leave the board are dropped.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        let bits = bitboard.0;
        Bitboard(match self {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => (bits >> 1) & !LEFT_EDGE,
            Direction::West => (bits << 1) & !RIGHT_EDGE,
            Direction::NorthEast => (bits << 7) & !LEFT_EDGE,
            Direction::NorthWest => (bits << 9) & !RIGHT_EDGE,
            Direction::SouthEast => (bits >> 9) & !LEFT_EDGE,
            Direction::SouthWest => (bits >> 7) & !RIGHT_EDGE,
        })
    }
}

/// Compute the opponent stones captured in one direction by placing a stone
/// at `move_mask`: the contiguous run of opponent stones starting next to the
/// move, provided the cell after the run holds an `active` stone.
/// Returns an empty bitboard if the direction does not confirm.
#[inline]
pub fn captures_in_direction(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
    direction: Direction,
) -> Bitboard {
    let mut run = Bitboard::EMPTY;
    let mut cursor = direction.shift(move_mask);

    while cursor.intersects(opponent) {
        run |= cursor;
        cursor = direction.shift(cursor);
    }

    // `cursor` is empty if the run walked off the board.
    if !run.is_empty() && cursor.intersects(active) {
        run
    } else {
        Bitboard::EMPTY
    }
}

/// Compute every opponent stone captured by placing a stone at `move_mask`:
/// the union of the confirmed runs in all eight directions.
/// An empty result means the placement is illegal.
#[inline]
pub fn captures(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    Direction::ALL
        .iter()
        .fold(Bitboard::EMPTY, |flips, &direction| {
            flips | captures_in_direction(active, opponent, move_mask, direction)
        })
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = Bitboard::EMPTY;

    for &direction in Direction::ALL.iter() {
        // Smear our pieces across adjacent opponent runs. A run is at most
        // six stones long on an 8x8 board.
        let mut run = direction.shift(active) & opponent;
        for _ in 0..5 {
            run |= direction.shift(run) & opponent;
        }

        // One more step past a run lands on a capturing move.
        moves |= direction.shift(run) & empties;
    }

    moves
}

/// Compute updated bitboards after the active player places a stone at
/// `move_mask`, returning `(new_active, new_opponent)`.
/// Does not check legality: callers must only pass a capturing move.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flip_mask = captures(active, opponent, move_mask);

    let new_active = active | flip_mask | move_mask;
    let new_opponent = opponent ^ flip_mask;

    (new_active, new_opponent)
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
