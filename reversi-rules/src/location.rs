//! Code for working with [`Location`]s on the Reversi board.

use crate::bitboard::Bitboard;
use crate::error::{OutOfBoundsError, ParseLocationError};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGH";
const ROW_LABELS: &str = "12345678";

/// A single in-bounds location on the Reversi board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Reversi board, which can be iterated in
/// row-major order to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` does not have exactly one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a row-major square index: 0 for the upper left, 63 for the lower right.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SPACES);
        Self(Bitboard::from(1u64 << (NUM_SPACES - 1 - index)))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as usize
    }

    /// Convert from row and column coordinates.
    /// Coordinates outside the board are a caller bug and panic;
    /// use [`Location::try_from_coords`] for untrusted input.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self::from_index(row * EDGE_LENGTH + col)
    }

    /// Convert from row and column coordinates, rejecting those off the board.
    pub fn try_from_coords(row: usize, col: usize) -> Result<Self, OutOfBoundsError> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self::from_coords(row, col))
        } else {
            Err(OutOfBoundsError { row, col })
        }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.to_coords().0
    }

    #[inline]
    pub fn col(self) -> usize {
        self.to_coords().1
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = ROW_LABELS.chars().nth(row).ok_or(fmt::Error)?;
        let col_str = COLUMN_LABELS.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Location`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || row > EDGE_LENGTH || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl LocationList {
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        loc_bitboard.intersects(self.0)
    }

    /// Returns whether the list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The underlying mask.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << (63 - bitboard.leading_zeros())).into();
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl std::iter::FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mask = iter
            .into_iter()
            .fold(Bitboard::EMPTY, |mask, loc| mask | Bitboard::from(loc));
        Self(mask)
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
