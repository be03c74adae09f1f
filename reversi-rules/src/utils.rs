//! Shared text formatting.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Write one character per cell as a labelled grid: a column header
/// (`A`..`H`) and one numbered line per row. `cells` is row-major and must
/// yield exactly 64 items.
pub(crate) fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", cells.next().ok_or(fmt::Error)?)?;
        }
    }
    writeln!(f)?;

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use crate::bitboard::BLACK_START;

    #[test]
    fn grid_has_header_and_eight_rows() {
        let text = BLACK_START.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[4], " 4 . . . . # . . . ");
        assert_eq!(lines[5], " 5 . . . # . . . . ");
    }
}
