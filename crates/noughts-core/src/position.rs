//! Board position (column, row) coordinate type.
//!
//! A [`Position`] has two interchangeable encodings:
//!
//! - the `(column, row)` pair, zero-based, displayed 1-based as `"column.row"`
//! - the row-major linear index `column + row * side_length`, displayed 1-based
//!
//! Conversions are pure coordinate transforms. Neither encoding is checked
//! against a board size here; see [`Board::is_within_bounds`].
//!
//! [`Board::is_within_bounds`]: crate::Board::is_within_bounds

use std::fmt::{self, Display};

/// A cell coordinate on a square board.
///
/// # Examples
///
/// ```
/// use noughts_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.to_linear_index(3), 5);
/// assert_eq!(Position::from_linear_index(5, 3), pos);
///
/// // Displayed 1-based, in both encodings
/// assert_eq!(pos.to_string(), "3.2");
/// assert_eq!(pos.display_index(3).to_string(), "6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    column: usize,
    row: usize,
}

impl Position {
    /// Creates a position from zero-based column and row.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Converts the position into its row-major linear index.
    ///
    /// The result is `column + row * side_length`.
    #[must_use]
    pub const fn to_linear_index(self, side_length: usize) -> usize {
        self.column + self.row * side_length
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is zero.
    #[must_use]
    pub const fn from_linear_index(index: usize, side_length: usize) -> Self {
        Self {
            column: index % side_length,
            row: index / side_length,
        }
    }

    /// Returns a value that displays the 1-based linear index of this position.
    #[must_use]
    pub const fn display_index(self, side_length: usize) -> IndexDisplay {
        IndexDisplay {
            index: self.to_linear_index(side_length),
        }
    }

    /// Returns whether the position lies on the main (top-left to bottom-right) diagonal.
    #[must_use]
    pub const fn is_on_main_diagonal(self) -> bool {
        self.column == self.row
    }

    /// Returns whether the position lies on the anti (top-right to bottom-left) diagonal
    /// of a board with the given side length.
    #[must_use]
    pub const fn is_on_anti_diagonal(self, side_length: usize) -> bool {
        self.column + self.row + 1 == side_length
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column + 1, self.row + 1)
    }
}

/// Displays a position as its 1-based linear index.
///
/// Created by [`Position::display_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDisplay {
    index: usize,
}

impl Display for IndexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_linear_index_corners() {
        assert_eq!(Position::new(0, 0).to_linear_index(3), 0);
        assert_eq!(Position::new(2, 0).to_linear_index(3), 2);
        assert_eq!(Position::new(0, 2).to_linear_index(3), 6);
        assert_eq!(Position::new(2, 2).to_linear_index(3), 8);
    }

    #[test]
    fn test_from_linear_index() {
        assert_eq!(Position::from_linear_index(0, 3), Position::new(0, 0));
        assert_eq!(Position::from_linear_index(4, 3), Position::new(1, 1));
        assert_eq!(Position::from_linear_index(7, 3), Position::new(1, 2));
        assert_eq!(Position::from_linear_index(12, 5), Position::new(2, 2));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1.1");
        assert_eq!(Position::new(0, 2).to_string(), "1.3");
        assert_eq!(Position::new(0, 0).display_index(3).to_string(), "1");
        assert_eq!(Position::new(0, 2).display_index(3).to_string(), "7");
        assert_eq!(Position::new(2, 2).display_index(3).to_string(), "9");
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Position::new(1, 1).is_on_main_diagonal());
        assert!(Position::new(1, 1).is_on_anti_diagonal(3));
        assert!(Position::new(2, 0).is_on_anti_diagonal(3));
        assert!(!Position::new(2, 0).is_on_main_diagonal());
        assert!(!Position::new(1, 0).is_on_anti_diagonal(3));
        assert!(Position::new(0, 0).is_on_anti_diagonal(1));
    }

    proptest! {
        #[test]
        fn test_linear_index_round_trip(half in 0usize..8, seed in any::<usize>()) {
            let side_length = half * 2 + 1;
            let index = seed % (side_length * side_length);
            let pos = Position::from_linear_index(index, side_length);
            prop_assert!(pos.column() < side_length);
            prop_assert!(pos.row() < side_length);
            prop_assert_eq!(pos.to_linear_index(side_length), index);
        }
    }
}
