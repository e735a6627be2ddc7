//! Winning lines of a square board.

use std::iter::FusedIterator;

use crate::Position;

/// A full row, full column, or one of the two full diagonals of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its zero-based index.
    Row {
        /// Row index.
        row: usize,
    },
    /// A column identified by its zero-based index.
    Column {
        /// Column index.
        column: usize,
    },
    /// The diagonal from the top-left to the bottom-right corner.
    MainDiagonal,
    /// The diagonal from the top-right to the bottom-left corner.
    AntiDiagonal,
}

impl Line {
    /// Returns an iterator over every line of a board, in row, column,
    /// main diagonal, anti-diagonal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::Line;
    ///
    /// let lines: Vec<_> = Line::all(3).collect();
    /// assert_eq!(lines.len(), 8);
    /// assert_eq!(lines[0], Line::Row { row: 0 });
    /// assert_eq!(lines[3], Line::Column { column: 0 });
    /// assert_eq!(lines[7], Line::AntiDiagonal);
    /// ```
    pub fn all(side_length: usize) -> impl Iterator<Item = Self> {
        (0..side_length)
            .map(|row| Self::Row { row })
            .chain((0..side_length).map(|column| Self::Column { column }))
            .chain([Self::MainDiagonal, Self::AntiDiagonal])
    }

    /// Returns the cells of this line in increasing linear-index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Line, Position};
    ///
    /// let cells: Vec<_> = Line::AntiDiagonal.positions(3).collect();
    /// assert_eq!(
    ///     cells,
    ///     [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
    /// );
    /// ```
    #[must_use]
    pub fn positions(self, side_length: usize) -> LinePositions {
        LinePositions {
            line: self,
            side_length,
            front: 0,
            back: side_length,
        }
    }

    /// Returns whether `pos` lies on this line of a board with the given side length.
    #[must_use]
    pub fn contains(self, pos: Position, side_length: usize) -> bool {
        match self {
            Self::Row { row } => pos.row() == row && pos.column() < side_length,
            Self::Column { column } => pos.column() == column && pos.row() < side_length,
            Self::MainDiagonal => pos.is_on_main_diagonal() && pos.row() < side_length,
            Self::AntiDiagonal => pos.is_on_anti_diagonal(side_length),
        }
    }
}

/// Iterator over the cells of a [`Line`].
///
/// Created by [`Line::positions`].
#[derive(Debug, Clone)]
pub struct LinePositions {
    line: Line,
    side_length: usize,
    front: usize,
    back: usize,
}

impl LinePositions {
    fn item_at(&self, i: usize) -> Position {
        match self.line {
            Line::Row { row } => Position::new(i, row),
            Line::Column { column } => Position::new(column, i),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(self.side_length - 1 - i, i),
        }
    }
}

impl Iterator for LinePositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.item_at(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinePositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for LinePositions {}
impl ExactSizeIterator for LinePositions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lines_order() {
        let lines: Vec<_> = Line::all(5).collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[4], Line::Row { row: 4 });
        assert_eq!(lines[5], Line::Column { column: 0 });
        assert_eq!(lines[10], Line::MainDiagonal);
        assert_eq!(lines[11], Line::AntiDiagonal);
    }

    #[test]
    fn test_positions_increase_in_linear_index() {
        for line in Line::all(5) {
            let indices: Vec<_> = line.positions(5).map(|p| p.to_linear_index(5)).collect();
            assert_eq!(indices.len(), 5);
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{line:?}");
        }
    }

    #[test]
    fn test_positions_lie_on_line() {
        for line in Line::all(3) {
            for pos in line.positions(3) {
                assert!(line.contains(pos, 3), "{pos} not on {line:?}");
            }
        }
    }

    #[test]
    fn test_positions_double_ended() {
        let mut iter = Line::Column { column: 1 }.positions(3);
        assert_eq!(iter.next(), Some(Position::new(1, 0)));
        assert_eq!(iter.next_back(), Some(Position::new(1, 2)));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(Position::new(1, 1)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_single_cell_board() {
        let lines: Vec<_> = Line::all(1).collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.positions(1).collect::<Vec<_>>(), [Position::new(0, 0)]);
        }
    }
}
