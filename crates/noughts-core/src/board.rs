//! Square marking board.

use std::fmt::{self, Display};

use crate::{Line, Position, Symbol};

/// Errors that can occur when constructing a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The side length is even or zero.
    #[display("invalid board dimension: side length must be odd and positive, got {side_length}")]
    InvalidDimension {
        /// The rejected side length.
        side_length: usize,
    },
    /// The side length is odd, but a board of that size cannot be allocated.
    #[display("board too large: side length {side_length} has too many cells")]
    TooLarge {
        /// The rejected side length.
        side_length: usize,
    },
}

/// Upper bound on the number of cells a board can hold.
const MAX_CELLS: usize = isize::MAX.unsigned_abs() / size_of::<Option<Symbol>>();

/// An N×N grid of optional symbols, with N odd.
///
/// Cells are stored in row-major order and addressed by [`Position`].
/// The board performs no move validation of its own: [`Board::place`] writes
/// unconditionally, and callers are expected to check
/// [`Board::is_within_bounds`] and [`Board::is_occupied`] first.
///
/// # Examples
///
/// ```
/// use noughts_core::{Board, Position, Symbol};
///
/// let mut board = Board::new(3).unwrap();
/// for row in 0..3 {
///     board.place(Position::new(0, row), Symbol::X);
/// }
///
/// assert!(board.has_line(Symbol::X));
/// assert!(!board.has_line(Symbol::O));
/// assert!(!board.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side_length: usize,
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if `side_length` is even or zero,
    /// and [`BoardError::TooLarge`] if `side_length²` cells cannot be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Board, BoardError};
    ///
    /// assert!(Board::new(1).is_ok());
    /// assert!(Board::new(5).is_ok());
    /// assert_eq!(
    ///     Board::new(4),
    ///     Err(BoardError::InvalidDimension { side_length: 4 })
    /// );
    /// ```
    pub fn new(side_length: usize) -> Result<Self, BoardError> {
        let cell_count = Self::check_side_length(side_length)?;
        Ok(Self {
            side_length,
            cells: vec![None; cell_count],
        })
    }

    /// Checks that a board with the given side length can be built, without
    /// allocating it, and returns its cell count.
    ///
    /// # Errors
    ///
    /// Same as [`Board::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Board, BoardError};
    ///
    /// assert_eq!(Board::check_side_length(3), Ok(9));
    /// assert_eq!(
    ///     Board::check_side_length(usize::MAX),
    ///     Err(BoardError::TooLarge { side_length: usize::MAX })
    /// );
    /// ```
    pub fn check_side_length(side_length: usize) -> Result<usize, BoardError> {
        if side_length % 2 == 0 {
            return Err(BoardError::InvalidDimension { side_length });
        }
        side_length
            .checked_mul(side_length)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(BoardError::TooLarge { side_length })
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether both coordinates of `pos` lie on the board.
    #[must_use]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.column() < self.side_length && pos.row() < self.side_length
    }

    /// Returns the symbol at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Symbol> {
        self.cells[self.index_of(pos)]
    }

    /// Returns whether the cell at `pos` holds any symbol.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    /// Writes `symbol` into the cell at `pos`.
    ///
    /// This is an unchecked primitive: it overwrites whatever the cell holds.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        let index = self.index_of(pos);
        self.cells[index] = Some(symbol);
    }

    /// Returns whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether any full row, column, or diagonal consists entirely of `symbol`.
    ///
    /// Lines are tested rows first, then columns, then the two diagonals, and the
    /// search stops at the first complete line.
    #[must_use]
    pub fn has_line(&self, symbol: Symbol) -> bool {
        Line::all(self.side_length).any(|line| self.is_line_of(line, symbol))
    }

    /// Returns the first line consisting entirely of `symbol`, if any.
    #[must_use]
    pub fn find_line(&self, symbol: Symbol) -> Option<Line> {
        Line::all(self.side_length).find(|line| self.is_line_of(*line, symbol))
    }

    fn is_line_of(&self, line: Line, symbol: Symbol) -> bool {
        line.positions(self.side_length)
            .all(|pos| self.cell(pos) == Some(symbol))
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Returns an iterator over all positions in linear-index order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let side_length = self.side_length;
        (0..side_length * side_length).map(move |i| Position::from_linear_index(i, side_length))
    }

    /// Returns an iterator over the empty positions in linear-index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|pos| !self.is_occupied(*pos))
    }

    /// Renders the board as a fixed-width ASCII box.
    ///
    /// Equivalent to formatting the board with [`Display`].
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Board, Position, Symbol};
    ///
    /// let mut board = Board::new(1).unwrap();
    /// assert_eq!(board.render(), "+-----+\n|     |\n+-----+\n");
    ///
    /// board.place(Position::new(0, 0), Symbol::O);
    /// assert_eq!(board.render(), "+-----+\n|  O  |\n+-----+\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.is_within_bounds(pos),
            "position {pos} is outside a board of side length {}",
            self.side_length
        );
        pos.to_linear_index(self.side_length)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "-----+".repeat(self.side_length));
        for row in 0..self.side_length {
            writeln!(f, "{border}")?;
            for column in 0..self.side_length {
                match self.cell(Position::new(column, row)) {
                    Some(symbol) => write!(f, "|  {symbol}  ")?,
                    None => f.write_str("|     ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_with(side_length: usize, moves: &[(usize, usize, Symbol)]) -> Board {
        let mut board = Board::new(side_length).expect("odd side length");
        for &(column, row, symbol) in moves {
            board.place(Position::new(column, row), symbol);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.side_length(), 3);
        assert_eq!(board.cell_count(), 9);
        assert!(board.positions().all(|pos| !board.is_occupied(pos)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Board::new(0),
            Err(BoardError::InvalidDimension { side_length: 0 })
        );
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        let side_length = (usize::MAX >> 16) | 1;
        assert_eq!(
            Board::new(side_length),
            Err(BoardError::TooLarge { side_length })
        );
        assert_eq!(
            Board::check_side_length(usize::MAX),
            Err(BoardError::TooLarge {
                side_length: usize::MAX
            })
        );
        assert_eq!(Board::check_side_length(5), Ok(25));
    }

    #[test]
    fn test_has_line_false_on_empty_board() {
        let board = Board::new(3).unwrap();
        assert!(!board.has_line(Symbol::X));
        assert!(!board.has_line(Symbol::O));
    }

    #[test]
    fn test_has_line_rows_columns_diagonals() {
        let x = Symbol::X;
        let row = board_with(3, &[(0, 1, x), (1, 1, x), (2, 1, x)]);
        assert_eq!(row.find_line(x), Some(Line::Row { row: 1 }));

        let column = board_with(3, &[(2, 0, x), (2, 1, x), (2, 2, x)]);
        assert_eq!(column.find_line(x), Some(Line::Column { column: 2 }));

        let main = board_with(3, &[(0, 0, x), (1, 1, x), (2, 2, x)]);
        assert_eq!(main.find_line(x), Some(Line::MainDiagonal));

        let anti = board_with(3, &[(2, 0, x), (1, 1, x), (0, 2, x)]);
        assert_eq!(anti.find_line(x), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_has_line_requires_uniform_symbol() {
        let (x, o) = (Symbol::X, Symbol::O);
        let board = board_with(3, &[(0, 0, x), (1, 0, o), (2, 0, x)]);
        assert!(!board.has_line(x));
        assert!(!board.has_line(o));
    }

    #[test]
    fn test_left_column_scenario() {
        let (x, o) = (Symbol::X, Symbol::O);
        let moves = [(0, 0, x), (1, 1, o), (0, 1, x), (2, 2, o), (0, 2, x)];

        let four = board_with(3, &moves[..4]);
        assert!(!four.has_line(x));
        assert!(!four.has_line(o));

        let five = board_with(3, &moves);
        assert!(five.has_line(x));
        assert!(!five.has_line(o));
    }

    #[test]
    fn test_is_full_and_clear() {
        let mut board = Board::new(3).unwrap();
        let positions: Vec<_> = board.positions().collect();
        for (i, pos) in positions.iter().enumerate() {
            assert!(!board.is_full());
            board.place(*pos, if i % 2 == 0 { Symbol::X } else { Symbol::O });
        }
        assert!(board.is_full());
        assert_eq!(board.empty_positions().count(), 0);

        board.clear();
        assert_eq!(board.empty_positions().count(), 9);
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_is_within_bounds() {
        let board = Board::new(3).unwrap();
        assert!(board.is_within_bounds(Position::new(2, 2)));
        assert!(!board.is_within_bounds(Position::new(3, 0)));
        assert!(!board.is_within_bounds(Position::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "outside a board")]
    fn test_cell_out_of_bounds_panics() {
        let board = Board::new(3).unwrap();
        let _ = board.cell(Position::new(3, 0));
    }

    #[test]
    fn test_render_layout() {
        let board = board_with(3, &[(0, 0, Symbol::X), (2, 1, Symbol::O)]);
        let expected = "\
+-----+-----+-----+
|  X  |     |     |
+-----+-----+-----+
|     |     |  O  |
+-----+-----+-----+
|     |     |     |
+-----+-----+-----+
";
        assert_eq!(board.render(), expected);
    }

    proptest! {
        #[test]
        fn test_new_accepts_odd_rejects_even(side_length in 0usize..40) {
            let result = Board::new(side_length);
            if side_length % 2 == 1 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(BoardError::InvalidDimension { side_length }));
            }
        }

        #[test]
        fn test_place_only_occupies_target(half in 0usize..5, seed in any::<usize>()) {
            let side_length = half * 2 + 1;
            let mut board = Board::new(side_length).unwrap();
            let target = Position::from_linear_index(seed % board.cell_count(), side_length);
            board.place(target, Symbol::X);
            for pos in board.positions() {
                prop_assert_eq!(board.is_occupied(pos), pos == target);
            }
        }

        #[test]
        fn test_is_full_iff_all_placed(half in 0usize..4, skip in any::<usize>()) {
            let side_length = half * 2 + 1;
            let mut board = Board::new(side_length).unwrap();
            let skipped = skip % board.cell_count();
            let positions: Vec<_> = board.positions().collect();
            for (i, pos) in positions.into_iter().enumerate() {
                if i != skipped {
                    board.place(pos, Symbol::O);
                }
            }
            prop_assert!(!board.is_full());
            board.place(Position::from_linear_index(skipped, side_length), Symbol::O);
            prop_assert!(board.is_full());
        }
    }
}
