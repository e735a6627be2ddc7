//! The automated opponent's move heuristic.
//!
//! The heuristic looks one move ahead and nothing more:
//!
//! 1. **Win**: if the opponent already holds all but one cell of some line and
//!    the missing cell is empty, take it.
//! 2. **Block**: otherwise, if the human is in that position, take the cell
//!    that would complete the human's line.
//! 3. Otherwise there is no forced move, and the caller draws a random cell.
//!
//! Forks and double threats are not detected.
//!
//! # Tie-break order
//!
//! When several lines qualify, they are tried rows first, then columns, then
//! the main diagonal, then the anti-diagonal. Rows (and columns) are tried in
//! the order in which the participant first marked a cell of them. Within a
//! line, cells are scanned in increasing linear-index order and the first
//! empty one is chosen.

use noughts_core::{Board, Line, Position};

/// A move chosen by the heuristic rather than drawn at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ForcedMove {
    /// Completes one of the opponent's own lines.
    Win(Position),
    /// Occupies the cell that would complete one of the human's lines.
    Block(Position),
}

impl ForcedMove {
    /// Returns the cell to mark.
    #[must_use]
    pub fn position(self) -> Position {
        match self {
            Self::Win(pos) | Self::Block(pos) => pos,
        }
    }
}

/// Lines in which a participant holds all but (at most) one cell.
///
/// Detection works from the participant's move history alone; it does not look
/// at who holds the remaining cell. [`NearLines::completing_cell`] consults the
/// board for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearLines {
    rows: Vec<usize>,
    columns: Vec<usize>,
    main_diagonal: bool,
    anti_diagonal: bool,
}

impl NearLines {
    /// Finds the near-complete lines of a move history.
    ///
    /// A row or column qualifies when the history holds at least
    /// `side_length - 1` of its cells; a diagonal qualifies when it holds
    /// exactly `side_length - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Line, Position};
    /// use noughts_game::NearLines;
    ///
    /// let history = [Position::new(0, 0), Position::new(1, 1)];
    /// let near = NearLines::detect(&history, 3);
    /// assert_eq!(near.lines().collect::<Vec<_>>(), [Line::MainDiagonal]);
    /// ```
    #[must_use]
    pub fn detect(history: &[Position], side_length: usize) -> Self {
        let threshold = side_length.saturating_sub(1);

        let mut rows = group_counts(history.iter().map(|pos| pos.row()));
        rows.retain(|&(_, count)| count >= threshold);
        let mut columns = group_counts(history.iter().map(|pos| pos.column()));
        columns.retain(|&(_, count)| count >= threshold);

        let main = history.iter().filter(|pos| pos.is_on_main_diagonal()).count();
        let anti = history
            .iter()
            .filter(|pos| pos.is_on_anti_diagonal(side_length))
            .count();

        Self {
            rows: rows.into_iter().map(|(row, _)| row).collect(),
            columns: columns.into_iter().map(|(column, _)| column).collect(),
            main_diagonal: main == threshold,
            anti_diagonal: anti == threshold,
        }
    }

    /// Returns whether no line qualifies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
            && self.columns.is_empty()
            && !self.main_diagonal
            && !self.anti_diagonal
    }

    /// Returns the qualifying lines in tie-break order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        let rows = self.rows.iter().map(|&row| Line::Row { row });
        let columns = self.columns.iter().map(|&column| Line::Column { column });
        let main = self.main_diagonal.then_some(Line::MainDiagonal);
        let anti = self.anti_diagonal.then_some(Line::AntiDiagonal);
        rows.chain(columns).chain(main).chain(anti)
    }

    /// Returns the first empty cell of the first qualifying line that still has one.
    #[must_use]
    pub fn completing_cell(&self, board: &Board) -> Option<Position> {
        let side_length = board.side_length();
        self.lines().find_map(|line| {
            line.positions(side_length).find(|pos| !board.is_occupied(*pos))
        })
    }
}

/// Counts values, keeping groups in order of first appearance.
fn group_counts(values: impl Iterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for value in values {
        match groups.iter_mut().find(|(key, _)| *key == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((value, 1)),
        }
    }
    groups
}

/// The win-then-block heuristic of the automated opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentStrategy;

impl OpponentStrategy {
    /// Computes the forced move for the participant whose history is `own`,
    /// playing against the participant whose history is `opponent`.
    ///
    /// Returns `None` when neither a win nor a block is available; the caller
    /// then falls back to a random move.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::{Board, Position, Symbol};
    /// use noughts_game::{ForcedMove, OpponentStrategy};
    ///
    /// let mut board = Board::new(3).unwrap();
    /// let human = [Position::new(0, 0), Position::new(1, 1)];
    /// for pos in human {
    ///     board.place(pos, Symbol::X);
    /// }
    ///
    /// assert_eq!(
    ///     OpponentStrategy::forced_move(&board, &[], &human),
    ///     Some(ForcedMove::Block(Position::new(2, 2)))
    /// );
    /// ```
    #[must_use]
    pub fn forced_move(
        board: &Board,
        own: &[Position],
        opponent: &[Position],
    ) -> Option<ForcedMove> {
        let side_length = board.side_length();

        if let Some(pos) = NearLines::detect(own, side_length).completing_cell(board) {
            log::trace!("winning move available at {pos}");
            return Some(ForcedMove::Win(pos));
        }
        if let Some(pos) = NearLines::detect(opponent, side_length).completing_cell(board) {
            log::trace!("blocking opponent line at {pos}");
            return Some(ForcedMove::Block(pos));
        }

        log::trace!("no forced move");
        None
    }
}
