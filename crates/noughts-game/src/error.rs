use noughts_core::{BoardError, Position, Symbol};

use crate::PickError;

/// Reasons a move cannot be applied to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("position {position} is outside the {side_length}x{side_length} board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Side length of the board.
        side_length: usize,
    },
    /// The cell already holds a symbol.
    #[display("position {position} is already occupied")]
    Occupied {
        /// The rejected position.
        position: Position,
    },
    /// The game has been won or drawn; reset the match to play again.
    #[display("the game is already over")]
    GameOver,
}

/// Errors that can occur when creating a match or playing an automated turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    /// The configured board cannot be built.
    #[display("{_0}")]
    Board(BoardError),
    /// Both participants use the same symbol.
    #[display("both participants use the symbol '{symbol}'")]
    DuplicateSymbol {
        /// The shared symbol.
        symbol: Symbol,
    },
    /// An automated participant's pool was built for a different board size.
    #[display("automated participant expects side length {actual}, but the board has {expected}")]
    PoolSizeMismatch {
        /// Side length of the match board.
        expected: usize,
        /// Side length the pool was built for.
        actual: usize,
    },
    /// An automated turn was requested while a human is to move.
    #[display("the current participant is not automated")]
    NotAutomated,
    /// A forced move was requested from a match without an automated participant.
    #[display("the match has no automated participant")]
    NoAutomatedParticipant,
    /// Drawing a random move failed.
    #[display("{_0}")]
    Pick(PickError),
    /// Applying the chosen move failed.
    #[display("{_0}")]
    Move(MoveError),
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<PickError> for MatchError {
    fn from(err: PickError) -> Self {
        Self::Pick(err)
    }
}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
