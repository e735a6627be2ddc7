//! Match configuration.

use derive_more::IsVariant;

/// Which participant moves first in a new game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum FirstTurn {
    /// The first participant passed to the match always starts.
    First,
    /// The second participant passed to the match always starts.
    Second,
    /// The starting participant is drawn from the match's random source,
    /// at construction and again on every reset.
    #[default]
    Random,
}

/// Settings fixed for the lifetime of a match.
///
/// # Examples
///
/// ```
/// use noughts_game::{FirstTurn, MatchConfig};
///
/// let config = MatchConfig::default().side_length(5).first_turn(FirstTurn::First);
/// assert_eq!(config.side_length, 5);
/// assert!(config.first_turn.is_first());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Side length of the board. Must be odd and positive.
    pub side_length: usize,
    /// Policy for choosing the starting participant.
    pub first_turn: FirstTurn,
}

impl MatchConfig {
    /// The classic 3×3 board.
    pub const DEFAULT_SIDE_LENGTH: usize = 3;

    /// Sets the board side length.
    #[must_use]
    pub fn side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Sets the first-turn policy.
    #[must_use]
    pub fn first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.first_turn = first_turn;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            side_length: Self::DEFAULT_SIDE_LENGTH,
            first_turn: FirstTurn::default(),
        }
    }
}
