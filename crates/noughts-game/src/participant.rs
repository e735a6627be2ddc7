//! Match participants: human players and the automated opponent.

use std::fmt::{self, Display};

use noughts_core::{Position, Symbol};
use rand::Rng;

/// Name given to every automated participant.
pub const AUTOMATED_NAME: &str = "CPU";

/// One of the two participant slots of a match.
///
/// The seat determines the default display name of an unnamed human
/// (`"Player 1"` or `"Player 2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Seat {
    /// The first participant passed to the match.
    First,
    /// The second participant passed to the match.
    Second,
}

impl Seat {
    /// Both seats, in construction order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the zero-based index of the seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Returns the 1-based seat number used in default names.
    #[must_use]
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Errors that can occur when drawing a random move for a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PickError {
    /// Random moves are only drawn for automated participants.
    #[display("random moves can only be picked for an automated participant")]
    NotAutomated,
    /// The automated participant has already drawn every cell.
    #[display("no moves remaining in the automated participant's pool")]
    ExhaustedMoves,
}

/// The cells an automated participant has not yet drawn for itself.
///
/// The pool only tracks the participant's own draws; it knows nothing about
/// the opponent's placements, so a drawn cell may already be occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingPool {
    side_length: usize,
    cells: Vec<Position>,
}

impl RemainingPool {
    /// Creates a pool holding every cell of a board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `side_length²` overflows `usize` or the cells cannot be
    /// allocated.
    #[must_use]
    pub fn full(side_length: usize) -> Self {
        // Saturates on overflow; `with_capacity` then panics.
        let cell_count = side_length.checked_mul(side_length).unwrap_or(usize::MAX);
        let mut pool = Self {
            side_length,
            cells: Vec::with_capacity(cell_count),
        };
        pool.refill();
        pool
    }

    /// Returns the side length of the board the pool was built for.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns the number of cells left in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether every cell has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns whether `pos` has not been drawn yet.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the remaining cells, in no particular order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Draws a cell uniformly at random and removes it from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::ExhaustedMoves`] if the pool is empty.
    pub fn pick<R>(&mut self, rng: &mut R) -> Result<Position, PickError>
    where
        R: Rng + ?Sized,
    {
        if self.cells.is_empty() {
            return Err(PickError::ExhaustedMoves);
        }
        let i = rng.random_range(0..self.cells.len());
        Ok(self.cells.swap_remove(i))
    }

    /// Puts every cell of the board back into the pool.
    pub fn refill(&mut self) {
        let side_length = self.side_length;
        self.cells.clear();
        self.cells.extend(
            (0..side_length * side_length).map(|i| Position::from_linear_index(i, side_length)),
        );
    }
}

/// Whether a participant is driven by a person or by the opponent heuristic.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ParticipantKind {
    /// Moves come from outside the engine.
    Human,
    /// Moves come from the win/block heuristic, falling back to random draws
    /// from the pool.
    Automated(RemainingPool),
}

/// A player of a match: identity plus the ordered history of marked cells.
///
/// # Examples
///
/// ```
/// use noughts_core::{Position, Symbol};
/// use noughts_game::{Participant, Seat};
///
/// let mut player = Participant::human(Seat::Second, Symbol::O, None);
/// assert_eq!(player.to_string(), "Player 2 with symbol of 'O'");
///
/// player.record_move(Position::new(1, 1));
/// assert_eq!(player.history(), [Position::new(1, 1)]);
///
/// player.reset_history();
/// assert!(player.history().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    symbol: Symbol,
    history: Vec<Position>,
    kind: ParticipantKind,
}

impl Participant {
    /// Creates a human participant.
    ///
    /// If `name` is `None` or empty, the participant is named after its seat
    /// (`"Player 1"` or `"Player 2"`).
    #[must_use]
    pub fn human(seat: Seat, symbol: Symbol, name: Option<&str>) -> Self {
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("Player {}", seat.number()),
        };
        Self {
            name,
            symbol,
            history: Vec::new(),
            kind: ParticipantKind::Human,
        }
    }

    /// Creates an automated participant named [`AUTOMATED_NAME`] whose pool
    /// holds every cell of a board with the given side length.
    ///
    /// Validate `side_length` with [`Board::check_side_length`] first when it
    /// comes from user input.
    ///
    /// # Panics
    ///
    /// Panics if `side_length²` overflows `usize` or the cells cannot be
    /// allocated.
    ///
    /// [`Board::check_side_length`]: noughts_core::Board::check_side_length
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts_core::Symbol;
    /// use noughts_game::Participant;
    ///
    /// let cpu = Participant::automated(Symbol::O, 3);
    /// assert_eq!(cpu.name(), "CPU");
    /// assert_eq!(cpu.remaining_pool().map(|pool| pool.len()), Some(9));
    /// ```
    #[must_use]
    pub fn automated(symbol: Symbol, side_length: usize) -> Self {
        Self {
            name: AUTOMATED_NAME.to_owned(),
            symbol,
            history: Vec::new(),
            kind: ParticipantKind::Automated(RemainingPool::full(side_length)),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbol this participant marks cells with.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the marked cells in move order.
    #[must_use]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the participant kind.
    #[must_use]
    pub fn kind(&self) -> &ParticipantKind {
        &self.kind
    }

    /// Returns whether the participant is automated.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.kind.is_automated()
    }

    /// Returns the remaining pool of an automated participant.
    #[must_use]
    pub fn remaining_pool(&self) -> Option<&RemainingPool> {
        match &self.kind {
            ParticipantKind::Human => None,
            ParticipantKind::Automated(pool) => Some(pool),
        }
    }

    /// Appends `pos` to the move history.
    ///
    /// No legality check is made here.
    pub fn record_move(&mut self, pos: Position) {
        self.history.push(pos);
    }

    /// Empties the move history; an automated participant's pool is refilled.
    pub fn reset_history(&mut self) {
        self.history.clear();
        if let ParticipantKind::Automated(pool) = &mut self.kind {
            pool.refill();
        }
    }

    /// Draws a random cell from an automated participant's pool.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::NotAutomated`] for a human participant, and
    /// [`PickError::ExhaustedMoves`] once the pool is empty.
    pub fn pick_random_position<R>(&mut self, rng: &mut R) -> Result<Position, PickError>
    where
        R: Rng + ?Sized,
    {
        match &mut self.kind {
            ParticipantKind::Human => Err(PickError::NotAutomated),
            ParticipantKind::Automated(pool) => pool.pick(rng),
        }
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with symbol of '{}'", self.name, self.symbol)
    }
}
