use derive_more::IsVariant;
use noughts_core::{Board, Position};
use rand::Rng;
use rand_pcg::Pcg64;

use crate::{
    FirstTurn, ForcedMove, MatchConfig, MatchError, MatchSeed, MoveError, OpponentStrategy,
    Participant, PickError, Seat,
};

/// Progress of the current game of a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MatchStatus {
    /// The game is in progress and the given seat is to move.
    AwaitingMove(Seat),
    /// The participant in the given seat completed a line.
    Won(Seat),
    /// The board filled up without a line.
    Drawn,
}

impl MatchStatus {
    /// Returns whether the game has been won or drawn.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !self.is_awaiting_move()
    }

    /// Returns the winning seat, if the game has been won.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            Self::Won(seat) => Some(seat),
            Self::AwaitingMove(_) | Self::Drawn => None,
        }
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// The move completed a line for the mover.
    Won {
        /// Seat of the participant that moved.
        winner: Seat,
    },
    /// The move filled the board without completing a line.
    Drawn,
    /// The game goes on.
    Continue {
        /// Seat of the participant to move next.
        next: Seat,
    },
}

/// Why the automated opponent chose its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveReason {
    /// The cell completes one of its own lines.
    Win,
    /// The cell stops the opponent from completing a line.
    Block,
    /// No forced move existed; the cell was drawn at random.
    Random,
}

/// A move made by [`Match::play_automated_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatedMove {
    /// The marked cell.
    pub position: Position,
    /// Why the cell was chosen.
    pub reason: MoveReason,
    /// Effect of the move on the game.
    pub outcome: MoveOutcome,
}

/// A match between two participants on one board.
///
/// The match owns the board and is the only way to mark it: every move goes
/// through [`Match::apply_move`], which checks that the game is still running,
/// that the position lies on the board, and that the cell is empty. After each
/// move the mover is checked for a completed line first, then the board for a
/// draw; otherwise the turn passes to the other participant.
///
/// A finished game stays finished until [`Match::reset`] starts a new one with
/// the same participants and configuration.
///
/// The random source `R` decides the starting participant (under
/// [`FirstTurn::Random`]) and the automated opponent's random moves.
///
/// # Examples
///
/// ```
/// use noughts_core::{Position, Symbol};
/// use noughts_game::{FirstTurn, Match, MatchConfig, MatchSeed, MoveOutcome, Participant, Seat};
///
/// let config = MatchConfig::default().first_turn(FirstTurn::First);
/// let mut game = Match::with_seed(
///     config,
///     Participant::human(Seat::First, Symbol::X, None),
///     Participant::human(Seat::Second, Symbol::O, None),
///     MatchSeed::random(),
/// )
/// .unwrap();
///
/// let outcome = game.apply_move(Position::new(1, 1)).unwrap();
/// assert_eq!(outcome, MoveOutcome::Continue { next: Seat::Second });
/// assert_eq!(game.turn(), 2);
/// assert!(game.is_occupied(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct Match<R = Pcg64> {
    config: MatchConfig,
    board: Board,
    participants: [Participant; 2],
    current: Seat,
    turn: u32,
    status: MatchStatus,
    rng: R,
}

impl Match<Pcg64> {
    /// Creates a match whose random source is seeded from `seed`.
    ///
    /// Two matches created from the same seed, configuration and participants
    /// play identically when given the same human moves.
    ///
    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn with_seed(
        config: MatchConfig,
        first: Participant,
        second: Participant,
        seed: MatchSeed,
    ) -> Result<Self, MatchError> {
        Self::new(config, first, second, seed.rng())
    }
}

impl<R> Match<R>
where
    R: Rng,
{
    /// Creates a match and starts its first game.
    ///
    /// Both participants' histories are cleared. The starting participant is
    /// chosen according to [`MatchConfig::first_turn`].
    ///
    /// # Errors
    ///
    /// - [`MatchError::Board`] if the configured side length is even or zero,
    ///   or too large to allocate.
    /// - [`MatchError::DuplicateSymbol`] if both participants use the same symbol.
    /// - [`MatchError::PoolSizeMismatch`] if an automated participant was
    ///   created for a different side length.
    pub fn new(
        config: MatchConfig,
        first: Participant,
        second: Participant,
        rng: R,
    ) -> Result<Self, MatchError> {
        let board = Board::new(config.side_length)?;
        if first.symbol() == second.symbol() {
            return Err(MatchError::DuplicateSymbol {
                symbol: first.symbol(),
            });
        }
        for participant in [&first, &second] {
            if let Some(pool) = participant.remaining_pool()
                && pool.side_length() != board.side_length()
            {
                return Err(MatchError::PoolSizeMismatch {
                    expected: board.side_length(),
                    actual: pool.side_length(),
                });
            }
        }

        let mut this = Self {
            config,
            board,
            participants: [first, second],
            current: Seat::First,
            turn: 1,
            status: MatchStatus::AwaitingMove(Seat::First),
            rng,
        };
        this.start_game();
        log::debug!(
            "new {n}x{n} match: {} vs {}",
            this.participants[0],
            this.participants[1],
            n = this.board.side_length(),
        );
        Ok(this)
    }

    /// Returns the configuration the match was created with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.board.side_length()
    }

    /// Returns both participants in seat order.
    #[must_use]
    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    /// Returns the participant in the given seat.
    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat.index()]
    }

    /// Returns the seat whose turn it is.
    ///
    /// Once the game is finished this is the seat that made the last move.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Returns the participant whose turn it is.
    #[must_use]
    pub fn current_participant(&self) -> &Participant {
        self.participant(self.current)
    }

    /// Returns the 1-based number of the current move.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the progress of the current game.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns whether `pos` lies on the board.
    #[must_use]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        self.board.is_within_bounds(pos)
    }

    /// Returns whether `pos` lies on the board and holds a symbol.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.board.is_within_bounds(pos) && self.board.is_occupied(pos)
    }

    /// Returns whether the current participant holds a complete line.
    #[must_use]
    pub fn current_participant_has_won(&self) -> bool {
        self.board.has_line(self.current_participant().symbol())
    }

    /// Returns whether the board is full and nobody holds a line.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.board.is_full()
            && !self
                .participants
                .iter()
                .any(|participant| self.board.has_line(participant.symbol()))
    }

    /// Marks `pos` for the current participant.
    ///
    /// On success the symbol is placed, the position is appended to the
    /// participant's history, and the game is either finished or handed to
    /// the other participant.
    ///
    /// # Errors
    ///
    /// Checked in this order, with the match left unchanged on error:
    ///
    /// - [`MoveError::GameOver`] if the game has been won or drawn.
    /// - [`MoveError::OutOfBounds`] if `pos` lies outside the board.
    /// - [`MoveError::Occupied`] if the cell already holds a symbol.
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_within_bounds(pos) {
            return Err(MoveError::OutOfBounds {
                position: pos,
                side_length: self.board.side_length(),
            });
        }
        if self.board.is_occupied(pos) {
            return Err(MoveError::Occupied { position: pos });
        }

        let seat = self.current;
        let participant = &mut self.participants[seat.index()];
        self.board.place(pos, participant.symbol());
        participant.record_move(pos);
        log::debug!(
            "turn {}: {} placed a symbol on {pos}",
            self.turn,
            participant.name()
        );

        let outcome = if self.current_participant_has_won() {
            self.status = MatchStatus::Won(seat);
            MoveOutcome::Won { winner: seat }
        } else if self.is_drawn() {
            self.status = MatchStatus::Drawn;
            MoveOutcome::Drawn
        } else {
            self.advance_turn();
            MoveOutcome::Continue { next: self.current }
        };
        if !outcome.is_continue() {
            log::debug!("game finished after {} moves: {:?}", self.turn, self.status);
        }
        Ok(outcome)
    }

    /// Computes the automated opponent's forced move for the current board.
    ///
    /// The automated participant is the current one if it is automated,
    /// otherwise the other one. Its own history is checked for a win, then
    /// its opponent's history for a block.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoAutomatedParticipant`] if neither participant
    /// is automated.
    pub fn forced_move(&self) -> Result<Option<ForcedMove>, MatchError> {
        let seat = self
            .automated_seat()
            .ok_or(MatchError::NoAutomatedParticipant)?;
        Ok(OpponentStrategy::forced_move(
            &self.board,
            self.participant(seat).history(),
            self.participant(seat.other()).history(),
        ))
    }

    /// Lets the current, automated participant make its move.
    ///
    /// A forced move (win, then block) is taken when available. Otherwise
    /// cells are drawn from the participant's pool until an empty one comes
    /// up; the pool only tracks the participant's own draws, so cells taken by
    /// the opponent are skipped.
    ///
    /// # Errors
    ///
    /// - [`MatchError::Move`] with [`MoveError::GameOver`] if the game is finished.
    /// - [`MatchError::NotAutomated`] if the current participant is human.
    /// - [`MatchError::Pick`] if the pool runs out before an empty cell is drawn.
    pub fn play_automated_turn(&mut self) -> Result<AutomatedMove, MatchError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver.into());
        }
        let seat = self.current;
        if !self.participant(seat).is_automated() {
            return Err(MatchError::NotAutomated);
        }

        let (position, reason) = match self.forced_move()? {
            Some(ForcedMove::Win(pos)) => (pos, MoveReason::Win),
            Some(ForcedMove::Block(pos)) => (pos, MoveReason::Block),
            None => (self.draw_empty_cell(seat)?, MoveReason::Random),
        };
        log::trace!("{} chose {position} ({reason:?})", self.participant(seat).name());
        let outcome = self.apply_move(position)?;
        Ok(AutomatedMove {
            position,
            reason,
            outcome,
        })
    }

    /// Starts a new game with the same participants and configuration.
    ///
    /// The board is cleared, both histories are emptied (refilling any
    /// automated pool), the turn counter goes back to 1, and the starting
    /// participant is chosen again.
    pub fn reset(&mut self) {
        self.start_game();
        log::debug!(
            "match reset, {} moves first",
            self.current_participant().name()
        );
    }

    fn start_game(&mut self) {
        self.board.clear();
        for participant in &mut self.participants {
            participant.reset_history();
        }
        self.current = self.choose_first_seat();
        self.turn = 1;
        self.status = MatchStatus::AwaitingMove(self.current);
    }

    fn choose_first_seat(&mut self) -> Seat {
        match self.config.first_turn {
            FirstTurn::First => Seat::First,
            FirstTurn::Second => Seat::Second,
            FirstTurn::Random => {
                if self.rng.random_bool(0.5) {
                    Seat::First
                } else {
                    Seat::Second
                }
            }
        }
    }

    fn advance_turn(&mut self) {
        self.current = self.current.other();
        self.turn += 1;
        self.status = MatchStatus::AwaitingMove(self.current);
    }

    fn automated_seat(&self) -> Option<Seat> {
        [self.current, self.current.other()]
            .into_iter()
            .find(|seat| self.participant(*seat).is_automated())
    }

    fn draw_empty_cell(&mut self, seat: Seat) -> Result<Position, PickError> {
        let participant = &mut self.participants[seat.index()];
        loop {
            let pos = participant.pick_random_position(&mut self.rng)?;
            if !self.board.is_occupied(pos) {
                return Ok(pos);
            }
            log::trace!("drawn cell {pos} is occupied, drawing again");
        }
    }
}
