//! Match rules and the automated opponent for grid-marking games.
//!
//! This crate builds on [`noughts_core`] and adds everything that involves
//! turns: participants and their move histories, a [`Match`] that validates
//! and applies moves, and the [`OpponentStrategy`] used by the automated
//! participant.
//!
//! # Overview
//!
//! - [`Participant`]: a human or automated player (see [`ParticipantKind`])
//! - [`Match`]: owns the board and both participants, enforces turn order and
//!   decides wins and draws
//! - [`OpponentStrategy`]: the win-then-block heuristic
//! - [`MatchConfig`] and [`MatchSeed`]: board size, first-turn policy and a
//!   reproducible random source
//!
//! # Examples
//!
//! ```
//! use noughts_core::{Position, Symbol};
//! use noughts_game::{FirstTurn, Match, MatchConfig, MatchSeed, MoveReason, Participant, Seat};
//!
//! let config = MatchConfig::default().first_turn(FirstTurn::First);
//! let mut game = Match::with_seed(
//!     config,
//!     Participant::human(Seat::First, Symbol::X, Some("Ada")),
//!     Participant::automated(Symbol::O, config.side_length),
//!     MatchSeed::random(),
//! )
//! .unwrap();
//!
//! game.apply_move(Position::new(0, 0)).unwrap();
//! let reply = game.play_automated_turn().unwrap();
//! assert_eq!(reply.reason, MoveReason::Random);
//! assert_eq!(game.turn(), 3);
//! ```

mod config;
mod error;
mod game;
mod participant;
mod seed;
pub mod strategy;

pub use self::{
    config::{FirstTurn, MatchConfig},
    error::{MatchError, MoveError},
    game::{AutomatedMove, Match, MatchStatus, MoveOutcome, MoveReason},
    participant::{AUTOMATED_NAME, Participant, ParticipantKind, PickError, RemainingPool, Seat},
    seed::{MatchSeed, SeedParseError},
    strategy::{ForcedMove, NearLines, OpponentStrategy},
};
