//! Noughts text front-end.
//!
//! Plays grid-marking games in the terminal, either between two local players
//! or against the automated opponent.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin noughts
//! ```
//!
//! Two local players on a 5x5 board, with custom symbols:
//!
//! ```sh
//! cargo run --bin noughts -- --mode pvp --size 5 --player-symbol A --opponent-symbol B
//! ```
//!
//! Replay a game against the automated opponent (the seed is logged at `info`):
//!
//! ```sh
//! RUST_LOG=info cargo run --bin noughts -- --seed <HEX>
//! ```

use std::{io, process};

use clap::{Parser, ValueEnum};
use noughts_core::{Board, Symbol};
use noughts_game::{FirstTurn, Match, MatchConfig, MatchSeed, Participant, Seat};

use crate::session::Session;

mod input;
mod session;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Two local players.
    Pvp,
    /// One local player against the automated opponent.
    Cpu,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum First {
    /// Draw the starting participant for every game.
    Random,
    /// The player always starts.
    First,
    /// The opponent always starts.
    Second,
}

impl From<First> for FirstTurn {
    fn from(first: First) -> Self {
        match first {
            First::Random => Self::Random,
            First::First => Self::First,
            First::Second => Self::Second,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the board. Must be odd.
    #[arg(short, long, value_name = "N", default_value_t = MatchConfig::DEFAULT_SIDE_LENGTH)]
    size: usize,

    /// Who the player faces.
    #[arg(short, long, value_enum, default_value = "cpu")]
    mode: Mode,

    /// Who moves first in each game.
    #[arg(long, value_enum, default_value = "random")]
    first: First,

    /// Seed for the random source, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<MatchSeed>,

    /// Symbol of the (first) player.
    #[arg(long, value_name = "CHAR", default_value = "X", value_parser = input::parse_symbol)]
    player_symbol: Symbol,

    /// Symbol of the second player or the automated opponent.
    #[arg(long, value_name = "CHAR", default_value = "O", value_parser = input::parse_symbol)]
    opponent_symbol: Symbol,

    /// Name of the (first) player.
    #[arg(long, value_name = "NAME")]
    player_name: Option<String>,

    /// Name of the second player. Ignored against the automated opponent.
    #[arg(long, value_name = "NAME")]
    opponent_name: Option<String>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(MatchSeed::random);
    log::info!("seed: {seed}");

    if let Err(err) = Board::check_side_length(args.size) {
        eprintln!("Cannot start the game: {err}");
        process::exit(2);
    }
    let config = MatchConfig::default()
        .side_length(args.size)
        .first_turn(args.first.into());
    let player = Participant::human(
        Seat::First,
        args.player_symbol,
        args.player_name.as_deref(),
    );
    let opponent = match args.mode {
        Mode::Pvp => Participant::human(
            Seat::Second,
            args.opponent_symbol,
            args.opponent_name.as_deref(),
        ),
        Mode::Cpu => {
            if args.opponent_name.is_some() {
                log::warn!("--opponent-name is ignored against the automated opponent");
            }
            Participant::automated(args.opponent_symbol, args.size)
        }
    };

    let game = match Match::with_seed(config, player, opponent, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Cannot start the game: {err}");
            process::exit(2);
        }
    };

    let mut session = Session::new(game, io::stdin().lock(), io::stdout().lock());
    if let Err(err) = session.run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
