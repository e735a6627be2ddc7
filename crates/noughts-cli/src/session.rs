//! The interactive game loop.

use std::io::{self, BufRead, Write};

use noughts_core::Position;
use noughts_game::{Match, MatchError, MoveError, MoveOutcome, Seat};

use crate::input;

/// Errors that end a session early.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed.
    #[display("terminal I/O failed: {_0}")]
    Io(io::Error),
    /// The match rejected an automated move.
    #[display("{_0}")]
    Match(MatchError),
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MatchError> for SessionError {
    fn from(err: MatchError) -> Self {
        Self::Match(err)
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    InputClosed,
}

/// A sequence of games between the same participants, played over text I/O.
pub struct Session<I, O> {
    game: Match,
    input: I,
    output: O,
    rules_shown: bool,
}

impl<I, O> Session<I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(game: Match, input: I, output: O) -> Self {
        Self {
            game,
            input,
            output,
            rules_shown: false,
        }
    }

    /// Plays games until the players decline a rematch or the input closes.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            if self.play_game()? == GameEnd::InputClosed {
                return Ok(());
            }
            if !self.ask_play_again()? {
                return Ok(());
            }
            self.game.reset();
        }
    }

    fn play_game(&mut self) -> Result<GameEnd, SessionError> {
        writeln!(self.output, "The game will now commence...")?;
        writeln!(self.output)?;
        write!(self.output, "{}", self.game.board())?;
        writeln!(
            self.output,
            "{} will start the turn...",
            self.game.current_participant()
        )?;

        loop {
            let outcome = if self.game.current_participant().is_automated() {
                let seat = self.game.current_seat();
                let played = self.game.play_automated_turn()?;
                self.report_move(seat, played.position)?;
                played.outcome
            } else {
                match self.play_human_turn()? {
                    Some(outcome) => outcome,
                    None => return Ok(GameEnd::InputClosed),
                }
            };

            match outcome {
                MoveOutcome::Won { winner } => {
                    writeln!(
                        self.output,
                        "\nCongratulations to {} on winning the game...",
                        self.game.participant(winner)
                    )?;
                    return Ok(GameEnd::Finished);
                }
                MoveOutcome::Drawn => {
                    writeln!(
                        self.output,
                        "\nThere are no available spaces left, and the game has ended in a tie..."
                    )?;
                    return Ok(GameEnd::Finished);
                }
                MoveOutcome::Continue { .. } => {}
            }
        }
    }

    /// Prompts the current human until a legal move is entered.
    ///
    /// Returns `None` when the input is closed.
    fn play_human_turn(&mut self) -> Result<Option<MoveOutcome>, SessionError> {
        if !self.rules_shown {
            self.print_rules()?;
            self.rules_shown = true;
        }

        loop {
            writeln!(
                self.output,
                "\n{} has the current turn:",
                self.game.current_participant()
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let pos = match input::parse_move(&line, self.game.side_length()) {
                Ok(pos) => pos,
                Err(err) => {
                    log::debug!("rejected input {line:?}: {err}");
                    writeln!(self.output, "{}. Try again...", capitalize(&err.to_string()))?;
                    self.print_rules()?;
                    continue;
                }
            };

            let seat = self.game.current_seat();
            match self.game.apply_move(pos) {
                Ok(outcome) => {
                    self.report_move(seat, pos)?;
                    return Ok(Some(outcome));
                }
                Err(MoveError::OutOfBounds { .. }) => {
                    writeln!(
                        self.output,
                        "You are trying to place a symbol outside of the grid. Try again..."
                    )?;
                    self.print_rules()?;
                }
                Err(MoveError::Occupied { .. }) => {
                    writeln!(
                        self.output,
                        "The space is already being occupied. Choose another space."
                    )?;
                    write!(self.output, "{}", self.game.board())?;
                }
                Err(err @ MoveError::GameOver) => return Err(MatchError::from(err).into()),
            }
        }
    }

    fn report_move(&mut self, seat: Seat, pos: Position) -> io::Result<()> {
        let n = self.game.side_length();
        let participant = self.game.participant(seat);
        write!(self.output, "{}", self.game.board())?;
        writeln!(
            self.output,
            "{participant} placed a symbol on {} / {pos}",
            pos.display_index(n)
        )
    }

    fn print_rules(&mut self) -> io::Result<()> {
        let n = self.game.side_length();
        writeln!(
            self.output,
            "Specify your move, in one of the two formats below and press enter:"
        )?;
        writeln!(
            self.output,
            "\"x.y\" or \"x,y\": x is the column, and y is the row. \
             Top left corner is 1.1, whereas bottom left corner would be \"1.{n}\"."
        )?;
        writeln!(
            self.output,
            "\"z\": z is the number of the space in the grid. \
             Top left corner would be 1, whereas bottom left corner would be {}.",
            n * n - (n - 1)
        )
    }

    fn ask_play_again(&mut self) -> Result<bool, SessionError> {
        writeln!(
            self.output,
            "\nWould you like to play again with the same configuration? [y/N]"
        )?;
        let Some(answer) = self.read_line()? else {
            return Ok(false);
        };
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
