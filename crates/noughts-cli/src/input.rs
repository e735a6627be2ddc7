//! Parsing of typed moves and symbols.

use noughts_core::{InvalidSymbol, Position, Symbol};

/// Errors that can occur when parsing user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("nothing was entered")]
    Empty,
    /// The text is neither a `column,row` pair nor a cell number.
    #[display("the move was written in an incorrect format")]
    InvalidFormat,
    /// The character cannot be used as a symbol.
    #[display("{_0}")]
    InvalidSymbol(InvalidSymbol),
}

/// Parses a move typed by a player.
///
/// Accepted formats, all 1-based:
///
/// - `"c,r"` or `"c.r"`: column and row, `"1,1"` being the top left corner
/// - `"z"`: cell number in row-major order, `"1"` being the top left corner
///
/// The position is not checked against the board; a cell number larger than
/// `side_length²` yields a position below the last row.
pub fn parse_move(text: &str, side_length: usize) -> Result<Position, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some((column, row)) = text.split_once(',').or_else(|| text.split_once('.')) {
        return Ok(Position::new(parse_ordinal(column)?, parse_ordinal(row)?));
    }
    let index = parse_ordinal(text)?;
    Ok(Position::from_linear_index(index, side_length))
}

/// Parses a 1-based number into a zero-based index.
fn parse_ordinal(text: &str) -> Result<usize, InputError> {
    let value: usize = text
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidFormat)?;
    value.checked_sub(1).ok_or(InputError::InvalidFormat)
}

/// Parses a symbol given on the command line.
pub fn parse_symbol(text: &str) -> Result<Symbol, InputError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(InputError::Empty),
        (Some(c), None) => Symbol::new(c).map_err(InputError::InvalidSymbol),
        (Some(_), Some(_)) => Err(InputError::InvalidFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_move("1,1", 3), Ok(Position::new(0, 0)));
        assert_eq!(parse_move("3.2", 3), Ok(Position::new(2, 1)));
        assert_eq!(parse_move(" 2 , 3 \n", 3), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_move("1", 3), Ok(Position::new(0, 0)));
        assert_eq!(parse_move("5", 3), Ok(Position::new(1, 1)));
        assert_eq!(parse_move("7", 3), Ok(Position::new(0, 2)));
        assert_eq!(parse_move("25", 5), Ok(Position::new(4, 4)));
    }

    #[test]
    fn test_out_of_range_is_left_to_the_match() {
        assert_eq!(parse_move("4,1", 3), Ok(Position::new(3, 0)));
        assert_eq!(parse_move("10", 3), Ok(Position::new(0, 3)));
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!(parse_move("", 3), Err(InputError::Empty));
        assert_eq!(parse_move("  \n", 3), Err(InputError::Empty));
        for text in ["0", "0,1", "1,0", "a", "1,b", "1,2,3", "-1", "1;2"] {
            assert_eq!(parse_move(text, 3), Err(InputError::InvalidFormat), "{text}");
        }
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("X"), Ok(Symbol::X));
        assert_eq!(parse_symbol(" O "), Ok(Symbol::O));
        assert_eq!(parse_symbol(""), Err(InputError::Empty));
        assert_eq!(parse_symbol("XO"), Err(InputError::InvalidFormat));
        assert!(matches!(
            parse_symbol("\u{7}"),
            Err(InputError::InvalidSymbol(_))
        ));
    }
}
