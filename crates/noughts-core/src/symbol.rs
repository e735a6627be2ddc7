//! Participant symbol representation.

use std::fmt::{self, Display};

/// The single character a participant marks cells with.
///
/// Any printable, non-whitespace character is accepted. Whitespace is rejected
/// because an empty cell renders as a blank and the two would be
/// indistinguishable on the board.
///
/// # Examples
///
/// ```
/// use noughts_core::Symbol;
///
/// let symbol = Symbol::new('A').unwrap();
/// assert_eq!(symbol.as_char(), 'A');
/// assert_eq!(Symbol::X.to_string(), "X");
///
/// assert!(Symbol::new(' ').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

/// Error returned when a character cannot be used as a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid symbol: {_0:?} is not a printable, non-whitespace character")]
pub struct InvalidSymbol(#[error(not(source))] pub char);

impl Symbol {
    /// The conventional first symbol.
    pub const X: Self = Self('X');

    /// The conventional second symbol.
    pub const O: Self = Self('O');

    /// Creates a symbol from a character.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSymbol`] if `c` is whitespace or a control character.
    pub fn new(c: char) -> Result<Self, InvalidSymbol> {
        if c.is_whitespace() || c.is_control() {
            return Err(InvalidSymbol(c));
        }
        Ok(Self(c))
    }

    /// Returns the underlying character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = InvalidSymbol;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_printable_characters() {
        for c in ['X', 'O', 'a', '#', '7', 'é'] {
            assert_eq!(Symbol::new(c).map(Symbol::as_char), Ok(c));
        }
    }

    #[test]
    fn test_new_rejects_blank_characters() {
        for c in [' ', '\t', '\n', '\u{7}'] {
            assert_eq!(Symbol::new(c), Err(InvalidSymbol(c)));
        }
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Symbol::try_from('O'), Ok(Symbol::O));
    }
}
