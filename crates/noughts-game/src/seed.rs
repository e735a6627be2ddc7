//! Reproducible match seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed for a match's random source.
///
/// The seed fixes both the first-turn draw and every random move of the
/// automated opponent, so a game can be replayed exactly. It is displayed and
/// parsed as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use noughts_game::MatchSeed;
///
/// let seed = MatchSeed::random();
/// let parsed: MatchSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSeed([u8; 32]);

/// Errors that can occur when parsing a [`MatchSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("invalid seed length: expected 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl MatchSeed {
    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the generator this seed describes.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for MatchSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for MatchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MatchSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let high = hex_value(s[i * 2]).ok_or(SeedParseError::InvalidDigit { offset: i * 2 })?;
            let low = hex_value(s[i * 2 + 1])
                .ok_or(SeedParseError::InvalidDigit { offset: i * 2 + 1 })?;
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
