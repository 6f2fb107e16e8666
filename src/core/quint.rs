//! Guess and secret representation
//!
//! A Quint is a validated five-symbol string: a word for the word game, a
//! digit string for the number game. Secrets and guesses are both Quints.

use super::{LENGTH, Variant};
use std::fmt;

/// A five-symbol guess or secret, normalized to lowercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quint {
    text: String,
    symbols: [u8; LENGTH],
}

/// Error type for invalid guess strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuintError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for QuintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Guess contains invalid symbol '{symbol}'")
            }
        }
    }
}

impl std::error::Error for QuintError {}

impl Quint {
    /// Parse a raw input string for the given game
    ///
    /// Input is trimmed and lowercased before validation, so `"CRANE\n"`
    /// parses the same as `"crane"`.
    ///
    /// # Errors
    /// Returns `QuintError` if:
    /// - Length is not exactly 5 after trimming
    /// - Any symbol is outside the game's alphabet
    ///
    /// # Examples
    /// ```
    /// use quintle::core::{Quint, Variant};
    ///
    /// let word = Quint::parse(Variant::Wordle, "CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Quint::parse(Variant::Wordle, "10007").is_err());
    /// assert!(Quint::parse(Variant::Primel, "10007").is_ok());
    /// assert!(Quint::parse(Variant::Primel, "cran3").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn parse(variant: Variant, raw: &str) -> Result<Self, QuintError> {
        let text = raw.trim().to_lowercase();

        // Validate length in characters, so multi-byte input reports a
        // sensible count instead of a byte length
        let char_count = text.chars().count();
        if char_count != LENGTH {
            return Err(QuintError::InvalidLength(char_count));
        }

        // Validate every symbol against the game's alphabet
        if let Some(bad) = text.chars().find(|&c| !c.is_ascii() || !variant.accepts(c as u8)) {
            return Err(QuintError::InvalidSymbol(bad));
        }

        // Five ASCII chars means five bytes
        let symbols: [u8; LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, symbols })
    }

    /// Get the guess as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the guess as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.symbols[position]
    }
}

impl fmt::Display for Quint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
