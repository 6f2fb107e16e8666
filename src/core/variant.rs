//! Game variant selection
//!
//! The word game and the number game are the same game over different
//! alphabets: one draws secrets from a word list and vets guesses against a
//! vocabulary, the other draws five-digit primes and scores any digit string.

use std::fmt;
use std::str::FromStr;

/// Which of the two games a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 5-letter word game; guesses must be in the vocabulary
    Wordle,
    /// 5-digit number game; any digit string is guessable
    Primel,
}

impl Variant {
    /// Check whether a (normalized, ASCII) byte belongs to this game's alphabet
    #[inline]
    #[must_use]
    pub const fn accepts(self, byte: u8) -> bool {
        match self {
            Self::Wordle => byte.is_ascii_lowercase(),
            Self::Primel => byte.is_ascii_digit(),
        }
    }

    /// Whether guesses must be members of the allowed vocabulary
    ///
    /// The number game accepts any five-digit string, prime or not.
    #[inline]
    #[must_use]
    pub const fn checks_vocabulary(self) -> bool {
        matches!(self, Self::Wordle)
    }

    /// Human name for one symbol of this game's alphabet
    #[must_use]
    pub const fn symbol_name(self) -> &'static str {
        match self {
            Self::Wordle => "letter",
            Self::Primel => "digit",
        }
    }

    /// Title used in share-text headers
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Wordle => "Letter Wordle",
            Self::Primel => "Number Primel",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wordle => write!(f, "wordle"),
            Self::Primel => write!(f, "primel"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wordle" | "word" | "w" => Ok(Self::Wordle),
            "primel" | "prime" | "p" => Ok(Self::Primel),
            _ => Err(format!("Unknown game: {s} (use 'wordle' or 'primel')")),
        }
    }
}
