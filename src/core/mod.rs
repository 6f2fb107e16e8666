//! Core domain types shared by both games
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod quint;
mod variant;
mod verdict;

pub use quint::{Quint, QuintError};
pub use variant::Variant;
pub use verdict::{Mark, Verdict};

/// Number of symbols in every secret and guess
pub const LENGTH: usize = 5;

/// Guesses a session allows before the game is lost
pub const MAX_ATTEMPTS: usize = 6;
