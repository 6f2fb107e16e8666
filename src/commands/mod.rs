//! Command implementations

pub mod openers;
pub mod score;
pub mod simple;

pub use openers::{OpenersResult, run_openers};
pub use score::{ScoreResult, ScoreRow, score_guesses};
pub use simple::run_simple;
