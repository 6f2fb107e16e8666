//! Quintle
//!
//! Two five-symbol guessing games for the terminal - a word game and a
//! prime-number game - sharing one duplicate-aware evaluator and
//! share-ready result text.
//!
//! # Quick Start
//!
//! ```rust
//! use quintle::core::{Quint, Variant, Verdict};
//!
//! let secret = Quint::parse(Variant::Wordle, "slate").unwrap();
//! let guess = Quint::parse(Variant::Wordle, "crane").unwrap();
//!
//! let verdict = Verdict::evaluate(&secret, &guess);
//! assert_eq!(verdict.glyphs(), "⬛⬛🟩⬛🟩");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Secret and guess pools
pub mod pools;

// Opener quality analysis
pub mod rank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
