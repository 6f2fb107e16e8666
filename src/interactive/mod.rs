//! Interactive TUI play mode
//!
//! Full-screen terminal interface for playing either game.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
