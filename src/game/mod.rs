//! Game session state machine
//!
//! One session per play-through, generic over the game variant.

mod session;

pub use session::{GameError, Session, Status, Submission, Turn};
