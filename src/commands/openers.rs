//! Opener ranking command
//!
//! Ranks opening guesses for a pool and reports timing alongside the
//! metrics.

use crate::pools::Pool;
use crate::rank::{RankedOpener, rank_openers};
use std::time::{Duration, Instant};

/// Result of an opener ranking run
pub struct OpenersResult {
    /// The top openers, best first
    pub ranked: Vec<RankedOpener>,
    /// Size of the secret pool the openers were scored against
    pub secrets: usize,
    /// Wall-clock time for the full scan
    pub duration: Duration,
}

/// Rank all openers for the pool and keep the best `top`
#[must_use]
pub fn run_openers(pool: &Pool, top: usize) -> OpenersResult {
    let start = Instant::now();

    let mut ranked = rank_openers(pool);
    ranked.truncate(top);

    OpenersResult {
        ranked,
        secrets: pool.len(),
        duration: start.elapsed(),
    }
}
