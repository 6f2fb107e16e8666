//! Opener quality analysis
//!
//! Measures how well candidate opening guesses partition a secret pool, and
//! ranks the whole guess universe in parallel.

mod metrics;
mod scan;

pub use metrics::{Metrics, partition_metrics};
pub use scan::{RankedOpener, rank_openers, rank_openers_with_progress};
