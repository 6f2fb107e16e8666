//! Full-pool opener ranking
//!
//! Scores every guessable opener against the whole secret pool in parallel.
//! For the number game this is roughly 70 million evaluations, so the scan
//! shows a progress bar.

use super::metrics::{Metrics, partition_metrics};
use crate::core::Quint;
use crate::pools::Pool;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Ordering;

/// One opener and its partition metrics
#[derive(Debug, Clone)]
pub struct RankedOpener {
    pub guess: Quint,
    pub metrics: Metrics,
}

/// Rank every guessable opener, best first
///
/// Ordering is worst-case ascending, then expected remaining ascending, then
/// the guess text itself, so equal-quality openers always list in the same
/// order.
#[must_use]
pub fn rank_openers(pool: &Pool) -> Vec<RankedOpener> {
    rank_openers_with_progress(pool, true)
}

/// Rank openers with the progress bar optionally suppressed
#[must_use]
pub fn rank_openers_with_progress(pool: &Pool, show_progress: bool) -> Vec<RankedOpener> {
    let guesses = pool.guessable();
    let secrets = pool.secrets();

    let pb = if show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message("ranking openers");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut ranked: Vec<RankedOpener> = guesses
        .par_iter()
        .map(|guess| {
            let metrics = partition_metrics(guess, secrets);
            pb.inc(1);
            RankedOpener {
                guess: guess.clone(),
                metrics,
            }
        })
        .collect();

    pb.finish_and_clear();

    ranked.sort_by(compare_openers);
    ranked
}

fn compare_openers(a: &RankedOpener, b: &RankedOpener) -> Ordering {
    a.metrics
        .worst_case
        .cmp(&b.metrics.worst_case)
        .then_with(|| {
            a.metrics
                .expected
                .partial_cmp(&b.metrics.expected)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.guess.text().cmp(b.guess.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;
    use crate::pools::loader::quints_from_slice;

    fn word_pool(secrets: &[&str], allowed: &[&str]) -> Pool {
        Pool::custom(
            Variant::Wordle,
            quints_from_slice(Variant::Wordle, secrets),
            quints_from_slice(Variant::Wordle, allowed),
        )
    }

    #[test]
    fn ranking_prefers_discriminating_openers() {
        // zzzzz lumps every secret into one bucket; trace splits them
        let pool = word_pool(
            &["slate", "irate", "crate", "grate"],
            &["slate", "irate", "crate", "grate", "trace", "zzzzz"],
        );

        let ranked = rank_openers_with_progress(&pool, false);
        assert_eq!(ranked.len(), pool.guessable().len());

        let trace_pos = ranked.iter().position(|r| r.guess.text() == "trace");
        let zzzzz_pos = ranked.iter().position(|r| r.guess.text() == "zzzzz");
        assert!(trace_pos.unwrap() < zzzzz_pos.unwrap());

        // Last place is the guess that learns nothing
        assert_eq!(ranked.last().unwrap().guess.text(), "zzzzz");
        assert_eq!(ranked.last().unwrap().metrics.worst_case, 4);
    }

    #[test]
    fn ranking_is_sorted_and_deterministic() {
        let pool = word_pool(
            &["slate", "irate", "crate"],
            &["slate", "irate", "crate", "trace", "stale"],
        );

        let first = rank_openers_with_progress(&pool, false);
        let second = rank_openers_with_progress(&pool, false);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.guess, b.guess);
            assert_eq!(a.metrics, b.metrics);
        }

        for pair in first.windows(2) {
            assert_ne!(compare_openers(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn ranking_ties_break_alphabetically() {
        // Against a single secret every opener has worst_case 1, so the
        // whole ordering falls through to the text tie-break
        let pool = word_pool(&["ccccc"], &["bbbbb", "aaaaa", "ccccc"]);

        let ranked = rank_openers_with_progress(&pool, false);
        let order: Vec<&str> = ranked.iter().map(|r| r.guess.text()).collect();
        assert_eq!(order, vec!["aaaaa", "bbbbb", "ccccc"]);
    }

    #[test]
    fn number_pool_uses_secrets_as_guesses() {
        let pool = Pool::custom(
            Variant::Primel,
            quints_from_slice(Variant::Primel, &["10007", "10009", "10037"]),
            Vec::new(),
        );

        let ranked = rank_openers_with_progress(&pool, false);
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].metrics.worst_case <= ranked[2].metrics.worst_case);
    }
}
