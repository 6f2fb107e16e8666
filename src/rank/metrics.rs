//! Partition metrics for a single opening guess
//!
//! Given a guess and the secret pool, groups the secrets by the verdict the
//! guess would receive against each of them. The bucket sizes measure how
//! much the guess narrows the pool.

use crate::core::{Quint, Verdict};
use rustc_hash::FxHashMap;

/// How well one guess partitions a secret pool
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Size of the largest verdict bucket (guaranteed upper bound on
    /// remaining candidates)
    pub worst_case: usize,
    /// Expected remaining candidates, weighting each bucket by its own
    /// probability: sum of n²/N over all buckets
    pub expected: f64,
}

/// Compute partition metrics for `guess` over `secrets`
///
/// # Examples
/// ```
/// use quintle::core::{Quint, Variant};
/// use quintle::rank::partition_metrics;
///
/// let secrets = vec![
///     Quint::parse(Variant::Wordle, "slate").unwrap(),
///     Quint::parse(Variant::Wordle, "irate").unwrap(),
/// ];
/// let guess = Quint::parse(Variant::Wordle, "crane").unwrap();
///
/// let metrics = partition_metrics(&guess, &secrets);
/// assert!(metrics.worst_case <= 2);
/// ```
#[must_use]
pub fn partition_metrics(guess: &Quint, secrets: &[Quint]) -> Metrics {
    if secrets.is_empty() {
        return Metrics {
            worst_case: 0,
            expected: 0.0,
        };
    }

    let buckets = group_by_verdict(guess, secrets);

    let worst_case = buckets.values().max().copied().unwrap_or(0);
    let squared_sum: usize = buckets.values().map(|&n| n * n).sum();
    let expected = squared_sum as f64 / secrets.len() as f64;

    Metrics {
        worst_case,
        expected,
    }
}

/// Group secrets by the verdict `guess` would receive against each
fn group_by_verdict(guess: &Quint, secrets: &[Quint]) -> FxHashMap<Verdict, usize> {
    let mut counts = FxHashMap::default();

    for secret in secrets {
        let verdict = Verdict::evaluate(secret, guess);
        *counts.entry(verdict).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    fn words(texts: &[&str]) -> Vec<Quint> {
        texts
            .iter()
            .map(|t| Quint::parse(Variant::Wordle, t).unwrap())
            .collect()
    }

    #[test]
    fn metrics_empty_pool() {
        let guess = Quint::parse(Variant::Wordle, "crane").unwrap();
        let metrics = partition_metrics(&guess, &[]);
        assert_eq!(metrics.worst_case, 0);
        assert!(metrics.expected.abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_undiscriminating_guess() {
        // Every secret yields the same all-absent verdict: one bucket of 3
        let secrets = words(&["aaaaa", "bbbbb", "ccccc"]);
        let guess = Quint::parse(Variant::Wordle, "zzzzz").unwrap();

        let metrics = partition_metrics(&guess, &secrets);
        assert_eq!(metrics.worst_case, 3);
        assert!((metrics.expected - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_partially_discriminating_guess() {
        // aaaaa vs the pool: {all-exact: 1} and {all-absent: 2}
        // expected = (1² + 2²) / 3 = 5/3
        let secrets = words(&["aaaaa", "bbbbb", "ccccc"]);
        let guess = Quint::parse(Variant::Wordle, "aaaaa").unwrap();

        let metrics = partition_metrics(&guess, &secrets);
        assert_eq!(metrics.worst_case, 2);
        assert!((metrics.expected - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_perfect_split() {
        // Each secret lands in its own bucket
        let secrets = words(&["aabbb", "bbaaa"]);
        let guess = Quint::parse(Variant::Wordle, "aabbb").unwrap();

        let metrics = partition_metrics(&guess, &secrets);
        assert_eq!(metrics.worst_case, 1);
        assert!((metrics.expected - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_bucket_sizes_sum_to_pool() {
        let secrets = words(&["slate", "irate", "crate", "grate"]);
        let guess = Quint::parse(Variant::Wordle, "crane").unwrap();

        let buckets = group_by_verdict(&guess, &secrets);
        assert_eq!(buckets.values().sum::<usize>(), secrets.len());
    }

    #[test]
    fn metrics_worst_case_bounds() {
        let secrets = words(&["slate", "irate", "trace"]);
        let guess = Quint::parse(Variant::Wordle, "crane").unwrap();

        let metrics = partition_metrics(&guess, &secrets);
        assert!(metrics.worst_case >= 1);
        assert!(metrics.worst_case <= secrets.len());
        assert!(metrics.expected <= secrets.len() as f64);
        assert!(metrics.expected >= 1.0);
    }

    #[test]
    fn metrics_expected_bounded_by_worst_case() {
        // expected is an average of bucket sizes weighted by probability,
        // so it can never exceed the largest bucket
        let secrets = words(&["slate", "irate", "crate", "grate", "aaaaa"]);
        let guess = Quint::parse(Variant::Wordle, "trace").unwrap();

        let metrics = partition_metrics(&guess, &secrets);
        assert!(metrics.expected <= metrics.worst_case as f64 + f64::EPSILON);
    }
}
