//! Secret and guess pools for both games
//!
//! Provides embedded pools compiled into the binary, plus the [`Pool`] type
//! that bundles a game's secrets with its guess vocabulary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, PRIMES, PRIMES_COUNT};

use crate::core::{LENGTH, Quint, Variant};
use loader::quints_from_slice;
use rustc_hash::FxHashSet;

/// A game's secrets and its guess vocabulary
///
/// The secret order is stable: a secret's index in the pool is the number
/// reported in share text, so two pools built from the same list agree on
/// every index.
#[derive(Debug, Clone)]
pub struct Pool {
    variant: Variant,
    secrets: Vec<Quint>,
    allowed: Vec<Quint>,
    allowed_set: FxHashSet<[u8; LENGTH]>,
}

impl Pool {
    /// Word game pool: embedded answers plus the allowed-guess superset
    #[must_use]
    pub fn wordle() -> Self {
        Self::custom(
            Variant::Wordle,
            quints_from_slice(Variant::Wordle, ANSWERS),
            quints_from_slice(Variant::Wordle, ALLOWED),
        )
    }

    /// Number game pool: every five-digit prime, with permissive guessing
    #[must_use]
    pub fn primel() -> Self {
        Self::custom(
            Variant::Primel,
            quints_from_slice(Variant::Primel, PRIMES),
            Vec::new(),
        )
    }

    /// Embedded pool for the given game
    #[must_use]
    pub fn embedded(variant: Variant) -> Self {
        match variant {
            Variant::Wordle => Self::wordle(),
            Variant::Primel => Self::primel(),
        }
    }

    /// Build a pool from explicit lists
    ///
    /// Guesses are vetted against the union of `allowed` and `secrets`, so a
    /// secret is always a permitted guess even when the allowed list omits it.
    #[must_use]
    pub fn custom(variant: Variant, secrets: Vec<Quint>, allowed: Vec<Quint>) -> Self {
        let allowed_set = allowed
            .iter()
            .chain(secrets.iter())
            .map(|quint| *quint.symbols())
            .collect();

        Self {
            variant,
            secrets,
            allowed,
            allowed_set,
        }
    }

    /// Which game this pool serves
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Secrets in stable index order
    #[inline]
    #[must_use]
    pub fn secrets(&self) -> &[Quint] {
        &self.secrets
    }

    /// Number of secrets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether the pool holds no secrets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Check whether a parsed guess may be submitted in this pool's game
    ///
    /// The word game requires vocabulary membership; the number game accepts
    /// any alphabet-valid guess, prime or not.
    #[must_use]
    pub fn permits(&self, guess: &Quint) -> bool {
        if self.variant.checks_vocabulary() {
            self.allowed_set.contains(guess.symbols())
        } else {
            true
        }
    }

    /// Index of a secret in the stable order, if present
    #[must_use]
    pub fn index_of(&self, secret: &Quint) -> Option<usize> {
        self.secrets.iter().position(|s| s == secret)
    }

    /// Guess universe for opener ranking
    ///
    /// The allowed list when one exists, otherwise the secrets themselves.
    #[must_use]
    pub fn guessable(&self) -> &[Quint] {
        if self.allowed.is_empty() {
            &self.secrets
        } else {
            &self.allowed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn primes_count_matches_const() {
        assert_eq!(PRIMES.len(), PRIMES_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn primes_are_five_digit_and_ascending() {
        assert_eq!(PRIMES.first(), Some(&"10007"));
        assert_eq!(PRIMES.last(), Some(&"99991"));

        let mut previous = 0u32;
        for &prime in PRIMES {
            assert_eq!(prime.len(), 5, "Prime '{prime}' is not 5 digits");
            let value: u32 = prime.parse().unwrap();
            assert!(value > previous, "Prime '{prime}' out of order");
            previous = value;
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        // Every answer word should be guessable
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for &answer in ANSWERS {
            assert!(
                allowed_set.contains(&answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 710, "Expected 710 answer words");
        assert_eq!(ALLOWED_COUNT, 955, "Expected 955 allowed words");
        assert_eq!(PRIMES_COUNT, 8363, "Expected 8,363 five-digit primes");
    }

    #[test]
    fn wordle_pool_vets_vocabulary() {
        let pool = Pool::wordle();
        assert_eq!(pool.variant(), Variant::Wordle);
        assert_eq!(pool.len(), ANSWERS_COUNT);

        let secret_word = Quint::parse(Variant::Wordle, "crane").unwrap();
        let guess_only = Quint::parse(Variant::Wordle, "aback").unwrap();
        let gibberish = Quint::parse(Variant::Wordle, "zzzzz").unwrap();

        assert!(pool.permits(&secret_word));
        assert!(pool.permits(&guess_only));
        assert!(!pool.permits(&gibberish));

        // Guess-only words never appear as secrets
        assert!(pool.index_of(&secret_word).is_some());
        assert!(pool.index_of(&guess_only).is_none());
    }

    #[test]
    fn primel_pool_permits_any_digit_string() {
        let pool = Pool::primel();
        assert_eq!(pool.variant(), Variant::Primel);
        assert_eq!(pool.len(), PRIMES_COUNT);

        // Composite, even, not prime - still a legal guess
        let composite = Quint::parse(Variant::Primel, "12345").unwrap();
        assert!(pool.permits(&composite));
        assert!(pool.index_of(&composite).is_none());

        let prime = Quint::parse(Variant::Primel, "10007").unwrap();
        assert_eq!(pool.index_of(&prime), Some(0));
    }

    #[test]
    fn custom_pool_always_permits_its_secrets() {
        let secrets = quints_from_slice(Variant::Wordle, &["vibes", "fjord"]);
        let pool = Pool::custom(Variant::Wordle, secrets, Vec::new());

        let secret = Quint::parse(Variant::Wordle, "fjord").unwrap();
        assert!(pool.permits(&secret));
        assert_eq!(pool.index_of(&secret), Some(1));
    }

    #[test]
    fn guessable_falls_back_to_secrets() {
        let secrets = quints_from_slice(Variant::Primel, &["10007", "10009"]);
        let pool = Pool::custom(Variant::Primel, secrets, Vec::new());
        assert_eq!(pool.guessable().len(), 2);

        let wordle = Pool::wordle();
        assert_eq!(wordle.guessable().len(), ALLOWED_COUNT);
    }
}
