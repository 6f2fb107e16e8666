//! Guess evaluation and feedback representation
//!
//! A verdict encodes the feedback for one guess as five position marks:
//! - Exact = symbol in the correct position
//! - Present = symbol in the secret, wrong position
//! - Absent = symbol not in the (remaining) secret
//!
//! Duplicate symbols are handled by consuming secret positions: a guess can
//! never collect more non-Absent marks for a symbol than the secret holds.

use super::{LENGTH, Quint};
use std::fmt;

/// Feedback mark for a single guess position
///
/// Ordered from worst to best so that `max` picks the strongest evidence
/// when aggregating marks per symbol (keyboard hints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Symbol does not occur in the remaining secret
    Absent,
    /// Symbol occurs in the secret at a different position
    Present,
    /// Symbol matches the secret at this position
    Exact,
}

impl Mark {
    /// Share-text glyph for this mark
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for one accepted guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; LENGTH]);

impl Verdict {
    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// Both strings are copied into scratch arrays and consumed as marks are
    /// assigned:
    /// 1. First pass: mark exact matches, blanking the position on both sides
    /// 2. Second pass: for each unconsumed guess symbol (left to right), mark
    ///    Present if it still occurs anywhere in the secret scratch, blanking
    ///    the first such secret position
    /// 3. Everything unmarked stays Absent
    ///
    /// # Examples
    /// ```
    /// use quintle::core::{Quint, Variant, Verdict};
    ///
    /// let secret = Quint::parse(Variant::Wordle, "slate").unwrap();
    /// let guess = Quint::parse(Variant::Wordle, "crane").unwrap();
    /// let verdict = Verdict::evaluate(&secret, &guess);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(verdict.glyphs(), "⬛⬛🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Quint, guess: &Quint) -> Self {
        // Space never occurs in either alphabet, so it can blank consumed slots
        const BLANK: u8 = b' ';

        let mut marks = [Mark::Absent; LENGTH];
        let mut secret_scratch = *secret.symbols();
        let mut guess_scratch = *guess.symbols();

        // First pass: exact matches, consuming both sides
        let mut exact = 0;
        for i in 0..LENGTH {
            if guess_scratch[i] == secret_scratch[i] {
                marks[i] = Mark::Exact;
                secret_scratch[i] = BLANK;
                guess_scratch[i] = BLANK;
                exact += 1;
            }
        }

        if exact == LENGTH {
            return Self(marks);
        }

        // Second pass: misplaced symbols, left to right, consuming the first
        // matching secret position
        // Allow: Index needed to check guess_scratch[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..LENGTH {
            if guess_scratch[i] == BLANK {
                continue;
            }
            if let Some(slot) = secret_scratch.iter().position(|&b| b == guess_scratch[i]) {
                marks[i] = Mark::Present;
                secret_scratch[slot] = BLANK;
                guess_scratch[i] = BLANK;
            }
        }

        Self(marks)
    }

    /// All five marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; LENGTH] {
        &self.0
    }

    /// Check if every position matched exactly (a winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Exact)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// One share-text row, e.g. "🟩🟨⬛⬛🟨"
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.0.iter().map(|mark| mark.glyph()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    fn word(text: &str) -> Quint {
        Quint::parse(Variant::Wordle, text).unwrap()
    }

    #[test]
    fn verdict_all_exact_for_identical_strings() {
        for text in ["crane", "slate", "zzzzz", "aaaaa"] {
            let quint = word(text);
            let verdict = Verdict::evaluate(&quint, &quint);
            assert!(verdict.is_win());
            assert_eq!(verdict.count(Mark::Exact), 5);
        }

        for text in ["10007", "99991"] {
            let quint = Quint::parse(Variant::Primel, text).unwrap();
            assert!(Verdict::evaluate(&quint, &quint).is_win());
        }
    }

    #[test]
    fn verdict_all_absent_for_disjoint_strings() {
        let verdict = Verdict::evaluate(&word("fghij"), &word("abcde"));
        assert!(!verdict.is_win());
        assert_eq!(verdict.count(Mark::Absent), 5);
        assert_eq!(verdict.glyphs(), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn verdict_identity_positions() {
        // Guessing the secret's own symbols in order is all Exact even with
        // no duplicates to disambiguate
        let verdict = Verdict::evaluate(&word("abcde"), &word("abcde"));
        assert_eq!(verdict.marks(), &[Mark::Exact; 5]);
    }

    #[test]
    fn verdict_duplicates_capped_by_secret_count() {
        // Secret AABBB, guess BBAAA: no exacts; both guess Bs find secret Bs,
        // A(2) and A(3) consume the secret's two As, and A(4) finds no A left
        // and stays Absent
        let verdict = Verdict::evaluate(&word("aabbb"), &word("bbaaa"));
        assert_eq!(
            verdict.marks(),
            &[
                Mark::Present,
                Mark::Present,
                Mark::Present,
                Mark::Present,
                Mark::Absent,
            ]
        );
    }

    #[test]
    fn verdict_duplicate_letters_both_present() {
        // Secret SPEED, guess ERASE:
        // E(0) present, R(1) absent, A(2) absent, S(3) present,
        // E(4) present (SPEED has two Es, both still unconsumed)
        let verdict = Verdict::evaluate(&word("speed"), &word("erase"));
        assert_eq!(
            verdict.marks(),
            &[
                Mark::Present,
                Mark::Absent,
                Mark::Absent,
                Mark::Present,
                Mark::Present,
            ]
        );
    }

    #[test]
    fn verdict_duplicate_letters_complex() {
        // Secret FLOOR, guess ROBOT:
        // R(0) present, O(1) present, B(2) absent, O(3) exact, T(4) absent
        let verdict = Verdict::evaluate(&word("floor"), &word("robot"));
        assert_eq!(
            verdict.marks(),
            &[
                Mark::Present,
                Mark::Present,
                Mark::Absent,
                Mark::Exact,
                Mark::Absent,
            ]
        );
        assert_eq!(verdict.count(Mark::Exact), 1);
        assert_eq!(verdict.count(Mark::Present), 2);
    }

    #[test]
    fn verdict_exact_consumes_before_present() {
        // Secret ABBBB, guess AAAAA: one exact A, the other four As are
        // Absent because the secret's single A is consumed
        let verdict = Verdict::evaluate(&word("abbbb"), &word("aaaaa"));
        assert_eq!(
            verdict.marks(),
            &[
                Mark::Exact,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent,
            ]
        );
    }

    #[test]
    fn verdict_digits_score_like_letters() {
        let secret = Quint::parse(Variant::Primel, "12345").unwrap();
        let guess = Quint::parse(Variant::Primel, "54321").unwrap();
        let verdict = Verdict::evaluate(&secret, &guess);

        // 5(present) 4(present) 3(exact) 2(present) 1(present)
        assert_eq!(verdict.count(Mark::Exact), 1);
        assert_eq!(verdict.count(Mark::Present), 4);
        assert_eq!(verdict.glyphs(), "🟨🟨🟩🟨🟨");
    }

    #[test]
    fn verdict_mark_ordering() {
        assert!(Mark::Exact > Mark::Present);
        assert!(Mark::Present > Mark::Absent);
    }

    #[test]
    fn verdict_display_matches_glyphs() {
        let verdict = Verdict::evaluate(&word("slate"), &word("crane"));
        assert_eq!(format!("{verdict}"), verdict.glyphs());
    }
}
