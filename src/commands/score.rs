//! One-shot guess scoring command
//!
//! Replays a list of guesses against a known secret and reports the verdict
//! for each, without drawing a secret or running a live session.

use crate::core::{Quint, Verdict};
use crate::pools::Pool;

/// Result of scoring a guess list against a secret
pub struct ScoreResult {
    pub secret: Quint,
    pub rows: Vec<ScoreRow>,
    pub solved_on: Option<usize>,
}

/// A single scored guess
pub struct ScoreRow {
    pub guess: Quint,
    pub verdict: Verdict,
    pub in_vocabulary: bool,
}

/// Score guesses against a known secret
///
/// Out-of-vocabulary guesses are still scored but flagged, so the output
/// can show what a live game would have rejected.
///
/// # Errors
///
/// Returns an error if the secret or any guess does not parse for the
/// pool's game.
pub fn score_guesses(
    pool: &Pool,
    secret_text: &str,
    guess_texts: &[String],
) -> Result<ScoreResult, String> {
    let variant = pool.variant();

    let secret =
        Quint::parse(variant, secret_text).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut rows = Vec::with_capacity(guess_texts.len());
    let mut solved_on = None;

    for (i, text) in guess_texts.iter().enumerate() {
        let guess =
            Quint::parse(variant, text).map_err(|e| format!("Invalid guess '{text}': {e}"))?;

        let verdict = Verdict::evaluate(&secret, &guess);
        let in_vocabulary = pool.permits(&guess);

        if verdict.is_win() && solved_on.is_none() {
            solved_on = Some(i + 1);
        }

        rows.push(ScoreRow {
            guess,
            verdict,
            in_vocabulary,
        });
    }

    Ok(ScoreResult {
        secret,
        rows,
        solved_on,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mark, Variant};
    use crate::pools::loader::quints_from_slice;

    fn word_pool() -> Pool {
        Pool::custom(
            Variant::Wordle,
            quints_from_slice(Variant::Wordle, &["crane"]),
            quints_from_slice(Variant::Wordle, &["slate", "crane"]),
        )
    }

    #[test]
    fn score_records_every_guess() {
        let pool = word_pool();
        let guesses = vec!["slate".to_string(), "crane".to_string()];

        let result = score_guesses(&pool, "crane", &guesses).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.solved_on, Some(2));
        assert!(result.rows[1].verdict.is_win());
    }

    #[test]
    fn score_flags_out_of_vocabulary_guesses() {
        let pool = word_pool();
        let guesses = vec!["zzzzz".to_string()];

        let result = score_guesses(&pool, "crane", &guesses).unwrap();

        assert!(!result.rows[0].in_vocabulary);
        assert_eq!(result.rows[0].verdict.count(Mark::Absent), 5);
        assert_eq!(result.solved_on, None);
    }

    #[test]
    fn score_rejects_invalid_secret() {
        let pool = word_pool();
        let result = score_guesses(&pool, "12345", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn score_rejects_invalid_guess() {
        let pool = word_pool();
        let guesses = vec!["hi".to_string()];
        let result = score_guesses(&pool, "crane", &guesses);
        assert!(result.is_err());
    }

    #[test]
    fn score_number_game_accepts_composites() {
        let pool = Pool::custom(
            Variant::Primel,
            quints_from_slice(Variant::Primel, &["10007"]),
            Vec::new(),
        );
        let guesses = vec!["12345".to_string(), "10007".to_string()];

        let result = score_guesses(&pool, "10007", &guesses).unwrap();

        assert!(result.rows[0].in_vocabulary);
        assert_eq!(result.solved_on, Some(2));
    }

    #[test]
    fn score_solved_on_reports_first_win() {
        let pool = word_pool();
        let guesses = vec![
            "crane".to_string(),
            "slate".to_string(),
            "crane".to_string(),
        ];

        let result = score_guesses(&pool, "crane", &guesses).unwrap();
        assert_eq!(result.solved_on, Some(1));
    }
}
