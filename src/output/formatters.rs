//! Formatting utilities for terminal output

use crate::core::{Mark, Quint, Verdict};
use colored::Colorize;

/// Format a guess with each symbol colored by its mark
///
/// Exact symbols print on green, Present on yellow, Absent dimmed.
#[must_use]
pub fn colored_guess(guess: &Quint, verdict: &Verdict) -> String {
    guess
        .text()
        .chars()
        .zip(verdict.marks().iter())
        .map(|(symbol, mark)| {
            let cell = format!(" {} ", symbol.to_ascii_uppercase());
            match mark {
                Mark::Exact => cell.black().on_green().bold().to_string(),
                Mark::Present => cell.black().on_yellow().bold().to_string(),
                Mark::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a histogram bar string
#[must_use]
pub fn histogram_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    #[test]
    fn histogram_bar_empty() {
        let bar = histogram_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn histogram_bar_full() {
        let bar = histogram_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn histogram_bar_half() {
        let bar = histogram_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn colored_guess_covers_every_symbol() {
        let secret = Quint::parse(Variant::Wordle, "crane").unwrap();
        let guess = Quint::parse(Variant::Wordle, "slate").unwrap();
        let verdict = Verdict::evaluate(&secret, &guess);

        let rendered = colored_guess(&guess, &verdict);
        for symbol in ['S', 'L', 'A', 'T', 'E'] {
            assert!(rendered.contains(symbol));
        }
    }
}
