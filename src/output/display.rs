//! Display functions for command results

use super::formatters::{colored_guess, histogram_bar};
use crate::commands::{OpenersResult, ScoreResult};
use crate::core::MAX_ATTEMPTS;
use crate::game::Turn;
use colored::Colorize;

/// Print one accepted guess with its colored verdict
pub fn print_turn(turn_number: usize, turn: &Turn) {
    println!(
        "  {}  {}  {}",
        format!("{turn_number}/{MAX_ATTEMPTS}").bright_black(),
        colored_guess(&turn.guess, &turn.verdict),
        turn.verdict.glyphs()
    );
}

/// Print a finished game's shareable result block
pub fn print_share_card(summary: &str) {
    println!("{}", "─".repeat(30).cyan());
    println!("{summary}");
    println!("{}", "─".repeat(30).cyan());
}

/// Print the result of scoring guesses against a known secret
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        let vocabulary_flag = if row.in_vocabulary {
            String::new()
        } else {
            format!("  {}", "(would be rejected in play)".red())
        };

        println!(
            "\nGuess {}: {} {}{}",
            i + 1,
            colored_guess(&row.guess, &row.verdict),
            row.verdict.glyphs(),
            vocabulary_flag
        );
    }

    println!();
    match result.solved_on {
        Some(turn) => println!(
            "{}",
            format!("✅ Solved on guess {turn}!").green().bold()
        ),
        None => println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.rows.len())
                .red()
                .bold()
        ),
    }
}

/// Print ranked openers as a table
pub fn print_openers_result(result: &OpenersResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Scored against {} possible secrets in {:.2}s\n",
        result.secrets,
        result.duration.as_secs_f64()
    );

    println!(
        "   {:<4} {:<8} {:>12} {:>12}",
        "#".bright_black(),
        "GUESS".bright_cyan(),
        "WORST CASE".bright_cyan(),
        "EXPECTED".bright_cyan()
    );

    let max_worst = result
        .ranked
        .iter()
        .map(|opener| opener.metrics.worst_case)
        .max()
        .unwrap_or(0);

    for (i, opener) in result.ranked.iter().enumerate() {
        let bar = histogram_bar(opener.metrics.worst_case as f64, max_worst as f64, 20);
        println!(
            "   {:<4} {:<8} {:>12} {:>12.2}  {}",
            i + 1,
            opener.guess.text().to_uppercase().bright_yellow(),
            opener.metrics.worst_case,
            opener.metrics.expected,
            bar.bright_blue()
        );
    }
}
