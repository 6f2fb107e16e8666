//! Simple line-based play mode
//!
//! Plays a full game in the terminal without the TUI: read a guess, print
//! the colored verdict, repeat until the game ends.

use crate::core::{LENGTH, MAX_ATTEMPTS};
use crate::game::{Session, Status, Submission};
use crate::output::{print_share_card, print_turn};
use crate::pools::Pool;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple line-based play mode
///
/// # Errors
///
/// Returns an error if the pool is empty or if reading user input fails.
pub fn run_simple(pool: &Pool, rng: &mut impl Rng) -> Result<(), String> {
    let variant = pool.variant();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║{:^62}║",
        format!("{} {} - Terminal Mode", LENGTH, variant.title())
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I'm thinking of a {LENGTH}-{} secret. You have {MAX_ATTEMPTS} guesses.",
        variant.symbol_name()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = Session::new(pool, rng).map_err(|e| e.to_string())?;

    loop {
        let prompt = format!("Guess {}/{}", session.attempts() + 1, MAX_ATTEMPTS);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.restart(rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&input) {
            Submission::Rejected { reason, .. } => {
                println!("{}\n", format!("✗ {reason}").red());
            }
            Submission::Accepted { status, .. } => {
                if let Some(turn) = session.history().last() {
                    print_turn(session.attempts(), turn);
                }

                match status {
                    Status::Won => {
                        let attempts = session.attempts();
                        let performance = match attempts {
                            1 => "🏆 Unbelievable!",
                            2 => "⭐ Magnificent!",
                            3 => "💫 Impressive!",
                            4 => "✨ Splendid!",
                            5 => "👍 Great!",
                            _ => "✓ Phew!",
                        };

                        println!("\n{}", performance.bright_green().bold());
                        println!(
                            "Solved in {} {}\n",
                            attempts.to_string().bright_cyan().bold(),
                            if attempts == 1 { "guess" } else { "guesses" }
                        );

                        if let Some(summary) = session.summary() {
                            print_share_card(&summary);
                        }

                        if !play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session.restart(rng);
                        println!("\n🔄 New game started!\n");
                    }
                    Status::Lost => {
                        println!("\n{}", "❌ Out of guesses!".red().bold());

                        if let Some(summary) = session.summary() {
                            print_share_card(&summary);
                        }

                        if !play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session.restart(rng);
                        println!("\n🔄 New game started!\n");
                    }
                    Status::InProgress => {}
                }
            }
        }
    }
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
