//! Quintle - CLI
//!
//! Five-symbol guessing games for the terminal: Wordle with letters and
//! Primel with prime numbers, plus scoring and opener-ranking tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quintle::{
    commands::{run_openers, run_simple, score_guesses},
    core::Variant,
    output::{print_openers_result, print_score_result},
    pools::{ALLOWED, Pool, loader::quints_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quintle",
    about = "Five-symbol guessing games: Wordle with letters, Primel with prime numbers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game: wordle (five-letter words) or primel (five-digit primes)
    #[arg(short, long, global = true, default_value = "wordle")]
    game: String,

    /// Seed for the secret draw (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a custom secret list (one entry per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without the TUI)
    Simple,

    /// Score a finished game: replay guesses against a known secret
    Score {
        /// The secret the guesses are scored against
        secret: String,

        /// Guesses to score, in play order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Rank opening guesses by how well they split the secret pool
    Openers {
        /// Number of openers to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

/// Build the pool from the -g and -w flags
///
/// Without -w the embedded pool for the chosen game is used. A custom list
/// replaces the secrets; the word game keeps the embedded allowed list as
/// its guess vocabulary so play stays dictionary-checked.
fn load_pool(variant: Variant, wordlist: Option<&str>) -> Result<Pool> {
    use quintle::pools::loader::load_from_file;

    match wordlist {
        None => Ok(Pool::embedded(variant)),
        Some(path) => {
            let secrets = load_from_file(variant, path)?;
            let allowed = match variant {
                Variant::Wordle => quints_from_slice(Variant::Wordle, ALLOWED),
                Variant::Primel => Vec::new(),
            };
            Ok(Pool::custom(variant, secrets, allowed))
        }
    }
}

fn main() -> Result<()> {
    // Log to stderr so the TUI alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let variant: Variant = cli.game.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let pool = load_pool(variant, cli.wordlist.as_deref())?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&pool, rng),
        Commands::Simple => run_simple_command(&pool, rng),
        Commands::Score { secret, guesses } => run_score_command(&pool, &secret, &guesses),
        Commands::Openers { top } => {
            run_openers_command(&pool, top);
            Ok(())
        }
    }
}

fn run_play_command(pool: &Pool, rng: StdRng) -> Result<()> {
    use quintle::interactive::{App, run_tui};

    let app = App::new(pool, rng)?;
    run_tui(app)
}

fn run_simple_command(pool: &Pool, mut rng: StdRng) -> Result<()> {
    run_simple(pool, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(pool: &Pool, secret: &str, guesses: &[String]) -> Result<()> {
    let result = score_guesses(pool, secret, guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_openers_command(pool: &Pool, top: usize) {
    println!(
        "\nScoring {} openers against {} possible secrets...\n",
        pool.guessable().len(),
        pool.len()
    );

    let result = run_openers(pool, top);
    print_openers_result(&result);
}
