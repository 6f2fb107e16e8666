//! Build script to generate the embedded secret and guess pools
//!
//! Reads the word list files and sieves the five-digit primes, generating
//! Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate word-game answer list
    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Word-game secrets; index order is the order used in share text",
    );

    // Generate allowed-guess list (superset of the answers)
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All accepted word-game guesses (superset of ANSWERS)",
    );

    // Generate the number-game pool: every five-digit prime
    generate_prime_list(&Path::new(&out_dir).join("primes.rs"));

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.lines().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_prime_list(output_path: &Path) {
    const LIMIT: usize = 100_000;

    // Sieve of Eratosthenes up to the largest five-digit number
    let mut is_prime = vec![true; LIMIT];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut i = 2;
    while i * i < LIMIT {
        if is_prime[i] {
            let mut multiple = i * i;
            while multiple < LIMIT {
                is_prime[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }

    let primes: Vec<usize> = (10_000..LIMIT).filter(|&n| is_prime[n]).collect();
    let count = primes.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated prime list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// Number-game secrets: every five-digit prime, ascending").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number-game secrets: every five-digit prime, ascending").unwrap();
    writeln!(output, "pub const PRIMES: &[&str] = &[").unwrap();

    for prime in primes {
        writeln!(output, "    \"{prime}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in PRIMES").unwrap();
    writeln!(output, "pub const PRIMES_COUNT: usize = {count};").unwrap();
}
