//! Pool loading utilities
//!
//! Provides functions to load secret lists from files or convert the
//! embedded constants.

use crate::core::{Quint, Variant};
use std::fs;
use std::io;
use std::path::Path;

/// Load secrets from a file, one entry per line
///
/// Returns a vector of valid Quint instances, skipping blank lines and any
/// entries outside the game's alphabet.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use quintle::core::Variant;
/// use quintle::pools::loader::load_from_file;
///
/// let secrets = load_from_file(Variant::Wordle, "data/answers.txt").unwrap();
/// println!("Loaded {} secrets", secrets.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(variant: Variant, path: P) -> io::Result<Vec<Quint>> {
    let content = fs::read_to_string(path)?;

    let quints = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Quint::parse(variant, trimmed).ok()
            }
        })
        .collect();

    Ok(quints)
}

/// Convert an embedded string slice to a Quint vector
///
/// # Examples
/// ```
/// use quintle::core::Variant;
/// use quintle::pools::ANSWERS;
/// use quintle::pools::loader::quints_from_slice;
///
/// let quints = quints_from_slice(Variant::Wordle, ANSWERS);
/// assert_eq!(quints.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn quints_from_slice(variant: Variant, slice: &[&str]) -> Vec<Quint> {
    slice
        .iter()
        .filter_map(|&s| Quint::parse(variant, s).ok())
        .collect()
}
