//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Lines are trimmed and uppercased; blank lines and entries that are not
/// five ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_word_list(&content);

    tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    let mut skipped = 0usize;

    let list = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                skipped += 1;
                tracing::trace!(entry = line, error = %e, "skipping word list entry");
                None
            }
        })
        .collect::<WordList>();

    if skipped > 0 {
        tracing::warn!(skipped, "word list contained invalid entries");
    }

    list
}
