//! Fixed-capacity buffer for the row being typed

use crate::core::{WORD_LENGTH, Word};

/// One row of the guess grid: 0..5 uppercase letters
///
/// The length is the cursor position while the row is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attempt {
    letters: [u8; WORD_LENGTH],
    len: usize,
}

impl Attempt {
    /// Append a letter; returns false if the row is already full
    pub(crate) fn push(&mut self, letter: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.letters[self.len] = letter;
        self.len += 1;
        true
    }

    /// Clear the last letter; returns false if the row is empty
    pub(crate) fn pop(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        self.letters[self.len] = 0;
        true
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LENGTH
    }

    /// Letters entered so far
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len]
    }

    /// Letter at `col`, if entered
    #[must_use]
    pub fn letter_at(&self, col: usize) -> Option<char> {
        self.letters().get(col).map(|&b| char::from(b))
    }

    /// Entered letters as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.letters()).unwrap_or_default()
    }

    /// The completed word, if all five letters are present
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        if self.is_full() {
            Word::from_letters(self.letters).ok()
        } else {
            None
        }
    }
}
