//! Cumulative per-letter status across submitted guesses

use crate::core::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best status observed so far for each letter
///
/// Letters that have never been submitted are not present; callers treat a
/// missing letter as "no information yet", which is different from `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatus {
    /// Fold one scored guess into the aggregate
    ///
    /// A letter's status only changes when the new one outranks it
    /// (`Correct` > `Present` > `Absent`).
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            let entry = self.letters.entry(letter).or_insert(status);
            if status.outranks(*entry) {
                *entry = status;
            }
        }
    }

    /// Status for a letter (case-insensitive), `None` if never observed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        u8::try_from(letter)
            .ok()
            .and_then(|b| self.letters.get(&b.to_ascii_uppercase()).copied())
    }

    /// Status for a letter, `Empty` if never observed
    #[must_use]
    pub fn status_or_empty(&self, letter: char) -> LetterStatus {
        self.get(letter).unwrap_or(LetterStatus::Empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Observed letters with their status, sorted alphabetically
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<_> = self
            .letters
            .iter()
            .map(|(&b, &status)| (char::from(b), status))
            .collect();
        entries.sort_unstable_by_key(|&(ch, _)| ch);
        entries
    }
}
