//! Word list used for target selection and guess validation

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// An immutable set of playable words
///
/// Keeps insertion order for uniform random selection and a hash index for
/// membership checks. Duplicates are dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already validated words
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word) {
                list.words.push(word);
            }
        }
        list
    }

    /// Build a list from string slices, skipping entries that are not valid words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["crane", "toolong", "SLATE"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("slate"));
    /// ```
    #[must_use]
    pub fn from_strs(slice: &[&str]) -> Self {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(super::WORDS)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    /// Membership test for a validated word
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the list is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn contains_is_case_insensitive() {
        let list = WordList::from_strs(&["APPLE", "grape"]);
        assert!(list.contains("apple"));
        assert!(list.contains("ApPlE"));
        assert!(list.contains("GRAPE"));
        assert!(!list.contains("stone"));
    }

    #[test]
    fn contains_rejects_invalid_words() {
        let list = WordList::from_strs(&["APPLE"]);
        assert!(!list.contains("APPL"));
        assert!(!list.contains("APPLES"));
        assert!(!list.contains(""));
    }

    #[test]
    fn duplicates_are_dropped() {
        let list = WordList::from_strs(&["apple", "APPLE", "grape", "Apple"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0].as_str(), "APPLE");
        assert_eq!(list.words()[1].as_str(), "GRAPE");
    }

    #[test]
    fn choose_from_empty_is_none() {
        let list = WordList::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(list.is_empty());
        assert!(list.choose(&mut rng).is_none());
    }

    #[test]
    fn choose_returns_member_and_is_seed_stable() {
        let list = WordList::from_strs(&["apple", "grape", "stone", "crime"]);

        let first = *list.choose(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = *list.choose(&mut StdRng::seed_from_u64(42)).unwrap();

        assert!(list.contains_word(&first));
        assert_eq!(first, second);
    }
}
