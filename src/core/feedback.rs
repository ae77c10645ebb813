//! Guess evaluation
//!
//! Scores a guess against the target letter by letter. Repeated letters follow
//! multiset rules: a letter is reported `Correct`/`Present` at most as many
//! times as it occurs in the target, and exact matches are always claimed first.

use super::{LetterStatus, WORD_LENGTH, Word};

/// Feedback for one submitted guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap raw statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. Copy the target letters into a pool of unconsumed slots
    /// 2. First pass: mark exact matches `Correct` and consume their slot
    /// 3. Second pass: for each remaining guess letter, consume the leftmost
    ///    unconsumed slot holding the same letter and mark it `Present`;
    ///    otherwise it stays `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    ///
    /// let feedback = Feedback::calculate(&target, &guess);
    /// assert_eq!(feedback.statuses(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        let guess = guess.letters();
        let mut pool: [Option<u8>; WORD_LENGTH] = target.letters().map(Some);
        let mut result = [LetterStatus::Absent; WORD_LENGTH];

        // First pass: exact position matches
        for (i, &letter) in guess.iter().enumerate() {
            if pool[i] == Some(letter) {
                result[i] = LetterStatus::Correct;
                pool[i] = None;
            }
        }

        // Second pass: misplaced letters, consuming leftmost unclaimed slot
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }

            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
                *slot = None;
                result[i] = LetterStatus::Present;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Score `guess` against `target`
///
/// Free-function form of [`Feedback::calculate`].
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    Feedback::calculate(target, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn score(target: &str, guess: &str) -> [LetterStatus; WORD_LENGTH] {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        *evaluate(&target, &guess).statuses()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(score("FGHIJ", "ABCDE"), [Absent; 5]);
    }

    #[test]
    fn feedback_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&word, &word);

        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn crane_vs_trace() {
        // T absent, R exact, A exact, C misplaced, E exact
        assert_eq!(
            score("CRANE", "TRACE"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn duplicate_letters_capped_by_target_count() {
        // ALLOY has two Ls; the second L in LLAMA is exact, the first is misplaced.
        // Only one A in ALLOY, so the second A in LLAMA is absent.
        assert_eq!(
            score("ALLOY", "LLAMA"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn surplus_duplicates_resolve_to_absent() {
        // PUPPY has three Ps, APPLE only two
        let statuses = score("APPLE", "PUPPY");
        assert_eq!(statuses, [Present, Absent, Correct, Absent, Absent]);

        let marked_p = statuses
            .iter()
            .zip(b"PUPPY")
            .filter(|&(s, &l)| l == b'P' && *s != Absent)
            .count();
        assert_eq!(marked_p, 2);
    }

    #[test]
    fn exact_match_not_stolen_by_earlier_misplaced_letter() {
        // KEBAB has two Bs; ABBEY's exact B at index 2 claims its own slot
        // before the misplaced B at index 1 takes the other one.
        assert_eq!(
            score("KEBAB", "ABBEY"),
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn speed_vs_erase() {
        // S present, P absent, both Es present (ERASE has two)
        assert_eq!(
            score("ERASE", "SPEED"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn robot_vs_floor() {
        // First O misplaced, second O exact
        assert_eq!(
            score("FLOOR", "ROBOT"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let target = Word::new("apple").unwrap();
        let guess = Word::new("puppy").unwrap();
        assert_eq!(evaluate(&target, &guess), evaluate(&target, &guess));
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
