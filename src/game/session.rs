//! Game session state machine
//!
//! A session owns the hidden target, the six attempt rows and their feedback.
//! Edits and submissions either fully apply or are rejected without touching
//! any state.

use super::attempt::Attempt;
use super::error::{EditRejected, RejectReason, SessionError};
use super::keyboard::KeyboardStatus;
use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordList;
use rand::Rng;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Row that was scored
    pub row: usize,
    pub feedback: Feedback,
    pub is_over: bool,
    pub is_won: bool,
}

impl SubmitOutcome {
    /// The finished game, if this submission ended it
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        if self.is_over {
            Some(GameResult {
                won: self.is_won,
                attempts_used: self.row + 1,
            })
        } else {
            None
        }
    }
}

/// Summary of a finished game, handed to the statistics collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub won: bool,
    /// Rows submitted, 1..=6
    pub attempts_used: usize,
}

/// A single game from first keystroke to win or loss
///
/// Replaced wholesale for a new game; there is no reset.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    attempts: [Attempt; MAX_ATTEMPTS],
    feedback: [[LetterStatus; WORD_LENGTH]; MAX_ATTEMPTS],
    active_row: usize,
    is_over: bool,
    is_won: bool,
}

impl GameSession {
    /// Start a session with a known target
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTarget` if `target` is not a five-letter
    /// word contained in `words`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameSession;
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::from_strs(&["APPLE", "GRAPE"]);
    /// let mut session = GameSession::new("apple", &words).unwrap();
    ///
    /// for ch in "grape".chars() {
    ///     session.insert_letter(ch).unwrap();
    /// }
    /// let outcome = session.submit_guess(&words).unwrap();
    /// assert!(!outcome.is_over);
    /// assert_eq!(session.active_row(), 1);
    /// ```
    pub fn new(target: &str, words: &WordList) -> Result<Self, SessionError> {
        let target = Word::new(target)
            .ok()
            .filter(|word| words.contains_word(word))
            .ok_or_else(|| SessionError::InvalidTarget(target.to_string()))?;

        Ok(Self::with_target(target))
    }

    /// Start a session with a target drawn uniformly from `words`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyWordList` if there is nothing to draw from.
    pub fn random<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Result<Self, SessionError> {
        words
            .choose(rng)
            .map(|&target| Self::with_target(target))
            .ok_or(SessionError::EmptyWordList)
    }

    fn with_target(target: Word) -> Self {
        Self {
            target,
            attempts: [Attempt::default(); MAX_ATTEMPTS],
            feedback: [[LetterStatus::Empty; WORD_LENGTH]; MAX_ATTEMPTS],
            active_row: 0,
            is_over: false,
            is_won: false,
        }
    }

    /// Type a letter into the next free cell of the active row
    ///
    /// # Errors
    ///
    /// Rejected (with no state change) when the game is over, the row is
    /// full, or `ch` is not an ASCII letter.
    pub fn insert_letter(&mut self, ch: char) -> Result<(), EditRejected> {
        let attempt = self.active_attempt_mut()?;
        if !ch.is_ascii_alphabetic() {
            return Err(EditRejected::NotALetter(ch));
        }
        // ASCII checked above, so the cast is lossless
        if attempt.push(ch.to_ascii_uppercase() as u8) {
            Ok(())
        } else {
            Err(EditRejected::RowFull)
        }
    }

    /// Clear the last typed letter of the active row
    ///
    /// # Errors
    ///
    /// Rejected (with no state change) when the game is over or the row is empty.
    pub fn remove_letter(&mut self) -> Result<(), EditRejected> {
        if self.active_attempt_mut()?.pop() {
            Ok(())
        } else {
            Err(EditRejected::RowEmpty)
        }
    }

    fn active_attempt_mut(&mut self) -> Result<&mut Attempt, EditRejected> {
        if self.is_over {
            return Err(EditRejected::GameOver);
        }
        self.attempts
            .get_mut(self.active_row)
            .ok_or(EditRejected::GameOver)
    }

    /// True if the active row is complete and the game still running
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_over && self.active_row < MAX_ATTEMPTS && self.active_col() == WORD_LENGTH
    }

    /// Score the active row against the target
    ///
    /// # Errors
    ///
    /// - `RejectReason::IncompleteRow` if the row has fewer than five letters
    ///   or the game is already over
    /// - `RejectReason::NotInWordList` if the guess is not a recognized word
    ///
    /// Neither rejection changes any state, so the player can edit and retry.
    pub fn submit_guess(&mut self, words: &WordList) -> Result<SubmitOutcome, RejectReason> {
        if !self.can_submit() {
            return Err(RejectReason::IncompleteRow);
        }

        let attempt = &self.attempts[self.active_row];
        let guess = attempt.to_word().ok_or(RejectReason::IncompleteRow)?;

        if !words.contains_word(&guess) {
            return Err(RejectReason::NotInWordList(guess.to_string()));
        }

        let feedback = evaluate(&self.target, &guess);
        let row = self.active_row;
        self.feedback[row] = *feedback.statuses();

        if guess == self.target {
            self.is_over = true;
            self.is_won = true;
        } else if row == MAX_ATTEMPTS - 1 {
            self.is_over = true;
        } else {
            self.active_row += 1;
        }

        Ok(SubmitOutcome {
            row,
            feedback,
            is_over: self.is_over,
            is_won: self.is_won,
        })
    }

    /// Best status observed for each letter across all submitted rows
    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        let mut keyboard = KeyboardStatus::default();
        for row in 0..self.submitted_rows() {
            if let Some(guess) = self.attempts[row].to_word() {
                keyboard.record(&guess, &Feedback::new(self.feedback[row]));
            }
        }
        keyboard
    }

    /// Case-insensitive membership test against `words`
    #[must_use]
    pub fn is_valid_word(word: &str, words: &WordList) -> bool {
        words.contains(word)
    }

    /// Number of rows that have been submitted and scored
    #[must_use]
    pub const fn submitted_rows(&self) -> usize {
        if self.is_over {
            self.active_row + 1
        } else {
            self.active_row
        }
    }

    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn active_col(&self) -> usize {
        self.attempts.get(self.active_row).map_or(0, Attempt::len)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.is_won
    }

    /// All six rows, submitted or not
    #[must_use]
    pub const fn attempts(&self) -> &[Attempt; MAX_ATTEMPTS] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt(&self, row: usize) -> Option<&Attempt> {
        self.attempts.get(row)
    }

    /// Scored statuses of a row; all `Empty` until it is submitted
    #[must_use]
    pub fn feedback_row(&self, row: usize) -> Option<&[LetterStatus; WORD_LENGTH]> {
        self.feedback.get(row)
    }

    /// Status to render for one grid cell
    ///
    /// Submitted cells report their feedback; letters typed into the active
    /// row report `Typing`; everything else is `Empty`.
    #[must_use]
    pub fn cell_status(&self, row: usize, col: usize) -> LetterStatus {
        let Some(&status) = self.feedback.get(row).and_then(|cells| cells.get(col)) else {
            return LetterStatus::Empty;
        };

        if status.is_scored() {
            status
        } else if !self.is_over && row == self.active_row && col < self.active_col() {
            LetterStatus::Typing
        } else {
            LetterStatus::Empty
        }
    }

    /// The target word, only available once the game is over
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        if self.is_over { Some(&self.target) } else { None }
    }

    /// Terminal summary for statistics, `None` while the game is running
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        if self.is_over {
            Some(GameResult {
                won: self.is_won,
                attempts_used: self.active_row + 1,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    const WORDS: &[&str] = &[
        "APPLE", "GRAPE", "STONE", "CRIME", "TIGER", "MONEY", "RIVER", "HELLO", "LLAMA",
    ];

    fn words() -> WordList {
        WordList::from_strs(WORDS)
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.insert_letter(ch).unwrap();
        }
    }

    fn play(session: &mut GameSession, words: &WordList, word: &str) -> SubmitOutcome {
        type_word(session, word);
        session.submit_guess(words).unwrap()
    }

    #[test]
    fn initial_state() {
        let session = GameSession::new("APPLE", &words()).unwrap();

        assert_eq!(session.active_row(), 0);
        assert_eq!(session.active_col(), 0);
        assert!(!session.is_over());
        assert!(!session.is_won());
        assert!(session.attempts().iter().all(Attempt::is_empty));
        for row in 0..MAX_ATTEMPTS {
            assert_eq!(session.feedback_row(row), Some(&[LetterStatus::Empty; 5]));
        }
        assert!(session.revealed_target().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn new_rejects_target_outside_word_list() {
        assert_eq!(
            GameSession::new("ZEBRA", &words()).unwrap_err(),
            SessionError::InvalidTarget("ZEBRA".to_string())
        );
        assert!(matches!(
            GameSession::new("APPLES", &words()),
            Err(SessionError::InvalidTarget(_))
        ));
    }

    #[test]
    fn random_picks_from_list() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let words = words();

        let session = GameSession::random(&words, &mut rng).unwrap();
        assert!(!session.is_over());

        let empty = WordList::default();
        assert_eq!(
            GameSession::random(&empty, &mut rng).unwrap_err(),
            SessionError::EmptyWordList
        );
    }

    #[test]
    fn insert_letter_uppercases_and_advances() {
        let mut session = GameSession::new("APPLE", &words()).unwrap();

        assert!(session.insert_letter('a').is_ok());
        assert_eq!(session.attempts()[0].as_str(), "A");
        assert_eq!(session.active_col(), 1);
    }

    #[test]
    fn insert_letter_rejects_when_row_full() {
        let mut session = GameSession::new("APPLE", &words()).unwrap();
        type_word(&mut session, "GRAPE");

        assert_eq!(session.insert_letter('X'), Err(EditRejected::RowFull));
        assert_eq!(session.active_col(), 5);
        assert_eq!(session.attempts()[0].as_str(), "GRAPE");
    }

    #[test]
    fn insert_letter_rejects_non_letters() {
        let mut session = GameSession::new("APPLE", &words()).unwrap();

        assert_eq!(session.insert_letter('3'), Err(EditRejected::NotALetter('3')));
        assert_eq!(session.insert_letter('é'), Err(EditRejected::NotALetter('é')));
        assert_eq!(session.active_col(), 0);
    }

    #[test]
    fn remove_letter() {
        let mut session = GameSession::new("APPLE", &words()).unwrap();
        session.insert_letter('A').unwrap();
        session.insert_letter('B').unwrap();

        assert!(session.remove_letter().is_ok());
        assert_eq!(session.attempts()[0].as_str(), "A");
        assert_eq!(session.active_col(), 1);

        assert!(session.remove_letter().is_ok());
        assert_eq!(session.remove_letter(), Err(EditRejected::RowEmpty));
        assert_eq!(session.active_col(), 0);
    }

    #[test]
    fn can_submit_only_with_full_row() {
        let mut session = GameSession::new("APPLE", &words()).unwrap();
        type_word(&mut session, "GRAP");
        assert!(!session.can_submit());
        session.insert_letter('E').unwrap();
        assert!(session.can_submit());
    }

    #[test]
    fn incomplete_row_is_rejected_without_mutation() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        type_word(&mut session, "GRA");

        assert_eq!(session.submit_guess(&words), Err(RejectReason::IncompleteRow));
        assert_eq!(session.active_row(), 0);
        assert_eq!(session.active_col(), 3);
        assert_eq!(session.feedback_row(0), Some(&[LetterStatus::Empty; 5]));
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        type_word(&mut session, "ZZZZZ");

        assert_eq!(
            session.submit_guess(&words),
            Err(RejectReason::NotInWordList("ZZZZZ".to_string()))
        );
        assert_eq!(session.active_row(), 0);
        assert_eq!(session.active_col(), 5);
        assert_eq!(session.feedback_row(0), Some(&[LetterStatus::Empty; 5]));

        // Player can fix the word and resubmit
        for _ in 0..5 {
            session.remove_letter().unwrap();
        }
        let outcome = play(&mut session, &words, "GRAPE");
        assert_eq!(outcome.row, 0);
        assert_eq!(session.active_row(), 1);
    }

    #[test]
    fn accepted_guess_advances_row() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();

        let outcome = play(&mut session, &words, "GRAPE");
        assert_eq!(outcome.row, 0);
        assert!(!outcome.is_over);
        assert!(outcome.result().is_none());
        assert_eq!(
            outcome.feedback.statuses(),
            &[Absent, Absent, Present, Present, Correct]
        );
        assert_eq!(session.feedback_row(0), Some(outcome.feedback.statuses()));
        assert_eq!(session.active_row(), 1);
        assert_eq!(session.active_col(), 0);
        assert_eq!(session.submitted_rows(), 1);
    }

    #[test]
    fn winning_on_first_row() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();

        let outcome = play(&mut session, &words, "apple");
        assert!(outcome.feedback.is_perfect());
        assert!(outcome.is_over && outcome.is_won);
        assert!(session.is_over() && session.is_won());
        assert_eq!(session.active_row(), 0);
        assert_eq!(
            outcome.result(),
            Some(GameResult {
                won: true,
                attempts_used: 1
            })
        );
        assert_eq!(session.result(), outcome.result());
        assert_eq!(session.revealed_target().map(Word::as_str), Some("APPLE"));

        let keyboard = session.keyboard_status();
        for letter in ['A', 'P', 'L', 'E'] {
            assert_eq!(keyboard.get(letter), Some(Correct));
        }
        assert_eq!(keyboard.len(), 4);
    }

    #[test]
    fn losing_after_six_attempts() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();

        for (i, guess) in ["GRAPE", "STONE", "CRIME", "TIGER", "MONEY"]
            .iter()
            .enumerate()
        {
            let outcome = play(&mut session, &words, guess);
            assert!(!outcome.is_over, "ended early at row {i}");
            assert_eq!(session.active_row(), i + 1);
        }

        let last = play(&mut session, &words, "RIVER");
        assert_eq!(last.row, 5);
        assert!(last.is_over);
        assert!(!last.is_won);
        assert!(session.is_over());
        assert!(!session.is_won());
        assert_eq!(session.active_row(), MAX_ATTEMPTS - 1);
        assert_eq!(session.submitted_rows(), MAX_ATTEMPTS);
        assert_eq!(
            session.result(),
            Some(GameResult {
                won: false,
                attempts_used: 6
            })
        );
        assert_eq!(session.revealed_target().map(Word::as_str), Some("APPLE"));
    }

    #[test]
    fn over_is_absorbing() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        play(&mut session, &words, "APPLE");

        let before = session.clone();
        assert_eq!(session.insert_letter('A'), Err(EditRejected::GameOver));
        assert_eq!(session.remove_letter(), Err(EditRejected::GameOver));
        assert!(!session.can_submit());
        assert_eq!(session.submit_guess(&words), Err(RejectReason::IncompleteRow));

        assert_eq!(session.active_row(), before.active_row());
        assert_eq!(session.attempts(), before.attempts());
        assert_eq!(session.keyboard_status(), before.keyboard_status());
    }

    #[test]
    fn win_on_last_row_counts_as_win() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        for guess in ["GRAPE", "STONE", "CRIME", "TIGER", "MONEY"] {
            play(&mut session, &words, guess);
        }

        let outcome = play(&mut session, &words, "APPLE");
        assert!(outcome.is_over && outcome.is_won);
        assert_eq!(outcome.result().map(|r| r.attempts_used), Some(6));
    }

    #[test]
    fn keyboard_status_keeps_best_status() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();

        play(&mut session, &words, "HELLO");
        assert_eq!(session.keyboard_status().get('L'), Some(Correct));

        play(&mut session, &words, "LLAMA");
        let keyboard = session.keyboard_status();
        assert_eq!(keyboard.get('L'), Some(Correct));
        assert_eq!(keyboard.get('A'), Some(Present));
        assert_eq!(keyboard.get('M'), Some(Absent));
        assert_eq!(keyboard.get('Z'), None);
    }

    #[test]
    fn keyboard_ignores_unsubmitted_letters() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        type_word(&mut session, "ZZZ");

        assert!(session.keyboard_status().is_empty());
    }

    #[test]
    fn cell_status_reports_typing_for_active_row() {
        let words = words();
        let mut session = GameSession::new("APPLE", &words).unwrap();
        play(&mut session, &words, "GRAPE");
        type_word(&mut session, "ST");

        assert_eq!(session.cell_status(0, 4), Correct);
        assert_eq!(session.cell_status(1, 0), LetterStatus::Typing);
        assert_eq!(session.cell_status(1, 1), LetterStatus::Typing);
        assert_eq!(session.cell_status(1, 2), LetterStatus::Empty);
        assert_eq!(session.cell_status(2, 0), LetterStatus::Empty);
        assert_eq!(session.cell_status(9, 9), LetterStatus::Empty);
    }

    #[test]
    fn is_valid_word_is_case_insensitive() {
        let words = words();
        assert!(GameSession::is_valid_word("apple", &words));
        assert!(GameSession::is_valid_word("Grape", &words));
        assert!(!GameSession::is_valid_word("zebra", &words));
    }
}
