//! Single-guess evaluation command
//!
//! Scores one guess against a given target without starting a game.

use crate::core::{Feedback, Word, evaluate};

/// Result of scoring one guess
pub struct EvaluationResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Neither word has to be in a word list; only the five-letter shape is checked.
///
/// # Errors
///
/// Returns an error if either input is not a five-letter ASCII word.
pub fn evaluate_words(target: &str, guess: &str) -> Result<EvaluationResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = evaluate(&target, &guess);
    tracing::debug!(%target, %guess, feedback = %feedback.to_emoji(), "evaluated guess");

    Ok(EvaluationResult {
        target,
        guess,
        feedback,
    })
}
