//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod status;
mod word;

pub use feedback::{Feedback, evaluate};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
