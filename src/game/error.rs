//! Rejections reported by the game session
//!
//! Every variant is recoverable: the session state is left untouched.

use std::fmt;

/// A letter edit that was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRejected {
    /// The session has ended
    GameOver,
    /// The active row already holds five letters
    RowFull,
    /// Nothing to remove in the active row
    RowEmpty,
    /// Only ASCII letters can be entered
    NotALetter(char),
}

impl fmt::Display for EditRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::RowFull => write!(f, "Row is full"),
            Self::RowEmpty => write!(f, "Row is empty"),
            Self::NotALetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for EditRejected {}

/// A submission that was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than five letters, or no row left to submit
    IncompleteRow,
    /// The guess is not a recognized word
    NotInWordList(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow => write!(f, "Not enough letters"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

impl std::error::Error for RejectReason {}

/// Session construction failure (misconfigured word-list collaborator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Target is not a valid word or not in the supplied word list
    InvalidTarget(String),
    /// No word available to pick a target from
    EmptyWordList,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(word) => {
                write!(f, "Target '{word}' is not in the word list")
            }
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for SessionError {}
