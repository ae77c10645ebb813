//! Wordle Game
//!
//! A terminal Wordle: guess evaluation with correct duplicate-letter handling,
//! a game-session state machine, and TUI/CLI front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterStatus;
//! use wordle_game::game::GameSession;
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::from_strs(&["APPLE", "GRAPE"]);
//! let mut session = GameSession::new("APPLE", &words).unwrap();
//!
//! for ch in "apple".chars() {
//!     session.insert_letter(ch).unwrap();
//! }
//! let outcome = session.submit_guess(&words).unwrap();
//!
//! assert!(outcome.is_won);
//! assert_eq!(session.keyboard_status().get('P'), Some(LetterStatus::Correct));
//! ```

// Core domain types
pub mod core;

// Game-state engine
pub mod game;

// Word lists
pub mod wordlists;

// Player statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
