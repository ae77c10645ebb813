//! Word lists for Wordle games
//!
//! Provides the embedded word list compiled into the binary and the
//! [`WordList`] membership/selection type the game session consumes.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;
