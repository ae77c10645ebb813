//! Game-state engine
//!
//! [`GameSession`] tracks the six attempt rows, validates edits and
//! submissions, scores guesses and derives the keyboard status. It performs
//! no I/O and no logging; front ends read its snapshot queries to render.

mod attempt;
mod error;
mod keyboard;
mod session;

pub use attempt::Attempt;
pub use error::{EditRejected, RejectReason, SessionError};
pub use keyboard::KeyboardStatus;
pub use session::{GameResult, GameSession, MAX_ATTEMPTS, SubmitOutcome};
