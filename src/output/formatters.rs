//! Formatting utilities for terminal output

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameSession, KeyboardStatus, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one letter as a colored tile
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Typing => tile.bright_white().bold(),
        LetterStatus::Empty => tile.normal(),
    }
}

/// Render one grid row using the session's cell statuses
#[must_use]
pub fn format_row(session: &GameSession, row: usize) -> String {
    let Some(attempt) = session.attempt(row) else {
        return String::new();
    };

    (0..WORD_LENGTH)
        .map(|col| {
            let letter = attempt.letter_at(col).unwrap_or('_');
            colored_tile(letter, session.cell_status(row, col)).to_string()
        })
        .collect()
}

/// Render the keyboard, one string per layout row
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|ch| {
                    let key = ch.to_string();
                    match keyboard.get(ch) {
                        Some(LetterStatus::Correct) => key.black().on_green().to_string(),
                        Some(LetterStatus::Present) => key.black().on_yellow().to_string(),
                        Some(LetterStatus::Absent) => key.bright_black().to_string(),
                        _ => key,
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Shareable emoji summary of a finished game
///
/// Returns `None` while the game is still running.
///
/// ```text
/// Wordle 3/6
///
/// ⬜⬜🟨🟨🟩
/// 🟩⬜🟨⬜🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(session: &GameSession) -> Option<String> {
    let result = session.result()?;
    let score = if result.won {
        result.attempts_used.to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle {score}/{MAX_ATTEMPTS}\n");
    for row in 0..session.submitted_rows() {
        text.push('\n');
        if let Some(cells) = session.feedback_row(row) {
            text.extend(cells.iter().map(|s| s.emoji()));
        }
    }
    Some(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
