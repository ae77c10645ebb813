//! Simple interactive CLI mode
//!
//! Text-based game without TUI: type a whole word per line.

use crate::game::{EditRejected, GameResult, GameSession, SubmitOutcome};
use crate::output::formatters::share_text;
use crate::output::{print_board, print_statistics};
use crate::stats::Statistics;
use crate::wordlists::WordList;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::path::Path;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// target word can be drawn from the word list.
pub fn run_simple<R: Rng + ?Sized>(
    words: &WordList,
    rng: &mut R,
    stats_path: &Path,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║           Wordle - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::random(words, rng).map_err(|e| e.to_string())?;
    tracing::info!(words = words.len(), "simple mode started");

    loop {
        print_board(&session);

        if let Some(result) = session.result() {
            announce_result(&session, result);
            match record_result(stats_path, result) {
                Ok(stats) => print_statistics(&stats),
                Err(e) => tracing::warn!(error = %e, "could not update statistics"),
            }

            match get_user_input("\nPlay again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = GameSession::random(words, rng).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input(&format!("Guess {}", session.active_row() + 1))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::random(words, rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!");
            }
            _ => {
                if let Err(message) = enter_guess(&mut session, words, &input) {
                    println!("❌ {message}");
                }
            }
        }
    }
}

/// Replace the active row with `input` and submit it
///
/// # Errors
///
/// Returns a user-facing message if the word cannot be typed or is rejected.
pub fn enter_guess(
    session: &mut GameSession,
    words: &WordList,
    input: &str,
) -> Result<SubmitOutcome, String> {
    while session.remove_letter().is_ok() {}

    for ch in input.trim().chars() {
        session.insert_letter(ch).map_err(|e| match e {
            EditRejected::RowFull => "Too many letters".to_string(),
            other => other.to_string(),
        })?;
    }

    let outcome = session.submit_guess(words).map_err(|e| e.to_string())?;
    tracing::debug!(
        row = outcome.row,
        feedback = %outcome.feedback.to_emoji(),
        "guess accepted"
    );
    Ok(outcome)
}

/// Load statistics, add one finished game and save them back
///
/// # Errors
///
/// Returns an error if the statistics file cannot be read or written.
pub fn record_result(stats_path: &Path, result: GameResult) -> anyhow::Result<Statistics> {
    let mut stats = Statistics::load(stats_path)?;
    stats.record(result);
    stats.save(stats_path)?;

    tracing::info!(
        won = result.won,
        attempts = result.attempts_used,
        "game finished"
    );
    Ok(stats)
}

fn announce_result(session: &GameSession, result: GameResult) {
    if result.won {
        let praise = match result.attempts_used {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! 🔥",
            3 => "✨ SPLENDID! ✨",
            4 => "👏 GREAT JOB! 👏",
            5 => "🎉 NICE WORK! 🎉",
            _ => "😅 PHEW! 😅",
        };
        println!("{}", praise.bright_green().bold());
    } else if let Some(target) = session.revealed_target() {
        println!(
            "{} {}",
            "Game over! The word was:".red().bold(),
            target.as_str().bright_yellow().bold()
        );
    }

    if let Some(text) = share_text(session) {
        println!("\n{text}");
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quitting
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
