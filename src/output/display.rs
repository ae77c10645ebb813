//! Display functions for command results

use super::formatters::{colored_tile, create_progress_bar, format_keyboard, format_row};
use crate::commands::EvaluationResult;
use crate::game::{GameSession, MAX_ATTEMPTS};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the full guess grid followed by the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for row in 0..MAX_ATTEMPTS {
        println!("   {}", format_row(session, row));
    }
    println!();
    for line in format_keyboard(&session.keyboard_status()) {
        println!("   {line}");
    }
    println!();
}

/// Print the result of scoring one guess
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.as_str().bright_yellow().bold(),
        result.guess.as_str().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = result
        .guess
        .letters()
        .iter()
        .zip(result.feedback.statuses())
        .map(|(&letter, &status)| colored_tile(char::from(letter), status).to_string())
        .collect();

    println!("\n   {tiles}   {}", result.feedback.to_emoji());
    println!(
        "\n   Correct: {}   Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print accumulated player statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
