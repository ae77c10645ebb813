//! TUI rendering with ratatui
//!
//! Guess grid, on-screen keyboard, messages and statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{KeyboardStatus, MAX_ATTEMPTS};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background/foreground for a tile or key
fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Typing => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 2), // Grid
            Constraint::Min(5),                              // Keyboard
        ])
        .split(area);

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for (row, attempt) in app.session.attempts().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let letter = attempt.letter_at(col).unwrap_or('·');
            let status = app.session.cell_status(row, col);
            spans.push(Span::styled(format!(" {letter} "), status_style(status)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, chunks[0]);

    render_keyboard(f, &app.session.keyboard_status(), chunks[1]);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| {
                    let style = match keyboard.get(ch) {
                        Some(status) => status_style(status),
                        None => Style::default().fg(Color::White),
                    };
                    [Span::styled(format!(" {ch} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Win: {:.0}%",
            stats.games_played,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {}  Best: {}",
            stats.current_streak, stats.max_streak
        )),
        Line::from(""),
    ];

    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = (count * 16 / most) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.input_mode {
        InputMode::Playing => (
            format!(
                "Guess {}/{} | Type letters | Backspace: Delete | Enter: Submit | Esc: Quit",
                app.session.active_row() + 1,
                MAX_ATTEMPTS
            ),
            Color::DarkGray,
        ),
        InputMode::GameOver => (
            "n: New Game | q: Quit".to_string(),
            if app.session.is_won() {
                Color::Green
            } else {
                Color::Red
            },
        ),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(status, area);
}
