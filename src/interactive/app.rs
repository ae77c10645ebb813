//! TUI application state and logic

use crate::game::{EditRejected, GameResult, GameSession};
use crate::stats::Statistics;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub session: GameSession,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub stats_path: PathBuf,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// Unreadable statistics are logged and replaced with fresh ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list is empty.
    pub fn new(words: &'a WordList, mut rng: StdRng, stats_path: PathBuf) -> Result<Self> {
        let session = GameSession::random(words, &mut rng)?;
        let stats = Statistics::load(&stats_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable statistics");
            Statistics::default()
        });

        Ok(Self {
            words,
            session,
            rng,
            messages: vec![Message {
                text: "Guess the five-letter word in six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats,
            stats_path,
            should_quit: false,
            input_mode: InputMode::Playing,
        })
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => {
                    // Nothing to delete is not worth a message
                    let _ = self.session.remove_letter();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn type_letter(&mut self, c: char) {
        match self.session.insert_letter(c) {
            Ok(()) | Err(EditRejected::RowFull) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the active row
    pub fn submit(&mut self) {
        match self.session.submit_guess(self.words) {
            Ok(outcome) => {
                tracing::debug!(
                    row = outcome.row,
                    feedback = %outcome.feedback.to_emoji(),
                    "guess accepted"
                );
                if let Some(result) = outcome.result() {
                    self.finish_game(result);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, result: GameResult) {
        self.input_mode = InputMode::GameOver;
        self.stats.record(result);
        if let Err(e) = self.stats.save(&self.stats_path) {
            tracing::warn!(error = %e, "could not save statistics");
        }
        tracing::info!(
            won = result.won,
            attempts = result.attempts_used,
            "game finished"
        );

        if result.won {
            let celebration = match result.attempts_used {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else if let Some(target) = self.session.revealed_target() {
            let text = format!("Game over! The word was: {target}");
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Replace the session with a fresh one
    pub fn new_game(&mut self) {
        match GameSession::random(self.words, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal initialization fails or if there are I/O errors
/// during TUI operation.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
