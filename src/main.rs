//! Wordle - CLI
//!
//! Play Wordle in the terminal, with a TUI (default) or a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{evaluate_words, run_simple},
    output::{print_evaluation_result, print_statistics},
    stats::{DEFAULT_STATS_FILE, Statistics},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Where game statistics are stored
    #[arg(long, global = true, default_value = DEFAULT_STATS_FILE)]
    stats_file: PathBuf,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type one word per line)
    Simple,

    /// Score a single guess against a target word
    Evaluate {
        /// The hidden word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Show accumulated statistics
    Stats,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    let words = match wordlist_mode {
        "embedded" => WordList::embedded(),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}"))?,
    };

    if words.is_empty() {
        anyhow::bail!("word list '{wordlist_mode}' contains no five-letter words");
    }

    tracing::info!(source = wordlist_mode, words = words.len(), "word list ready");
    Ok(words)
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play_command(&words, make_rng(cli.seed), cli.stats_file)
        }
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist)?;
            let mut rng = make_rng(cli.seed);
            run_simple(&words, &mut rng, &cli.stats_file).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Evaluate { target, guess } => run_evaluate_command(&target, &guess),
        Commands::Stats => run_stats_command(&cli.stats_file),
    }
}

fn run_evaluate_command(target: &str, guess: &str) -> Result<()> {
    let result = evaluate_words(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation_result(&result);
    Ok(())
}

fn run_stats_command(stats_file: &Path) -> Result<()> {
    let stats = Statistics::load(stats_file)?;
    print_statistics(&stats);
    Ok(())
}

fn run_play_command(words: &WordList, rng: StdRng, stats_file: PathBuf) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, rng, stats_file)?;
    run_tui(app)
}
