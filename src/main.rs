//! Wordle - CLI
//!
//! Play Wordle in the terminal: a full TUI with an on-screen keyboard, a
//! line-based mode, and a one-shot scorer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, score_guess},
    game::{Dictionary, GameConfig, SessionHost},
    output::print_score_result,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal, with animated reveals and an on-screen keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// TOML file overriding game timings and the guess limit
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a secret and print the feedback
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given. Without one they go to stderr, except
/// in the TUI where stderr would corrupt the alternate screen.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded()?,
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read wordlist {path}"))?;
            Dictionary::new(words).with_context(|| format!("wordlist {path} is unusable"))?
        }
    };
    tracing::info!(words = dictionary.words().len(), source = wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let config = GameConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::info!(?config, "config loaded");
    Ok(config)
}

/// Everything a game needs: dictionary, config, and the secret-picking RNG
fn load_game(cli: &Cli) -> Result<(Dictionary, GameConfig, StdRng)> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = load_config(cli.config.as_deref())?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok((dictionary, config, rng))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let (dictionary, config, rng) = load_game(&cli)?;
            run_play_command(&dictionary, config, rng)
        }
        Commands::Simple => {
            let (dictionary, config, rng) = load_game(&cli)?;
            run_simple(SessionHost::new(&dictionary, config, rng))?;
            Ok(())
        }
        Commands::Score { guess, secret } => {
            let result = score_guess(&guess, &secret)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng);
    run_tui(app)
}
