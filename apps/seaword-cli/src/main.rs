use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seaword_common::StoreConfig;
use seaword_persist::{FileStorage, PERSIST_KEY, load_persisted};
use seaword_state::{
    Action, GameStatus, HydrationPayload, SeaWordAction, SeaWordState, StatsAction, StatsState,
};
use seaword_store::{Store, make_store};

#[derive(Parser)]
#[command(name = "seaword-cli", about = "Play sea-word against a locally persisted store")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory the persisted snapshot lives in
    #[arg(long, default_value = ".seaword")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and persistence info
    Info,
    /// Start a new round with the given target word
    New {
        /// The word to guess
        word: String,
    },
    /// Submit a guess for the active round
    Guess {
        /// The guessed word
        word: String,
    },
    /// Show the current round and statistics
    Show,
    /// Discard saved progress and restore defaults
    Reset,
    /// Simulate a request-scoped render: fresh store, no persistence
    Render {
        /// Target word for the server-computed round
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => info(&cli.data_dir)?,
        Commands::New { word } => {
            let mut store = open_session(&cli.data_dir)?;
            store.dispatch(Action::SeaWord(SeaWordAction::StartPuzzle { puzzle: word }));
            print_round(store.sea_word());
        }
        Commands::Guess { word } => {
            let mut store = open_session(&cli.data_dir)?;
            let before = store.sea_word().status;
            store.dispatch(Action::SeaWord(SeaWordAction::SubmitGuess(word)));
            let after = store.sea_word().status;

            if before == GameStatus::Playing && after != GameStatus::Playing {
                store.dispatch(Action::Stats(StatsAction::GameFinished {
                    won: after == GameStatus::Won,
                }));
            }
            print_round(store.sea_word());
            if after != GameStatus::Playing {
                print_stats(store.stats());
            }
        }
        Commands::Show => {
            let had_save = load_persisted(&FileStorage::open(&cli.data_dir)?, PERSIST_KEY).is_some();
            let store = open_session(&cli.data_dir)?;
            if !had_save {
                println!("No saved progress.");
            }
            print_round(store.sea_word());
            print_stats(store.stats());
        }
        Commands::Reset => {
            let mut store = open_session(&cli.data_dir)?;
            store.reset();
            println!("Progress cleared.");
        }
        Commands::Render { word } => {
            // One store per request, dropped after rendering; nothing is
            // written to the data directory.
            let storage = FileStorage::open(&cli.data_dir)?;
            let mut store = make_store(StoreConfig::non_interactive(), Arc::new(storage));
            let payload = HydrationPayload {
                sea_word: Some(SeaWordState {
                    puzzle: word.to_lowercase(),
                    guesses: Vec::new(),
                    status: GameStatus::Playing,
                }),
                ..Default::default()
            };
            store.dispatch(Action::Hydrate(payload));
            println!("Rendered request-scoped round:");
            print_round(store.sea_word());
        }
    }

    Ok(())
}

/// Open the interactive session store and re-hydrate it from storage.
fn open_session(data_dir: &Path) -> Result<Store> {
    let storage = FileStorage::open(data_dir)?;
    let mut store = make_store(StoreConfig::interactive(), Arc::new(storage));
    store.dispatch(Action::Hydrate(HydrationPayload::default()));
    Ok(store)
}

fn info(data_dir: &Path) -> Result<()> {
    println!("seaword-cli v{}", env!("CARGO_PKG_VERSION"));
    println!("data dir: {}", data_dir.display());
    let storage = FileStorage::open(data_dir)?;
    match load_persisted(&storage, PERSIST_KEY) {
        Some(snapshot) => println!(
            "saved snapshot: v{} ({} guesses)",
            snapshot.persist_version,
            snapshot.state.sea_word.guesses.len()
        ),
        None => println!("saved snapshot: none"),
    }
    Ok(())
}

fn print_round(round: &SeaWordState) {
    if round.puzzle.is_empty() {
        println!("No active round. Start one with `new <word>`.");
        return;
    }
    for guess in &round.guesses {
        println!("  {guess}  {}", score(guess, &round.puzzle));
    }
    match round.status {
        GameStatus::Playing => println!("{} guesses left.", round.guesses_left()),
        GameStatus::Won => println!("Solved in {} guesses!", round.guesses.len()),
        GameStatus::Lost => println!("Out of guesses. The word was \"{}\".", round.puzzle),
    }
}

fn print_stats(stats: &StatsState) {
    println!(
        "played {} | won {} | streak {} (best {})",
        stats.played, stats.wins, stats.current_streak, stats.max_streak
    );
}

/// Per-letter feedback: `=` exact position, `+` elsewhere in the word,
/// `.` absent.
fn score(guess: &str, puzzle: &str) -> String {
    guess
        .chars()
        .zip(puzzle.chars())
        .map(|(g, p)| {
            if g == p {
                '='
            } else if puzzle.contains(g) {
                '+'
            } else {
                '.'
            }
        })
        .collect()
}
