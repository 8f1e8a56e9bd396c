//! Mottrix - CLI
//!
//! Playable word-guessing game (Motus style) with TUI and simple CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mottrix::{
    commands::{print_score_result, run_simple, score_pair},
    core::{MAX_WORD_LEN, MIN_WORD_LEN},
    game::DEFAULT_DURATION,
    interactive::{App, run_tui},
    wordlists::Dictionary,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mottrix",
    about = "Jeu de lettres dans le terminal : devinez le mot en 6 essais",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (5-8)
    #[arg(short, long, global = true, default_value_t = 6)]
    length: usize,

    /// Countdown duration in seconds (0 disables the timer)
    #[arg(short, long, global = true, default_value_t = DEFAULT_DURATION)]
    timer: u32,

    /// Path to a custom word list file (one word per line)
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Score a guess against a target word and print the outcome row
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the embedded dictionary or a custom word list
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let dictionary = Dictionary::from_file(path)?;
            if dictionary.word_count() == 0 {
                anyhow::bail!(
                    "word list {} contains no usable 5-8 letter words",
                    path.display()
                );
            }
            Ok(dictionary)
        }
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&cli.length) {
        anyhow::bail!("word length must be between {MIN_WORD_LEN} and {MAX_WORD_LEN}");
    }

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&dictionary, cli.length, cli.timer)?;
            run_tui(app)
        }
        Commands::Simple => run_simple(&dictionary, cli.length).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { guess, target } => {
            let result = score_pair(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}
