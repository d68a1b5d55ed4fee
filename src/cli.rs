use crate::game_state::{
    DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, EndInfo, GameInterface, GameOutcome, GuessInfo,
    SessionState, UserAction,
};
use crate::history::{Summary, get_history_path};
use crate::selector::{GuessSelector, InformationSelector, RandomSelector};
use crate::solver::{Feedback, format_feedback, parse_feedback};
use crate::wordbank::Word;
use crate::WordleError;
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

/// Reverse Wordle: think of a word and let the machine guess it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Letters per word
    #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Guesses the machine gets before it loses
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// How the machine picks its next guess
    #[arg(short, long, value_enum, default_value_t = Strategy::Random)]
    pub strategy: Strategy,

    /// Seed for secret draws and random guesses
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to keep game results in (defaults to ~/.reverse_wordle_history)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Do not read or write the results file
    #[arg(long, conflicts_with = "history")]
    pub no_history: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Uniformly random among the consistent words
    Random,
    /// The consistent word that leaves the fewest candidates on average
    Information,
}

impl Cli {
    #[must_use]
    pub fn selector(&self) -> Box<dyn GuessSelector> {
        match (self.strategy, self.seed) {
            (Strategy::Random, Some(seed)) => Box::new(RandomSelector::seeded(seed.wrapping_add(1))),
            (Strategy::Random, None) => Box::new(RandomSelector::from_entropy()),
            (Strategy::Information, _) => Box::new(InformationSelector),
        }
    }

    /// Where results are kept, or `None` when history is disabled.
    #[must_use]
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history.clone().or_else(get_history_path)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

fn is_valid_word(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Reads one trimmed, upper-cased line. `None` on end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_uppercase()),
    }
}

pub fn read_secret<R: BufRead>(reader: &mut R, word_length: usize) -> Option<UserAction> {
    println!(
        "\nEnter your secret word ({word_length} letters), 'random' to draw one, 'stats', or 'exit':"
    );
    let Some(input) = read_line(reader) else {
        return Some(UserAction::Exit);
    };

    match input.as_str() {
        "EXIT" => Some(UserAction::Exit),
        "RANDOM" => Some(UserAction::RandomSecret),
        "STATS" => Some(UserAction::ShowStats),
        _ if is_valid_word(&input, word_length) => match Word::new(input) {
            Ok(word) => Some(UserAction::Secret(word)),
            Err(e) => {
                println!("{e}");
                None
            }
        },
        _ => {
            println!("Invalid secret. Please enter {word_length} letters.");
            None
        }
    }
}

pub fn read_feedback<R: BufRead>(reader: &mut R, guess: &Word) -> Option<UserAction> {
    println!(
        "Enter feedback for {guess} (G=green, Y=yellow, X=gray, e.g. GYXXG), 'auto', 'next', or 'exit':"
    );
    let Some(input) = read_line(reader) else {
        return Some(UserAction::Exit);
    };

    match input.as_str() {
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        "AUTO" => Some(UserAction::AutoFeedback),
        "STATS" => Some(UserAction::ShowStats),
        _ => match parse_feedback(&input, guess.len()) {
            Ok(feedback) => Some(UserAction::Feedback(feedback)),
            Err(e) => {
                println!("Invalid feedback: {e}.");
                None
            }
        },
    }
}

pub fn display_session_start(word_count: usize, max_guesses: usize) {
    println!("New game started. {word_count} words in play, {max_guesses} guesses allowed.");
}

pub fn display_guess(info: &GuessInfo) {
    println!(
        "\nGuess {}/{}: {} ({} candidates remain)",
        info.round, info.max_guesses, info.guess, info.candidates
    );
}

pub fn display_auto_feedback(guess: &Word, feedback: &[Feedback]) {
    println!("Feedback for {guess}: {}", format_feedback(feedback));
}

pub fn display_end(info: &EndInfo) {
    let secret = info
        .secret
        .map_or_else(|| "your word".to_string(), Word::to_string);
    match info.state {
        SessionState::Won => {
            println!("Victory! The machine guessed {secret} in {} guesses.", info.guess_count);
        }
        SessionState::Lost => {
            println!(
                "You win! The machine failed to guess {secret} in {} guesses.",
                info.max_guesses
            );
        }
        SessionState::Exhausted => {
            println!(
                "No consistent words remain after {} guesses. Check your feedback.",
                info.guess_count
            );
        }
        SessionState::AwaitingSecret | SessionState::AwaitingFeedback => {}
    }
}

pub fn display_error(error: &WordleError) {
    match error {
        WordleError::MalformedFeedback { kind } => println!("Invalid feedback: {kind}."),
        other => println!("Error: {other}."),
    }
}

pub fn display_history(history: &[GameOutcome], summary: &Summary) {
    println!("Game Stats");
    if history.is_empty() {
        println!("No games played yet.");
        return;
    }
    for outcome in history {
        println!("  {outcome}");
    }
    println!("{summary}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_secret(&mut self, word_length: usize) -> Option<UserAction> {
        read_secret(&mut self.reader, word_length)
    }

    fn read_feedback(&mut self, guess: &Word) -> Option<UserAction> {
        read_feedback(&mut self.reader, guess)
    }

    fn display_session_start(&mut self, word_count: usize, max_guesses: usize) {
        display_session_start(word_count, max_guesses);
    }

    fn display_guess(&mut self, info: &GuessInfo) {
        display_guess(info);
    }

    fn display_auto_feedback(&mut self, guess: &Word, feedback: &[Feedback]) {
        display_auto_feedback(guess, feedback);
    }

    fn display_end(&mut self, info: &EndInfo) {
        display_end(info);
    }

    fn display_error(&mut self, error: &WordleError) {
        display_error(error);
    }

    fn display_history(&mut self, history: &[GameOutcome], summary: &Summary) {
        display_history(history, summary);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
