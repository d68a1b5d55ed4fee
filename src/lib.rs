// Library interface for reverse-wordle
// The engine lives here so the binary and integration tests share it

use thiserror::Error;

pub mod cli;
pub mod game_state;
pub mod history;
pub mod logging;
pub mod selector;
pub mod solver;
pub mod wordbank;

pub use game_state::{Game, GameInterface, GameOutcome, SessionConfig, SessionState, game_loop};
pub use selector::{GuessSelector, InformationSelector, RandomSelector};
pub use solver::{ConstraintState, Feedback, grade, narrow};
pub use wordbank::{Lexicon, Word, load_wordbank_from_file, load_wordbank_from_str};

/// Errors produced by the guessing engine and its collaborators.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("malformed feedback")]
    MalformedFeedback {
        #[from]
        kind: FeedbackError,
    },

    #[error("the word list contains no usable words")]
    EmptyLexicon,

    /// A string that is not a sequence of uppercase ASCII letters.
    #[error("\"{0}\" is not a valid word")]
    InvalidWord(String),

    /// A word whose length does not match the configured word length.
    #[error("\"{word}\" has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        found: usize,
        expected: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Feedback was submitted while no guess was pending.
    #[error("no guess is awaiting feedback")]
    NotAwaitingFeedback,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("expected {expected} marks, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("'{0}' is not a feedback mark (use G, Y or X)")]
    UnknownMark(char),
}

pub type Result<T> = std::result::Result<T, WordleError>;
