use crate::{Result, WordleError};
use crate::debug_log;
use rand::Rng;
use std::borrow::Borrow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// A word made of uppercase ASCII letters.
///
/// Construction is validated, so every instance can be indexed by byte
/// position and every byte is a letter in `A..=Z`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Creates a word from text that is already uppercase.
    ///
    /// ```rust
    /// # use reverse_wordle::Word;
    /// assert!(Word::new("CRANE").is_ok());
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("CR4NE").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordleError::InvalidWord(text));
        }
        Ok(Self(text))
    }

    /// The letter at `index`, if the word is that long.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).copied().map(char::from)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.bytes().map(char::from)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lenient parsing: surrounding whitespace is trimmed and letters are upper-cased.
impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim().to_ascii_uppercase())
    }
}

/// The immutable, ordered list of words the engine may guess.
#[derive(Clone, Debug)]
pub struct Lexicon {
    words: Vec<Word>,
    word_length: usize,
}

impl Lexicon {
    /// Fails with [`WordleError::EmptyLexicon`] on an empty list and with
    /// [`WordleError::LengthMismatch`] if the words disagree on length.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let word_length = words.first().ok_or(WordleError::EmptyLexicon)?.len();
        if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
            return Err(WordleError::LengthMismatch {
                word: odd.to_string(),
                found: odd.len(),
                expected: word_length,
            });
        }
        Ok(Self { words, word_length })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Draws one word uniformly at random.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

fn parse_line(line: &str, word_length: usize) -> Option<Word> {
    let word = line.trim().to_ascii_uppercase();
    if word.is_empty() {
        return None;
    }
    if word.len() != word_length {
        debug_log!("Skipping '{}': expected {} letters", word, word_length);
        return None;
    }
    match Word::new(word) {
        Ok(word) => Some(word),
        Err(e) => {
            debug_log!("Skipping line: {}", e);
            None
        }
    }
}

/// Builds a lexicon from newline-delimited text, keeping only lines that hold
/// a `word_length`-letter word.
pub fn load_wordbank_from_str(data: &str, word_length: usize) -> Result<Lexicon> {
    let words = data
        .lines()
        .filter_map(|line| parse_line(line, word_length))
        .collect();
    Lexicon::new(words)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?, word_length) {
            words.push(word);
        }
    }
    Lexicon::new(words)
}
