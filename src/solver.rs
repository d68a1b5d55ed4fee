//! Constraint tracking and candidate filtering.
//!
//! Feedback follows the naive per-occurrence model: a letter is `Present`
//! whenever the secret contains it anywhere, no matter how many copies the
//! guess holds. [`grade`] produces feedback under exactly that model.

use crate::wordbank::Word;
use crate::{FeedbackError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The judgment for one letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green).
    Correct,
    /// The secret holds this letter somewhere else (yellow).
    Present,
    /// The secret does not hold this letter (gray).
    Absent,
}

impl Feedback {
    /// Parses the `G`/`Y`/`X` shorthand, case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Parses a feedback string such as `GYXXG` for a word of `expected` letters.
pub fn parse_feedback(text: &str, expected: usize) -> std::result::Result<Vec<Feedback>, FeedbackError> {
    let marks = text
        .trim()
        .chars()
        .map(|c| Feedback::from_char(c).ok_or(FeedbackError::UnknownMark(c)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if marks.len() != expected {
        return Err(FeedbackError::LengthMismatch {
            expected,
            found: marks.len(),
        });
    }
    Ok(marks)
}

#[must_use]
pub fn format_feedback(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

/// True when every mark is [`Feedback::Correct`].
#[must_use]
pub fn is_solved(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|&f| f == Feedback::Correct)
}

fn check_length(guess: &Word, feedback: &[Feedback]) -> std::result::Result<(), FeedbackError> {
    if feedback.len() == guess.len() {
        Ok(())
    } else {
        Err(FeedbackError::LengthMismatch {
            expected: guess.len(),
            found: feedback.len(),
        })
    }
}

/// Everything learned about the secret so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintState {
    confirmed: BTreeMap<usize, char>,
    present: BTreeSet<char>,
    absent: BTreeSet<char>,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state directly from known facts.
    pub fn from_parts(
        confirmed: impl IntoIterator<Item = (usize, char)>,
        present: impl IntoIterator<Item = char>,
        absent: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            confirmed: confirmed.into_iter().collect(),
            present: present.into_iter().collect(),
            absent: absent.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn confirmed(&self) -> &BTreeMap<usize, char> {
        &self.confirmed
    }

    #[must_use]
    pub fn present(&self) -> &BTreeSet<char> {
        &self.present
    }

    #[must_use]
    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    #[must_use]
    pub fn confirmed_at(&self, index: usize) -> Option<char> {
        self.confirmed.get(&index).copied()
    }

    fn is_confirmed_letter(&self, letter: char) -> bool {
        self.confirmed.values().any(|&c| c == letter)
    }

    /// Folds one round of feedback into a new state, leaving `self` untouched.
    ///
    /// Correct marks are applied before Absent marks, so a letter confirmed
    /// anywhere in this guess is never recorded as absent.
    pub fn apply(&self, guess: &Word, feedback: &[Feedback]) -> Result<Self> {
        check_length(guess, feedback)?;
        let mut next = self.clone();

        for (i, (letter, mark)) in guess.letters().zip(feedback).enumerate() {
            if *mark != Feedback::Correct {
                continue;
            }
            match next.confirmed.get(&i) {
                None => {
                    next.confirmed.insert(i, letter);
                }
                Some(&existing) if existing != letter => {
                    log::warn!(
                        "Position {} already confirmed as '{}', ignoring '{}'",
                        i + 1,
                        existing,
                        letter
                    );
                }
                Some(_) => {}
            }
        }

        for (letter, mark) in guess.letters().zip(feedback) {
            match mark {
                Feedback::Present => {
                    next.present.insert(letter);
                }
                Feedback::Absent if !next.is_confirmed_letter(letter) => {
                    next.absent.insert(letter);
                }
                _ => {}
            }
        }

        Ok(next)
    }

    /// Checks the cumulative constraints: confirmed positions, absent letters
    /// (except where confirmed) and required letters.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self
            .confirmed
            .iter()
            .any(|(&i, &letter)| word.letter(i) != Some(letter))
        {
            return false;
        }
        let blocked = word
            .letters()
            .enumerate()
            .any(|(i, letter)| self.absent.contains(&letter) && self.confirmed_at(i) != Some(letter));
        if blocked {
            return false;
        }
        self.present.iter().all(|&letter| word.contains(letter))
    }
}

/// Keeps the words of `pool` consistent with `state` and with the
/// misplaced letters of the latest guess.
///
/// `state` is expected to already include `guess`/`feedback`.
pub fn narrow(
    pool: &[Word],
    guess: &Word,
    feedback: &[Feedback],
    state: &ConstraintState,
) -> Result<Vec<Word>> {
    check_length(guess, feedback)?;
    let misplaced: Vec<(usize, char)> = guess
        .letters()
        .zip(feedback)
        .enumerate()
        .filter(|(_, (_, mark))| **mark == Feedback::Present)
        .map(|(i, (letter, _))| (i, letter))
        .collect();

    Ok(pool
        .iter()
        .filter(|word| {
            word.len() == guess.len()
                && state.admits(word)
                && misplaced.iter().all(|&(i, letter)| word.letter(i) != Some(letter))
        })
        .cloned()
        .collect())
}

/// Grades `guess` against `secret`.
///
/// Repeated letters are not counted: every copy of a letter the secret holds
/// is marked `Present` unless it sits in the right spot.
#[must_use]
pub fn grade(guess: &Word, secret: &Word) -> Vec<Feedback> {
    guess
        .letters()
        .enumerate()
        .map(|(i, letter)| {
            if secret.letter(i) == Some(letter) {
                Feedback::Correct
            } else if secret.contains(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect()
}

/// Expected number of candidates left after guessing `guess`, assuming each
/// candidate is equally likely to be the secret.
#[must_use]
pub fn expected_pool_size(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let mut pattern_counts: HashMap<Vec<Feedback>, usize> = HashMap::new();
    for solution in candidates {
        *pattern_counts.entry(grade(guess, solution)).or_insert(0) += 1;
    }
    let total = candidates.len() as f64;
    pattern_counts
        .values()
        .map(|&count| (count as f64).powi(2))
        .sum::<f64>()
        / total
}
