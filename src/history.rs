//! Game outcome persistence and summary statistics.
//!
//! The history file holds one outcome per line: `won 4 APPLE` or
//! `lost 10 APPLE`.

use crate::Result;
use crate::game_state::GameOutcome;
use crate::info_log;
use crate::wordbank::Word;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const HISTORY_FILE_NAME: &str = ".reverse_wordle_history";

/// Default location of the history file, in the user's home directory.
#[must_use]
pub fn get_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

#[must_use]
pub fn format_outcome(outcome: &GameOutcome) -> String {
    let result = if outcome.won { "won" } else { "lost" };
    format!("{} {} {}", result, outcome.guess_count, outcome.secret)
}

#[must_use]
pub fn parse_outcome(line: &str) -> Option<GameOutcome> {
    let mut fields = line.split_whitespace();
    let won = match fields.next()? {
        "won" => true,
        "lost" => false,
        _ => return None,
    };
    let guess_count = fields.next()?.parse().ok()?;
    let secret = Word::new(fields.next()?).ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(GameOutcome {
        guess_count,
        won,
        secret,
    })
}

/// Reads saved outcomes. A missing file is an empty history.
pub fn read_history(path: &Path) -> Result<Vec<GameOutcome>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut outcomes = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_outcome(line) {
            Some(outcome) => outcomes.push(outcome),
            None => log::warn!(
                "Skipping malformed line {} in {}: {:?}",
                number + 1,
                path.display(),
                line
            ),
        }
    }
    info_log!("Loaded {} outcomes from {}", outcomes.len(), path.display());
    Ok(outcomes)
}

/// Overwrites `path` with `outcomes`.
pub fn write_history(path: &Path, outcomes: &[GameOutcome]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for outcome in outcomes {
        writeln!(file, "{}", format_outcome(outcome))?;
    }
    info_log!("Saved {} outcomes to {}", outcomes.len(), path.display());
    Ok(())
}

/// Aggregate statistics over a list of outcomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub played: usize,
    pub won: usize,
    /// Number of wins per winning guess count.
    pub distribution: BTreeMap<usize, usize>,
}

impl Summary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[GameOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.played += 1;
            if outcome.won {
                summary.won += 1;
                *summary.distribution.entry(outcome.guess_count).or_insert(0) += 1;
            }
        }
        summary
    }

    #[must_use]
    pub fn lost(&self) -> usize {
        self.played - self.won
    }

    /// Share of games the machine won, between 0 and 1.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64
        }
    }

    /// Mean guess count over won games.
    #[must_use]
    pub fn mean_guesses(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self.distribution.iter().map(|(guesses, n)| guesses * n).sum();
        Some(total as f64 / self.won as f64)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Played: {}, Won: {}, Lost: {}, Win rate: {:.0}%",
            self.played,
            self.won,
            self.lost(),
            self.win_rate() * 100.0
        )?;
        if let Some(mean) = self.mean_guesses() {
            write!(f, ", Average guesses: {mean:.2}")?;
        }
        for (guesses, count) in &self.distribution {
            write!(f, "\n  {guesses:>2}: {}", "#".repeat(*count))?;
        }
        Ok(())
    }
}
