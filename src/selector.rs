//! Strategies for picking the next guess out of the candidate pool.

use crate::debug_log;
use crate::solver::expected_pool_size;
use crate::wordbank::Word;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Chooses the next guess.
///
/// Implementations must only return members of `pool` that are not in
/// `guessed`, and must return `None` when no such word exists.
pub trait GuessSelector {
    fn select(&mut self, pool: &[Word], guessed: &HashSet<Word>) -> Option<Word>;

    fn name(&self) -> &'static str;
}

impl<S: GuessSelector + ?Sized> GuessSelector for Box<S> {
    fn select(&mut self, pool: &[Word], guessed: &HashSet<Word>) -> Option<Word> {
        (**self).select(pool, guessed)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

fn unguessed<'a>(pool: &'a [Word], guessed: &HashSet<Word>) -> Vec<&'a Word> {
    pool.iter().filter(|w| !guessed.contains(*w)).collect()
}

/// Picks uniformly at random among the unguessed candidates.
#[derive(Debug)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GuessSelector for RandomSelector<R> {
    fn select(&mut self, pool: &[Word], guessed: &HashSet<Word>) -> Option<Word> {
        let valid = unguessed(pool, guessed);
        debug_log!("RandomSelector: {} of {} candidates unguessed", valid.len(), pool.len());
        valid.choose(&mut self.rng).map(|w| (*w).clone())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Picks the unguessed candidate that leaves the smallest expected pool,
/// breaking ties by pool order. Deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct InformationSelector;

impl GuessSelector for InformationSelector {
    fn select(&mut self, pool: &[Word], guessed: &HashSet<Word>) -> Option<Word> {
        let mut best: Option<(&Word, f64)> = None;
        for guess in unguessed(pool, guessed) {
            let score = expected_pool_size(guess, pool);
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((guess, score));
            }
        }
        best.map(|(word, score)| {
            debug_log!("InformationSelector: {} (expected pool size {:.2})", word, score);
            word.clone()
        })
    }

    fn name(&self) -> &'static str {
        "information"
    }
}
