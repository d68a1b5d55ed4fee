use crate::history::Summary;
use crate::selector::GuessSelector;
use crate::solver::{ConstraintState, Feedback, grade, is_solved, narrow};
use crate::wordbank::{Lexicon, Word};
use crate::{Result, WordleError};
use crate::{debug_log, info_log};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Word length and guess budget for every session of a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    word_length: usize,
    max_guesses: usize,
}

impl SessionConfig {
    pub fn new(word_length: usize, max_guesses: usize) -> Result<Self> {
        if word_length == 0 {
            return Err(WordleError::InvalidConfig("word length must be at least 1"));
        }
        if max_guesses == 0 {
            return Err(WordleError::InvalidConfig("at least one guess must be allowed"));
        }
        Ok(Self {
            word_length,
            max_guesses,
        })
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingSecret,
    AwaitingFeedback,
    Won,
    Lost,
    /// No consistent, unguessed word is left. The feedback contradicted itself
    /// or the secret is not in the word list.
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Exhausted)
    }
}

/// The record of one finished (won or lost) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub guess_count: usize,
    pub won: bool,
    pub secret: Word,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.won { "Victory!" } else { "Loss" };
        write!(
            f,
            "{} - Guesses: {}, Word: {}",
            result, self.guess_count, self.secret
        )
    }
}

/// A guess together with the feedback it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Vec<Feedback>,
}

/// The guessing engine: one session at a time plus the history of finished ones.
pub struct Game<S = Box<dyn GuessSelector>> {
    config: SessionConfig,
    lexicon: Lexicon,
    selector: S,
    history: Vec<GameOutcome>,
    state: SessionState,
    secret: Option<Word>,
    constraints: ConstraintState,
    pool: Vec<Word>,
    guessed: HashSet<Word>,
    rounds: Vec<Round>,
    current_guess: Option<Word>,
}

impl<S: GuessSelector> Game<S> {
    /// Fails if the lexicon's word length differs from the configured one.
    pub fn new(lexicon: Lexicon, config: SessionConfig, selector: S) -> Result<Self> {
        let Some(first) = lexicon.words().first() else {
            return Err(WordleError::EmptyLexicon);
        };
        if lexicon.word_length() != config.word_length() {
            return Err(WordleError::LengthMismatch {
                word: first.to_string(),
                found: lexicon.word_length(),
                expected: config.word_length(),
            });
        }
        info_log!(
            "Game::new() - {} words, {} letters, {} guesses, {} selector",
            lexicon.len(),
            config.word_length(),
            config.max_guesses(),
            selector.name()
        );
        let pool = lexicon.words().to_vec();
        Ok(Self {
            config,
            lexicon,
            selector,
            history: Vec::new(),
            state: SessionState::AwaitingSecret,
            secret: None,
            constraints: ConstraintState::new(),
            pool,
            guessed: HashSet::new(),
            rounds: Vec::new(),
            current_guess: None,
        })
    }

    /// Seeds the history with outcomes from earlier runs.
    #[must_use]
    pub fn with_history(mut self, history: Vec<GameOutcome>) -> Self {
        self.history = history;
        self
    }

    /// Starts a new session for `secret` and issues the first guess.
    ///
    /// Everything but the history is reset.
    pub fn set_secret(&mut self, secret: Word) -> Result<SessionState> {
        if secret.len() != self.config.word_length() {
            return Err(WordleError::LengthMismatch {
                found: secret.len(),
                word: secret.to_string(),
                expected: self.config.word_length(),
            });
        }
        if !self.lexicon.contains(&secret) {
            log::warn!("Secret {secret} is not in the word list; it can never be guessed");
        }
        info_log!("set_secret() - New session");

        self.secret = Some(secret);
        self.constraints = ConstraintState::new();
        self.pool = self.lexicon.words().to_vec();
        self.guessed.clear();
        self.rounds.clear();
        self.current_guess = None;
        self.issue_next_guess();
        Ok(self.state)
    }

    /// Starts a new session with a secret drawn uniformly from the lexicon.
    pub fn start_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SessionState> {
        let secret = self.lexicon.random_word(rng).clone();
        self.set_secret(secret)
    }

    /// Advances the session with the feedback for the pending guess.
    ///
    /// On error nothing changes and the same guess is still pending.
    pub fn submit_feedback(&mut self, feedback: &[Feedback]) -> Result<SessionState> {
        let guess = match (&self.state, &self.current_guess) {
            (SessionState::AwaitingFeedback, Some(guess)) => guess.clone(),
            _ => return Err(WordleError::NotAwaitingFeedback),
        };

        let constraints = self.constraints.apply(&guess, feedback)?;
        let pool = narrow(&self.pool, &guess, feedback, &constraints)?;
        debug_log!(
            "submit_feedback() - {} narrowed the pool from {} to {}",
            guess,
            self.pool.len(),
            pool.len()
        );

        self.constraints = constraints;
        self.pool = pool;
        self.guessed.insert(guess.clone());
        self.rounds.push(Round {
            guess,
            feedback: feedback.to_vec(),
        });

        if is_solved(feedback) {
            self.finish(SessionState::Won);
        } else if self.guess_count() >= self.config.max_guesses() {
            self.finish(SessionState::Lost);
        } else {
            self.issue_next_guess();
        }
        Ok(self.state)
    }

    fn issue_next_guess(&mut self) {
        match self.selector.select(&self.pool, &self.guessed) {
            Some(guess) => {
                debug_log!("issue_next_guess() - {}", guess);
                self.current_guess = Some(guess);
                self.state = SessionState::AwaitingFeedback;
            }
            None => {
                log::warn!(
                    "No consistent word left after {} guesses; the feedback was contradictory",
                    self.guess_count()
                );
                self.current_guess = None;
                self.state = SessionState::Exhausted;
            }
        }
    }

    fn finish(&mut self, state: SessionState) {
        self.state = state;
        self.current_guess = None;
        if let Some(secret) = &self.secret {
            let outcome = GameOutcome {
                guess_count: self.rounds.len(),
                won: state == SessionState::Won,
                secret: secret.clone(),
            };
            info_log!("finish() - {}", outcome);
            self.history.push(outcome);
        }
    }

    /// Feedback for the pending guess computed from the stored secret.
    #[must_use]
    pub fn grade_current(&self) -> Option<Vec<Feedback>> {
        Some(grade(self.current_guess.as_ref()?, self.secret.as_ref()?))
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_guess(&self) -> Option<&Word> {
        self.current_guess.as_ref()
    }

    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// Number of guesses that have received feedback this session.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub fn guessed(&self) -> &HashSet<Word> {
        &self.guessed
    }

    #[must_use]
    pub fn history(&self) -> &[GameOutcome] {
        &self.history
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_outcomes(&self.history)
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn selector_name(&self) -> &'static str {
        self.selector.name()
    }
}

/// What the player asked for at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Secret(Word),
    RandomSecret,
    Feedback(Vec<Feedback>),
    /// Let the engine grade its own guess against the secret.
    AutoFeedback,
    ShowStats,
    NewGame,
    Exit,
}

/// The guess the engine is waiting on, for display.
#[derive(Debug, Clone)]
pub struct GuessInfo<'a> {
    pub guess: &'a Word,
    pub round: usize,
    pub max_guesses: usize,
    pub candidates: usize,
}

/// How a session ended, for display.
#[derive(Debug, Clone)]
pub struct EndInfo<'a> {
    pub state: SessionState,
    pub guess_count: usize,
    pub max_guesses: usize,
    pub secret: Option<&'a Word>,
}

/// The presentation side of the game.
///
/// `read_*` return `None` for input that should simply be asked for again.
pub trait GameInterface {
    fn read_secret(&mut self, word_length: usize) -> Option<UserAction>;
    fn read_feedback(&mut self, guess: &Word) -> Option<UserAction>;
    fn display_session_start(&mut self, word_count: usize, max_guesses: usize);
    fn display_guess(&mut self, info: &GuessInfo);
    fn display_auto_feedback(&mut self, guess: &Word, feedback: &[Feedback]);
    fn display_end(&mut self, info: &EndInfo);
    fn display_error(&mut self, error: &WordleError);
    fn display_history(&mut self, history: &[GameOutcome], summary: &Summary);
    fn display_exit_message(&mut self);
}

enum SessionEnd {
    Finished,
    NewGame,
    Exit,
}

/// Runs sessions until the interface asks to exit.
pub fn game_loop<S, I, R>(game: &mut Game<S>, interface: &mut I, rng: &mut R)
where
    S: GuessSelector,
    I: GameInterface,
    R: Rng + ?Sized,
{
    loop {
        let Some(action) = interface.read_secret(game.config().word_length()) else {
            continue;
        };
        let started = match action {
            UserAction::Exit => break,
            UserAction::ShowStats => {
                interface.display_history(game.history(), &game.summary());
                continue;
            }
            UserAction::Secret(secret) => game.set_secret(secret),
            UserAction::RandomSecret => game.start_random(rng),
            other => {
                debug_log!("game_loop() - Ignoring {:?} while no game is running", other);
                continue;
            }
        };
        if let Err(e) = started {
            interface.display_error(&e);
            continue;
        }

        interface.display_session_start(game.lexicon().len(), game.config().max_guesses());
        match play_session(game, interface) {
            SessionEnd::Exit => break,
            SessionEnd::NewGame | SessionEnd::Finished => {}
        }
    }
    interface.display_exit_message();
}

fn play_session<S: GuessSelector, I: GameInterface>(
    game: &mut Game<S>,
    interface: &mut I,
) -> SessionEnd {
    while let Some(guess) = game.current_guess().cloned() {
        interface.display_guess(&GuessInfo {
            guess: &guess,
            round: game.guess_count() + 1,
            max_guesses: game.config().max_guesses(),
            candidates: game.candidates().len(),
        });

        let feedback = match interface.read_feedback(&guess) {
            None => continue,
            Some(UserAction::Exit) => return SessionEnd::Exit,
            Some(UserAction::NewGame) => return SessionEnd::NewGame,
            Some(UserAction::ShowStats) => {
                interface.display_history(game.history(), &game.summary());
                continue;
            }
            Some(UserAction::Feedback(feedback)) => feedback,
            Some(UserAction::AutoFeedback) => match game.grade_current() {
                Some(feedback) => {
                    interface.display_auto_feedback(&guess, &feedback);
                    feedback
                }
                None => continue,
            },
            Some(other) => {
                debug_log!("play_session() - Ignoring {:?} mid-game", other);
                continue;
            }
        };

        if let Err(e) = game.submit_feedback(&feedback) {
            interface.display_error(&e);
        }
    }

    interface.display_end(&EndInfo {
        state: game.state(),
        guess_count: game.guess_count(),
        max_guesses: game.config().max_guesses(),
        secret: game.secret(),
    });
    SessionEnd::Finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{InformationSelector, RandomSelector};
    use crate::solver::Feedback::{Absent, Correct, Present};
    use crate::wordbank::load_wordbank_from_str;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::collections::VecDeque;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    /// A game whose selector always takes the first unguessed candidate.
    fn first_pick_game(list: &str, max_guesses: usize) -> Game<RandomSelector<StepRng>> {
        let lexicon = load_wordbank_from_str(list, 5).unwrap();
        let config = SessionConfig::new(5, max_guesses).unwrap();
        Game::new(lexicon, config, RandomSelector::new(StepRng::new(0, 0))).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(SessionConfig::new(0, 10), Err(WordleError::InvalidConfig(_))));
        assert!(matches!(SessionConfig::new(5, 0), Err(WordleError::InvalidConfig(_))));
        let config = SessionConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_guesses(), 10);
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let lexicon = load_wordbank_from_str("tree\nbush", 4).unwrap();
        let result = Game::new(lexicon, SessionConfig::default(), InformationSelector);
        assert!(matches!(result, Err(WordleError::LengthMismatch { .. })));
    }

    #[test]
    fn test_initial_state() {
        let mut game = first_pick_game("crane\nslate", 10);
        assert_eq!(game.state(), SessionState::AwaitingSecret);
        assert_eq!(game.current_guess(), None);
        assert!(matches!(
            game.submit_feedback(&[Correct; 5]),
            Err(WordleError::NotAwaitingFeedback)
        ));
    }

    #[test]
    fn test_set_secret_issues_guess() {
        let mut game = first_pick_game("crane\nslate\nraise", 10);
        let state = game.set_secret(word("SLATE")).unwrap();
        assert_eq!(state, SessionState::AwaitingFeedback);
        assert_eq!(game.current_guess(), Some(&word("CRANE")));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn test_set_secret_wrong_length() {
        let mut game = first_pick_game("crane\nslate", 10);
        assert!(matches!(
            game.set_secret(word("CRANES")),
            Err(WordleError::LengthMismatch { .. })
        ));
        assert_eq!(game.state(), SessionState::AwaitingSecret);
    }

    #[test]
    fn test_all_correct_wins() {
        let mut game = first_pick_game("crane\nslate", 10);
        game.set_secret(word("CRANE")).unwrap();
        assert_eq!(game.submit_feedback(&[Correct; 5]).unwrap(), SessionState::Won);
        assert_eq!(game.current_guess(), None);
        assert_eq!(
            game.history(),
            &[GameOutcome {
                guess_count: 1,
                won: true,
                secret: word("CRANE"),
            }]
        );
    }

    #[test]
    fn test_win_on_last_guess_is_not_a_loss() {
        let mut game = first_pick_game("crane\nslate", 1);
        game.set_secret(word("CRANE")).unwrap();
        assert_eq!(game.submit_feedback(&[Correct; 5]).unwrap(), SessionState::Won);
        assert!(game.history()[0].won);
    }

    #[test]
    fn test_narrowing_then_win() {
        let mut game = first_pick_game("crane\nslate\nraise\nstare", 10);
        game.set_secret(word("STARE")).unwrap();
        let feedback = game.grade_current().unwrap();
        assert_eq!(feedback, vec![Absent, Present, Correct, Absent, Correct]);
        assert_eq!(game.submit_feedback(&feedback).unwrap(), SessionState::AwaitingFeedback);
        assert_eq!(game.candidates(), &[word("STARE")]);
        assert_eq!(game.current_guess(), Some(&word("STARE")));
        assert_eq!(game.submit_feedback(&[Correct; 5]).unwrap(), SessionState::Won);
        assert_eq!(game.history()[0].guess_count, 2);
    }

    #[test]
    fn test_budget_exhausted_loses() {
        let mut game = first_pick_game("crane\nslate\nraise\nstare", 1);
        game.set_secret(word("STARE")).unwrap();
        let feedback = game.grade_current().unwrap();
        assert_eq!(game.submit_feedback(&feedback).unwrap(), SessionState::Lost);
        assert_eq!(
            game.history(),
            &[GameOutcome {
                guess_count: 1,
                won: false,
                secret: word("STARE"),
            }]
        );
        assert!(matches!(
            game.submit_feedback(&[Correct; 5]),
            Err(WordleError::NotAwaitingFeedback)
        ));
    }

    #[test]
    fn test_contradictory_feedback_exhausts() {
        let mut game = first_pick_game("crane\nslate", 10);
        game.set_secret(word("SLATE")).unwrap();
        assert_eq!(game.submit_feedback(&[Absent; 5]).unwrap(), SessionState::Exhausted);
        assert!(game.candidates().is_empty());
        assert_eq!(game.current_guess(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_every_word_guessed_exhausts() {
        // The gray Es are confirmed elsewhere, so EERIE survives its own
        // feedback but was already guessed
        let mut game = first_pick_game("eerie\ncrane", 10);
        game.set_secret(word("CRANE")).unwrap();
        assert_eq!(game.current_guess(), Some(&word("EERIE")));
        let state = game
            .submit_feedback(&[Absent, Absent, Correct, Correct, Correct])
            .unwrap();
        assert_eq!(state, SessionState::Exhausted);
        assert_eq!(game.candidates(), &[word("EERIE")]);
    }

    #[test]
    fn test_malformed_feedback_leaves_session_alone() {
        let mut game = first_pick_game("crane\nslate", 10);
        game.set_secret(word("SLATE")).unwrap();
        let result = game.submit_feedback(&[Correct, Absent]);
        assert!(matches!(result, Err(WordleError::MalformedFeedback { .. })));
        assert_eq!(game.state(), SessionState::AwaitingFeedback);
        assert_eq!(game.current_guess(), Some(&word("CRANE")));
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.candidates().len(), 2);
        assert!(game.guessed().is_empty());
    }

    #[test]
    fn test_new_session_resets_but_keeps_history() {
        let mut game = first_pick_game("crane\nslate\nraise\nstare", 10);
        game.set_secret(word("CRANE")).unwrap();
        game.submit_feedback(&[Correct; 5]).unwrap();

        game.set_secret(word("STARE")).unwrap();
        assert_eq!(game.state(), SessionState::AwaitingFeedback);
        assert_eq!(game.candidates().len(), 4);
        assert_eq!(game.guess_count(), 0);
        assert!(game.guessed().is_empty());
        assert_eq!(*game.constraints(), ConstraintState::new());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_start_random_draws_from_lexicon() {
        let mut game = first_pick_game("crane\nslate\nraise", 10);
        let mut rng = StdRng::seed_from_u64(11);
        game.start_random(&mut rng).unwrap();
        let secret = game.secret().unwrap().clone();
        assert!(game.lexicon().contains(&secret));
    }

    #[test]
    fn test_guesses_never_repeat_in_honest_game() {
        let lexicon = load_wordbank_from_str(crate::wordbank::EMBEDDED_WORDBANK, 5).unwrap();
        let mut game = Game::new(lexicon, SessionConfig::default(), RandomSelector::seeded(5)).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..20 {
            game.start_random(&mut rng).unwrap();
            while let Some(feedback) = game.grade_current() {
                game.submit_feedback(&feedback).unwrap();
            }
            assert_ne!(game.state(), SessionState::Exhausted);
            let guesses: HashSet<&Word> = game.rounds().iter().map(|r| &r.guess).collect();
            assert_eq!(guesses.len(), game.rounds().len());
        }
        assert_eq!(game.history().len(), 20);
    }

    #[test]
    fn test_outcome_display() {
        let won = GameOutcome {
            guess_count: 3,
            won: true,
            secret: word("APPLE"),
        };
        assert_eq!(won.to_string(), "Victory! - Guesses: 3, Word: APPLE");
    }

    /// Replays scripted actions and records what was displayed.
    struct ScriptedInterface {
        actions: VecDeque<UserAction>,
        guesses: Vec<String>,
        ends: Vec<SessionState>,
        errors: usize,
        history_shown: usize,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<UserAction>) -> Self {
            Self {
                actions: actions.into(),
                guesses: Vec::new(),
                ends: Vec::new(),
                errors: 0,
                history_shown: 0,
                exited: false,
            }
        }

        fn next(&mut self) -> Option<UserAction> {
            Some(self.actions.pop_front().unwrap_or(UserAction::Exit))
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_secret(&mut self, _word_length: usize) -> Option<UserAction> {
            self.next()
        }

        fn read_feedback(&mut self, _guess: &Word) -> Option<UserAction> {
            self.next()
        }

        fn display_session_start(&mut self, _word_count: usize, _max_guesses: usize) {}

        fn display_guess(&mut self, info: &GuessInfo) {
            self.guesses.push(info.guess.to_string());
        }

        fn display_auto_feedback(&mut self, _guess: &Word, _feedback: &[Feedback]) {}

        fn display_end(&mut self, info: &EndInfo) {
            self.ends.push(info.state);
        }

        fn display_error(&mut self, _error: &WordleError) {
            self.errors += 1;
        }

        fn display_history(&mut self, _history: &[GameOutcome], _summary: &Summary) {
            self.history_shown += 1;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_game_loop_scripted_win() {
        let mut game = first_pick_game("crane\nslate\nraise\nstare", 10);
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Secret(word("STARE")),
            UserAction::Feedback(vec![Correct]),
            UserAction::AutoFeedback,
            UserAction::Feedback(vec![Correct; 5]),
            UserAction::ShowStats,
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        game_loop(&mut game, &mut interface, &mut rng);

        assert_eq!(interface.errors, 1);
        assert_eq!(interface.guesses, vec!["CRANE", "CRANE", "STARE"]);
        assert_eq!(interface.ends, vec![SessionState::Won]);
        assert_eq!(interface.history_shown, 1);
        assert!(interface.exited);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_game_loop_new_game_mid_session() {
        let mut game = first_pick_game("crane\nslate", 10);
        let mut interface = ScriptedInterface::new(vec![
            UserAction::RandomSecret,
            UserAction::NewGame,
            UserAction::Secret(word("CRANE")),
            UserAction::AutoFeedback,
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        game_loop(&mut game, &mut interface, &mut rng);

        assert_eq!(interface.ends, vec![SessionState::Won]);
        assert_eq!(game.history().len(), 1);
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_reports_bad_secret() {
        let mut game = first_pick_game("crane\nslate", 10);
        let mut interface = ScriptedInterface::new(vec![UserAction::Secret(word("CRANES"))]);
        let mut rng = StdRng::seed_from_u64(3);
        game_loop(&mut game, &mut interface, &mut rng);
        assert_eq!(interface.errors, 1);
        assert!(interface.ends.is_empty());
    }
}
