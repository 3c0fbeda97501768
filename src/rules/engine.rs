//! The game engine: owns all state and every transition.
//!
//! A presentation layer drives the engine on user actions and reads derived
//! values back to render. Stored state is limited to `GameProgress` and
//! `RoundState`; everything else is recomputed on demand so it can't go stale.
//!
//! ## Transitions
//!
//! - `guess_letter`: `InProgress` → `InProgress` | `Won` | `Lost`
//! - `advance_word`: `Won` | `Lost` → next word's `InProgress`
//! - `restart_game`: any → first word's `InProgress`
//!
//! Calls made out of turn return an `EngineError` and leave state untouched.

use std::time::Instant;

use im::Vector;
use tracing::{debug, info, warn};

use crate::core::{ConfigError, GameConfig, GameProgress, Letter, RoundState, Word};
use crate::effects::{NullSink, Signal, SignalSink, WiltTimer};

use super::error::EngineError;
use super::outcome::{GameStatus, GuessOutcome, GuessRecord, GuessReport, RoundStatus};

/// Separator used by `revealed_word`.
pub const REVEAL_SEPARATOR: &str = " ";

/// Placeholder shown for letters not yet guessed.
pub const HIDDEN_PLACEHOLDER: char = '_';

/// Word-guessing game engine.
///
/// Generic over the `SignalSink` that receives sound and wilt notifications.
///
/// ```
/// use word_garden::core::{GameConfig, Letter};
/// use word_garden::rules::{GameEngine, GuessOutcome};
///
/// let config = GameConfig::from_words(["DOG"]).unwrap();
/// let mut engine = GameEngine::new(config).unwrap();
///
/// let report = engine.guess_letter(Letter::new('d').unwrap()).unwrap();
/// assert_eq!(report.outcome, GuessOutcome::Correct);
/// assert_eq!(engine.revealed_word(), "D _ _");
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<S = NullSink> {
    config: GameConfig,
    progress: GameProgress,
    round: RoundState,
    wilt: WiltTimer,
    history: Vector<GuessRecord>,
    sink: S,
}

impl GameEngine<NullSink> {
    /// Create an engine that discards signals.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, NullSink)
    }
}

impl<S: SignalSink> GameEngine<S> {
    /// Create an engine that emits signals into `sink`.
    pub fn with_sink(config: GameConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let wilt = WiltTimer::new(config.wilt_duration);

        Ok(Self {
            config,
            progress: GameProgress::default(),
            round: RoundState::new(),
            wilt,
            history: Vector::new(),
            sink,
        })
    }

    // === Accessors ===

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the stored game progress.
    #[must_use]
    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    /// Get the stored round state.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Every guess made since the game (re)started, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Get the signal sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the signal sink mutably (e.g. to drain recorded signals).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the engine, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Derived values ===

    /// Index of the word being played.
    #[must_use]
    pub fn current_word_index(&self) -> usize {
        self.progress.current_word_index
    }

    /// The word being played.
    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.config.words[self.progress.current_word_index]
    }

    /// Number of words in the game.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.config.words.len()
    }

    /// Rounds won so far.
    #[must_use]
    pub fn words_guessed(&self) -> u32 {
        self.progress.words_guessed
    }

    /// Rounds lost so far, counting the current round only once it is decided.
    ///
    /// A lost current round is not counted until the player advances, which
    /// keeps the scoreboard's "remaining" figure on the current word.
    #[must_use]
    pub fn words_missed(&self) -> u32 {
        let index = self.progress.current_word_index as u32;
        let scored = u32::from(self.progress.current_word_scored());
        (index + scored).saturating_sub(self.progress.words_guessed)
    }

    /// Words neither guessed nor missed.
    #[must_use]
    pub fn words_remaining(&self) -> u32 {
        (self.total_words() as u32)
            .saturating_sub(self.words_guessed())
            .saturating_sub(self.words_missed())
    }

    /// Guesses made this round, repeats included.
    #[must_use]
    pub fn guesses_count(&self) -> u32 {
        self.round.guesses_count
    }

    /// Penalised guesses this round.
    #[must_use]
    pub fn incorrect_guesses_count(&self) -> u32 {
        self.round.incorrect_guesses_count
    }

    /// Incorrect guesses left before the round is lost.
    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.round.remaining_guesses(self.config.max_incorrect_guesses)
    }

    /// Check if a letter was already guessed this round.
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.round.has_guessed(letter)
    }

    /// Per-position reveal of the current word.
    #[must_use]
    pub fn reveal_mask(&self) -> Vec<Option<Letter>> {
        self.round.reveal_mask(self.current_word())
    }

    /// Current word with unguessed letters masked, e.g. `"D _ G"`.
    #[must_use]
    pub fn revealed_word(&self) -> String {
        self.revealed_word_with(REVEAL_SEPARATOR)
    }

    /// Current word with unguessed letters masked, joined by `separator`.
    #[must_use]
    pub fn revealed_word_with(&self, separator: &str) -> String {
        self.reveal_mask()
            .into_iter()
            .map(|slot| slot.map_or(HIDDEN_PLACEHOLDER, Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Check if every letter of the current word has been guessed.
    #[must_use]
    pub fn word_guessed_correctly(&self) -> bool {
        self.round.is_solved(self.current_word())
    }

    /// Check if the current round is won or lost.
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.remaining_guesses() == 0 || self.word_guessed_correctly()
    }

    /// Check if the last word's round is over.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.is_last_word() && self.round_over()
    }

    /// Check if the current word is the last in the list.
    #[must_use]
    pub fn is_last_word(&self) -> bool {
        self.progress.current_word_index == self.config.words.last_index()
    }

    /// Round state machine position.
    #[must_use]
    pub fn round_status(&self) -> RoundStatus {
        if self.word_guessed_correctly() {
            RoundStatus::Won
        } else if self.remaining_guesses() == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Game state machine position.
    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        if self.game_over() {
            GameStatus::Finished
        } else {
            GameStatus::Playing
        }
    }

    /// Headline message for the player.
    #[must_use]
    pub fn game_status_message(&self) -> String {
        let guesses = self.round.guesses_count;

        if self.word_guessed_correctly() {
            format!("You've Guessed It! It Took You {guesses} Guesses to Guess the Word.")
        } else if self.remaining_guesses() == 0 {
            "So Sorry, You're All Out of Guesses.".to_string()
        } else if guesses == 0 {
            "How Many Guesses to Uncover the Hidden Word?".to_string()
        } else {
            let suffix = if guesses == 1 { "" } else { "es" };
            format!("You've Made {guesses} Guess{suffix}")
        }
    }

    // === Wilt ===

    /// Check if the garden is wilting right now.
    #[must_use]
    pub fn is_wilting(&self) -> bool {
        self.is_wilting_at(Instant::now())
    }

    /// Check if the garden is wilting at `now`.
    #[must_use]
    pub fn is_wilting_at(&self, now: Instant) -> bool {
        self.wilt.is_active(now)
    }

    /// Expire the wilt if due, emitting `Signal::WiltCleared`.
    ///
    /// Returns true if the wilt cleared on this poll.
    pub fn poll_wilt(&mut self, now: Instant) -> bool {
        let cleared = self.wilt.poll(now);
        if cleared {
            self.sink.emit(Signal::WiltCleared);
        }
        cleared
    }

    // === Transitions ===

    /// Guess a raw character. Non-letters are rejected.
    pub fn guess_char(&mut self, c: char) -> Result<GuessReport, EngineError> {
        self.guess_char_at(c, Instant::now())
    }

    /// Guess a raw character at `now`. Non-letters are rejected.
    pub fn guess_char_at(&mut self, c: char, now: Instant) -> Result<GuessReport, EngineError> {
        let letter = Letter::new(c).ok_or(EngineError::InvalidLetter(c))?;
        self.guess_letter_at(letter, now)
    }

    /// Guess a letter.
    pub fn guess_letter(&mut self, letter: Letter) -> Result<GuessReport, EngineError> {
        self.guess_letter_at(letter, Instant::now())
    }

    /// Guess a letter at `now`.
    ///
    /// Every guess counts toward `guesses_count`. A letter that misses the
    /// word costs one incorrect guess and starts the wilt, but only the first
    /// time it is guessed this round. Solving the word bumps `words_guessed`
    /// once.
    pub fn guess_letter_at(&mut self, letter: Letter, now: Instant) -> Result<GuessReport, EngineError> {
        if self.round_over() {
            warn!(%letter, word_index = self.progress.current_word_index, "guess rejected: round is over");
            return Err(EngineError::RoundOver);
        }

        let word_index = self.progress.current_word_index;
        let word = &self.config.words[word_index];

        let repeat = self.round.has_guessed(letter);
        let penalised = self.round.record_guess(word, letter);
        let solved = self.round.is_solved(word);
        let correct = word.contains(letter);
        let positions = word.positions_of(letter);

        if solved {
            self.progress.credit_current_word();
        }
        if penalised {
            self.wilt.arm(now);
        }

        let remaining = self.round.remaining_guesses(self.config.max_incorrect_guesses);
        let outcome = GuessOutcome::classify(correct, solved, remaining);

        self.history.push_back(GuessRecord {
            word_index,
            letter,
            outcome,
            repeat,
        });

        debug!(%letter, %outcome, repeat, remaining, "guess");

        if penalised {
            self.sink.emit(Signal::WiltStarted);
        }
        self.sink.emit(Signal::Sound(outcome));

        match outcome {
            GuessOutcome::WordGuessed => info!(
                word_index,
                guesses = self.round.guesses_count,
                "word guessed"
            ),
            GuessOutcome::WordNotGuessed => info!(word_index, "out of guesses"),
            _ => {}
        }

        Ok(GuessReport {
            letter,
            outcome,
            positions,
            repeat,
        })
    }

    /// Clear the round: guess counts, guessed letters and any pending wilt.
    ///
    /// Does not touch the word index or the score. A word already credited
    /// stays credited and is not scored again if solved a second time.
    pub fn reset_round(&mut self) {
        self.round.reset();
        if self.wilt.deadline().is_some() {
            self.wilt.cancel();
            self.sink.emit(Signal::WiltCleared);
        }
    }

    /// Move to the next word once the current round is over.
    pub fn advance_word(&mut self) -> Result<(), EngineError> {
        if !self.round_over() {
            warn!(word_index = self.progress.current_word_index, "advance rejected: round in progress");
            return Err(EngineError::RoundInProgress);
        }
        if self.is_last_word() {
            warn!("advance rejected: no more words");
            return Err(EngineError::NoMoreWords);
        }

        self.progress.current_word_index += 1;
        self.reset_round();

        let word_index = self.progress.current_word_index;
        info!(word_index, "next word");
        self.sink.emit(Signal::RoundStarted { word_index });
        Ok(())
    }

    /// Start over from the first word with a clean score.
    pub fn restart_game(&mut self) {
        self.progress.reset();
        self.history.clear();
        self.reset_round();

        info!("game restarted");
        self.sink.emit(Signal::GameRestarted);
    }
}
