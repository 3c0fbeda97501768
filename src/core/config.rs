//! Game configuration.
//!
//! A game is configured once at startup:
//! - `words`: the fixed, ordered word list
//! - `max_incorrect_guesses`: the per-round miss budget
//! - `wilt_duration`: how long the garden wilts after a miss
//!
//! The engine never hardcodes any of these; defaults match the classic
//! three-word garden.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::word::WordList;

/// Default incorrect-guess budget per round.
pub const DEFAULT_MAX_INCORRECT_GUESSES: u32 = 8;

/// Default wilt duration after an incorrect guess.
pub const DEFAULT_WILT_DURATION: Duration = Duration::from_millis(750);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Words played in order, one per round.
    pub words: WordList,

    /// Incorrect guesses allowed before a round is lost.
    pub max_incorrect_guesses: u32,

    /// How long the wilt effect lasts after a penalised guess.
    pub wilt_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordList::default(),
            max_incorrect_guesses: DEFAULT_MAX_INCORRECT_GUESSES,
            wilt_duration: DEFAULT_WILT_DURATION,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given words with default settings.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    /// Build a configuration straight from strings.
    ///
    /// ```
    /// use word_garden::core::GameConfig;
    ///
    /// let config = GameConfig::from_words(["dog", "cat"]).unwrap();
    /// assert_eq!(config.words.len(), 2);
    /// assert_eq!(config.max_incorrect_guesses, 8);
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(WordList::new(words)?))
    }

    /// Set the incorrect-guess budget.
    #[must_use]
    pub fn with_max_incorrect_guesses(mut self, max: u32) -> Self {
        self.max_incorrect_guesses = max;
        self
    }

    /// Set the wilt duration.
    #[must_use]
    pub fn with_wilt_duration(mut self, duration: Duration) -> Self {
        self.wilt_duration = duration;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_incorrect_guesses == 0 {
            return Err(ConfigError::ZeroIncorrectGuesses);
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(())
    }
}
