//! Scoreboard counts shown at the top of the screen.

use serde::{Deserialize, Serialize};

use crate::effects::SignalSink;
use crate::rules::GameEngine;

/// Game-wide tallies.
///
/// `words_guessed + words_missed + words_remaining == total_words` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won.
    pub words_guessed: u32,
    /// Rounds lost. A lost round is counted once the player moves on.
    pub words_missed: u32,
    /// Words not yet decided.
    pub words_remaining: u32,
    /// Words in the game.
    pub total_words: u32,
}

impl Scoreboard {
    /// Read the tallies off an engine.
    #[must_use]
    pub fn from_engine<S: SignalSink>(engine: &GameEngine<S>) -> Self {
        Self {
            words_guessed: engine.words_guessed(),
            words_missed: engine.words_missed(),
            words_remaining: engine.words_remaining(),
            total_words: engine.total_words() as u32,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Words Guessed: {}  Words Missed: {}  Words Remaining: {}  Words in Game: {}",
            self.words_guessed, self.words_missed, self.words_remaining, self.total_words
        )
    }
}
