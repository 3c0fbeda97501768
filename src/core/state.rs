//! Stored game state: per-round and per-game.
//!
//! ## RoundState
//!
//! Everything that resets when a new word comes up:
//! - Guess count, incorrect guess count
//! - Letters guessed so far
//!
//! ## GameProgress
//!
//! Everything that survives across rounds until "play again":
//! - Index of the current word
//! - Number of words guessed
//!
//! Derived values (remaining guesses, reveal mask, win/loss) are never
//! stored here; the engine recomputes them from these fields.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::letter::Letter;
use super::word::Word;

/// State of the round in play.
///
/// `letters_guessed` is an `im::OrdSet` so engine clones are O(1) and the
/// guessed letters always iterate alphabetically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Total guesses made this round, repeats included.
    pub guesses_count: u32,

    /// Guesses that missed the word and cost a life.
    pub incorrect_guesses_count: u32,

    /// Distinct letters guessed this round.
    pub letters_guessed: OrdSet<Letter>,
}

impl RoundState {
    /// Create an empty round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a letter has already been guessed this round.
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.letters_guessed.contains(&letter)
    }

    /// Record a guess against `word`.
    ///
    /// Returns true if the guess was penalised (a miss not seen before).
    pub fn record_guess(&mut self, word: &Word, letter: Letter) -> bool {
        let first_time = self.letters_guessed.insert(letter).is_none();
        self.guesses_count += 1;

        let penalised = first_time && !word.contains(letter);
        if penalised {
            self.incorrect_guesses_count += 1;
        }
        penalised
    }

    /// Guesses left before the round is lost.
    #[must_use]
    pub fn remaining_guesses(&self, max_incorrect_guesses: u32) -> u32 {
        max_incorrect_guesses.saturating_sub(self.incorrect_guesses_count)
    }

    /// Per-position reveal: `Some(letter)` where guessed, `None` where hidden.
    #[must_use]
    pub fn reveal_mask(&self, word: &Word) -> Vec<Option<Letter>> {
        word.letters()
            .iter()
            .map(|&l| self.has_guessed(l).then_some(l))
            .collect()
    }

    /// Check whether every letter of `word` has been guessed.
    #[must_use]
    pub fn is_solved(&self, word: &Word) -> bool {
        word.letters().iter().all(|&l| self.has_guessed(l))
    }

    /// Clear all round state.
    pub fn reset(&mut self) {
        self.guesses_count = 0;
        self.incorrect_guesses_count = 0;
        self.letters_guessed.clear();
    }
}

/// Progress through the word list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Index of the word being played (0-based).
    pub current_word_index: usize,

    /// Rounds won so far.
    pub words_guessed: u32,

    /// Last word index credited in `words_guessed`. A word is scored at most
    /// once, even if its round is reset and solved again.
    #[serde(default)]
    pub scored_word_index: Option<usize>,
}

impl GameProgress {
    /// Credit the current word as guessed. Returns `false` if it already was.
    pub fn credit_current_word(&mut self) -> bool {
        if self.scored_word_index == Some(self.current_word_index) {
            return false;
        }
        self.scored_word_index = Some(self.current_word_index);
        self.words_guessed += 1;
        true
    }

    /// Whether the current word has already been credited.
    #[must_use]
    pub fn current_word_scored(&self) -> bool {
        self.scored_word_index == Some(self.current_word_index)
    }

    /// Back to the first word with nothing guessed.
    pub fn reset(&mut self) {
        self.current_word_index = 0;
        self.words_guessed = 0;
        self.scored_word_index = None;
    }
}
