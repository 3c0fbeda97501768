//! Guess outcomes and round/game status.

use serde::{Deserialize, Serialize};

use crate::core::{Letter, Positions};

/// What a single guess did, as far as the player hears it.
///
/// Each outcome names the sound effect the presentation layer should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuessOutcome {
    /// Correct letter, and the word is now complete.
    WordGuessed,
    /// Correct letter, word still incomplete.
    Correct,
    /// Incorrect letter, and no guesses remain.
    WordNotGuessed,
    /// Incorrect letter, guesses remain.
    Incorrect,
}

impl GuessOutcome {
    /// Classify a guess from its effect on the round.
    #[must_use]
    pub fn classify(correct: bool, solved: bool, remaining_guesses: u32) -> Self {
        match (correct, solved, remaining_guesses) {
            (true, true, _) => GuessOutcome::WordGuessed,
            (true, false, _) => GuessOutcome::Correct,
            (false, _, 0) => GuessOutcome::WordNotGuessed,
            (false, _, _) => GuessOutcome::Incorrect,
        }
    }

    /// Name of the sound effect asset for this outcome.
    #[must_use]
    pub const fn sound_name(self) -> &'static str {
        match self {
            GuessOutcome::WordGuessed => "word-guessed",
            GuessOutcome::Correct => "correct",
            GuessOutcome::WordNotGuessed => "word-not-guessed",
            GuessOutcome::Incorrect => "incorrect",
        }
    }

    /// Check if the guessed letter is in the word.
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::WordGuessed | GuessOutcome::Correct)
    }

    /// Check if this guess ended the round.
    #[must_use]
    pub const fn ends_round(self) -> bool {
        matches!(self, GuessOutcome::WordGuessed | GuessOutcome::WordNotGuessed)
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sound_name())
    }
}

/// Result of an accepted guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    /// The canonical letter guessed.
    pub letter: Letter,

    /// What the guess did.
    pub outcome: GuessOutcome,

    /// Positions of the letter in the current word (empty on a miss).
    pub positions: Positions,

    /// The letter had already been guessed this round.
    pub repeat: bool,
}

/// One entry in the session's guess history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Word the guess was made against.
    pub word_index: usize,

    /// The letter guessed.
    pub letter: Letter,

    /// What the guess did.
    pub outcome: GuessOutcome,

    /// The letter had already been guessed this round.
    pub repeat: bool,
}

/// State of the round in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Guesses are still accepted.
    InProgress,
    /// Every letter has been revealed.
    Won,
    /// The incorrect-guess budget is spent.
    Lost,
}

impl RoundStatus {
    /// Check if the round is over (won or lost).
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// State of the game as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Some round is still to be played.
    Playing,
    /// The last word's round is over.
    Finished,
}
