//! Error types for building a game configuration.

use thiserror::Error;

/// Errors that can occur when constructing words, word lists or a `GameConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The word list has no words.
    #[error("Word list must contain at least one word")]
    EmptyWordList,

    /// A word in the list is the empty string.
    #[error("Word at position {index} is empty")]
    EmptyWord { index: usize },

    /// A word contains something other than an ASCII letter.
    #[error("Word '{word}' contains invalid character {character:?}")]
    InvalidCharacter { word: String, character: char },

    /// The incorrect-guess budget is zero, so every round would start lost.
    #[error("Maximum incorrect guesses must be at least 1")]
    ZeroIncorrectGuesses,
}
