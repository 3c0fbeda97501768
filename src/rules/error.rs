//! Errors for engine operations called out of turn.

use thiserror::Error;

/// Rejected engine operations. A rejected call never changes engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The character is not an ASCII letter.
    #[error("Not a letter: {0:?}")]
    InvalidLetter(char),

    /// A guess was made after the round was won or lost.
    #[error("Round is over; advance to the next word or restart")]
    RoundOver,

    /// Tried to advance while the current round is still being played.
    #[error("Round is still in progress")]
    RoundInProgress,

    /// Tried to advance past the last word.
    #[error("No more words; restart the game to play again")]
    NoMoreWords,
}
