//! # word-garden
//!
//! A word-guessing game engine. Guess the hidden word one letter at a time;
//! every miss wilts the garden a little more.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameEngine` holds all state and performs every
//!    transition. The presentation layer calls in and reads back.
//!
//! 2. **Derived, Not Cached**: Only counters and guessed letters are stored.
//!    Reveal mask, win/loss, score and messages are recomputed on demand.
//!
//! 3. **Announce, Don't Perform**: Sounds and the wilt animation are
//!    `Signal`s pushed to a `SignalSink`. The engine never touches audio or
//!    rendering.
//!
//! ## Modules
//!
//! - `core`: Letters, words, configuration, stored state, RNG
//! - `rules`: The engine and what its transitions report
//! - `effects`: Signals and the wilt timer
//! - `view`: Read model (scoreboard, status, affordances)
//! - `autoplay`: Guessing policies and a game runner

pub mod core;
pub mod rules;
pub mod effects;
pub mod view;
pub mod autoplay;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameProgress, GameRng, Letter, RoundState, Word, WordList,
};

pub use crate::rules::{
    EngineError, GameEngine, GameStatus, GuessOutcome, GuessRecord, GuessReport, RoundStatus,
};

pub use crate::effects::{NullSink, Signal, SignalSink, WiltTimer};

pub use crate::view::{Affordance, GameView, Scoreboard};

pub use crate::autoplay::{
    play_game, FrequencyGuesser, GameSummary, Guesser, RandomGuesser, RoundSummary,
};
