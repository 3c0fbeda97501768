//! Core value types: letters, words, configuration, stored state, RNG.
//!
//! Everything here is plain data. Transitions live in `rules`.

pub mod letter;
pub mod word;
pub mod error;
pub mod config;
pub mod state;
pub mod rng;

pub use letter::Letter;
pub use word::{Positions, Word, WordList};
pub use error::ConfigError;
pub use config::{GameConfig, DEFAULT_MAX_INCORRECT_GUESSES, DEFAULT_WILT_DURATION};
pub use state::{GameProgress, RoundState};
pub use rng::GameRng;
