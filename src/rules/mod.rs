//! Game rules: the engine and what its transitions report.
//!
//! `GameEngine` owns all state and is the only thing that changes it:
//! - Guess validation and scoring
//! - Win/loss determination per round
//! - Word progression and restart

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::{GameEngine, HIDDEN_PLACEHOLDER, REVEAL_SEPARATOR};
pub use error::EngineError;
pub use outcome::{GameStatus, GuessOutcome, GuessRecord, GuessReport, RoundStatus};
