//! Automatic play: guessing policies and a game runner.
//!
//! Used by the terminal driver's `--autoplay` mode and by tests that need
//! whole games played end to end.
//!
//! ```
//! use word_garden::autoplay::{play_game, FrequencyGuesser};
//! use word_garden::core::GameConfig;
//! use word_garden::rules::GameEngine;
//!
//! let config = GameConfig::default();
//! let mut guesser = FrequencyGuesser::new(config.words.clone());
//! let mut engine = GameEngine::new(config).unwrap();
//!
//! let summary = play_game(&mut engine, &mut guesser).unwrap();
//! assert!(engine.game_over());
//! assert_eq!(summary.rounds.len(), 3);
//! ```

pub mod policy;
pub mod runner;

pub use policy::{FrequencyGuesser, GuessContext, Guesser, RandomGuesser};
pub use runner::{play_game, play_round, GameSummary, RoundSummary};
