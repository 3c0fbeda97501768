//! Read model for the presentation layer.
//!
//! Pure functions of engine state; nothing here mutates the engine.

pub mod scoreboard;
pub mod snapshot;

pub use scoreboard::Scoreboard;
pub use snapshot::{flower_image, Affordance, GameView};
