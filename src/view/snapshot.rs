//! Read-model snapshot of an engine for rendering.
//!
//! Everything a screen needs in one serialisable value:
//! - Scoreboard counts
//! - Status message and reveal mask
//! - Remaining guesses and the flower image name they select
//! - Which control to show

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::Letter;
use crate::effects::SignalSink;
use crate::rules::{GameEngine, GameStatus, RoundStatus};

use super::scoreboard::Scoreboard;

/// The one control the presentation layer should offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affordance {
    /// The last round is over: offer "Play again?".
    PlayAgain,
    /// A round is over with words left: offer "Another Word?".
    AnotherWord,
    /// A round is in progress: offer the letter field and "Guess a letter".
    GuessLetter,
}

impl Affordance {
    /// Pick the control for the engine's current state.
    #[must_use]
    pub fn for_engine<S: SignalSink>(engine: &GameEngine<S>) -> Self {
        if engine.game_over() {
            Affordance::PlayAgain
        } else if engine.round_over() {
            Affordance::AnotherWord
        } else {
            Affordance::GuessLetter
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Affordance::PlayAgain => "Play again?",
            Affordance::AnotherWord => "Another Word?",
            Affordance::GuessLetter => "Guess a letter",
        }
    }
}

/// Image asset name for the garden: `flower{n}` normally, `wilt{n}` while wilting.
#[must_use]
pub fn flower_image(remaining_guesses: u32, wilting: bool) -> String {
    let stem = if wilting { "wilt" } else { "flower" };
    format!("{stem}{remaining_guesses}")
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Game-wide tallies.
    pub scoreboard: Scoreboard,
    /// Headline message.
    pub status_message: String,
    /// Masked word, e.g. `"D _ G"`.
    pub revealed_word: String,
    /// Letters guessed this round, alphabetical.
    pub letters_guessed: Vec<Letter>,
    /// Incorrect guesses left this round.
    pub remaining_guesses: u32,
    /// Garden image asset name.
    pub flower_image: String,
    /// Whether the wilt is showing.
    pub wilting: bool,
    /// Round state machine position.
    pub round_status: RoundStatus,
    /// Game state machine position.
    pub game_status: GameStatus,
    /// The control to offer.
    pub affordance: Affordance,
}

impl GameView {
    /// Capture the engine as of now.
    #[must_use]
    pub fn capture<S: SignalSink>(engine: &GameEngine<S>) -> Self {
        Self::capture_at(engine, Instant::now())
    }

    /// Capture the engine as of `now` (which decides the wilt).
    #[must_use]
    pub fn capture_at<S: SignalSink>(engine: &GameEngine<S>, now: Instant) -> Self {
        let remaining_guesses = engine.remaining_guesses();
        let wilting = engine.is_wilting_at(now);

        Self {
            scoreboard: Scoreboard::from_engine(engine),
            status_message: engine.game_status_message(),
            revealed_word: engine.revealed_word(),
            letters_guessed: engine.round().letters_guessed.iter().copied().collect(),
            remaining_guesses,
            flower_image: flower_image(remaining_guesses, wilting),
            wilting,
            round_status: engine.round_status(),
            game_status: engine.game_status(),
            affordance: Affordance::for_engine(engine),
        }
    }
}
