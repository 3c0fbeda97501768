//! Side-channel signals for the presentation layer.
//!
//! The engine never plays sounds or animates anything. It emits `Signal`s
//! into a `SignalSink`, and whoever owns the sink decides what to do.

use serde::{Deserialize, Serialize};

use crate::rules::GuessOutcome;

/// A fire-and-forget notification from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Play the sound named by the outcome.
    Sound(GuessOutcome),
    /// The garden started (or restarted) wilting.
    WiltStarted,
    /// The wilt expired.
    WiltCleared,
    /// A new round began on the given word.
    RoundStarted { word_index: usize },
    /// The game went back to the first word.
    GameRestarted,
}

impl Signal {
    /// Sound effect name, if this signal is a sound.
    #[must_use]
    pub fn sound_name(&self) -> Option<&'static str> {
        match self {
            Signal::Sound(outcome) => Some(outcome.sound_name()),
            _ => None,
        }
    }
}

/// Receiver for engine signals.
pub trait SignalSink {
    /// Handle one signal.
    fn emit(&mut self, signal: Signal);
}

/// Sink that drops every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SignalSink for NullSink {
    fn emit(&mut self, _signal: Signal) {}
}

/// Collects signals in order. Handy for tests and replay.
impl SignalSink for Vec<Signal> {
    fn emit(&mut self, signal: Signal) {
        self.push(signal);
    }
}
