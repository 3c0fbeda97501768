//! Side effects the engine announces but never performs.
//!
//! - `Signal` / `SignalSink`: sound triggers, wilt toggles and round changes
//!   pushed to the presentation layer
//! - `WiltTimer`: the debounced wilt deadline

pub mod signal;
pub mod wilt;

pub use signal::{NullSink, Signal, SignalSink};
pub use wilt::WiltTimer;
