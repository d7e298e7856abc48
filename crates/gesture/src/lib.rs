//! Gesture recognition for gesturecalc.
//!
//! Turns per-frame finger counts into discrete calculator commands:
//! - `classify`: left/right finger counts to a `Gesture` token (pure)
//! - `StabilityFilter`: unanimous sliding window over recent gestures
//! - `CooldownGate`: per-gesture refractory period
//!
//! A gesture reaching the calculator has been *confirmed* by the filter and
//! *admitted* by the gate.

mod classify;
mod cooldown;
mod stability;
mod types;

pub use classify::{classify, left_hand_gesture};
pub use cooldown::{CooldownGate, DEFAULT_COOLDOWN};
pub use stability::{StabilityFilter, DEFAULT_WINDOW_SIZE};
pub use types::{Digit, Gesture, GestureParseError, Operator};
