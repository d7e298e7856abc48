//! Hand observations for gesturecalc.
//!
//! This crate holds the per-frame view of the hands reported by the external
//! hand-tracking detector:
//! - `Landmark` / `HandObservation`: 21 normalized landmark positions and a
//!   handedness label
//! - `count_fingers`: extended-finger count for one observation
//! - `FrameHands`: the (at most) one left and one right hand used per frame
//!
//! Everything here is pure and allocation-light; nothing is persisted across
//! frames.

mod error;
mod fingers;
mod frame;
mod observation;

pub mod landmarks;

pub use error::HandError;
pub use fingers::{count_fingers, FingerCount, MAX_FINGERS};
pub use frame::FrameHands;
pub use observation::{HandObservation, Handedness, Landmark, LANDMARK_COUNT};
