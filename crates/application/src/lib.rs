//! Gesture calculator application layer.
//!
//! Wires the pure crates into one owned pipeline and runs it per frame:
//!
//! ```text
//! FrameSource → HandDetector → GesturePipeline → Renderer → QuitSignal
//!                               │
//!                               ├─ FrameHands / count_fingers
//!                               ├─ classify
//!                               ├─ StabilityFilter
//!                               ├─ CooldownGate
//!                               └─ Calculator
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gesturecalc_application::{FrameLoop, PipelineSettings};
//!
//! let mut frame_loop = FrameLoop::new(PipelineSettings::default());
//! let summary = frame_loop.run(&mut camera, &mut detector, &mut overlay, &mut keyboard);
//! ```

mod display;
mod pipeline;
mod runtime;
mod settings;

pub use display::DisplayState;
pub use pipeline::{FrameOutcome, GesturePipeline};
pub use runtime::{
    Clock, FrameError, FrameLoop, FrameSource, HandDetector, ManualClock, NeverQuit, QuitSignal,
    Renderer, RunSummary, StopReason, SystemClock,
};
pub use settings::{PipelineSettings, SettingsError};
