//! Error types for hand observations.

use thiserror::Error;

/// Errors that can occur while building a hand observation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The detector reported the wrong number of landmarks.
    #[error("expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    /// Unknown handedness label.
    #[error("unknown handedness label '{0}' (expected Left or Right)")]
    UnknownHandedness(String),
}
