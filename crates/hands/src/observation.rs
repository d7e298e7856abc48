//! Landmark and observation types reported by the hand detector.

use serde::{Deserialize, Serialize};

use crate::error::HandError;

/// Number of landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// A single hand landmark in normalized image coordinates.
///
/// `x` grows to the right and `y` grows downward, both in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist. Unused by finger counting.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Which hand the detector believes it saw.
///
/// Labels refer to the mirrored camera feed, which is why the thumb test in
/// `count_fingers` flips direction per hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn label(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Handedness {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Handedness::Left),
            "right" => Ok(Handedness::Right),
            _ => Err(HandError::UnknownHandedness(s.to_string())),
        }
    }
}

/// One detected hand: its landmarks plus the handedness label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObservationRecord", into = "ObservationRecord")]
pub struct HandObservation {
    landmarks: [Landmark; LANDMARK_COUNT],
    handedness: Handedness,
}

impl HandObservation {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT], handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }

    /// Build an observation from a detector landmark list.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::LandmarkCount`] unless exactly 21 landmarks are given.
    pub fn from_landmarks(
        landmarks: Vec<Landmark>,
        handedness: Handedness,
    ) -> Result<Self, HandError> {
        let actual = landmarks.len();
        let landmarks: [Landmark; LANDMARK_COUNT] =
            landmarks.try_into().map_err(|_| HandError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual,
            })?;
        Ok(Self::new(landmarks, handedness))
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Extended-finger count for this hand.
    pub fn finger_count(&self) -> u8 {
        crate::fingers::count_fingers(&self.landmarks, self.handedness)
    }
}

/// Wire shape of an observation, with an unchecked landmark list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObservationRecord {
    handedness: Handedness,
    landmarks: Vec<Landmark>,
}

impl TryFrom<ObservationRecord> for HandObservation {
    type Error = HandError;

    fn try_from(record: ObservationRecord) -> Result<Self, Self::Error> {
        HandObservation::from_landmarks(record.landmarks, record.handedness)
    }
}

impl From<HandObservation> for ObservationRecord {
    fn from(observation: HandObservation) -> Self {
        Self {
            handedness: observation.handedness,
            landmarks: observation.landmarks.to_vec(),
        }
    }
}
