//! Per-frame hand selection.

use crate::fingers::FingerCount;
use crate::observation::{HandObservation, Handedness};

/// The hands used for one frame: at most one per handedness.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameHands<'a> {
    pub left: Option<&'a HandObservation>,
    pub right: Option<&'a HandObservation>,
}

impl<'a> FrameHands<'a> {
    /// Pick the first left and first right hand from the detector output.
    ///
    /// Further hands carrying an already-seen label are ignored.
    pub fn select(observations: &'a [HandObservation]) -> Self {
        let mut hands = Self::default();
        for observation in observations {
            let slot = match observation.handedness() {
                Handedness::Left => &mut hands.left,
                Handedness::Right => &mut hands.right,
            };
            if slot.is_some() {
                tracing::trace!(
                    handedness = %observation.handedness(),
                    "ignoring duplicate hand"
                );
                continue;
            }
            *slot = Some(observation);
        }
        hands
    }

    pub fn left_count(&self) -> Option<FingerCount> {
        self.left.map(HandObservation::finger_count)
    }

    pub fn right_count(&self) -> Option<FingerCount> {
        self.right.map(HandObservation::finger_count)
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
