//! Extended-finger counting from landmark geometry.

use crate::landmarks::{FINGER_TIPS, THUMB_IP, THUMB_TIP};
use crate::observation::{Handedness, Landmark, LANDMARK_COUNT};

/// Number of extended fingers on one hand, `0..=5`.
pub type FingerCount = u8;

/// Upper bound of a [`FingerCount`].
pub const MAX_FINGERS: FingerCount = 5;

/// Count the extended fingers of one hand.
///
/// The thumb is extended when its tip lies outside the joint below it along
/// x; which side is "outside" depends on handedness because the feed is
/// mirrored. Every other finger is extended when its tip sits above (smaller
/// y than) the joint two segments down.
pub fn count_fingers(
    landmarks: &[Landmark; LANDMARK_COUNT],
    handedness: Handedness,
) -> FingerCount {
    let thumb_tip = landmarks[THUMB_TIP].x;
    let thumb_joint = landmarks[THUMB_IP].x;
    let thumb_extended = match handedness {
        Handedness::Right => thumb_tip < thumb_joint,
        Handedness::Left => thumb_tip > thumb_joint,
    };

    let fingers_extended = FINGER_TIPS
        .iter()
        .filter(|&&tip| landmarks[tip].y < landmarks[tip - 2].y)
        .count() as FingerCount;

    thumb_extended as FingerCount + fingers_extended
}
