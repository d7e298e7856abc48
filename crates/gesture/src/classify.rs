//! Finger counts to gesture tokens.
//!
//! Pure domain logic - no state, no I/O.
//!
//! The right hand alone signs digits 0-5. A fully open left hand alongside
//! 1-4 right-hand fingers shifts the digit by five (6-9). The left hand alone
//! signs operators and control gestures.

use gesturecalc_hands::{FingerCount, MAX_FINGERS};

use crate::types::{Gesture, Operator};

/// Classify one frame's finger counts.
///
/// Rules in priority order:
/// 1. right 1-4 with left open (5): digit `right + 5`
/// 2. right 0-5: digit `right`
/// 3. left alone: see [`left_hand_gesture`]
/// 4. no hands: `None`
///
/// With both hands present and the left not fully open, only the right hand
/// is read.
pub fn classify(right: Option<FingerCount>, left: Option<FingerCount>) -> Option<Gesture> {
    if let Some(right) = right {
        if left == Some(MAX_FINGERS) && (1..=4).contains(&right) {
            return Gesture::digit(right + 5);
        }
        if right <= MAX_FINGERS {
            return Gesture::digit(right);
        }
    }

    left.and_then(left_hand_gesture)
}

/// Operator/control table for a lone left hand.
pub fn left_hand_gesture(count: FingerCount) -> Option<Gesture> {
    match count {
        0 => Some(Gesture::Undo),
        1 => Some(Gesture::Operator(Operator::Add)),
        2 => Some(Gesture::Operator(Operator::Subtract)),
        3 => Some(Gesture::Operator(Operator::Multiply)),
        4 => Some(Gesture::Operator(Operator::Divide)),
        5 => Some(Gesture::Equals),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(right: Option<u8>, left: Option<u8>) -> Option<char> {
        classify(right, left).map(|g| g.token())
    }

    #[test]
    fn test_no_hands() {
        assert_eq!(token(None, None), None);
    }

    #[test]
    fn test_right_hand_digits() {
        for n in 0..=5 {
            assert_eq!(token(Some(n), None), char::from_digit(n as u32, 10));
        }
    }

    #[test]
    fn test_open_left_shifts_digits() {
        assert_eq!(token(Some(1), Some(5)), Some('6'));
        assert_eq!(token(Some(2), Some(5)), Some('7'));
        assert_eq!(token(Some(3), Some(5)), Some('8'));
        assert_eq!(token(Some(4), Some(5)), Some('9'));
    }

    #[test]
    fn test_open_left_outside_shift_range() {
        // 0 and 5 are not shifted.
        assert_eq!(token(Some(0), Some(5)), Some('0'));
        assert_eq!(token(Some(5), Some(5)), Some('5'));
    }

    #[test]
    fn test_partial_left_is_ignored_with_right() {
        assert_eq!(token(Some(2), Some(3)), Some('2'));
        assert_eq!(token(Some(0), Some(1)), Some('0'));
    }

    #[test]
    fn test_left_hand_table() {
        assert_eq!(token(None, Some(0)), Some('U'));
        assert_eq!(token(None, Some(1)), Some('+'));
        assert_eq!(token(None, Some(2)), Some('-'));
        assert_eq!(token(None, Some(3)), Some('*'));
        assert_eq!(token(None, Some(4)), Some('/'));
        assert_eq!(token(None, Some(5)), Some('='));
    }

    #[test]
    fn test_out_of_range_counts() {
        assert_eq!(token(None, Some(6)), None);
        // An impossible right count falls through to the left-hand table.
        assert_eq!(token(Some(7), Some(1)), Some('+'));
        assert_eq!(token(Some(7), None), None);
    }
}
