//! Temporal stability filtering of per-frame gestures.

use std::collections::VecDeque;

use crate::types::Gesture;

/// Number of agreeing frames needed to confirm a gesture.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Sliding window over the most recent classified gestures.
///
/// Frames without a gesture do not enter the window. A gesture is confirmed
/// once the window is full and every entry agrees; confirmation consumes the
/// whole window so leftover entries cannot re-trigger it.
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    window: VecDeque<Gesture>,
    capacity: usize,
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl StabilityFilter {
    /// Create a filter confirming after `capacity` agreeing frames.
    ///
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Feed one frame's classification; returns the confirmed gesture, if any.
    pub fn observe(&mut self, gesture: Option<Gesture>) -> Option<Gesture> {
        let gesture = gesture?;

        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(gesture);

        if self.window.len() < self.capacity || self.window.iter().any(|g| *g != gesture) {
            return None;
        }

        self.window.clear();
        tracing::trace!(%gesture, "gesture stable");
        Some(gesture)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;

    fn three() -> Gesture {
        Gesture::digit(3).unwrap()
    }

    #[test]
    fn test_confirms_on_fifth_identical() {
        let mut filter = StabilityFilter::default();
        for _ in 0..4 {
            assert_eq!(filter.observe(Some(three())), None);
        }
        assert_eq!(filter.observe(Some(three())), Some(three()));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_none_frames_are_ignored() {
        let mut filter = StabilityFilter::default();
        for _ in 0..4 {
            filter.observe(Some(three()));
            filter.observe(None);
        }
        assert_eq!(filter.len(), 4);
        assert_eq!(filter.observe(Some(three())), Some(three()));
    }

    #[test]
    fn test_disagreement_delays_confirmation() {
        let mut filter = StabilityFilter::default();
        let plus = Gesture::Operator(Operator::Add);

        for _ in 0..4 {
            filter.observe(Some(three()));
        }
        assert_eq!(filter.observe(Some(plus)), None);
        assert_eq!(filter.len(), 5);

        // The stray `+` must slide out before `3` can confirm again.
        for _ in 0..4 {
            assert_eq!(filter.observe(Some(three())), None);
        }
        assert_eq!(filter.observe(Some(three())), Some(three()));
    }

    #[test]
    fn test_no_immediate_retrigger() {
        let mut filter = StabilityFilter::default();
        let mut confirmations = 0;
        for _ in 0..9 {
            if filter.observe(Some(three())).is_some() {
                confirmations += 1;
            }
        }
        assert_eq!(confirmations, 1);
        assert_eq!(filter.len(), 4);
        assert_eq!(filter.observe(Some(three())), Some(three()));
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut filter = StabilityFilter::new(3);
        for value in [1, 2, 1, 2, 1, 2, 1] {
            filter.observe(Gesture::digit(value));
            assert!(filter.len() <= filter.capacity());
        }
    }

    #[test]
    fn test_zero_capacity_is_one() {
        let mut filter = StabilityFilter::new(0);
        assert_eq!(filter.capacity(), 1);
        assert_eq!(filter.observe(Some(three())), Some(three()));
    }
}
