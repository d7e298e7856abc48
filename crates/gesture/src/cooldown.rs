//! Per-gesture refractory period.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::types::Gesture;

/// Minimum spacing between two admissions of the same gesture.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1200);

/// Suppresses repeats of a confirmed gesture within the cooldown.
///
/// Keyed per gesture: admitting `3` does not hold back `+`. Entries are
/// only ever overwritten.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    cooldown: Duration,
    last_trigger: HashMap<Gesture, Instant>,
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_trigger: HashMap::new(),
        }
    }

    /// Admit `gesture` at `now` unless it fired within the cooldown.
    ///
    /// An admitted gesture records `now`; a rejected one leaves the table
    /// untouched.
    pub fn admit(&mut self, gesture: Gesture, now: Instant) -> bool {
        if let Some(last) = self.last_trigger.get(&gesture) {
            let elapsed = now.saturating_duration_since(*last);
            if elapsed <= self.cooldown {
                tracing::debug!(
                    %gesture,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "gesture suppressed by cooldown"
                );
                return false;
            }
        }

        self.last_trigger.insert(gesture, now);
        true
    }

    /// When `gesture` was last admitted.
    pub fn last_trigger(&self, gesture: Gesture) -> Option<Instant> {
        self.last_trigger.get(&gesture).copied()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
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
    fn test_first_trigger_is_admitted() {
        let mut gate = CooldownGate::default();
        let now = Instant::now();
        assert!(gate.admit(three(), now));
        assert_eq!(gate.last_trigger(three()), Some(now));
    }

    #[test]
    fn test_repeat_within_cooldown_rejected() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();
        assert!(gate.admit(three(), t0));
        assert!(!gate.admit(three(), t0 + Duration::from_millis(500)));
        // Exactly at the boundary is still inside the cooldown.
        assert!(!gate.admit(three(), t0 + DEFAULT_COOLDOWN));
        assert_eq!(gate.last_trigger(three()), Some(t0));
    }

    #[test]
    fn test_repeat_after_cooldown_admitted() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();
        assert!(gate.admit(three(), t0));
        let t1 = t0 + DEFAULT_COOLDOWN + Duration::from_millis(1);
        assert!(gate.admit(three(), t1));
        assert_eq!(gate.last_trigger(three()), Some(t1));
    }

    #[test]
    fn test_rejection_does_not_extend_cooldown() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();
        gate.admit(three(), t0);
        assert!(!gate.admit(three(), t0 + Duration::from_millis(1000)));
        assert!(gate.admit(three(), t0 + Duration::from_millis(1300)));
    }

    #[test]
    fn test_cooldown_is_per_gesture() {
        let mut gate = CooldownGate::default();
        let t0 = Instant::now();
        assert!(gate.admit(three(), t0));
        assert!(gate.admit(Gesture::Operator(Operator::Add), t0));
        assert!(gate.admit(Gesture::Equals, t0 + Duration::from_millis(10)));
        assert!(!gate.admit(three(), t0 + Duration::from_millis(10)));
    }
}
