//! Calculator state machine.

use std::time::{Duration, Instant};

use gesturecalc_gesture::Gesture;

use crate::error::CalcError;
use crate::expr::evaluate;

/// Result text shown when an expression cannot be evaluated.
pub const ERROR_MARKER: &str = "Error";

/// Result text that replaces a shown result once new input arrives.
pub const RESULT_PLACEHOLDER: &str = "0";

/// What a single gesture did to the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A digit or operator was appended to the expression.
    Appended { token: char, started_timer: bool },
    /// `=` evaluated the expression.
    Evaluated {
        expression: String,
        result: String,
        latency: Duration,
    },
    /// `=` failed; the result now shows [`ERROR_MARKER`].
    Failed {
        expression: String,
        error: CalcError,
    },
    /// Undo removed the last character, if there was one.
    Undone { removed: Option<char> },
}

/// Expression, result and latency state driven by admitted gestures.
///
/// The states are implicit in the fields:
/// - idle: empty expression, no result
/// - building: expression non-empty, timer running
/// - showing: result populated, timer stopped
///
/// The latency timer starts at the first digit or operator of an expression
/// and stops at `=`.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    expression: String,
    result: String,
    start_time: Option<Instant>,
    latency: Duration,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one admitted gesture at `now`.
    pub fn apply(&mut self, gesture: Gesture, now: Instant) -> Transition {
        match gesture {
            Gesture::Digit(digit) => self.push_input(digit.as_char(), now),
            Gesture::Operator(op) => self.push_input(op.as_char(), now),
            Gesture::Equals => self.evaluate(now),
            Gesture::Undo => Transition::Undone {
                removed: self.expression.pop(),
            },
        }
    }

    fn push_input(&mut self, token: char, now: Instant) -> Transition {
        if self.has_result() {
            self.result.clear();
            self.result.push_str(RESULT_PLACEHOLDER);
        }

        let started_timer = self.start_time.is_none();
        if started_timer {
            self.start_time = Some(now);
        }

        self.expression.push(token);
        Transition::Appended {
            token,
            started_timer,
        }
    }

    fn evaluate(&mut self, now: Instant) -> Transition {
        let expression = std::mem::take(&mut self.expression);
        let start_time = self.start_time.take();

        match evaluate(&expression) {
            Ok(value) => {
                self.result = value.to_string();
                self.latency = start_time
                    .map(|start| now.saturating_duration_since(start))
                    .unwrap_or_default();
                Transition::Evaluated {
                    expression,
                    result: self.result.clone(),
                    latency: self.latency,
                }
            }
            Err(error) => {
                self.result = ERROR_MARKER.to_string();
                self.latency = Duration::ZERO;
                Transition::Failed { expression, error }
            }
        }
    }

    /// The expression typed so far.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The shown result; empty when none.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    /// Time from the first input of the last evaluated expression to its `=`.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Whether an expression is being timed.
    pub fn is_timing(&self) -> bool {
        self.start_time.is_some()
    }
}
