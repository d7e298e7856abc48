//! Text handed to the rendering collaborator.

use serde::Serialize;

use gesturecalc_calculator::Calculator;

/// Snapshot of what the overlay shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub expression: String,
    pub result: String,
    /// Last measured input latency, in seconds.
    pub latency_secs: f64,
}

impl DisplayState {
    pub fn from_calculator(calculator: &Calculator) -> Self {
        Self {
            expression: calculator.expression().to_string(),
            result: calculator.result().to_string(),
            latency_secs: calculator.latency().as_secs_f64(),
        }
    }

    /// Latency with four decimals, e.g. `1.2500 sec`.
    pub fn latency_text(&self) -> String {
        format!("{:.4} sec", self.latency_secs)
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expression: {} | Result: {} | Latency: {}",
            self.expression,
            self.result,
            self.latency_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturecalc_gesture::Gesture;
    use std::time::Instant;

    #[test]
    fn test_latency_text_has_four_decimals() {
        let display = DisplayState {
            expression: String::new(),
            result: "6".to_string(),
            latency_secs: 1.25,
        };
        assert_eq!(display.latency_text(), "1.2500 sec");
        assert_eq!(
            display.to_string(),
            "Expression:  | Result: 6 | Latency: 1.2500 sec"
        );
    }

    #[test]
    fn test_from_calculator() {
        let mut calculator = Calculator::new();
        calculator.apply(Gesture::digit(7).unwrap(), Instant::now());

        let display = DisplayState::from_calculator(&calculator);
        assert_eq!(display.expression, "7");
        assert_eq!(display.result, "");
        assert_eq!(display.latency_text(), "0.0000 sec");
    }

    #[test]
    fn test_serializes_to_json() {
        let display = DisplayState {
            expression: "2+".to_string(),
            result: String::new(),
            latency_secs: 0.0,
        };
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["expression"], "2+");
        assert_eq!(json["latency_secs"], 0.0);
    }
}
