//! The per-frame gesture pipeline.

use std::time::Instant;

use gesturecalc_calculator::{Calculator, Transition};
use gesturecalc_gesture::{classify, CooldownGate, Gesture, StabilityFilter};
use gesturecalc_hands::{FrameHands, HandObservation};

use crate::display::DisplayState;
use crate::settings::PipelineSettings;

/// What one frame did as it passed through the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameOutcome {
    /// Raw classification of this frame.
    pub classified: Option<Gesture>,
    /// Gesture confirmed by the stability filter this frame.
    pub confirmed: Option<Gesture>,
    /// Calculator transition, present only when the confirmed gesture
    /// cleared its cooldown.
    pub transition: Option<Transition>,
}

impl FrameOutcome {
    pub fn admitted(&self) -> Option<Gesture> {
        self.transition.as_ref().and(self.confirmed)
    }
}

/// Owns all state that outlives a frame.
///
/// Coordinates three stages, always in this order:
/// - `StabilityFilter`: waits for a unanimous window
/// - `CooldownGate`: drops repeats within the cooldown
/// - `Calculator`: applies admitted gestures
pub struct GesturePipeline {
    filter: StabilityFilter,
    gate: CooldownGate,
    calculator: Calculator,
}

impl Default for GesturePipeline {
    fn default() -> Self {
        Self::new(&PipelineSettings::default())
    }
}

impl GesturePipeline {
    pub fn new(settings: &PipelineSettings) -> Self {
        Self {
            filter: StabilityFilter::new(settings.stability_window),
            gate: CooldownGate::new(settings.cooldown()),
            calculator: Calculator::new(),
        }
    }

    /// Run one frame of detector output through the pipeline.
    pub fn process_frame(
        &mut self,
        observations: &[HandObservation],
        now: Instant,
    ) -> FrameOutcome {
        let hands = FrameHands::select(observations);
        let classified = classify(hands.right_count(), hands.left_count());
        self.process_gesture(classified, now)
    }

    /// Run an already classified frame through filter, gate and calculator.
    pub fn process_gesture(
        &mut self,
        classified: Option<Gesture>,
        now: Instant,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome {
            classified,
            ..Default::default()
        };

        let Some(gesture) = self.filter.observe(classified) else {
            return outcome;
        };
        outcome.confirmed = Some(gesture);
        tracing::debug!(%gesture, "gesture confirmed");

        if !self.gate.admit(gesture, now) {
            return outcome;
        }

        let transition = self.calculator.apply(gesture, now);
        match &transition {
            Transition::Evaluated {
                expression,
                result,
                latency,
            } => {
                tracing::info!(
                    %expression,
                    %result,
                    latency_ms = latency.as_millis() as u64,
                    "expression evaluated"
                );
            }
            Transition::Failed { expression, error } => {
                tracing::debug!(%expression, %error, "expression rejected");
            }
            other => {
                tracing::debug!(%gesture, transition = ?other, "gesture applied");
            }
        }

        outcome.transition = Some(transition);
        outcome
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::from_calculator(&self.calculator)
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn filter(&self) -> &StabilityFilter {
        &self.filter
    }

    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }
}
