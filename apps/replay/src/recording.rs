//! Recorded detector output and the collaborators that replay it.

use std::io::BufRead;
use std::time::{Duration, Instant};

use serde::Deserialize;

use gesturecalc_application::{
    DisplayState, FrameError, FrameSource, HandDetector, ManualClock, QuitSignal, Renderer,
};
use gesturecalc_hands::HandObservation;

/// Error reading a recording.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    #[error("IO error reading recording: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: t_ms {t_ms} is earlier than the previous frame")]
    OutOfOrder { line: usize, t_ms: u64 },
}

/// One line of a recording.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedFrame {
    /// Capture time relative to the start of the recording.
    pub t_ms: u64,
    #[serde(default)]
    pub hands: Vec<HandObservation>,
    /// The camera failed to deliver this frame.
    #[serde(default)]
    pub dropped: bool,
}

/// Parse a JSON-lines recording. Blank lines are skipped.
pub fn parse_recording<R: BufRead>(reader: R) -> Result<Vec<RecordedFrame>, RecordingError> {
    let mut frames: Vec<RecordedFrame> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: RecordedFrame =
            serde_json::from_str(&line).map_err(|source| RecordingError::Parse {
                line: index + 1,
                source,
            })?;

        if let Some(previous) = frames.last() {
            if frame.t_ms < previous.t_ms {
                return Err(RecordingError::OutOfOrder {
                    line: index + 1,
                    t_ms: frame.t_ms,
                });
            }
        }
        frames.push(frame);
    }

    Ok(frames)
}

/// Serves recorded frames and moves the shared clock to each frame's time.
pub struct ReplaySource {
    frames: std::vec::IntoIter<RecordedFrame>,
    clock: ManualClock,
    start: Instant,
}

impl ReplaySource {
    pub fn new(frames: Vec<RecordedFrame>, clock: ManualClock, start: Instant) -> Self {
        Self {
            frames: frames.into_iter(),
            clock,
            start,
        }
    }
}

impl FrameSource for ReplaySource {
    type Frame = Vec<HandObservation>;

    fn next_frame(&mut self) -> Result<Self::Frame, FrameError> {
        let frame = self.frames.next().ok_or(FrameError::Closed)?;
        self.clock.set(self.start + Duration::from_millis(frame.t_ms));

        if frame.dropped {
            return Err(FrameError::Unavailable(format!(
                "frame at {}ms was dropped",
                frame.t_ms
            )));
        }
        Ok(frame.hands)
    }
}

/// The recording already holds detector output; hand it straight through.
pub struct RecordedDetector;

impl HandDetector<Vec<HandObservation>> for RecordedDetector {
    fn detect(&mut self, frame: &Vec<HandObservation>) -> Vec<HandObservation> {
        frame.clone()
    }
}

/// Prints the display whenever it changes.
pub struct ConsoleRenderer {
    json: bool,
    last: Option<DisplayState>,
}

impl ConsoleRenderer {
    pub fn new(json: bool) -> Self {
        Self { json, last: None }
    }
}

impl Renderer<Vec<HandObservation>> for ConsoleRenderer {
    fn render(
        &mut self,
        _frame: &Vec<HandObservation>,
        hands: &[HandObservation],
        display: &DisplayState,
    ) {
        if self.last.as_ref() == Some(display) {
            return;
        }

        if self.json {
            match serde_json::to_string(display) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "failed to serialize display"),
            }
        } else {
            println!("{display}");
        }
        tracing::trace!(hands = hands.len(), "display updated");
        self.last = Some(display.clone());
    }
}

/// Stops the loop after a fixed number of polls.
///
/// The loop polls after each iteration, so at least one frame always runs;
/// a budget of 0 behaves like 1. The CLI rejects 0.
pub struct FrameBudget {
    remaining: Option<u64>,
}

impl FrameBudget {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            remaining: max_frames,
        }
    }
}

impl QuitSignal for FrameBudget {
    fn quit_requested(&mut self) -> bool {
        match self.remaining {
            None => false,
            Some(0) => true,
            Some(ref mut remaining) => {
                *remaining -= 1;
                *remaining == 0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturecalc_application::Clock;

    fn hand_json(handedness: &str) -> String {
        let points: Vec<String> = (0..21).map(|_| r#"{"x":0.5,"y":0.5}"#.to_string()).collect();
        format!(
            r#"{{"handedness":"{handedness}","landmarks":[{}]}}"#,
            points.join(",")
        )
    }

    #[test]
    fn test_parse_recording() {
        let input = format!(
            "{{\"t_ms\":0,\"hands\":[{}]}}\n\n{{\"t_ms\":33,\"dropped\":true}}\n{{\"t_ms\":66}}\n",
            hand_json("Right")
        );
        let frames = parse_recording(input.as_bytes()).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].hands.len(), 1);
        assert!(frames[1].dropped);
        assert!(frames[2].hands.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let input = "{\"t_ms\":0}\n{\"t_ms\":\"soon\"}\n";
        let err = parse_recording(input.as_bytes()).unwrap_err();
        assert!(matches!(err, RecordingError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_out_of_order_frames_rejected() {
        let input = "{\"t_ms\":50}\n{\"t_ms\":10}\n";
        let err = parse_recording(input.as_bytes()).unwrap_err();
        assert!(matches!(err, RecordingError::OutOfOrder { line: 2, t_ms: 10 }));
    }

    #[test]
    fn test_replay_source_drives_clock() {
        let start = Instant::now();
        let clock = ManualClock::starting_at(start);
        let frames = parse_recording("{\"t_ms\":40}\n{\"t_ms\":80,\"dropped\":true}\n".as_bytes())
            .unwrap();
        let mut source = ReplaySource::new(frames, clock.clone(), start);

        assert!(source.next_frame().unwrap().is_empty());
        assert_eq!(clock.now() - start, Duration::from_millis(40));

        assert!(matches!(
            source.next_frame(),
            Err(FrameError::Unavailable(_))
        ));
        assert_eq!(clock.now() - start, Duration::from_millis(80));

        assert!(matches!(source.next_frame(), Err(FrameError::Closed)));
    }

    #[test]
    fn test_bundled_recording_computes_six() {
        use gesturecalc_application::{FrameLoop, NeverQuit, PipelineSettings, StopReason};

        let recording = include_str!("../recordings/two_plus_four.jsonl");
        let frames = parse_recording(recording.as_bytes()).unwrap();
        let start = Instant::now();
        let clock = ManualClock::starting_at(start);
        let mut source = ReplaySource::new(frames, clock.clone(), start);
        let mut renderer = ConsoleRenderer::new(false);

        let mut frame_loop = FrameLoop::with_clock(PipelineSettings::default(), clock);
        let summary = frame_loop.run(
            &mut source,
            &mut RecordedDetector,
            &mut renderer,
            &mut NeverQuit,
        );

        assert_eq!(summary.stop_reason, StopReason::SourceClosed);
        assert_eq!(summary.dropped_frames, 2);
        assert_eq!(summary.admitted_gestures, 4);

        let display = renderer.last.expect("display rendered");
        assert_eq!(display.result, "6");
        // `2` lands at 132ms, `=` at 891ms.
        assert_eq!(display.latency_text(), "0.7590 sec");
    }

    #[test]
    fn test_frame_budget() {
        let mut budget = FrameBudget::new(Some(2));
        assert!(!budget.quit_requested());
        assert!(budget.quit_requested());

        let mut zero = FrameBudget::new(Some(0));
        assert!(zero.quit_requested());

        let mut unlimited = FrameBudget::new(None);
        assert!(!unlimited.quit_requested());
    }
}
