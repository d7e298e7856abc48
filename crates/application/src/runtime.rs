//! Collaborator traits and the single-threaded frame loop.
//!
//! Camera, detector, overlay and keyboard stay outside this crate; the loop
//! only sees them through the traits below.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gesturecalc_hands::HandObservation;

use crate::display::DisplayState;
use crate::pipeline::GesturePipeline;
use crate::settings::PipelineSettings;

/// Frame acquisition failure.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Transient fault; the loop skips this iteration and retries.
    #[error("frame unavailable: {0}")]
    Unavailable(String),
    /// The source has no more frames.
    #[error("frame source closed")]
    Closed,
}

/// Source of video frames.
pub trait FrameSource {
    type Frame;

    /// Acquire the next frame. May block.
    fn next_frame(&mut self) -> Result<Self::Frame, FrameError>;
}

/// External hand-landmark detector.
pub trait HandDetector<F> {
    /// Detect hands in `frame`. Called exactly once per acquired frame.
    fn detect(&mut self, frame: &F) -> Vec<HandObservation>;
}

/// Overlay/display collaborator.
pub trait Renderer<F> {
    fn render(&mut self, frame: &F, hands: &[HandObservation], display: &DisplayState);
}

/// Non-blocking poll for a termination request.
pub trait QuitSignal {
    fn quit_requested(&mut self) -> bool;
}

/// Time source for cooldown and latency.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Externally driven clock for replays and tests.
///
/// Clones share the same time, so a frame source can advance the clock the
/// loop reads from.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl ManualClock {
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: Instant) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Never asks to quit; the loop then runs until its source closes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    fn quit_requested(&mut self) -> bool {
        false
    }
}

/// Why the frame loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    SourceClosed,
}

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub dropped_frames: u64,
    pub admitted_gestures: u64,
    pub stop_reason: StopReason,
}

/// Drives acquire → detect → pipeline → render → quit poll, one frame at a
/// time.
pub struct FrameLoop<C: Clock = SystemClock> {
    pipeline: GesturePipeline,
    settings: PipelineSettings,
    clock: C,
}

impl FrameLoop<SystemClock> {
    pub fn new(settings: PipelineSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> FrameLoop<C> {
    pub fn with_clock(settings: PipelineSettings, clock: C) -> Self {
        Self {
            pipeline: GesturePipeline::new(&settings),
            settings,
            clock,
        }
    }

    /// Run until the quit signal fires or the source closes.
    ///
    /// A failed acquisition skips the iteration without touching the
    /// pipeline. After `max_consecutive_failures` failures in a row the loop
    /// sleeps `failure_backoff_ms` before trying again.
    pub fn run<S, D, R, Q>(
        &mut self,
        source: &mut S,
        detector: &mut D,
        renderer: &mut R,
        quit: &mut Q,
    ) -> RunSummary
    where
        S: FrameSource,
        D: HandDetector<S::Frame>,
        R: Renderer<S::Frame>,
        Q: QuitSignal,
    {
        tracing::info!(settings = ?self.settings, "frame loop started");

        let mut frames = 0u64;
        let mut dropped_frames = 0u64;
        let mut admitted_gestures = 0u64;
        let mut consecutive_failures = 0u32;

        let stop_reason = loop {
            match source.next_frame() {
                Ok(frame) => {
                    consecutive_failures = 0;
                    let hands = detector.detect(&frame);
                    let outcome = self.pipeline.process_frame(&hands, self.clock.now());
                    frames += 1;
                    if outcome.admitted().is_some() {
                        admitted_gestures += 1;
                    }
                    renderer.render(&frame, &hands, &self.pipeline.display());
                }
                Err(FrameError::Closed) => break StopReason::SourceClosed,
                Err(e) => {
                    dropped_frames += 1;
                    consecutive_failures += 1;
                    tracing::debug!(error = %e, consecutive_failures, "skipping frame");

                    let limit = self.settings.max_consecutive_failures;
                    if limit > 0 && consecutive_failures >= limit {
                        tracing::warn!(
                            consecutive_failures,
                            backoff_ms = self.settings.failure_backoff_ms,
                            "frame source keeps failing, backing off"
                        );
                        std::thread::sleep(self.settings.failure_backoff());
                        consecutive_failures = 0;
                    }
                }
            }

            if quit.quit_requested() {
                break StopReason::Quit;
            }
        };

        let summary = RunSummary {
            frames,
            dropped_frames,
            admitted_gestures,
            stop_reason,
        };
        tracing::info!(?summary, "frame loop stopped");
        summary
    }

    pub fn pipeline(&self) -> &GesturePipeline {
        &self.pipeline
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
