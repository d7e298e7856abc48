//! Replays a recorded hand-detector stream through the gesture calculator.
//!
//! Run with: cargo run -p gesturecalc-replay -- session.jsonl

mod recording;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gesturecalc_application::{FrameLoop, ManualClock, PipelineSettings};

use recording::{parse_recording, ConsoleRenderer, FrameBudget, RecordedDetector, ReplaySource};

#[derive(Parser, Debug)]
#[command(
    name = "gesturecalc-replay",
    about = "Replay recorded hand poses through the gesture calculator"
)]
struct Cli {
    /// JSON-lines recording of detector output
    recording: PathBuf,

    /// Pipeline settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print display changes as JSON lines
    #[arg(long)]
    json: bool,

    /// Stop after this many frames (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gesturecalc=debug")),
        )
        .init();

    let settings = match &cli.config {
        Some(path) => PipelineSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PipelineSettings::default(),
    };

    let file = File::open(&cli.recording)
        .with_context(|| format!("opening recording {}", cli.recording.display()))?;
    let frames = parse_recording(BufReader::new(file))
        .with_context(|| format!("reading recording {}", cli.recording.display()))?;
    info!(
        frames = frames.len(),
        path = %cli.recording.display(),
        "replaying recording"
    );

    let start = Instant::now();
    let clock = ManualClock::starting_at(start);
    let mut source = ReplaySource::new(frames, clock.clone(), start);
    let mut frame_loop = FrameLoop::with_clock(settings, clock);

    let summary = frame_loop.run(
        &mut source,
        &mut RecordedDetector,
        &mut ConsoleRenderer::new(cli.json),
        &mut FrameBudget::new(cli.max_frames),
    );

    info!(
        frames = summary.frames,
        dropped = summary.dropped_frames,
        admitted = summary.admitted_gestures,
        stop = ?summary.stop_reason,
        "replay finished"
    );
    Ok(())
}
