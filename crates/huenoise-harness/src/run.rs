//! Recorded runs: render a bounded frame sequence and keep, per frame, its
//! hash, render time and the animation state it was rendered from.
//!
//! # Usage
//!
//! ```
//! use huenoise_fx::{FrameSequencer, SequencerConfig};
//! use huenoise_harness::render_run;
//!
//! let mut seq = FrameSequencer::new(16, 8, SequencerConfig::default())?;
//! let report = render_run("smoke", &mut seq, 4);
//! assert_eq!(report.frame_count(), 4);
//! for line in report.to_jsonl().lines() {
//!     assert!(line.contains("\"type\":\"frame\""));
//! }
//! # Ok::<(), huenoise_fx::SequencerError>(())
//! ```

use huenoise_fx::{Frame, FrameSequencer, HueMode, NoiseScalar, RangeReport};
use huenoise_scalar::RangeTracker;
use serde::Serialize;
use web_time::{Duration, Instant};

#[cfg(feature = "tracing")]
use tracing::{debug, debug_span};

use crate::golden::{FRAME_HASH_ALGO, FrameGoldenMismatch, FrameSummary, stable_frame_hash};

const JSONL_SCHEMA_VERSION: &str = "huenoise-jsonl-v1";

/// One rendered frame of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub frame_idx: u64,
    pub hash: String,
    pub summary: FrameSummary,
    pub elapsed: Duration,
    /// Depth phase the frame was sampled at.
    pub z_state: f64,
    /// Hue phase the frame was colored with.
    pub hue_state: f64,
    /// Running extrema after the frame.
    pub min: f64,
    pub max: f64,
}

/// Percentile histogram of frame render times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameTimeHistogram {
    pub count: u64,
    pub min_us: u64,
    pub max_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub mean_us: u64,
}

impl FrameTimeHistogram {
    fn from_sorted(samples: &[u64]) -> Self {
        let (Some(&min_us), Some(&max_us)) = (samples.first(), samples.last()) else {
            return Self::default();
        };
        Self {
            count: samples.len() as u64,
            min_us,
            max_us,
            p50_us: percentile(samples, 0.50),
            p95_us: percentile(samples, 0.95),
            p99_us: percentile(samples, 0.99),
            mean_us: samples.iter().sum::<u64>() / samples.len() as u64,
        }
    }
}

fn percentile(sorted: &[u64], p: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let idx = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[idx]
}

/// Everything recorded while rendering a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub run_id: String,
    pub width: u32,
    pub height: u32,
    pub backend: &'static str,
    pub mode: HueMode,
    pub records: Vec<FrameRecord>,
    /// Scalar range observed by the sequencer's tracker, if it tracks.
    pub range: Option<RangeReport>,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    run_id: &'a str,
    width: u32,
    height: u32,
    backend: &'static str,
    mode: &'static str,
    frames: usize,
    frame_time: FrameTimeHistogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    scalar_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scalar_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scalar_samples: Option<u64>,
}

#[derive(Debug, Serialize)]
struct JsonlFrameRecord<'a> {
    schema_version: &'static str,
    #[serde(rename = "type")]
    record_type: &'static str,
    run_id: &'a str,
    backend: &'static str,
    mode: &'static str,
    frame_idx: u64,
    hash_algo: &'static str,
    frame_hash: &'a str,
    width: u32,
    height: u32,
    distinct_colors: usize,
    elapsed_us: u64,
    z_state: f64,
    hue_state: f64,
    min: f64,
    max: f64,
}

impl RunReport {
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.records.len()
    }

    /// Frame hashes in render order.
    #[must_use]
    pub fn hashes(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.hash.as_str()).collect()
    }

    /// Render-time histogram over all frames.
    #[must_use]
    pub fn frame_time(&self) -> FrameTimeHistogram {
        let mut times_us: Vec<u64> = self
            .records
            .iter()
            .map(|r| r.elapsed.as_micros() as u64)
            .collect();
        times_us.sort_unstable();
        FrameTimeHistogram::from_sorted(&times_us)
    }

    /// Check the recorded hashes against a golden sequence.
    pub fn verify_golden<H: AsRef<str>>(
        &self,
        expected_hashes: &[H],
    ) -> Result<(), Box<FrameGoldenMismatch>> {
        let actual: Vec<(String, FrameSummary)> = self
            .records
            .iter()
            .map(|r| (r.hash.clone(), r.summary))
            .collect();
        crate::golden::verify_hashes(&self.run_id, expected_hashes, &actual)
    }

    /// Serialize the run summary (machine-readable for CI gating).
    #[must_use]
    pub fn to_json(&self) -> String {
        let summary = RunSummary {
            run_id: &self.run_id,
            width: self.width,
            height: self.height,
            backend: self.backend,
            mode: self.mode.as_str(),
            frames: self.records.len(),
            frame_time: self.frame_time(),
            scalar_min: self.range.map(|r| r.min),
            scalar_max: self.range.map(|r| r.max),
            scalar_samples: self.range.map(|r| r.samples),
        };
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// One JSON object per frame, newline-terminated.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for r in &self.records {
            let row = JsonlFrameRecord {
                schema_version: JSONL_SCHEMA_VERSION,
                record_type: "frame",
                run_id: &self.run_id,
                backend: self.backend,
                mode: self.mode.as_str(),
                frame_idx: r.frame_idx,
                hash_algo: FRAME_HASH_ALGO,
                frame_hash: &r.hash,
                width: r.summary.width,
                height: r.summary.height,
                distinct_colors: r.summary.distinct_colors,
                elapsed_us: r.elapsed.as_micros() as u64,
                z_state: r.z_state,
                hue_state: r.hue_state,
                min: r.min,
                max: r.max,
            };
            if let Ok(line) = serde_json::to_string(&row) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

/// Render `frames` frames from `sequencer` and record each one.
pub fn render_run<S: NoiseScalar, T: RangeTracker>(
    run_id: &str,
    sequencer: &mut FrameSequencer<S, T>,
    frames: usize,
) -> RunReport {
    render_run_with(run_id, sequencer, frames, |_| {})
}

/// Like [`render_run`], handing every frame to `on_frame` before it is
/// dropped.
pub fn render_run_with<S, T, F>(
    run_id: &str,
    sequencer: &mut FrameSequencer<S, T>,
    frames: usize,
    mut on_frame: F,
) -> RunReport
where
    S: NoiseScalar,
    T: RangeTracker,
    F: FnMut(&Frame),
{
    #[cfg(feature = "tracing")]
    let _span = debug_span!("huenoise.run", run_id, frames, backend = S::BACKEND).entered();

    let mut records = Vec::with_capacity(frames);
    for _ in 0..frames {
        let before = *sequencer.state();
        let start = Instant::now();
        let frame = sequencer.next_frame();
        let elapsed = start.elapsed();
        let after = sequencer.state();
        records.push(FrameRecord {
            frame_idx: before.frame,
            hash: stable_frame_hash(&frame),
            summary: FrameSummary::of(&frame),
            elapsed,
            z_state: before.z_state.to_f64(),
            hue_state: before.hue_state.to_f64(),
            min: after.min.to_f64(),
            max: after.max.to_f64(),
        });
        on_frame(&frame);
    }

    let report = RunReport {
        run_id: run_id.to_string(),
        width: sequencer.width(),
        height: sequencer.height(),
        backend: S::BACKEND,
        mode: sequencer.mode(),
        records,
        range: sequencer.range_report(),
    };

    #[cfg(feature = "tracing")]
    debug!(
        run_id,
        frames = report.frame_count(),
        p50_us = report.frame_time().p50_us,
        "harness: run complete"
    );

    report
}
