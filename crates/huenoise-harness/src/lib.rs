#![forbid(unsafe_code)]

//! Determinism tooling for huenoise.
//!
//! # Role in huenoise
//! The sequencer promises that a configuration and a frame index fully
//! determine a frame. This crate turns that promise into checks: stable
//! [`stable_frame_hash`] digests, [`verify_golden_frame_hashes`] with
//! actionable [`FrameGoldenMismatch`] reports, recorded runs with per-frame
//! JSONL ([`render_run`]), and, with the `fixed-point` feature, a
//! [`backend_divergence`] comparison of the two scalar backends.
//!
//! ```
//! use huenoise_fx::{FrameSequencer, SequencerConfig};
//! use huenoise_harness::{stable_frame_hash, verify_golden_frame_hashes};
//!
//! let mut seq = FrameSequencer::new(8, 8, SequencerConfig::default())?;
//! let frames: Vec<_> = seq.frames().take(2).collect();
//! let golden: Vec<String> = frames.iter().map(stable_frame_hash).collect();
//! assert!(verify_golden_frame_hashes("doc", &golden, &frames).is_ok());
//! # Ok::<(), huenoise_fx::SequencerError>(())
//! ```

#[cfg(feature = "fixed-point")]
pub mod divergence;
pub mod golden;
pub mod run;

#[cfg(feature = "fixed-point")]
pub use divergence::{DivergenceReport, FrameDivergence, backend_divergence};
pub use golden::{
    FRAME_HASH_ALGO, FrameGoldenMismatch, FrameSummary, MISSING_HASH, fnv1a64_extend,
    reproduction_trace_id, stable_frame_hash, verify_golden_frame_hashes,
};
pub use run::{FrameRecord, FrameTimeHistogram, RunReport, render_run, render_run_with};
