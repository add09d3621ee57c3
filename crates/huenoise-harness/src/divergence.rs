//! Side-by-side rendering on the `f64` and fixed-point backends.
//!
//! The fixed-point backend quantizes every intermediate to 2^-32, so a pixel
//! whose hue lands close to a rounding boundary can pick the neighbouring
//! palette entry. The report counts those pixels per frame.

use huenoise_fx::{Frame, FrameSequencer, SequencerConfig, SequencerError};
use huenoise_scalar::Fx;
use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::golden::stable_frame_hash;

/// Divergence of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameDivergence {
    pub frame_idx: u64,
    pub pixel_count: usize,
    pub differing_pixels: usize,
    pub f64_hash: String,
    pub fixed_hash: String,
}

impl FrameDivergence {
    fn compare(frame_idx: u64, float: &Frame, fixed: &Frame) -> Self {
        let differing_pixels = float
            .pixels()
            .iter()
            .zip(fixed.pixels())
            .filter(|(a, b)| a != b)
            .count();
        Self {
            frame_idx,
            pixel_count: float.pixels().len(),
            differing_pixels,
            f64_hash: stable_frame_hash(float),
            fixed_hash: stable_frame_hash(fixed),
        }
    }

    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.differing_pixels == 0
    }
}

/// Per-frame comparison of the two backends over one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivergenceReport {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<FrameDivergence>,
}

impl DivergenceReport {
    /// Differing pixels summed over all frames.
    #[must_use]
    pub fn total_differing(&self) -> usize {
        self.frames.iter().map(|f| f.differing_pixels).sum()
    }

    /// Worst single frame, if any frame diverged.
    #[must_use]
    pub fn worst_frame(&self) -> Option<&FrameDivergence> {
        self.frames
            .iter()
            .filter(|f| !f.is_identical())
            .max_by_key(|f| (f.differing_pixels, std::cmp::Reverse(f.frame_idx)))
    }

    /// Fraction of all compared pixels that differ, in `[0, 1]`.
    #[must_use]
    pub fn divergence_ratio(&self) -> f64 {
        let total: usize = self.frames.iter().map(|f| f.pixel_count).sum();
        if total == 0 {
            return 0.0;
        }
        self.total_differing() as f64 / total as f64
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Render `frames` frames of the same configuration on both backends and
/// compare them pixel by pixel.
pub fn backend_divergence(
    width: u32,
    height: u32,
    config: SequencerConfig,
    frames: usize,
) -> Result<DivergenceReport, SequencerError> {
    let mut float = FrameSequencer::<f64>::with_backend(width, height, config.clone())?;
    let mut fixed = FrameSequencer::<Fx>::with_backend(width, height, config)?;

    let frames: Vec<FrameDivergence> = float
        .frames()
        .zip(fixed.frames())
        .take(frames)
        .enumerate()
        .map(|(i, (a, b))| FrameDivergence::compare(i as u64, &a, &b))
        .collect();

    let report = DivergenceReport {
        width,
        height,
        frames,
    };

    #[cfg(feature = "tracing")]
    debug!(
        width,
        height,
        frames = report.frames.len(),
        differing = report.total_differing(),
        "harness: backend divergence"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use huenoise_fx::{HUES, HueMode};

    #[test]
    fn reports_one_entry_per_frame() {
        let report = backend_divergence(8, 6, SequencerConfig::default(), 4).expect("valid");
        assert_eq!(report.frames.len(), 4);
        for (i, frame) in report.frames.iter().enumerate() {
            assert_eq!(frame.frame_idx, i as u64);
            assert_eq!(frame.pixel_count, 48);
            assert!(frame.differing_pixels <= frame.pixel_count);
            assert_eq!(frame.is_identical(), frame.f64_hash == frame.fixed_hash);
        }
        let ratio = report.divergence_ratio();
        assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn f64_side_matches_plain_sequencer() {
        let config = SequencerConfig::default();
        let report = backend_divergence(5, 5, config.clone(), 2).expect("valid");
        let mut seq = FrameSequencer::new(5, 5, config).expect("valid");
        for frame in &report.frames {
            assert_eq!(frame.f64_hash, stable_frame_hash(&seq.next_frame()));
        }
    }

    #[test]
    fn single_pixel_first_frame_agrees() {
        // The origin samples to exactly zero on both backends.
        let report = backend_divergence(1, 1, SequencerConfig::default(), 1).expect("valid");
        assert!(report.frames[0].is_identical());
        assert_eq!(report.total_differing(), 0);
        assert!(report.worst_frame().is_none());
        let expected = Frame::new(1, 1, HUES[45]);
        assert_eq!(report.frames[0].f64_hash, stable_frame_hash(&expected));
    }

    #[test]
    fn phase_only_first_frame_agrees() {
        let config = SequencerConfig::default().with_mode(HueMode::PhaseOnly);
        let report = backend_divergence(4, 4, config, 3).expect("valid");
        // Frame 0 has hue phase exactly zero everywhere.
        assert!(report.frames[0].is_identical());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let err = backend_divergence(0, 4, SequencerConfig::default(), 1).expect_err("zero width");
        assert_eq!(err.config_errors().len(), 1);
    }

    #[test]
    fn worst_frame_prefers_earliest_on_ties() {
        let entry = |frame_idx, differing_pixels| FrameDivergence {
            frame_idx,
            pixel_count: 10,
            differing_pixels,
            f64_hash: String::new(),
            fixed_hash: String::new(),
        };
        let report = DivergenceReport {
            width: 5,
            height: 2,
            frames: vec![entry(0, 0), entry(1, 3), entry(2, 3), entry(3, 1)],
        };
        assert_eq!(report.worst_frame().map(|f| f.frame_idx), Some(1));
        assert_eq!(report.total_differing(), 7);
        assert!((report.divergence_ratio() - 0.175).abs() < 1e-12);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).expect("json");
        assert_eq!(value["frames"][1]["differing_pixels"], 3);
    }
}
