//! Stable frame hashes and golden-sequence verification.
//!
//! A frame hash covers the dimensions and every RGBA byte, so two frames hash
//! equal only when they would encode to the same image. Hashes render as
//! `fnv1a64:<16 hex digits>` and are stable across platforms and releases.

use huenoise_fx::Frame;
use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Algorithm tag prefixed to every rendered hash.
pub const FRAME_HASH_ALGO: &str = "fnv1a64";
const FNV64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Placeholder hash for a frame that one side of a comparison lacks.
pub const MISSING_HASH: &str = "missing";

/// Fold `bytes` into a running FNV-1a 64 hash.
#[inline]
#[must_use]
pub fn fnv1a64_extend(mut hash: u64, bytes: &[u8]) -> u64 {
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

/// Hash of a frame: width and height as little-endian `u32`, then the RGBA
/// bytes of each pixel in row-major order.
#[must_use]
pub fn stable_frame_hash(frame: &Frame) -> String {
    let mut hash = FNV64_OFFSET_BASIS;
    hash = fnv1a64_extend(hash, &frame.width().to_le_bytes());
    hash = fnv1a64_extend(hash, &frame.height().to_le_bytes());
    for pixel in frame.pixels() {
        hash = fnv1a64_extend(hash, &pixel.to_bytes());
    }
    format!("{FRAME_HASH_ALGO}:{hash:016x}")
}

/// Compact description of a frame, attached to mismatch reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    pub distinct_colors: usize,
    pub uniform: bool,
}

impl FrameSummary {
    #[must_use]
    pub fn of(frame: &Frame) -> Self {
        let mut colors: Vec<u32> = frame.pixels().iter().map(|c| c.0).collect();
        colors.sort_unstable();
        colors.dedup();
        Self {
            width: frame.width(),
            height: frame.height(),
            pixel_count: frame.pixels().len(),
            distinct_colors: colors.len(),
            uniform: frame.is_uniform(),
        }
    }
}

/// Actionable mismatch payload for golden frame hash verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameGoldenMismatch {
    pub frame_idx: usize,
    pub expected_hash: String,
    pub actual_hash: String,
    pub summary: FrameSummary,
    pub reproduction_trace_id: String,
    pub expected_frame_count: usize,
    pub actual_frame_count: usize,
}

impl FrameGoldenMismatch {
    /// Serialize mismatch details for JSONL logging.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl std::fmt::Display for FrameGoldenMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = &self.summary;
        write!(
            f,
            "golden frame mismatch: frame_idx={} expected_hash={} actual_hash={} reproduction_trace_id={} expected_frames={} actual_frames={} summary={{width:{},height:{},pixel_count:{},distinct_colors:{},uniform:{}}}",
            self.frame_idx,
            self.expected_hash,
            self.actual_hash,
            self.reproduction_trace_id,
            self.expected_frame_count,
            self.actual_frame_count,
            summary.width,
            summary.height,
            summary.pixel_count,
            summary.distinct_colors,
            summary.uniform,
        )
    }
}

impl std::error::Error for FrameGoldenMismatch {}

/// Identifier that pins a mismatch to one frame of one run.
#[must_use]
pub fn reproduction_trace_id(run_id: &str, frame_idx: usize) -> String {
    format!("{run_id}#frame-{frame_idx}")
}

/// Verify rendered frames against golden hashes.
///
/// Reports the first differing frame, or the first frame present on only one
/// side when the counts differ.
pub fn verify_golden_frame_hashes<H: AsRef<str>>(
    run_id: &str,
    expected_hashes: &[H],
    frames: &[Frame],
) -> Result<(), Box<FrameGoldenMismatch>> {
    let actual: Vec<(String, FrameSummary)> = frames
        .iter()
        .map(|frame| (stable_frame_hash(frame), FrameSummary::of(frame)))
        .collect();
    verify_hashes(run_id, expected_hashes, &actual)
}

/// Same check as [`verify_golden_frame_hashes`] over precomputed
/// `(hash, summary)` pairs.
pub(crate) fn verify_hashes<H: AsRef<str>>(
    run_id: &str,
    expected_hashes: &[H],
    actual: &[(String, FrameSummary)],
) -> Result<(), Box<FrameGoldenMismatch>> {
    let mismatch = |frame_idx: usize, expected_hash: &str, actual_hash: &str, summary| {
        let mismatch = FrameGoldenMismatch {
            frame_idx,
            expected_hash: expected_hash.to_string(),
            actual_hash: actual_hash.to_string(),
            summary,
            reproduction_trace_id: reproduction_trace_id(run_id, frame_idx),
            expected_frame_count: expected_hashes.len(),
            actual_frame_count: actual.len(),
        };
        #[cfg(feature = "tracing")]
        warn!(
            run_id,
            frame_idx,
            expected = %mismatch.expected_hash,
            actual = %mismatch.actual_hash,
            "harness: golden frame mismatch"
        );
        Box::new(mismatch)
    };

    for (frame_idx, (expected, (actual_hash, summary))) in
        expected_hashes.iter().zip(actual).enumerate()
    {
        if expected.as_ref() != actual_hash {
            return Err(mismatch(frame_idx, expected.as_ref(), actual_hash, *summary));
        }
    }

    if let Some(expected) = expected_hashes.get(actual.len()) {
        return Err(mismatch(
            actual.len(),
            expected.as_ref(),
            MISSING_HASH,
            FrameSummary::default(),
        ));
    }
    if let Some((actual_hash, summary)) = actual.get(expected_hashes.len()) {
        return Err(mismatch(
            expected_hashes.len(),
            MISSING_HASH,
            actual_hash,
            *summary,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huenoise_fx::PackedRgba;

    #[test]
    fn fnv_matches_reference_vectors() {
        assert_eq!(fnv1a64_extend(FNV64_OFFSET_BASIS, b""), FNV64_OFFSET_BASIS);
        assert_eq!(fnv1a64_extend(FNV64_OFFSET_BASIS, b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(
            fnv1a64_extend(FNV64_OFFSET_BASIS, b"foobar"),
            0x8594_4171_f739_67e8
        );
    }

    #[test]
    fn hash_format_is_tagged_hex() {
        let hash = stable_frame_hash(&Frame::new(2, 2, PackedRgba::BLACK));
        let (algo, hex) = hash.split_once(':').expect("tagged");
        assert_eq!(algo, FRAME_HASH_ALGO);
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_covers_dimensions() {
        // Same bytes, different shape.
        let wide = Frame::new(4, 1, PackedRgba::BLACK);
        let tall = Frame::new(1, 4, PackedRgba::BLACK);
        assert_ne!(stable_frame_hash(&wide), stable_frame_hash(&tall));
    }

    #[test]
    fn hash_covers_every_pixel() {
        let base = Frame::new(3, 3, PackedRgba::BLACK);
        let mut changed = base.clone();
        changed.set(2, 2, PackedRgba::rgb(0, 0, 1));
        assert_ne!(stable_frame_hash(&base), stable_frame_hash(&changed));
        assert_eq!(stable_frame_hash(&base), stable_frame_hash(&base.clone()));
    }

    #[test]
    fn summary_counts_colors() {
        let mut frame = Frame::new(3, 2, PackedRgba::BLACK);
        assert_eq!(
            FrameSummary::of(&frame),
            FrameSummary {
                width: 3,
                height: 2,
                pixel_count: 6,
                distinct_colors: 1,
                uniform: true,
            }
        );
        frame.set(0, 0, PackedRgba::rgb(1, 0, 0));
        frame.set(1, 1, PackedRgba::rgb(0, 1, 0));
        let summary = FrameSummary::of(&frame);
        assert_eq!(summary.distinct_colors, 3);
        assert!(!summary.uniform);
    }

    #[test]
    fn verify_accepts_matching_sequence() {
        let frames = vec![
            Frame::new(2, 2, PackedRgba::BLACK),
            Frame::new(2, 2, PackedRgba::rgb(9, 9, 9)),
        ];
        let expected: Vec<String> = frames.iter().map(stable_frame_hash).collect();
        assert!(verify_golden_frame_hashes("ok", &expected, &frames).is_ok());
        assert!(verify_golden_frame_hashes::<String>("empty", &[], &[]).is_ok());
    }

    #[test]
    fn verify_reports_first_differing_frame() {
        let frames = vec![
            Frame::new(2, 2, PackedRgba::BLACK),
            Frame::new(2, 2, PackedRgba::rgb(9, 9, 9)),
        ];
        let expected = vec![stable_frame_hash(&frames[0]), "fnv1a64:0000000000000000".into()];
        let err = verify_golden_frame_hashes("run-a", &expected, &frames).expect_err("mismatch");
        assert_eq!(err.frame_idx, 1);
        assert_eq!(err.actual_hash, stable_frame_hash(&frames[1]));
        assert_eq!(err.reproduction_trace_id, "run-a#frame-1");
        assert_eq!(err.summary.pixel_count, 4);
        assert_eq!(err.expected_frame_count, 2);
        assert_eq!(err.actual_frame_count, 2);
    }

    #[test]
    fn verify_reports_missing_actual_frame() {
        let frames = vec![Frame::new(1, 1, PackedRgba::BLACK)];
        let expected = vec![stable_frame_hash(&frames[0]), "fnv1a64:1111111111111111".into()];
        let err = verify_golden_frame_hashes("short", &expected, &frames).expect_err("short");
        assert_eq!(err.frame_idx, 1);
        assert_eq!(err.actual_hash, MISSING_HASH);
        assert_eq!(err.summary, FrameSummary::default());
    }

    #[test]
    fn verify_reports_unexpected_extra_frame() {
        let frames = vec![
            Frame::new(1, 1, PackedRgba::BLACK),
            Frame::new(1, 1, PackedRgba::BLACK),
        ];
        let expected = vec![stable_frame_hash(&frames[0])];
        let err = verify_golden_frame_hashes("long", &expected, &frames).expect_err("long");
        assert_eq!(err.frame_idx, 1);
        assert_eq!(err.expected_hash, MISSING_HASH);
        assert_eq!(err.summary.pixel_count, 1);
    }

    #[test]
    fn mismatch_serializes_and_displays() {
        let frames = vec![Frame::new(1, 1, PackedRgba::BLACK)];
        let err = verify_golden_frame_hashes("json", &["fnv1a64:ffffffffffffffff"], &frames)
            .expect_err("mismatch");
        let value: serde_json::Value = serde_json::from_str(&err.to_json()).expect("valid json");
        assert_eq!(value["frame_idx"], 0);
        assert_eq!(value["reproduction_trace_id"], "json#frame-0");
        assert_eq!(value["summary"]["uniform"], true);
        let text = err.to_string();
        assert!(text.starts_with("golden frame mismatch: frame_idx=0"));
        assert!(text.contains("expected_hash=fnv1a64:ffffffffffffffff"));
    }
}
