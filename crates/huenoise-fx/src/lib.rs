#![forbid(unsafe_code)]

//! Animated hue frames from 3D simplex noise.
//!
//! # Role in huenoise
//! `huenoise-fx` owns everything between a noise sample and a pixel: the
//! 90-step [`HuePalette`], the [`Frame`] buffer, the env-overridable
//! [`SequencerConfig`], and the [`FrameSequencer`] that drives the per-pixel
//! loop and the animation phases.
//!
//! # Determinism
//! A sequencer is a pure function of its dimensions, configuration and frame
//! index. Two sequencers built the same way produce identical frames; on the
//! fixed-point backend the frames are also identical across platforms.
//!
//! ```
//! use huenoise_fx::{FrameSequencer, SequencerConfig};
//!
//! let mut seq = FrameSequencer::new(32, 16, SequencerConfig::default())?;
//! let frames: Vec<_> = seq.frames().take(3).collect();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[0].pixels().len(), 32 * 16);
//! assert_eq!(seq.frame_index(), 3);
//! # Ok::<(), huenoise_fx::SequencerError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod sequencer;

pub use color::PackedRgba;
pub use config::{
    ConfigError, ExtremaPolicy, HueMode, MAX_DIMENSION, MAX_NOISE_EXTENT, SequencerConfig,
    SequencerConfigParse,
};
pub use error::SequencerError;
pub use frame::Frame;
pub use palette::{HUE_COUNT, HUES, HuePalette};
pub use sequencer::{AnimationState, EXTREMA_EPSILON, FrameSequencer, Frames};

pub use huenoise_scalar::{NoiseScalar, RangeReport};
