//! Frame sequencer: animation state and the per-pixel hue loop.
//!
//! Each frame samples simplex noise twice per pixel, once at the current
//! depth `z` and once a full depth window behind it, and cross-fades the two
//! so the animation loops seamlessly when `z` wraps. The blended value is
//! normalized against the running extrema, offset by the hue phase (per
//! [`HueMode`]) and looked up on the 90-step hue wheel.
//!
//! # Phases
//!
//! The depth and hue phases are derived from the frame counter,
//! `phase = (frame * step) mod window`, rather than accumulated. The result
//! equals the wrapped running sum without accumulating rounding drift.
//!
//! Steps are reduced into their window at construction and the product is
//! wrapped in `f64` before it reaches the backend, so a fixed-point sequencer
//! never saturates on a large step or a long run. The mode-1 hue offset is
//! reduced to `[0, 1)` the same way; whole turns do not change the hue.
//!
//! # Extrema
//!
//! The running `(min, max)` starts at `(-EXTREMA_EPSILON, +EXTREMA_EPSILON)`,
//! so the normalization divisor `max + |min|` is never zero, even for a frame
//! where every sample is identical. [`ExtremaPolicy`] decides whether the
//! range persists across frames or restarts every frame.

use core::fmt;

use huenoise_scalar::{Arith, NoiseScalar, NoopTracker, RangeReport, RangeTracker};
use huenoise_simplex::simplex3_tracked;

#[cfg(feature = "tracing")]
use tracing::{debug, debug_span, trace, warn};

use crate::config::{
    ConfigError, ExtremaPolicy, HueMode, SequencerConfig, validate_dimensions, validate_extent,
};
use crate::error::SequencerError;
use crate::frame::Frame;
use crate::palette::{HUE_COUNT, HuePalette};

/// Half-width of the initial normalization range.
pub const EXTREMA_EPSILON: f64 = 0.0001;

/// Mutable animation state, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState<S> {
    /// Frames produced so far.
    pub frame: u64,
    /// Depth phase the next frame samples at, in `[0, z_depth)`.
    pub z_state: S,
    /// Depth advance per frame, reduced into `[0, z_depth)`.
    pub z_step: S,
    pub z_depth: S,
    /// Hue phase of the next frame, in turns within `[0, 1)`.
    pub hue_state: S,
    /// Hue advance per frame, reduced into `[0, 1)`.
    pub hue_step: S,
    /// Running minimum of blended noise values.
    pub min: S,
    /// Running maximum of blended noise values.
    pub max: S,
}

/// Produces a deterministic sequence of hue frames.
///
/// `S` selects the scalar backend and `T` the range tracker that observes
/// every produced scalar. The defaults, `f64` and [`NoopTracker`], give the
/// fast path with no observation cost.
pub struct FrameSequencer<S: NoiseScalar = f64, T: RangeTracker = NoopTracker> {
    width: u32,
    height: u32,
    config: SequencerConfig,
    mode: HueMode,
    xy_scale: S,
    /// Mode-1 offset in turns, reduced into `[0, 1)`.
    hue_offset: S,
    epsilon: S,
    state: AnimationState<S>,
    tracker: T,
}

impl FrameSequencer {
    /// `f64` sequencer without range tracking.
    pub fn new(width: u32, height: u32, config: SequencerConfig) -> Result<Self, SequencerError> {
        Self::with_tracker(width, height, config, NoopTracker)
    }
}

impl<S: NoiseScalar> FrameSequencer<S> {
    /// Sequencer on the scalar backend `S`, without range tracking.
    pub fn with_backend(
        width: u32,
        height: u32,
        config: SequencerConfig,
    ) -> Result<Self, SequencerError> {
        Self::with_tracker(width, height, config, NoopTracker)
    }
}

impl<S: NoiseScalar, T: RangeTracker> FrameSequencer<S, T> {
    /// Validate dimensions and configuration, then build the sequencer.
    ///
    /// Every violation is reported at once; nothing is rendered on error.
    pub fn with_tracker(
        width: u32,
        height: u32,
        config: SequencerConfig,
        tracker: T,
    ) -> Result<Self, SequencerError> {
        let mut errors = Vec::new();
        if let Err(error) = validate_dimensions(width, height) {
            errors.push(error);
        }
        if let Err(mut violations) = config.validate() {
            errors.append(&mut violations);
        }
        if let Err(mut violations) = validate_extent(width, height, &config) {
            errors.append(&mut violations);
        }
        let mode = match (config.hue_mode(), errors.is_empty()) {
            (Some(mode), true) => mode,
            _ => return Err(SequencerError::Config(errors)),
        };

        let ar = Arith::new(&tracker);
        let xy_scale: S = ar.real(config.xy_scale);
        let hue_offset: S = wrap_into(&ar, config.hue_offset, 1.0, S::ONE);
        let epsilon: S = ar.real(EXTREMA_EPSILON);
        let z_depth: S = ar.real(config.z_depth);
        if z_depth <= S::ZERO {
            // Positive in f64 but below the backend's resolution.
            return Err(ConfigError::NonPositive {
                field: "z_depth",
                value: config.z_depth,
            }
            .into());
        }
        let state = AnimationState {
            frame: 0,
            z_state: S::ZERO,
            z_step: wrap_into(&ar, config.z_step, z_depth.to_f64(), z_depth),
            z_depth,
            hue_state: S::ZERO,
            hue_step: wrap_into(&ar, config.hue_step, 1.0, S::ONE),
            min: -epsilon,
            max: epsilon,
        };

        #[cfg(feature = "tracing")]
        debug!(
            width,
            height,
            backend = S::BACKEND,
            mode = mode.as_str(),
            extrema = config.extrema.as_str(),
            "sequencer: constructed"
        );

        Ok(Self {
            width,
            height,
            config,
            mode,
            xy_scale,
            hue_offset,
            epsilon,
            state,
            tracker,
        })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> HueMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &AnimationState<S> {
        &self.state
    }

    /// Number of frames produced so far.
    #[inline]
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.state.frame
    }

    #[inline]
    #[must_use]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Range of every scalar the sequencer has produced, if the tracker
    /// keeps one.
    #[must_use]
    pub fn range_report(&self) -> Option<RangeReport> {
        self.tracker.report()
    }

    /// Render the next frame and advance the animation.
    pub fn next_frame(&mut self) -> Frame {
        #[cfg(feature = "tracing")]
        let _span = debug_span!(
            "huenoise.frame",
            frame = self.state.frame,
            backend = S::BACKEND,
            mode = self.mode.as_str()
        )
        .entered();

        let ar = Arith::new(&self.tracker);
        let state = &mut self.state;
        if self.config.extrema == ExtremaPolicy::ResetEachFrame {
            state.min = -self.epsilon;
            state.max = self.epsilon;
        }

        let ninety: S = ar.int(HUE_COUNT as i32);
        let z = state.z_state;
        let hue = state.hue_state;
        let depth = state.z_depth;
        let behind = z - depth;
        let ahead_weight = depth - z;

        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            // Dimensions are validated to fit in i32.
            let sy = ar.mul(ar.int(y as i32), self.xy_scale);
            for x in 0..self.width {
                let sx = ar.mul(ar.int(x as i32), self.xy_scale);
                let current = simplex3_tracked(sx, sy, z, &ar);
                let previous = simplex3_tracked(sx, sy, behind, &ar);
                let n = ar.div(ar.mul(ahead_weight, current) + ar.mul(z, previous), depth);

                if n > state.max {
                    state.max = n;
                }
                if n < state.min {
                    state.min = n;
                }
                let abs_min = ar.abs(state.min);
                let norm = ar.div(n + abs_min, state.max + abs_min);

                let turns = match self.mode {
                    HueMode::NoiseOffset => self.hue_offset + norm,
                    HueMode::NoisePhase => hue + norm,
                    HueMode::PhaseOnly => hue,
                };
                let index = ar.round(ar.mul(turns, ninety)).to_int();
                pixels.push(HuePalette::color(i64::from(index)));
            }
        }

        #[cfg(feature = "tracing")]
        if state.min == -self.epsilon && state.max == self.epsilon {
            warn!(
                frame = state.frame,
                "sequencer: extrema at epsilon floor, frame is degenerate"
            );
        }

        state.frame += 1;
        let elapsed = state.frame as f64;
        state.z_state = wrap_into(&ar, elapsed * state.z_step.to_f64(), depth.to_f64(), depth);
        state.hue_state = wrap_into(&ar, elapsed * state.hue_step.to_f64(), 1.0, S::ONE);

        #[cfg(feature = "tracing")]
        trace!(
            frame = state.frame,
            z_state = state.z_state.to_f64(),
            hue_state = state.hue_state.to_f64(),
            "sequencer: phase advance"
        );

        Frame::from_row_major(self.width, self.height, pixels)
    }

    /// Endless stream of frames; bound it with [`Iterator::take`].
    pub fn frames(&mut self) -> Frames<'_, S, T> {
        Frames { sequencer: self }
    }

    /// Multi-line state listing, one `name: value` field per line.
    #[must_use]
    pub fn dump(&self) -> String {
        let s = &self.state;
        format!(
            "---\n\
             width:       {}\n\
             height:      {}\n\
             mode:        {}\n\
             backend:     {}\n\
             extrema:     {}\n\
             xy_scale:    {:.6}\n\
             z_step:      {:.6}\n\
             z_depth:     {:.6}\n\
             z_state:     {:.6}\n\
             hue_step:    {:.6}\n\
             hue_offset:  {:.6}\n\
             hue_state:   {:.6}\n\
             min:         {:.6}\n\
             max:         {:.6}\n\
             frame:       {}\n",
            self.width,
            self.height,
            self.mode.code(),
            S::BACKEND,
            self.config.extrema,
            self.xy_scale.to_f64(),
            s.z_step.to_f64(),
            s.z_depth.to_f64(),
            s.z_state.to_f64(),
            s.hue_step.to_f64(),
            self.hue_offset.to_f64(),
            s.hue_state.to_f64(),
            s.min.to_f64(),
            s.max.to_f64(),
            s.frame,
        )
    }
}

/// Reduce `value` into `[0, window)` in `f64`, then convert it to the
/// backend. The second reduction catches a conversion that rounds onto
/// `window` itself.
#[inline]
fn wrap_into<S: NoiseScalar, T: RangeTracker>(
    ar: &Arith<'_, T>,
    value: f64,
    window: f64,
    backend_window: S,
) -> S {
    ar.modulo(ar.real(value.rem_euclid(window)), backend_window)
}

impl<S: NoiseScalar, T: RangeTracker> fmt::Debug for FrameSequencer<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSequencer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("backend", &S::BACKEND)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`FrameSequencer::frames`].
pub struct Frames<'a, S: NoiseScalar, T: RangeTracker> {
    sequencer: &'a mut FrameSequencer<S, T>,
}

impl<S: NoiseScalar, T: RangeTracker> Iterator for Frames<'_, S, T> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        Some(self.sequencer.next_frame())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: NoiseScalar, T: RangeTracker> fmt::Debug for Frames<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frames")
            .field("next", &self.sequencer.frame_index())
            .finish()
    }
}
