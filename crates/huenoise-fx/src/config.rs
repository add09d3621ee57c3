//! Sequencer configuration (deterministic, env-overridable).

use core::fmt;
use std::env;

const ENV_XY_SCALE: &str = "HUENOISE_XY_SCALE";
const ENV_Z_STEP: &str = "HUENOISE_Z_STEP";
const ENV_Z_DEPTH: &str = "HUENOISE_Z_DEPTH";
const ENV_HUE_STEP: &str = "HUENOISE_HUE_STEP";
const ENV_HUE_OFFSET: &str = "HUENOISE_HUE_OFFSET";
const ENV_MODE: &str = "HUENOISE_MODE";
const ENV_EXTREMA: &str = "HUENOISE_EXTREMA";

/// Largest accepted frame width or height.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest noise-space coordinate a sequencer may sample. Keeps every
/// intermediate well inside the fixed-point integer range.
pub const MAX_NOISE_EXTENT: f64 = 16_777_216.0;

/// How a normalized noise value becomes a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueMode {
    /// Mode 1: noise plus the fixed hue offset. The pattern changes over
    /// time, the color mapping does not.
    NoiseOffset,
    /// Mode 2: noise plus the animated hue phase.
    NoisePhase,
    /// Mode 3: the hue phase alone. Every pixel of a frame has one color.
    PhaseOnly,
}

impl HueMode {
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::NoiseOffset),
            2 => Some(Self::NoisePhase),
            3 => Some(Self::PhaseOnly),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::NoiseOffset => 1,
            Self::NoisePhase => 2,
            Self::PhaseOnly => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoiseOffset => "noise-offset",
            Self::NoisePhase => "noise-phase",
            Self::PhaseOnly => "phase-only",
        }
    }
}

impl fmt::Display for HueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifetime of the running min/max used for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtremaPolicy {
    /// Extrema accumulate over the whole sequence and never shrink, so the
    /// normalization range only widens as frames are produced.
    #[default]
    Persist,
    /// Extrema restart from the epsilon floor at the start of every frame.
    ResetEachFrame,
}

impl ExtremaPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "persist" => Some(Self::Persist),
            "reset" | "reset-each-frame" => Some(Self::ResetEachFrame),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Persist => "persist",
            Self::ResetEachFrame => "reset",
        }
    }
}

impl fmt::Display for ExtremaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame sequencer configuration.
///
/// # Environment Variables
/// - `HUENOISE_XY_SCALE` (f64, > 0)
/// - `HUENOISE_Z_STEP` (f64)
/// - `HUENOISE_Z_DEPTH` (f64, > 0)
/// - `HUENOISE_HUE_STEP` (f64)
/// - `HUENOISE_HUE_OFFSET` (f64)
/// - `HUENOISE_MODE` = 1|2|3
/// - `HUENOISE_EXTREMA` = persist|reset
#[derive(Debug, Clone, PartialEq)]
pub struct SequencerConfig {
    /// Noise-space distance between neighbouring pixels.
    pub xy_scale: f64,
    /// Depth advanced per frame.
    pub z_step: f64,
    /// Depth window the animation blends across before it loops.
    pub z_depth: f64,
    /// Hue phase advanced per frame, in turns.
    pub hue_step: f64,
    /// Constant hue offset used by [`HueMode::NoiseOffset`].
    pub hue_offset: f64,
    /// Hue mode code, see [`HueMode::from_code`].
    pub mode: u32,
    pub extrema: ExtremaPolicy,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            xy_scale: 8.0 / 64.0,
            z_step: 0.0125,
            z_depth: 512.0,
            hue_step: 0.005,
            hue_offset: 0.005,
            mode: 2,
            extrema: ExtremaPolicy::Persist,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct SequencerConfigParse {
    pub config: SequencerConfig,
    pub errors: Vec<ConfigError>,
}

/// A configuration value the sequencer cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero or above [`MAX_DIMENSION`].
    InvalidDimensions { width: u32, height: u32 },
    UnknownHueMode(u32),
    NonPositive { field: &'static str, value: f64 },
    NonFinite { field: &'static str, value: f64 },
    /// A value whose noise-space extent would leave the scalar range.
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },
    /// An environment value that does not parse.
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDimensions { .. } => "dimensions",
            Self::UnknownHueMode(_) => "mode",
            Self::NonPositive { field, .. }
            | Self::NonFinite { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidValue { field, .. } => field,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "dimensions={width}x{height} (each side must be in 1..={MAX_DIMENSION})"
            ),
            Self::UnknownHueMode(code) => write!(f, "mode={code} (expected 1|2|3)"),
            Self::NonPositive { field, value } => write!(f, "{field}={value} (must be > 0)"),
            Self::NonFinite { field, value } => write!(f, "{field}={value} (must be finite)"),
            Self::OutOfRange { field, value, max } => {
                write!(f, "{field}={value} (noise extent must be <= {max})")
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(f, "{field}={value} (expected {expected})"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SequencerConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> SequencerConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> SequencerConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup, starting from defaults.
    ///
    /// Values that fail to parse keep their default and are reported.
    pub fn from_env_with<F>(mut get: F) -> SequencerConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = SequencerConfig::default();
        let mut errors = Vec::new();

        let reals: [(&str, &'static str, &mut f64); 5] = [
            (ENV_XY_SCALE, "xy_scale", &mut config.xy_scale),
            (ENV_Z_STEP, "z_step", &mut config.z_step),
            (ENV_Z_DEPTH, "z_depth", &mut config.z_depth),
            (ENV_HUE_STEP, "hue_step", &mut config.hue_step),
            (ENV_HUE_OFFSET, "hue_offset", &mut config.hue_offset),
        ];
        for (key, field, slot) in reals {
            if let Some(value) = get(key) {
                match parse_f64(&value) {
                    Some(parsed) => *slot = parsed,
                    None => errors.push(ConfigError::InvalidValue {
                        field,
                        value,
                        expected: "number",
                    }),
                }
            }
        }

        if let Some(value) = get(ENV_MODE) {
            match parse_u32(&value) {
                Some(parsed) => config.mode = parsed,
                None => errors.push(ConfigError::InvalidValue {
                    field: "mode",
                    value,
                    expected: "1|2|3",
                }),
            }
        }

        if let Some(value) = get(ENV_EXTREMA) {
            match ExtremaPolicy::parse(&value) {
                Some(parsed) => config.extrema = parsed,
                None => errors.push(ConfigError::InvalidValue {
                    field: "extrema",
                    value,
                    expected: "persist|reset",
                }),
            }
        }

        if let Err(mut validation) = config.validate() {
            errors.append(&mut validation);
        }

        SequencerConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_positive("xy_scale", self.xy_scale, &mut errors);
        validate_finite("z_step", self.z_step, &mut errors);
        validate_positive("z_depth", self.z_depth, &mut errors);
        validate_finite("hue_step", self.hue_step, &mut errors);
        validate_finite("hue_offset", self.hue_offset, &mut errors);
        if HueMode::from_code(self.mode).is_none() {
            errors.push(ConfigError::UnknownHueMode(self.mode));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolved hue mode, if the code is known.
    #[must_use]
    pub fn hue_mode(&self) -> Option<HueMode> {
        HueMode::from_code(self.mode)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: HueMode) -> Self {
        self.mode = mode.code();
        self
    }

    #[must_use]
    pub fn with_extrema(mut self, extrema: ExtremaPolicy) -> Self {
        self.extrema = extrema;
        self
    }
}

/// Check that the largest sampled coordinate, `(side - 1) * xy_scale`, and
/// the depth window stay within [`MAX_NOISE_EXTENT`].
pub fn validate_extent(
    width: u32,
    height: u32,
    config: &SequencerConfig,
) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let side = f64::from(width.max(height).saturating_sub(1));
    let extent = side * config.xy_scale;
    if extent > MAX_NOISE_EXTENT {
        errors.push(ConfigError::OutOfRange {
            field: "xy_scale",
            value: config.xy_scale,
            max: MAX_NOISE_EXTENT,
        });
    }
    if config.z_depth > MAX_NOISE_EXTENT {
        errors.push(ConfigError::OutOfRange {
            field: "z_depth",
            value: config.z_depth,
            max: MAX_NOISE_EXTENT,
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check frame dimensions against `1..=MAX_DIMENSION`.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ConfigError> {
    let valid = 1..=MAX_DIMENSION;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimensions { width, height })
    }
}

#[inline]
fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[inline]
fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn validate_finite(field: &'static str, value: f64, errors: &mut Vec<ConfigError>) -> bool {
    if value.is_finite() {
        true
    } else {
        errors.push(ConfigError::NonFinite { field, value });
        false
    }
}

fn validate_positive(field: &'static str, value: f64, errors: &mut Vec<ConfigError>) {
    if validate_finite(field, value, errors) && value <= 0.0 {
        errors.push(ConfigError::NonPositive { field, value });
    }
}
