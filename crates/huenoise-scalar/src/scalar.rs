//! The [`NoiseScalar`] trait and its native `f64` backend.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

/// Numeric operations the noise sampler and frame sequencer need.
///
/// Implementations must be deterministic: identical inputs always produce
/// identical outputs. The fixed-point backend additionally guarantees that
/// results are identical across platforms and builds.
///
/// # Division
///
/// [`checked_div`](Self::checked_div) returns `None` for a zero divisor.
/// [`saturating_div`](Self::saturating_div) never fails: a zero divisor yields
/// [`MAX`](Self::MAX) for a positive dividend, [`MIN`](Self::MIN) for a
/// negative dividend and [`ZERO`](Self::ZERO) for `0 / 0`.
///
/// # Modulo
///
/// [`modulo`](Self::modulo) is floored: the result takes the sign of the
/// divisor, so a negative phase wraps into `[0, window)`. A zero divisor
/// yields `ZERO`.
pub trait NoiseScalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    /// Simplex skew factor for three dimensions.
    const THIRD: Self;
    /// Simplex unskew factor for three dimensions.
    const SIXTH: Self;
    const MIN: Self;
    const MAX: Self;
    /// Short backend name used in logs and reports.
    const BACKEND: &'static str;

    fn from_int(value: i32) -> Self;

    /// Convert from a real literal, saturating at the representable range.
    /// NaN converts to zero.
    fn from_f64(value: f64) -> Self;

    /// Round to the nearest integer (ties away from zero), saturating to
    /// the `i32` range.
    fn to_int(self) -> i32;

    fn to_f64(self) -> f64;

    fn checked_div(self, rhs: Self) -> Option<Self>;

    #[inline]
    fn saturating_div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(q) => q,
            None if self > Self::ZERO => Self::MAX,
            None if self < Self::ZERO => Self::MIN,
            None => Self::ZERO,
        }
    }

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Round to the nearest integer value, ties away from zero.
    fn round(self) -> Self;
    fn modulo(self, rhs: Self) -> Self;
}

impl NoiseScalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const THIRD: Self = 1.0 / 3.0;
    const SIXTH: Self = 1.0 / 6.0;
    const MIN: Self = f64::MIN;
    const MAX: Self = f64::MAX;
    const BACKEND: &'static str = "f64";

    #[inline]
    fn from_int(value: i32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(f64::MIN, f64::MAX)
        }
    }

    #[inline]
    fn to_int(self) -> i32 {
        // `as` saturates and maps NaN to zero.
        f64::round(self) as i32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 { None } else { Some(self / rhs) }
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        f64::ceil(self)
    }

    #[inline]
    fn round(self) -> Self {
        f64::round(self)
    }

    #[inline]
    fn modulo(self, rhs: Self) -> Self {
        if rhs == 0.0 {
            return 0.0;
        }
        let r = self % rhs;
        if r != 0.0 && (r < 0.0) != (rhs < 0.0) {
            // A remainder smaller than half an ulp of `rhs` rounds onto
            // `rhs` itself, which lies outside the result range.
            let wrapped = r + rhs;
            if wrapped == rhs { 0.0 } else { wrapped }
        } else {
            r
        }
    }
}
