//! Fixed-point backend (`I32F32`).
//!
//! 32 integer bits cover any pixel coordinate times the spatial scale and the
//! depth window; 32 fractional bits keep the simplex falloff (`t^4` with
//! `t <= 0.5`) well above the quantization floor. All operations are integer
//! operations on the raw bits, so results match across platforms.

use fixed::types::I32F32;

use crate::scalar::NoiseScalar;

/// Fixed-point noise scalar: signed, 32 integer bits, 32 fractional bits.
pub type Fx = I32F32;

const FRAC_BITS: u32 = 32;

impl NoiseScalar for Fx {
    const ZERO: Self = Fx::from_bits(0);
    const ONE: Self = Fx::from_bits(1 << FRAC_BITS);
    const HALF: Self = Fx::from_bits(1 << (FRAC_BITS - 1));
    // round(2^32 / 3)
    const THIRD: Self = Fx::from_bits(0x5555_5555);
    // round(2^32 / 6)
    const SIXTH: Self = Fx::from_bits(0x2AAA_AAAB);
    const MIN: Self = Fx::from_bits(i64::MIN);
    const MAX: Self = Fx::from_bits(i64::MAX);
    const BACKEND: &'static str = "i32f32";

    #[inline]
    fn from_int(value: i32) -> Self {
        Fx::from_bits(i64::from(value) << FRAC_BITS)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        match Fx::checked_from_num(value) {
            Some(v) => v,
            None if value.is_nan() => Self::ZERO,
            None if value > 0.0 => Self::MAX,
            None => Self::MIN,
        }
    }

    #[inline]
    fn to_int(self) -> i32 {
        self.saturating_round().saturating_to_num::<i32>()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_num::<f64>()
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Fx::checked_div(self, rhs)
    }

    #[inline]
    fn abs(self) -> Self {
        self.saturating_abs()
    }

    #[inline]
    fn floor(self) -> Self {
        self.saturating_floor()
    }

    #[inline]
    fn ceil(self) -> Self {
        self.saturating_ceil()
    }

    #[inline]
    fn round(self) -> Self {
        self.saturating_round()
    }

    #[inline]
    fn modulo(self, rhs: Self) -> Self {
        let Some(r) = self.checked_rem(rhs) else {
            return Self::ZERO;
        };
        if r != Self::ZERO && (r < Self::ZERO) != (rhs < Self::ZERO) {
            r + rhs
        } else {
            r
        }
    }
}
