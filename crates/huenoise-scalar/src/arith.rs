//! Tracked arithmetic context.

use crate::scalar::NoiseScalar;
use crate::tracker::{NoopTracker, RangeTracker};

#[cfg(feature = "tracing")]
use tracing::warn;

static UNTRACKED: NoopTracker = NoopTracker;

/// Arithmetic that reports every produced value to a [`RangeTracker`].
///
/// Construction, multiplication, division, `abs`, `floor`, `ceil`, `round`
/// and `modulo` are reported. Addition and subtraction are plain operators
/// and are not. Results are identical to calling the [`NoiseScalar`]
/// methods directly; only the tracker observes a difference.
#[derive(Debug)]
pub struct Arith<'t, T: RangeTracker = NoopTracker> {
    tracker: &'t T,
}

impl<T: RangeTracker> Clone for Arith<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RangeTracker> Copy for Arith<'_, T> {}

impl Arith<'static, NoopTracker> {
    /// Context that records nothing.
    #[inline]
    #[must_use]
    pub fn untracked() -> Self {
        Self {
            tracker: &UNTRACKED,
        }
    }
}

impl<'t, T: RangeTracker> Arith<'t, T> {
    #[inline]
    pub fn new(tracker: &'t T) -> Self {
        Self { tracker }
    }

    #[inline]
    #[must_use]
    pub fn tracker(&self) -> &'t T {
        self.tracker
    }

    #[inline(always)]
    fn seen<S: NoiseScalar>(&self, value: S) -> S {
        if T::ENABLED {
            self.tracker.record(value.to_f64());
        }
        value
    }

    #[inline]
    pub fn int<S: NoiseScalar>(&self, value: i32) -> S {
        self.seen(S::from_int(value))
    }

    #[inline]
    pub fn real<S: NoiseScalar>(&self, value: f64) -> S {
        self.seen(S::from_f64(value))
    }

    #[inline]
    pub fn mul<S: NoiseScalar>(&self, a: S, b: S) -> S {
        self.seen(a * b)
    }

    /// Divide with the saturating divide-by-zero policy of
    /// [`NoiseScalar::saturating_div`].
    #[inline]
    pub fn div<S: NoiseScalar>(&self, a: S, b: S) -> S {
        #[cfg(feature = "tracing")]
        if b == S::ZERO {
            warn!(backend = S::BACKEND, dividend = a.to_f64(), "division by zero saturated");
        }
        self.seen(a.saturating_div(b))
    }

    #[inline]
    pub fn abs<S: NoiseScalar>(&self, value: S) -> S {
        self.seen(value.abs())
    }

    #[inline]
    pub fn floor<S: NoiseScalar>(&self, value: S) -> S {
        self.seen(value.floor())
    }

    #[inline]
    pub fn ceil<S: NoiseScalar>(&self, value: S) -> S {
        self.seen(value.ceil())
    }

    #[inline]
    pub fn round<S: NoiseScalar>(&self, value: S) -> S {
        self.seen(value.round())
    }

    #[inline]
    pub fn modulo<S: NoiseScalar>(&self, value: S, rhs: S) -> S {
        self.seen(value.modulo(rhs))
    }
}
