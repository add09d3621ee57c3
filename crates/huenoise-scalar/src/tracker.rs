//! Observed-range tracking for produced scalar values.
//!
//! Trackers are purely diagnostic: they never influence arithmetic results.
//! A tracker is owned (or borrowed) by whoever performs the arithmetic, so
//! independent sequencers can keep independent ranges without sharing any
//! process-wide state.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for values produced by tracked arithmetic.
pub trait RangeTracker {
    /// When `false`, [`Arith`](crate::Arith) skips the conversion to `f64`
    /// and the call to [`record`](Self::record) entirely.
    const ENABLED: bool = true;

    /// Observe one produced value.
    fn record(&self, value: f64);

    /// Snapshot of everything observed so far, if the tracker keeps one.
    fn report(&self) -> Option<RangeReport> {
        None
    }
}

impl<T: RangeTracker> RangeTracker for &T {
    const ENABLED: bool = T::ENABLED;

    #[inline]
    fn record(&self, value: f64) {
        (**self).record(value);
    }

    fn report(&self) -> Option<RangeReport> {
        (**self).report()
    }
}

/// Tracker that discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTracker;

impl RangeTracker for NoopTracker {
    const ENABLED: bool = false;

    #[inline(always)]
    fn record(&self, _value: f64) {}
}

/// All-time minimum and maximum of recorded values.
///
/// The range only ever widens; there is no reset. Updates are lock-free, so
/// one tracker may be shared by several threads.
#[derive(Debug)]
pub struct MinMaxTracker {
    min_bits: AtomicU64,
    max_bits: AtomicU64,
    samples: AtomicU64,
}

impl MinMaxTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_bits: AtomicU64::new(f64::INFINITY.to_bits()),
            max_bits: AtomicU64::new(f64::NEG_INFINITY.to_bits()),
            samples: AtomicU64::new(0),
        }
    }

    /// Current range, or `None` before the first recorded value.
    #[must_use]
    pub fn snapshot(&self) -> Option<RangeReport> {
        let samples = self.samples.load(Ordering::Acquire);
        if samples == 0 {
            return None;
        }
        Some(RangeReport {
            min: f64::from_bits(self.min_bits.load(Ordering::Acquire)),
            max: f64::from_bits(self.max_bits.load(Ordering::Acquire)),
            samples,
        })
    }

    fn widen(slot: &AtomicU64, value: f64, replace: impl Fn(f64, f64) -> bool) {
        let _ = slot.fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
            replace(value, f64::from_bits(bits)).then(|| value.to_bits())
        });
    }
}

impl Default for MinMaxTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeTracker for MinMaxTracker {
    fn record(&self, value: f64) {
        if value.is_nan() {
            return;
        }
        Self::widen(&self.min_bits, value, |new, cur| new < cur);
        Self::widen(&self.max_bits, value, |new, cur| new > cur);
        self.samples.fetch_add(1, Ordering::AcqRel);
    }

    fn report(&self) -> Option<RangeReport> {
        self.snapshot()
    }
}

/// Observed range of produced values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeReport {
    pub min: f64,
    pub max: f64,
    pub samples: u64,
}

impl RangeReport {
    /// True when `other` lies within this range.
    #[must_use]
    pub fn contains(&self, other: &RangeReport) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl fmt::Display for RangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scalar.min: {:.6}", self.min)?;
        writeln!(f, "scalar.max: {:.6}", self.max)?;
        write!(f, "scalar.samples: {}", self.samples)
    }
}
