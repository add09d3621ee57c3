#![forbid(unsafe_code)]

//! Deterministic scalar arithmetic for noise sampling.
//!
//! # Role in huenoise
//! Every coordinate, noise sample, and animation phase in the workspace is a
//! [`NoiseScalar`]. The trait has two backends:
//!
//! - `f64`: the default, fast native floating point backend.
//! - [`Fx`] (`I32F32`, feature `fixed-point`): a fixed-point backend whose
//!   results are bit-identical on every platform.
//!
//! Algorithms are written once against the trait, so the two backends never
//! drift apart.
//!
//! # Range tracking
//! Observability of the values an algorithm produces is opt-in. Arithmetic
//! routed through an [`Arith`] context reports each produced value to a
//! [`RangeTracker`]; the default [`NoopTracker`] compiles down to nothing.
//!
//! ```
//! use huenoise_scalar::{Arith, MinMaxTracker, NoiseScalar};
//!
//! let tracker = MinMaxTracker::new();
//! let ar = Arith::new(&tracker);
//! let a: f64 = ar.real(2.5);
//! let b = ar.mul(a, ar.int(-4));
//! assert_eq!(b, -10.0);
//!
//! let report = tracker.snapshot().expect("values were recorded");
//! assert_eq!(report.min, -10.0);
//! assert_eq!(report.max, 2.5);
//! ```

pub mod arith;
#[cfg(feature = "fixed-point")]
pub mod fixed_point;
pub mod scalar;
pub mod tracker;

pub use arith::Arith;
#[cfg(feature = "fixed-point")]
pub use fixed_point::Fx;
pub use scalar::NoiseScalar;
pub use tracker::{MinMaxTracker, NoopTracker, RangeReport, RangeTracker};
