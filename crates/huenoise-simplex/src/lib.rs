#![forbid(unsafe_code)]

//! 3D simplex noise over any [`NoiseScalar`](huenoise_scalar::NoiseScalar).
//!
//! The sampler is a pure function of its coordinates and a fixed
//! permutation/gradient table. Writing it once against the scalar trait
//! means the `f64` and fixed-point backends run the same algorithm.
//!
//! ```
//! use huenoise_simplex::simplex3;
//!
//! assert_eq!(simplex3(0.0_f64, 0.0, 0.0), 0.0);
//! let v = simplex3(0.125_f64, 0.25, 0.0125);
//! assert!((-1.0..=1.0).contains(&v));
//! ```

pub mod gradient;
pub mod noise;
pub mod table;
pub mod tetrahedron;

pub use gradient::{GRADIENTS, Gradient};
pub use noise::{FALLOFF, NOISE_SCALE, simplex3, simplex3_in, simplex3_tracked};
pub use table::PermutationTable;
pub use tetrahedron::Tetrahedron;
