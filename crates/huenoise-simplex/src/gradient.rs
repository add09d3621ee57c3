//! Gradient directions for 3D simplex noise.

use huenoise_scalar::{Arith, NoiseScalar, RangeTracker};

/// A gradient vector with components in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Gradient {
    #[must_use]
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// `gx * x + gy * y + gz * z`, evaluated left to right.
    #[inline]
    pub fn dot<S: NoiseScalar, T: RangeTracker>(self, ar: &Arith<'_, T>, x: S, y: S, z: S) -> S {
        let gx: S = ar.int(i32::from(self.x));
        let gy: S = ar.int(i32::from(self.y));
        let gz: S = ar.int(i32::from(self.z));
        ar.mul(gx, x) + ar.mul(gy, y) + ar.mul(gz, z)
    }
}

/// The twelve edge midpoints of a cube, in hash order.
pub const GRADIENTS: [Gradient; 12] = [
    Gradient::new(1, 1, 0),
    Gradient::new(-1, 1, 0),
    Gradient::new(1, -1, 0),
    Gradient::new(-1, -1, 0),
    Gradient::new(1, 0, 1),
    Gradient::new(-1, 0, 1),
    Gradient::new(1, 0, -1),
    Gradient::new(-1, 0, -1),
    Gradient::new(0, 1, 1),
    Gradient::new(0, -1, 1),
    Gradient::new(0, 1, -1),
    Gradient::new(0, -1, -1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gradient_has_two_unit_components() {
        for g in GRADIENTS {
            let nonzero = [g.x, g.y, g.z].iter().filter(|c| **c != 0).count();
            assert_eq!(nonzero, 2, "{g:?}");
            assert!([g.x, g.y, g.z].iter().all(|c| c.abs() <= 1));
        }
    }

    #[test]
    fn gradients_are_distinct() {
        for (i, a) in GRADIENTS.iter().enumerate() {
            for b in &GRADIENTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn dot_product() {
        let ar = Arith::untracked();
        assert_eq!(GRADIENTS[0].dot(&ar, 0.25_f64, 0.5, 9.0), 0.75);
        assert_eq!(GRADIENTS[7].dot(&ar, 0.25_f64, 9.0, 0.5), -0.75);
        assert_eq!(GRADIENTS[11].dot(&ar, 9.0_f64, 2.0, -3.0), 1.0);
    }
}
