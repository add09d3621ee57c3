//! 3D simplex noise.

use huenoise_scalar::{Arith, NoiseScalar, RangeTracker};

use crate::gradient::GRADIENTS;
use crate::table::PermutationTable;
use crate::tetrahedron::Tetrahedron;

/// Final scale applied to the summed corner contributions, bringing the
/// output to roughly `[-1, 1]`.
pub const NOISE_SCALE: i32 = 32;

/// Squared radius of each corner's influence; a corner further away than
/// this contributes nothing.
pub const FALLOFF: f64 = 0.5;

/// Sample 3D simplex noise at `(x, y, z)`.
///
/// Pure and deterministic: identical inputs yield identical outputs, and
/// the shared tables are immutable, so calls may run concurrently.
#[inline]
pub fn simplex3<S: NoiseScalar>(x: S, y: S, z: S) -> S {
    simplex3_tracked(x, y, z, &Arith::untracked())
}

/// [`simplex3`] with every produced intermediate reported to `ar`'s tracker.
pub fn simplex3_tracked<S: NoiseScalar, T: RangeTracker>(x: S, y: S, z: S, ar: &Arith<'_, T>) -> S {
    simplex3_in(PermutationTable::shared(), x, y, z, ar)
}

/// [`simplex3_tracked`] over an explicit permutation table.
pub fn simplex3_in<S: NoiseScalar, T: RangeTracker>(
    table: &PermutationTable,
    x: S,
    y: S,
    z: S,
    ar: &Arith<'_, T>,
) -> S {
    // Skew input space to find the containing cell.
    let s = ar.mul(x + y + z, S::THIRD);
    let i = ar.floor(x + s);
    let j = ar.floor(y + s);
    let k = ar.floor(z + s);

    // Unskew the cell origin back to input space.
    let t = ar.mul(i + j + k, S::SIXTH);
    let x0 = x - (i - t);
    let y0 = y - (j - t);
    let z0 = z - (k - t);

    let ([i1, j1, k1], [i2, j2, k2]) = Tetrahedron::classify(x0, y0, z0).offsets();

    let x1 = x0 - ar.int(i1) + S::SIXTH;
    let y1 = y0 - ar.int(j1) + S::SIXTH;
    let z1 = z0 - ar.int(k1) + S::SIXTH;
    let x2 = x0 - ar.int(i2) + S::THIRD;
    let y2 = y0 - ar.int(j2) + S::THIRD;
    let z2 = z0 - ar.int(k2) + S::THIRD;
    let x3 = x0 - S::ONE + S::HALF;
    let y3 = y0 - S::ONE + S::HALF;
    let z3 = z0 - S::ONE + S::HALF;

    let ii = lattice(i);
    let jj = lattice(j);
    let kk = lattice(k);
    let gi0 = table.corner_gradient(ii, jj, kk);
    let gi1 = table.corner_gradient(ii + unit(i1), jj + unit(j1), kk + unit(k1));
    let gi2 = table.corner_gradient(ii + unit(i2), jj + unit(j2), kk + unit(k2));
    let gi3 = table.corner_gradient(ii + 1, jj + 1, kk + 1);

    let n0 = corner(ar, gi0, x0, y0, z0);
    let n1 = corner(ar, gi1, x1, y1, z1);
    let n2 = corner(ar, gi2, x2, y2, z2);
    let n3 = corner(ar, gi3, x3, y3, z3);

    ar.mul(ar.int(NOISE_SCALE), n0 + n1 + n2 + n3)
}

/// Wrap a floored cell coordinate into `0..=255`.
#[inline]
fn lattice<S: NoiseScalar>(cell: S) -> usize {
    (cell.to_int() & 255) as usize
}

#[inline]
fn unit(step: i32) -> usize {
    usize::from(step != 0)
}

/// Contribution `t^4 * dot(g, d)` of one corner at offset `d`, where
/// `t = 0.5 - |d|^2`; zero when `t` is negative.
#[inline]
fn corner<S: NoiseScalar, T: RangeTracker>(
    ar: &Arith<'_, T>,
    gradient: usize,
    x: S,
    y: S,
    z: S,
) -> S {
    let t = S::from_f64(FALLOFF) - ar.mul(x, x) - ar.mul(y, y) - ar.mul(z, z);
    if t < S::ZERO {
        return S::ZERO;
    }
    let t = ar.mul(t, t);
    ar.mul(ar.mul(t, t), GRADIENTS[gradient].dot(ar, x, y, z))
}
