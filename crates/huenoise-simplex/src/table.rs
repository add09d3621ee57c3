//! Permutation tables for gradient hashing.

use std::sync::OnceLock;

/// Ken Perlin's reference permutation of `0..=255`.
pub const SEED: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Length of the doubled table; any `cell + offset + perm(..)` sum stays
/// below it.
pub const TABLE_LEN: usize = 512;

/// Number of gradient directions indexed by [`PermutationTable::perm_mod12`].
pub const GRADIENT_COUNT: u8 = 12;

/// The seed permutation doubled to 512 entries, plus the same values
/// reduced modulo 12 for gradient selection.
///
/// Tables are immutable once built, so a shared instance can be read from
/// any number of threads.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_LEN],
    perm_mod12: [u8; TABLE_LEN],
}

impl PermutationTable {
    #[must_use]
    pub fn new() -> Self {
        let mut perm = [0u8; TABLE_LEN];
        let mut perm_mod12 = [0u8; TABLE_LEN];
        for (i, (p, m)) in perm.iter_mut().zip(perm_mod12.iter_mut()).enumerate() {
            *p = SEED[i & 255];
            *m = *p % GRADIENT_COUNT;
        }
        Self { perm, perm_mod12 }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<PermutationTable> = OnceLock::new();
        SHARED.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = TABLE_LEN, "simplex: permutation table built");
            Self::new()
        })
    }

    /// Permutation entry; `i` is reduced modulo the table length.
    #[inline]
    #[must_use]
    pub fn perm(&self, i: usize) -> usize {
        usize::from(self.perm[i % TABLE_LEN])
    }

    /// Gradient index in `0..12`; `i` is reduced modulo the table length.
    #[inline]
    #[must_use]
    pub fn perm_mod12(&self, i: usize) -> usize {
        usize::from(self.perm_mod12[i % TABLE_LEN])
    }

    /// Gradient index for the lattice corner `(i, j, k)`, each already
    /// wrapped into `0..=256`.
    #[inline]
    #[must_use]
    pub fn corner_gradient(&self, i: usize, j: usize, k: usize) -> usize {
        self.perm_mod12(i + self.perm(j + self.perm(k)))
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("len", &TABLE_LEN)
            .field("head", &&self.perm[..8])
            .finish()
    }
}
