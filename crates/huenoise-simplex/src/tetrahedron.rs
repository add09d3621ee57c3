//! Selection of the simplex (tetrahedron) containing a point inside its
//! skewed unit cube.

/// One of the six tetrahedra a skewed cube is split into, named by the
/// descending order of the point's offsets from the cell origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tetrahedron {
    Xyz,
    Xzy,
    Zxy,
    Zyx,
    Yzx,
    Yxz,
}

impl Tetrahedron {
    pub const ALL: [Tetrahedron; 6] = [
        Tetrahedron::Xyz,
        Tetrahedron::Xzy,
        Tetrahedron::Zxy,
        Tetrahedron::Zyx,
        Tetrahedron::Yzx,
        Tetrahedron::Yxz,
    ];

    /// Classify offsets `(x0, y0, z0)` from the cell origin.
    ///
    /// The comparison chain fixes how ties resolve: `x0 >= y0` is tested
    /// first, then `y0 >= z0`, then `x0 >= z0`; on the `x0 < y0` side
    /// `y0 < z0` is tested before `x0 < z0`. A full three-way tie resolves
    /// to `Xyz`.
    #[inline]
    pub fn classify<S: PartialOrd>(x0: S, y0: S, z0: S) -> Self {
        if x0 >= y0 {
            if y0 >= z0 {
                Self::Xyz
            } else if x0 >= z0 {
                Self::Xzy
            } else {
                Self::Zxy
            }
        } else if y0 < z0 {
            Self::Zyx
        } else if x0 < z0 {
            Self::Yzx
        } else {
            Self::Yxz
        }
    }

    /// Unit steps from the cell origin to the second and third corners.
    #[inline]
    #[must_use]
    pub const fn offsets(self) -> ([i32; 3], [i32; 3]) {
        match self {
            Self::Xyz => ([1, 0, 0], [1, 1, 0]),
            Self::Xzy => ([1, 0, 0], [1, 0, 1]),
            Self::Zxy => ([0, 0, 1], [1, 0, 1]),
            Self::Zyx => ([0, 0, 1], [0, 1, 1]),
            Self::Yzx => ([0, 1, 0], [0, 1, 1]),
            Self::Yxz => ([0, 1, 0], [1, 1, 0]),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Xzy => "xzy",
            Self::Zxy => "zxy",
            Self::Zyx => "zyx",
            Self::Yzx => "yzx",
            Self::Yxz => "yxz",
        }
    }
}
