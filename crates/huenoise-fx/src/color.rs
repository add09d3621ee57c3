//! Packed RGBA color.

use core::fmt;

/// An RGBA color packed into a `u32` as `0xRRGGBBAA`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Alpha value of a fully opaque color.
    pub const OPAQUE: u8 = 0xFF;
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from red, green and blue channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, Self::OPAQUE)
    }

    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == Self::OPAQUE
    }

    /// Channels in `[r, g, b, a]` order.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for PackedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl fmt::Display for PackedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_roundtrip() {
        let c = PackedRgba::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!(c.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn rgb_is_opaque() {
        assert!(PackedRgba::rgb(1, 2, 3).is_opaque());
        assert!(!PackedRgba::TRANSPARENT.is_opaque());
        assert_eq!(PackedRgba::BLACK.to_bytes(), [0, 0, 0, 0xff]);
    }

    #[test]
    fn formatting() {
        let c = PackedRgba::rgb(0xff, 0x00, 0x11);
        assert_eq!(c.to_string(), "#ff0011");
        assert_eq!(format!("{c:?}"), "#ff0011ff");
    }
}
