//! Frame buffer produced by the sequencer.

use crate::color::PackedRgba;

/// A rendered image: `width * height` colors in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<PackedRgba>,
}

impl Frame {
    /// Frame filled with `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: PackedRgba) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` when the length does
    /// not match the dimensions.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<PackedRgba>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Caller guarantees `pixels.len() == width * height`.
    pub(crate) fn from_row_major(width: u32, height: u32, pixels: Vec<PackedRgba>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<PackedRgba> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: PackedRgba) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[PackedRgba] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<PackedRgba> {
        self.pixels
    }

    /// Rows of the frame, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PackedRgba]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Flat `[r, g, b, a, ...]` bytes, the layout image encoders expect.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// True when every pixel has the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.pixels.windows(2).all(|w| w[0] == w[1])
    }
}
