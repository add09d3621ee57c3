//! Cyclic 90-step hue wheel.
//!
//! The wheel runs red → magenta → blue → cyan → green → yellow and back to
//! red. Each sextant moves one channel in steps of `0x11`, so adjacent
//! entries differ in exactly one channel.

use crate::color::PackedRgba;

/// Number of entries in the hue wheel.
pub const HUE_COUNT: usize = 90;

const STEPS_PER_SEXTANT: usize = HUE_COUNT / 6;
const CHANNEL_STEP: u8 = 0x11;

const fn ramp(step: usize) -> u8 {
    // step <= 15, so the product fits in a byte.
    CHANNEL_STEP * step as u8
}

const fn hue_at(i: usize) -> PackedRgba {
    let sextant = i / STEPS_PER_SEXTANT;
    let step = i % STEPS_PER_SEXTANT;
    match sextant {
        // Blue rises.
        0 => PackedRgba::rgb(0xff, 0x00, ramp(step)),
        // Red falls.
        1 => PackedRgba::rgb(0xff - ramp(step), 0x00, 0xff),
        // Green rises.
        2 => PackedRgba::rgb(0x00, ramp(step), 0xff),
        // Blue falls.
        3 => PackedRgba::rgb(0x00, 0xff, 0xff - ramp(step)),
        // Red rises.
        4 => PackedRgba::rgb(ramp(step), 0xff, 0x00),
        // Green falls.
        _ => PackedRgba::rgb(0xff, 0xff - ramp(step), 0x00),
    }
}

const fn build_hues() -> [PackedRgba; HUE_COUNT] {
    let mut hues = [PackedRgba::TRANSPARENT; HUE_COUNT];
    let mut i = 0;
    while i < HUE_COUNT {
        hues[i] = hue_at(i);
        i += 1;
    }
    hues
}

/// The hue wheel, index 0 is pure red.
pub const HUES: [PackedRgba; HUE_COUNT] = build_hues();

/// Lookup into [`HUES`] that accepts any integer index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HuePalette;

impl HuePalette {
    /// Reduce `hue` into `[0, 90)`. Negative inputs wrap around the wheel.
    #[inline]
    #[must_use]
    pub const fn index(hue: i64) -> usize {
        // rem_euclid by a positive divisor is always in range.
        hue.rem_euclid(HUE_COUNT as i64) as usize
    }

    /// Color for `hue`, reduced modulo the wheel length.
    #[inline]
    #[must_use]
    pub const fn color(hue: i64) -> PackedRgba {
        HUES[Self::index(hue)]
    }

    #[inline]
    #[must_use]
    pub const fn len() -> usize {
        HUE_COUNT
    }

    pub fn iter() -> impl Iterator<Item = PackedRgba> + Clone {
        HUES.iter().copied()
    }
}
