//! Color types.
//!
//! Lighting math runs on [`Color`], a linear RGB triple where 1.0 is full
//! intensity. Only the final pixel is quantized to bytes, and that
//! conversion saturates instead of wrapping.

use bytemuck::{Pod, Zeroable};
use prism_math::{Interval, Vec3};

/// Color type alias (linear RGB, 1.0 = full channel intensity)
pub type Color = Vec3;

/// Build a color from 8-bit channel values.
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f64, g as f64, b as f64) / 255.0
}

/// A stored pixel, one byte per channel.
///
/// `#[repr(C)]` with three `u8` fields has no padding, so a slice of pixels
/// can be cast straight to the `R G B R G B ...` byte stream.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }
}

/// Quantize one channel, clamping to [0, 1] first.
#[inline]
fn channel_to_u8(value: f64) -> u8 {
    (255.0 * Interval::UNIT.clamp(value)).round() as u8
}

impl From<Color> for Rgb8 {
    fn from(color: Color) -> Self {
        Self {
            r: channel_to_u8(color.x),
            g: channel_to_u8(color.y),
            b: channel_to_u8(color.z),
        }
    }
}
