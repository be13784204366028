use std::fmt;
use std::ops::{Index, IndexMut};

/// An RGBA value in the canonical double-precision exchange range.
///
/// Every packed format decodes into and encodes from this type. Normalized
/// formats map their stored integers into `[0, 1]` (or `[-1, 1]` for signed
/// formats); nothing here clamps, so out-of-range values survive until a
/// format quantizes them.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from the three color channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(unorm8(r), unorm8(g), unorm8(b), unorm8(a))
    }

    /// Quantizes to 8-bit channels, clamping to `[0, 1]` first.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r, 255),
            quantize(self.g, 255),
            quantize(self.b, 255),
            quantize(self.a, 255),
        ]
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.r.min(other.r),
            self.g.min(other.g),
            self.b.min(other.b),
            self.a.min(other.a),
        )
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.r.max(other.r),
            self.g.max(other.g),
            self.b.max(other.b),
            self.a.max(other.a),
        )
    }
}

/// Maps an 8-bit stored value to `[0, 1]`.
pub(crate) fn unorm8(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Quantizes a `[0, 1]` value to an integer domain with `max` levels,
/// rounding to nearest.
pub(crate) fn quantize(v: f64, max: u32) -> u8 {
    debug_assert!(max <= 255);
    (v.clamp(0.0, 1.0) * max as f64 + 0.5) as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}, {:.4})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Index<usize> for Color {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color channel index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color channel index out of range: {}", i),
        }
    }
}
