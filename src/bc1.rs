//! BC1: two 565 endpoints and sixteen 2-bit ramp indices in 8 bytes.
//!
//! The only format in the family with both directions implemented. The
//! encoder is a box fit: endpoints come from the diagonal of the color
//! set's bounding box, snapped to 565, and each pixel picks the ramp entry
//! with the least squared channel error.

use byteorder::{ByteOrder, LE};

use crate::color::quantize;
use crate::format::EncodeOptions;
use crate::{ramp, Color};

pub(crate) const BLOCK_SIZE: usize = 8;

/// One encoded BC1 block. Transient: produced by [`Bc1Block::fit`], written
/// out as 8 bytes, never persisted as an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bc1Block {
    pub color0: u16,
    pub color1: u16,
    /// 2-bit ramp indices, pixel 0 in the low bits.
    pub indices: u32,
}

impl Bc1Block {
    pub fn from_bytes(bytes: &[u8; 8]) -> Self {
        Self {
            color0: LE::read_u16(&bytes[0..]),
            color1: LE::read_u16(&bytes[2..]),
            indices: LE::read_u32(&bytes[4..]),
        }
    }

    pub fn to_bytes(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        LE::write_u16(&mut bytes[0..], self.color0);
        LE::write_u16(&mut bytes[2..], self.color1);
        LE::write_u32(&mut bytes[4..], self.indices);
        bytes
    }

    /// Quantizes up to 16 colors into one block.
    ///
    /// All quality levels currently route through the box fit; the level is
    /// a selection hook for more exhaustive strategies.
    pub fn fit(colors: &[Color; 16], options: &EncodeOptions) -> Self {
        fit_colors(colors, options)
    }

    pub fn decode(self) -> [Color; 16] {
        let ramp = ramp::bc1_ramp(self.color0, self.color1);
        let mut texels = [Color::TRANSPARENT_BLACK; 16];
        for (i, texel) in texels.iter_mut().enumerate() {
            *texel = ramp[(self.indices >> (2 * i)) as usize & 3];
        }
        texels
    }
}

pub(crate) fn decode_block(bytes: &[u8; 8]) -> [Color; 16] {
    Bc1Block::from_bytes(bytes).decode()
}

fn pack565(c: Color) -> u16 {
    let r = quantize(c.r, 31) as u16;
    let g = quantize(c.g, 63) as u16;
    let b = quantize(c.b, 31) as u16;
    r << 11 | g << 5 | b
}

fn fit_colors(colors: &[Color; 16], options: &EncodeOptions) -> Bc1Block {
    // Bounding box of the contributing colors. Alpha weighting drops
    // zero-weight pixels from the box entirely.
    let mut lo = Color::WHITE;
    let mut hi = Color::BLACK;
    let mut any = false;
    for c in colors {
        if options.weight_by_alpha && c.a <= 0.0 {
            continue;
        }
        lo = lo.min(*c);
        hi = hi.max(*c);
        any = true;
    }
    if !any {
        lo = Color::BLACK;
        hi = Color::BLACK;
    }

    // Endpoints on the box diagonal, snapped to 565. Ordering the larger
    // raw word first keeps the block in the 4-color ramp; a collapsed box
    // falls into the 3-color ramp, where index 0 reproduces the color
    // exactly.
    let mut color0 = pack565(hi);
    let mut color1 = pack565(lo);
    if color0 < color1 {
        std::mem::swap(&mut color0, &mut color1);
    }

    let ramp = ramp::bc1_ramp(color0, color1);
    let candidates = if color0 > color1 { 4 } else { 3 };

    let mut indices = 0u32;
    for (i, c) in colors.iter().enumerate() {
        let mut best = 0;
        let mut best_err = f64::INFINITY;
        for (k, entry) in ramp.iter().enumerate().take(candidates) {
            let err = (entry.r - c.r).powi(2) + (entry.g - c.g).powi(2) + (entry.b - c.b).powi(2);
            if err < best_err {
                best_err = err;
                best = k;
            }
        }
        indices |= (best as u32) << (2 * i);
    }

    Bc1Block {
        color0,
        color1,
        indices,
    }
}
