//! Uncompressed per-pixel formats: one, two, or four 8-bit unorm channels.

use crate::color::{quantize, unorm8};
use crate::Color;

pub(crate) fn decode_r8(bytes: &[u8]) -> Color {
    Color::new(unorm8(bytes[0]), 0.0, 0.0, 1.0)
}

pub(crate) fn decode_rg8(bytes: &[u8]) -> Color {
    Color::new(unorm8(bytes[0]), unorm8(bytes[1]), 0.0, 1.0)
}

pub(crate) fn decode_rgba8(bytes: &[u8]) -> Color {
    Color::new(
        unorm8(bytes[0]),
        unorm8(bytes[1]),
        unorm8(bytes[2]),
        unorm8(bytes[3]),
    )
}

pub(crate) fn encode_r8(texel: Color, bytes: &mut [u8]) {
    bytes[0] = quantize(texel.r, 255);
}

pub(crate) fn encode_rg8(texel: Color, bytes: &mut [u8]) {
    bytes[0] = quantize(texel.r, 255);
    bytes[1] = quantize(texel.g, 255);
}

pub(crate) fn encode_rgba8(texel: Color, bytes: &mut [u8]) {
    bytes[0] = quantize(texel.r, 255);
    bytes[1] = quantize(texel.g, 255);
    bytes[2] = quantize(texel.b, 255);
    bytes[3] = quantize(texel.a, 255);
}
