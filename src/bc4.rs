//! BC4: one channel, two 8-bit endpoints and sixteen 3-bit ramp indices in
//! 8 bytes. The signed variant stores the endpoints as `i8`.

use byteorder::{ByteOrder, LE};

use crate::{ramp, Color};

pub(crate) const BLOCK_SIZE: usize = 8;

/// Expands one 8-byte channel block into its 16 values.
pub(crate) fn decode_channel(bytes: &[u8; 8], signed: bool) -> [f64; 16] {
    let ramp = if signed {
        ramp::snorm_ramp8(bytes[0] as i8, bytes[1] as i8)
    } else {
        ramp::unorm_ramp8(bytes[0], bytes[1])
    };
    let bits = LE::read_u48(&bytes[2..]);
    let mut values = [0.0; 16];
    for (i, value) in values.iter_mut().enumerate() {
        *value = ramp[(bits >> (3 * i)) as usize & 7];
    }
    values
}

pub(crate) fn decode_block(bytes: &[u8; 8], signed: bool) -> [Color; 16] {
    let values = decode_channel(bytes, signed);
    let mut texels = [Color::TRANSPARENT_BLACK; 16];
    for (texel, v) in texels.iter_mut().zip(values.iter()) {
        *texel = Color::new(*v, 0.0, 0.0, 1.0);
    }
    texels
}
