//! BC2: a BC1 color half preceded by sixteen literal 4-bit alpha values.

use byteorder::{ByteOrder, LE};

use crate::{bc1, Color};

pub(crate) const BLOCK_SIZE: usize = 16;

pub(crate) fn decode_block(bytes: &[u8; 16]) -> [Color; 16] {
    let alpha_bits = LE::read_u64(&bytes[0..8]);
    let mut texels = bc1::decode_block(bytes[8..16].try_into().unwrap());
    for (i, texel) in texels.iter_mut().enumerate() {
        // No ramp: each nibble is the alpha value itself.
        texel.a = ((alpha_bits >> (4 * i)) & 0xF) as f64 / 15.0;
    }
    texels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_alpha_nibbles() {
        let mut bytes = [0u8; 16];
        let mut alpha = 0u64;
        for i in 0..16u64 {
            alpha |= i << (4 * i);
        }
        LE::write_u64(&mut bytes[0..8], alpha);
        // Flat white color half, 4-color mode.
        LE::write_u16(&mut bytes[8..], 0xFFFF);
        LE::write_u16(&mut bytes[10..], 0x0000);

        let texels = decode_block(&bytes);
        for (i, texel) in texels.iter().enumerate() {
            assert_eq!(texel.a, i as f64 / 15.0);
            assert_eq!(texel.r, 1.0);
        }
    }
}
