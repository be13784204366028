//! BC3: a BC4-style interpolated alpha half followed by a BC1 color half.

use crate::{bc1, bc4, Color};

pub(crate) const BLOCK_SIZE: usize = 16;

pub(crate) fn decode_block(bytes: &[u8; 16]) -> [Color; 16] {
    let alpha = bc4::decode_channel(bytes[0..8].try_into().unwrap(), false);
    let mut texels = bc1::decode_block(bytes[8..16].try_into().unwrap());
    for (texel, a) in texels.iter_mut().zip(alpha.iter()) {
        texel.a = *a;
    }
    texels
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LE};

    #[test]
    fn alpha_ramp_overrides_color_alpha() {
        let mut bytes = [0u8; 16];
        bytes[0] = 200;
        bytes[1] = 50;
        // All pixels pick alpha index 3.
        let mut bits = 0u64;
        for i in 0..16 {
            bits |= 3 << (3 * i);
        }
        LE::write_u48(&mut bytes[2..8], bits);
        // Flat green color half.
        LE::write_u16(&mut bytes[8..], 0x07E0);
        LE::write_u16(&mut bytes[10..], 0x0000);

        let texels = decode_block(&bytes);
        let expected_alpha = (4.0 * 200.0 + 3.0 * 50.0) / 7.0 / 255.0;
        for texel in texels {
            assert_eq!(texel.a, expected_alpha);
            assert_eq!(texel.g, 1.0);
        }
    }
}
