//! BC5: two independent BC4 channel blocks in 16 bytes, red then green.

use crate::{bc4, Color};

pub(crate) const BLOCK_SIZE: usize = 16;

pub(crate) fn decode_block(bytes: &[u8; 16], signed: bool) -> [Color; 16] {
    let red = bc4::decode_channel(bytes[0..8].try_into().unwrap(), signed);
    let green = bc4::decode_channel(bytes[8..16].try_into().unwrap(), signed);
    let mut texels = [Color::TRANSPARENT_BLACK; 16];
    for (i, texel) in texels.iter_mut().enumerate() {
        *texel = Color::new(red[i], green[i], 0.0, 1.0);
    }
    texels
}
