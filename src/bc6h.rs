//! BC6H: 16-byte HDR blocks in 14 layout modes.
//!
//! The block geometry is declared so that sizing and region addressing work,
//! but no mode layout is implemented; decode reports the format as
//! unsupported instead of guessing at the bit fields.

use crate::{Color, Error, Result};

pub(crate) const BLOCK_SIZE: usize = 16;

pub(crate) fn decode_block(_bytes: &[u8; 16]) -> Result<[Color; 16]> {
    Err(Error::Unsupported("BC6H decoding"))
}
