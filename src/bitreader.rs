use crate::mask;

/// Reads bit fields from a packed block, least-significant bit first.
///
/// Reading past the end of the buffer yields zero bits, matching the
/// behavior of fixed-layout blocks whose trailing fields may be implicit.
pub struct BitReaderLsb<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReaderLsb<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bit position of the next read.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn read_bool(&mut self) -> bool {
        self.read(1) == 1
    }

    pub fn read(&mut self, count: usize) -> u32 {
        assert!(count <= 32);
        let byte = self.pos / 8;
        let shift = self.pos % 8;
        self.pos += count;

        // 32 bits starting at any intra-byte offset span at most 5 bytes.
        let mut acc = 0u64;
        for (i, &b) in self.bytes.iter().skip(byte).take(5).enumerate() {
            acc |= (b as u64) << (8 * i);
        }
        ((acc >> shift) & mask!(count as u64)) as u32
    }

    /// Advances without returning the bits.
    pub fn skip(&mut self, count: usize) {
        self.pos += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lsb_first_across_byte_boundaries() {
        let bytes = [0b1010_0101, 0b1111_0000, 0xFF, 0x00, 0x39];
        let mut reader = BitReaderLsb::new(&bytes);
        assert_eq!(reader.read(3), 0b101);
        assert_eq!(reader.read(7), 0b00_10100);
        assert_eq!(reader.read(0), 0);
        assert_eq!(reader.read(14), 0b11_1111_1111_1100);
        assert_eq!(reader.pos(), 24);
        assert_eq!(reader.read(16), 0x3900);
    }

    #[test]
    fn reads_past_end_as_zero() {
        let mut reader = BitReaderLsb::new(&[0xFF]);
        assert_eq!(reader.read(8), 0xFF);
        assert_eq!(reader.read(32), 0);
    }

    #[test]
    fn full_width_read() {
        let mut reader = BitReaderLsb::new(&[0x78, 0x56, 0x34, 0x12, 0xFF]);
        reader.skip(4);
        assert_eq!(reader.read(32), 0xF123_4567);
    }
}
