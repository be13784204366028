use crate::mask;

/// Writes bit fields into a packed block, least-significant bit first.
///
/// The buffer is expected to start zeroed; bits are ORed in. Writes past the
/// end of the buffer are dropped.
pub struct BitWriterLsb<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> BitWriterLsb<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write_u32(1, v as u32)
    }

    pub fn write_u8(&mut self, count: usize, v: u8) {
        assert!(count <= 8);
        self.write_u32(count, v as u32)
    }

    pub fn write_u32(&mut self, count: usize, v: u32) {
        assert!(count <= 32);
        let mut acc = ((v as u64) & mask!(count as u64)) << (self.pos % 8);
        let mut byte = self.pos / 8;
        let mut bits = count + self.pos % 8;
        self.pos += count;

        while bits > 0 {
            if let Some(b) = self.bytes.get_mut(byte) {
                *b |= acc as u8;
            }
            acc >>= 8;
            byte += 1;
            bits = bits.saturating_sub(8);
        }
    }
}
