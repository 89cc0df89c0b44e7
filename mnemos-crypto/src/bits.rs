use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-width, most-significant-bit-first bit vector.
///
/// The bit length is tracked explicitly, so leading zero bits and bytes are
/// never lost when converting to and from bytes. Wiped on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct BitVector {
    bytes: Vec<u8>,
    len: usize,
}

impl BitVector {
    /// Create an empty vector with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Create a vector holding every bit of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// # Panics
    /// Panics if `width` exceeds 32.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        assert!(width <= 32, "cannot push more than 32 bits at once");
        for shift in (0..width).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// The bit at `index`, counting from the most significant end.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range {}", index, self.len);
        (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Read `width` bits starting at `offset` as a big-endian integer.
    ///
    /// # Panics
    /// Panics if `width` exceeds 32 or the range runs past the end.
    pub fn read(&self, offset: usize, width: usize) -> u32 {
        assert!(width <= 32, "cannot read more than 32 bits at once");
        (offset..offset + width).fold(0, |acc, i| (acc << 1) | u32::from(self.bit(i)))
    }

    /// Consecutive `width`-bit groups from the most significant end.
    ///
    /// Trailing bits that do not fill a whole group are not yielded.
    pub fn groups(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        (0..self.len / width).map(move |i| self.read(i * width, width))
    }

    /// The first `bits` bits as bytes.
    ///
    /// # Panics
    /// Panics if `bits` is not a multiple of 8 or exceeds `self.len()`.
    pub fn leading_bytes(&self, bits: usize) -> Vec<u8> {
        assert!(bits % 8 == 0, "leading_bytes needs a whole number of bytes");
        assert!(bits <= self.len, "bit count {} out of range {}", bits, self.len);
        self.bytes[..bits / 8].to_vec()
    }

    /// All bits as a big-endian number in the smallest whole number of bytes,
    /// padded with zero bits at the most significant end.
    pub fn to_right_aligned_bytes(&self) -> Vec<u8> {
        let size = self.len.div_ceil(8);
        let mut aligned = BitVector::with_capacity(size * 8);
        for _ in 0..size * 8 - self.len {
            aligned.push_bit(false);
        }
        for i in 0..self.len {
            aligned.push_bit(self.bit(i));
        }
        std::mem::take(&mut aligned.bytes)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut bits = BitVector::default();
        bits.push_bits(0b101, 3);
        bits.push_bits(0x7ff, 11);
        assert_eq!(bits.len(), 14);
        assert_eq!(bits.read(0, 3), 0b101);
        assert_eq!(bits.read(3, 11), 0x7ff);
    }

    #[test]
    fn test_from_bytes_msb_first() {
        let bits = BitVector::from_bytes(&[0x80, 0x01]);
        assert_eq!(bits.len(), 16);
        assert!(bits.bit(0));
        assert!(!bits.bit(1));
        assert!(bits.bit(15));
    }

    #[test]
    fn test_groups_of_eleven() {
        // 0xffe0 = 11 one bits followed by 5 zero bits.
        let bits = BitVector::from_bytes(&[0xff, 0xe0, 0x00]);
        let groups: Vec<u32> = bits.groups(11).collect();
        assert_eq!(groups, vec![0x7ff, 0x000]);
    }

    #[test]
    fn test_leading_zero_bytes_preserved() {
        let mut bits = BitVector::from_bytes(&[0u8; 16]);
        bits.push_bits(0x3, 4);
        assert_eq!(bits.len(), 132);
        assert_eq!(bits.leading_bytes(128), vec![0u8; 16]);
    }

    #[test]
    fn test_right_aligned_bytes() {
        let mut bits = BitVector::default();
        bits.push_bits(0b1, 1);
        bits.push_bits(0xff, 8);
        // 9 bits -> 2 bytes with 7 leading zero bits.
        assert_eq!(bits.to_right_aligned_bytes(), vec![0x01, 0xff]);

        let mut bits = BitVector::from_bytes(&[0u8; 16]);
        bits.push_bits(0x3, 4);
        let aligned = bits.to_right_aligned_bytes();
        assert_eq!(aligned.len(), 17);
        assert_eq!(aligned[16], 0x03);
        assert!(aligned[..16].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_right_aligned_whole_bytes_unchanged() {
        let bits = BitVector::from_bytes(&[0x12, 0x34]);
        assert_eq!(bits.to_right_aligned_bytes(), vec![0x12, 0x34]);
    }

    #[test]
    #[should_panic]
    fn test_bit_out_of_range_panics() {
        let bits = BitVector::from_bytes(&[0xff]);
        bits.bit(8);
    }

    #[test]
    fn test_debug_hides_contents() {
        let bits = BitVector::from_bytes(&[0xde, 0xad]);
        assert_eq!(format!("{:?}", bits), "BitVector { len: 16, .. }");
    }
}
