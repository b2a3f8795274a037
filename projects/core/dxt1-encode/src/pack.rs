//! Serialization of one encoded block to its 8-byte wire form.
//!
//! ```text
//! +--------+--------+------------------+
//! | color0 | color1 |     indices      |
//! | u16 LE | u16 LE |      u32 LE      |
//! +--------+--------+------------------+
//! ```
//!
//! `color0` is always the quantized maximum corner of the inset bounding box and `color1` the
//! minimum corner. No swap is performed to force `color0 > color1`.

use crate::indices::BlockIndices;
use dxt1_encode_common::color_565::Color565;

/// Size of one compressed DXT1 block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// One encoded block, prior to serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CompressedBlock {
    /// Quantized maximum corner.
    pub color0: Color565,
    /// Quantized minimum corner.
    pub color1: Color565,
    /// Packed 2-bit palette indices.
    pub indices: BlockIndices,
}

impl CompressedBlock {
    /// Creates a new block from its parts.
    #[inline]
    pub const fn new(color0: Color565, color1: Color565, indices: BlockIndices) -> Self {
        Self {
            color0,
            color1,
            indices,
        }
    }

    /// Serializes the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_encode::indices::BlockIndices;
    /// use dxt1_encode::pack::CompressedBlock;
    /// use dxt1_encode::Color565;
    ///
    /// let block = CompressedBlock::new(
    ///     Color565::from_raw(0xF800),
    ///     Color565::from_raw(0x001F),
    ///     BlockIndices::from_packed(0x1234_5678),
    /// );
    /// assert_eq!(block.to_bytes(), [0x00, 0xF8, 0x1F, 0x00, 0x78, 0x56, 0x34, 0x12]);
    /// ```
    #[inline]
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let c0 = self.color0.raw_value().to_le_bytes();
        let c1 = self.color1.raw_value().to_le_bytes();
        let idx = self.indices.packed().to_le_bytes();
        [c0[0], c0[1], c1[0], c1[1], idx[0], idx[1], idx[2], idx[3]]
    }

    /// Reads a block back from its 8 serialized bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            color0: Color565::from_raw(u16::from_le_bytes([bytes[0], bytes[1]])),
            color1: Color565::from_raw(u16::from_le_bytes([bytes[2], bytes[3]])),
            indices: BlockIndices::from_packed(u32::from_le_bytes([
                bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
        }
    }
}

/// Writes `color0`, `color1` and the packed indices of one block into `output`.
///
/// # Panics
///
/// If `output` is shorter than [`BLOCK_SIZE`].
#[inline]
pub fn pack_block(color0: Color565, color1: Color565, indices: BlockIndices, output: &mut [u8]) {
    output[..BLOCK_SIZE].copy_from_slice(&CompressedBlock::new(color0, color1, indices).to_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian_in_color0_color1_indices_order() {
        let mut output = [0xAAu8; 10];
        pack_block(
            Color565::from_raw(0xABCD),
            Color565::from_raw(0x0123),
            BlockIndices::from_packed(0xDEAD_BEEF),
            &mut output,
        );
        assert_eq!(
            output,
            [0xCD, 0xAB, 0x23, 0x01, 0xEF, 0xBE, 0xAD, 0xDE, 0xAA, 0xAA]
        );
    }

    #[test]
    fn from_bytes_reads_back_fields() {
        let bytes = [0x00, 0xF8, 0x1F, 0x00, 0b0000_0100, 0, 0, 0b1100_0000];
        let block = CompressedBlock::from_bytes(&bytes);
        assert_eq!(block.color0.raw_value(), 0xF800);
        assert_eq!(block.color1.raw_value(), 0x001F);
        assert_eq!(block.indices.get(1), 1);
        assert_eq!(block.indices.get(15), 3);
        assert_eq!(block.to_bytes(), bytes);
    }
}
