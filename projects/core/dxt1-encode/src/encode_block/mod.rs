//! Encoding of a single 4x4 block, and of one row of blocks, per backend.
//!
//! Every backend runs the same pipeline:
//!
//! 1. [`compute_min_max`]: inset RGB bounding box of the block.
//! 2. [`Palette::from_endpoints`]: quantize the corners to 565, interpolate `color2`/`color3`.
//! 3. [`assign_indices`]: pick the nearest palette entry per pixel via the comparison network.
//! 4. [`CompressedBlock::to_bytes`]: serialize `color0`, `color1`, indices.
//!
//! [`portable32`] spells these steps out in scalar code; it is the reference every other backend
//! must match byte for byte.
//!
//! [`compute_min_max`]: crate::bounding_box::compute_min_max
//! [`Palette::from_endpoints`]: crate::palette::Palette::from_endpoints
//! [`assign_indices`]: crate::indices::assign_indices
//! [`CompressedBlock::to_bytes`]: crate::pack::CompressedBlock::to_bytes

use crate::capability::{Backend, Capability};
use crate::error::EncodeError;
use crate::extract::extract_block;
use crate::image::RgbaImage;
use crate::pack::BLOCK_SIZE;
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

pub mod portable32;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod sse2;

/// A backend capable of turning 4x4 blocks into DXT1 blocks.
///
/// Implementations must be bit-exact with [`portable32::encode_block_portable32`].
pub trait BlockEncoder: Sync {
    /// The backend this encoder implements.
    fn backend(&self) -> Backend;

    /// Encodes a single block.
    fn encode_block(&self, block: &Rgba4x4Block) -> [u8; BLOCK_SIZE];

    /// Encodes block row `block_row` of `image` into `output_row`.
    ///
    /// `output_row` receives `image.blocks_wide()` consecutive 8-byte blocks.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::OutOfBounds`] if `block_row >= image.blocks_high()`.
    /// - [`EncodeError::OutputBufferTooSmall`] if `output_row` can't hold the row.
    fn encode_row(
        &self,
        image: &RgbaImage<'_>,
        block_row: u32,
        output_row: &mut [u8],
    ) -> Result<(), EncodeError> {
        encode_row_with(image, block_row, output_row, |block| self.encode_block(block))
    }
}

/// Encodes one 4x4 block with the backend selected by `capability`.
///
/// # Examples
///
/// ```
/// use dxt1_encode::{encode_block, Capability, Color8888, Rgba4x4Block};
///
/// let block = Rgba4x4Block::new(Color8888::new(0, 0, 0, 255));
/// assert_eq!(encode_block(&block, Capability::portable()), [0u8; 8]);
/// ```
#[inline]
pub fn encode_block(block: &Rgba4x4Block, capability: Capability) -> [u8; BLOCK_SIZE] {
    capability.encoder().encode_block(block)
}

/// Walks one row of blocks, extracting each block and writing `encode(block)` to its slot.
#[inline(always)]
pub(crate) fn encode_row_with(
    image: &RgbaImage<'_>,
    block_row: u32,
    output_row: &mut [u8],
    encode: impl Fn(&Rgba4x4Block) -> [u8; BLOCK_SIZE],
) -> Result<(), EncodeError> {
    let needed = image.compressed_row_size();
    if output_row.len() < needed {
        return Err(EncodeError::OutputBufferTooSmall {
            needed,
            actual: output_row.len(),
        });
    }

    if block_row as usize >= image.blocks_high() {
        return Err(EncodeError::OutOfBounds {
            block_x: 0,
            block_y: block_row.saturating_mul(4),
            width: image.width(),
            height: image.height(),
        });
    }

    let block_y = block_row * 4;
    for (block_col, output) in output_row[..needed]
        .chunks_exact_mut(BLOCK_SIZE)
        .enumerate()
    {
        let block = extract_block(image, block_col as u32 * 4, block_y)?;
        output.copy_from_slice(&encode(&block));
    }

    Ok(())
}
