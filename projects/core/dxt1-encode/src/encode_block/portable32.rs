//! Scalar reference encoder.

use super::{encode_row_with, BlockEncoder};
use crate::bounding_box::compute_min_max;
use crate::capability::Backend;
use crate::error::EncodeError;
use crate::image::RgbaImage;
use crate::indices::assign_indices;
use crate::pack::{pack_block, BLOCK_SIZE};
use crate::palette::Palette;
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;
use multiversion::multiversion;

/// Encodes a block using only scalar 32-bit arithmetic.
///
/// # Examples
///
/// ```
/// use dxt1_encode::encode_block::portable32::encode_block_portable32;
/// use dxt1_encode::{Color8888, Rgba4x4Block};
///
/// // A flat white block: both endpoints 0xFFFF, every pixel picks color0.
/// let block = Rgba4x4Block::new(Color8888::new(255, 255, 255, 255));
/// assert_eq!(
///     encode_block_portable32(&block),
///     [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]
/// );
/// ```
#[inline]
pub fn encode_block_portable32(block: &Rgba4x4Block) -> [u8; BLOCK_SIZE] {
    let endpoints = compute_min_max(block);
    let palette = Palette::from_endpoints(&endpoints);
    let indices = assign_indices(block, &palette);

    let mut output = [0u8; BLOCK_SIZE];
    pack_block(
        endpoints.max.to_color_565(),
        endpoints.min.to_color_565(),
        indices,
        &mut output,
    );
    output
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
fn encode_row_portable32<'a>(
    image: &RgbaImage<'a>,
    block_row: u32,
    output_row: &mut [u8],
) -> Result<(), EncodeError> {
    encode_row_with(image, block_row, output_row, encode_block_portable32)
}

/// [`BlockEncoder`] for [`Backend::Portable32`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable32Encoder;

impl BlockEncoder for Portable32Encoder {
    #[inline]
    fn backend(&self) -> Backend {
        Backend::Portable32
    }

    #[inline]
    fn encode_block(&self, block: &Rgba4x4Block) -> [u8; BLOCK_SIZE] {
        encode_block_portable32(block)
    }

    fn encode_row(
        &self,
        image: &RgbaImage<'_>,
        block_row: u32,
        output_row: &mut [u8],
    ) -> Result<(), EncodeError> {
        encode_row_portable32(image, block_row, output_row)
    }
}
