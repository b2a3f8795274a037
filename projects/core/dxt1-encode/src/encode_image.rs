//! Walks the block grid of an image and writes every encoded block at its fixed offset.
//!
//! Block `(bx, by)` (in block units) always lands at byte offset `(by * blocks_wide + bx) * 8`,
//! so rows of blocks can be produced independently and in any order.

use crate::capability::Capability;
use crate::error::EncodeError;
use crate::image::{RgbaImage, BYTES_PER_PIXEL};
use crate::pack::BLOCK_SIZE;

/// Size in bytes of the DXT1 encoding of a `width` x `height` image.
///
/// Dimensions are expected to be multiples of 4; see [`crate::image::validate_dimensions`].
///
/// # Examples
///
/// ```
/// use dxt1_encode::compressed_size;
///
/// assert_eq!(compressed_size(8, 8), 32);
/// assert_eq!(compressed_size(1024, 512), 262_144);
/// ```
#[inline]
pub const fn compressed_size(width: u32, height: u32) -> usize {
    (width as usize / 4) * (height as usize / 4) * BLOCK_SIZE
}

/// Encodes a whole image into `output`.
///
/// # Arguments
///
/// - `pixels`: RGBA8, row-major, at least `width * height * 4` bytes
/// - `output`: at least [`compressed_size`]`(width, height)` bytes; bytes past that are untouched
/// - `capability`: backend to run; output is identical for every backend
///
/// # Errors
///
/// - [`EncodeError::InvalidDimensions`] if a dimension is zero or not a multiple of 4
/// - [`EncodeError::InputBufferTooSmall`] if `pixels` is too short
/// - [`EncodeError::OutputBufferTooSmall`] if `output` is too short
///
/// # Examples
///
/// ```
/// use dxt1_encode::{compressed_size, encode_image_safe, Capability};
///
/// let pixels = vec![0u8; 8 * 8 * 4];
/// let mut output = vec![0xFFu8; compressed_size(8, 8)];
/// encode_image_safe(&pixels, 8, 8, &mut output, Capability::portable())?;
/// assert!(output.iter().all(|&b| b == 0));
/// # Ok::<(), dxt1_encode::EncodeError>(())
/// ```
pub fn encode_image_safe(
    pixels: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    capability: Capability,
) -> Result<(), EncodeError> {
    let image = RgbaImage::new(pixels, width, height)?;
    let needed = image.compressed_size();
    if output.len() < needed {
        return Err(EncodeError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let encoder = capability.encoder();
    for (block_row, output_row) in output[..needed]
        .chunks_exact_mut(image.compressed_row_size())
        .enumerate()
    {
        encoder.encode_row(&image, block_row as u32, output_row)?;
    }

    Ok(())
}

/// Encodes a single row of blocks; the building block for parallel encoders.
///
/// `output_row` receives the `width / 4` blocks of block row `block_row`, i.e. the bytes at
/// `block_row * (width / 4) * 8` in the full output.
///
/// # Errors
///
/// As [`encode_image_safe`], plus [`EncodeError::OutOfBounds`] if `block_row >= height / 4`.
pub fn encode_block_row_safe(
    pixels: &[u8],
    width: u32,
    height: u32,
    block_row: u32,
    output_row: &mut [u8],
    capability: Capability,
) -> Result<(), EncodeError> {
    let image = RgbaImage::new(pixels, width, height)?;
    capability
        .encoder()
        .encode_row(&image, block_row, output_row)
}

/// Encodes a whole image from raw pointers.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `width * height * 4` bytes
/// - `output_ptr` must be valid for writes of [`compressed_size`]`(width, height)` bytes
/// - the two regions must not overlap
/// - `capability` must have been constructed for this CPU (see [`Capability::with_backend`])
///
/// # Errors
///
/// [`EncodeError::InvalidDimensions`] if a dimension is zero or not a multiple of 4.
pub unsafe fn encode_image(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    width: u32,
    height: u32,
    capability: Capability,
) -> Result<(), EncodeError> {
    let input_len = crate::image::required_input_size(width, height)?;
    debug_assert_eq!(input_len % BYTES_PER_PIXEL, 0);

    let pixels = core::slice::from_raw_parts(input_ptr, input_len);
    let output = core::slice::from_raw_parts_mut(output_ptr, compressed_size(width, height));
    encode_image_safe(pixels, width, height, output, capability)
}
