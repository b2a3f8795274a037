//! One-call encode functions.

use crate::encode_builder::Dxt1EncodeBuilder;
use alloc::vec::Vec;
use dxt1_encode::{Capability, EncodeError};

/// Encodes an RGBA8 image to DXT1 using the fastest available backend.
///
/// `pixels` is row-major, 4 bytes per pixel, and must hold at least `width * height * 4` bytes.
/// The result holds `(width / 4) * (height / 4)` blocks of 8 bytes in row-major block order.
///
/// # Errors
///
/// - [`EncodeError::InvalidDimensions`] if a dimension is zero or not a multiple of 4
/// - [`EncodeError::InputBufferTooSmall`] if `pixels` is too short
///
/// # Examples
///
/// ```
/// use dxt1_encode_api::compress;
///
/// let pixels = vec![0u8; 4 * 4 * 4];
/// assert_eq!(compress(&pixels, 4, 4)?, vec![0u8; 8]);
/// # Ok::<(), dxt1_encode_api::EncodeError>(())
/// ```
pub fn compress(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    Dxt1EncodeBuilder::new().encode(pixels, width, height)
}

/// As [`compress`], running the backend selected by `capability`.
pub fn compress_with_capability(
    pixels: &[u8],
    width: u32,
    height: u32,
    capability: Capability,
) -> Result<Vec<u8>, EncodeError> {
    Dxt1EncodeBuilder::new()
        .capability(capability)
        .encode(pixels, width, height)
}

/// As [`compress`], writing into a caller-provided buffer of at least
/// [`compressed_size`](crate::compressed_size)`(width, height)` bytes.
///
/// # Errors
///
/// As [`compress`], plus [`EncodeError::OutputBufferTooSmall`].
pub fn compress_into(
    pixels: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
) -> Result<(), EncodeError> {
    Dxt1EncodeBuilder::new().encode_into(pixels, width, height, output)
}
