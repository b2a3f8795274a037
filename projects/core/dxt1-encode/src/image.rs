//! Borrowed view over a caller-owned RGBA8 image.

use crate::error::EncodeError;
use crate::pack::BLOCK_SIZE;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A validated, read-only RGBA8 image: row-major, 4 bytes per pixel, no row padding.
///
/// Construction checks that both dimensions are positive multiples of 4 and that the buffer
/// holds at least `width * height * 4` bytes. Bytes past that are ignored.
#[derive(Debug, Clone, Copy)]
pub struct RgbaImage<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaImage<'a> {
    /// Wraps `pixels` as a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidDimensions`] if either dimension is zero or not a multiple of 4
    /// - [`EncodeError::InputBufferTooSmall`] if `pixels` is shorter than `width * height * 4`
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Result<Self, EncodeError> {
        let needed = required_input_size(width, height)?;
        if pixels.len() < needed {
            return Err(EncodeError::InputBufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying pixel bytes.
    #[inline]
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Distance in bytes between the starts of two consecutive pixel rows.
    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Number of blocks per block row.
    #[inline]
    pub fn blocks_wide(&self) -> usize {
        self.width as usize / 4
    }

    /// Number of block rows.
    #[inline]
    pub fn blocks_high(&self) -> usize {
        self.height as usize / 4
    }

    /// Total number of blocks.
    #[inline]
    pub fn block_count(&self) -> usize {
        // Cannot overflow; bounded by the pixel buffer's length.
        self.blocks_wide() * self.blocks_high()
    }

    /// Size in bytes of one row of compressed blocks.
    #[inline]
    pub fn compressed_row_size(&self) -> usize {
        self.blocks_wide() * BLOCK_SIZE
    }

    /// Size in bytes of the whole compressed image.
    #[inline]
    pub fn compressed_size(&self) -> usize {
        self.block_count() * BLOCK_SIZE
    }
}

/// Checks that both dimensions are positive multiples of 4.
#[inline]
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Number of pixel bytes a `width` x `height` image needs.
pub fn required_input_size(width: u32, height: u32) -> Result<usize, EncodeError> {
    validate_dimensions(width, height)?;
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(EncodeError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4)]
    #[case(4, 0)]
    #[case(3, 4)]
    #[case(4, 6)]
    #[case(5, 5)]
    #[case(1, 1)]
    fn rejects_dimensions_that_are_not_positive_multiples_of_4(
        #[case] width: u32,
        #[case] height: u32,
    ) {
        let pixels = [0u8; 256];
        assert_eq!(
            RgbaImage::new(&pixels, width, height).unwrap_err(),
            EncodeError::InvalidDimensions { width, height }
        );
    }

    #[test]
    fn rejects_short_buffer() {
        let pixels = [0u8; 8 * 4 * 4 - 1];
        assert_eq!(
            RgbaImage::new(&pixels, 8, 4).unwrap_err(),
            EncodeError::InputBufferTooSmall {
                needed: 128,
                actual: 127
            }
        );
    }

    #[test]
    fn reports_block_grid() {
        let pixels = [0u8; 12 * 8 * 4];
        let image = RgbaImage::new(&pixels, 12, 8).unwrap();
        assert_eq!(image.stride_bytes(), 48);
        assert_eq!(image.blocks_wide(), 3);
        assert_eq!(image.blocks_high(), 2);
        assert_eq!(image.block_count(), 6);
        assert_eq!(image.compressed_row_size(), 24);
        assert_eq!(image.compressed_size(), 48);
    }
}
