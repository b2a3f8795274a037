//! # RGBA 4x4 Block
//!
//! This module provides the [`Rgba4x4Block`] structure: the 16 source pixels of one
//! DXT1 block, as read out of a larger RGBA8 image.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order, which is also the order their 2-bit
//! indices take in the packed index word:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! The struct is exactly 64 contiguous bytes (`r, g, b, a` per pixel), so SIMD kernels may load
//! it as four 16-byte rows.
//!
//! ## Usage
//!
//! ```
//! use dxt1_encode_common::color_8888::Color8888;
//! use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;
//!
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Rgba4x4Block::new(red_pixel);
//! assert_eq!(block.get_pixel(3, 3), red_pixel);
//! ```

use crate::color_8888::Color8888;

/// Number of pixels in one block.
pub const PIXELS_PER_BLOCK: usize = 16;

/// Size of one block's source pixels in bytes.
pub const BLOCK_SIZE_BYTES: usize = PIXELS_PER_BLOCK * 4;

/// The 16 RGBA8 pixels of one 4x4 block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct Rgba4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; PIXELS_PER_BLOCK],
}

impl Rgba4x4Block {
    /// Constructs a new block initialised with 16 copies of the provided pixel.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; PIXELS_PER_BLOCK],
        }
    }

    /// Constructs a block from 64 bytes of tightly packed RGBA8 pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_encode_common::color_8888::Color8888;
    /// use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;
    ///
    /// let mut bytes = [0u8; 64];
    /// bytes[4..8].copy_from_slice(&[1, 2, 3, 4]);
    /// let block = Rgba4x4Block::from_bytes(&bytes);
    /// assert_eq!(block.pixels[1], Color8888::new(1, 2, 3, 4));
    /// ```
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE_BYTES]) -> Self {
        let mut block = Self::default();
        for (pixel, chunk) in block.pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color8888::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        block
    }

    /// Gets the pixel at the specified coordinates (0-3, 0-3).
    ///
    /// # Panics
    ///
    /// If `x >= 4` or `y >= 4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel coordinate ({x}, {y}) outside of 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Sets the pixel at the specified coordinates (0-3, 0-3).
    ///
    /// # Panics
    ///
    /// If `x >= 4` or `y >= 4`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < 4 && y < 4, "pixel coordinate ({x}, {y}) outside of 4x4 block");
        self.pixels[y * 4 + x] = pixel;
    }

    /// Raw pointer to the first byte of the block; 64 readable bytes, 16-byte aligned.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.pixels.as_ptr() as *const u8
    }

}

impl Default for Rgba4x4Block {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_64_packed_bytes() {
        assert_eq!(core::mem::size_of::<Rgba4x4Block>(), BLOCK_SIZE_BYTES);
        assert_eq!(core::mem::align_of::<Rgba4x4Block>(), 16);
    }

    #[test]
    fn pixels_are_row_major() {
        let mut block = Rgba4x4Block::default();
        block.set_pixel(3, 0, Color8888::new(1, 0, 0, 0));
        block.set_pixel(0, 1, Color8888::new(2, 0, 0, 0));
        assert_eq!(block.pixels[3].r, 1);
        assert_eq!(block.pixels[4].r, 2);
        assert_eq!(block.get_pixel(0, 1).r, 2);
    }
}
