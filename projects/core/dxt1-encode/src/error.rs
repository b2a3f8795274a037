//! Error types for DXT1 encode operations.

use thiserror::Error;

/// Errors that can occur while encoding an image to DXT1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero or not a multiple of 4.
    #[error("Invalid image dimensions: {width}x{height}. Width and height must be positive multiples of 4.")]
    InvalidDimensions {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// A 4x4 block would be read from outside of the image.
    ///
    /// This indicates a caller/programming error; the image walk itself never produces it.
    #[error("Block at ({block_x}, {block_y}) extends past the {width}x{height} image.")]
    OutOfBounds {
        /// X coordinate of the block's top-left pixel
        block_x: u32,
        /// Y coordinate of the block's top-left pixel
        block_y: u32,
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// The pixel buffer is smaller than `width * height * 4`.
    #[error("Input buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    InputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer is too small to hold the compressed image.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}
