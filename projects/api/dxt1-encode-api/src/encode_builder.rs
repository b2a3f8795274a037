//! Builder for configuring and running DXT1 encodes.

use crate::capability::detect_capability;
use alloc::vec::Vec;
use dxt1_encode::{Capability, EncodeError, RgbaImage};
use tracing::{debug, warn};

/// DXT1 encode configuration builder.
///
/// Defaults to the fastest backend the CPU supports and, with the `multithreaded` feature,
/// encoding rows of blocks in parallel. Output does not depend on either setting.
///
/// # Examples
///
/// ```
/// use dxt1_encode_api::{Capability, Dxt1EncodeBuilder};
///
/// let pixels = vec![255u8; 16 * 16 * 4];
/// let encoded = Dxt1EncodeBuilder::new()
///     .capability(Capability::portable())
///     .encode(&pixels, 16, 16)?;
/// assert_eq!(encoded.len(), 128);
/// # Ok::<(), dxt1_encode_api::EncodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dxt1EncodeBuilder {
    capability: Option<Capability>,
    #[cfg(feature = "multithreaded")]
    single_threaded: bool,
}

impl Dxt1EncodeBuilder {
    /// Create a new encode builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific backend instead of detecting one.
    ///
    /// Mostly useful for testing and benchmarking; every backend produces the same bytes.
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Set whether rows of blocks are encoded in parallel. Enabled by default.
    #[cfg(feature = "multithreaded")]
    pub fn multithreaded(mut self, multithreaded: bool) -> Self {
        self.single_threaded = !multithreaded;
        self
    }

    /// Encode `pixels` (RGBA8, row-major) into a newly allocated buffer of
    /// [`compressed_size`](crate::compressed_size)`(width, height)` bytes.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidDimensions`] if a dimension is zero or not a multiple of 4
    /// - [`EncodeError::InputBufferTooSmall`] if `pixels` is shorter than `width * height * 4`
    pub fn encode(&self, pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
        let image = self.validate(pixels, width, height)?;
        let mut output = alloc::vec![0u8; image.compressed_size()];
        self.encode_image(&image, &mut output)?;
        Ok(output)
    }

    /// Encode `pixels` (RGBA8, row-major) into `output`.
    ///
    /// Only the first [`compressed_size`](crate::compressed_size)`(width, height)` bytes of
    /// `output` are written.
    ///
    /// # Errors
    ///
    /// As [`encode`](Self::encode), plus [`EncodeError::OutputBufferTooSmall`].
    pub fn encode_into(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        output: &mut [u8],
    ) -> Result<(), EncodeError> {
        let image = self.validate(pixels, width, height)?;
        let needed = image.compressed_size();
        if output.len() < needed {
            let error = EncodeError::OutputBufferTooSmall {
                needed,
                actual: output.len(),
            };
            warn!(%error, width, height, "Rejected DXT1 encode request");
            return Err(error);
        }

        self.encode_image(&image, &mut output[..needed])
    }

    fn validate<'a>(
        &self,
        pixels: &'a [u8],
        width: u32,
        height: u32,
    ) -> Result<RgbaImage<'a>, EncodeError> {
        RgbaImage::new(pixels, width, height).inspect_err(|error| {
            warn!(%error, width, height, "Rejected DXT1 encode request");
        })
    }

    fn encode_image(&self, image: &RgbaImage<'_>, output: &mut [u8]) -> Result<(), EncodeError> {
        let capability = self.capability.unwrap_or_else(detect_capability);
        let encoder = capability.encoder();
        let row_size = image.compressed_row_size();
        debug!(
            width = image.width(),
            height = image.height(),
            backend = capability.backend().name(),
            multithreaded = self.is_multithreaded(),
            "Encoding DXT1 image"
        );

        #[cfg(feature = "multithreaded")]
        if self.is_multithreaded() {
            use rayon::prelude::*;

            // Every row owns a disjoint slice of the output; no ordering between rows is needed.
            return output
                .par_chunks_mut(row_size)
                .enumerate()
                .try_for_each(|(block_row, output_row)| {
                    encoder.encode_row(image, block_row as u32, output_row)
                });
        }

        for (block_row, output_row) in output.chunks_exact_mut(row_size).enumerate() {
            encoder.encode_row(image, block_row as u32, output_row)?;
        }
        Ok(())
    }

    #[cfg(feature = "multithreaded")]
    fn is_multithreaded(&self) -> bool {
        !self.single_threaded
    }

    #[cfg(not(feature = "multithreaded"))]
    fn is_multithreaded(&self) -> bool {
        false
    }
}
