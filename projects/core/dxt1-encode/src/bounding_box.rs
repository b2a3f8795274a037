//! Per-channel colour bounding box of a block, shrunk by a fixed inset.
//!
//! Shrinking the box before quantizing the endpoints offsets some of the error the 565
//! quantization and the interpolated palette entries add. The inset is `extent >> 4` per channel.

use dxt1_encode_common::color_8888::Color8888;
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

/// Shift applied to the bounding box extent to obtain the inset of each side.
pub const INSET_SHIFT: u32 = 4;

/// Minimum and maximum corner of a block's RGB bounding box. Alpha is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEndpoints {
    /// Per-channel minimum corner; becomes `color1`.
    pub min: Color8888,
    /// Per-channel maximum corner; becomes `color0`.
    pub max: Color8888,
}

impl BlockEndpoints {
    /// Returns the per-channel extremes of the block's RGB values, without any inset.
    pub fn find_extremes(block: &Rgba4x4Block) -> Self {
        let first = block.pixels[0].without_alpha();
        let (min, max) = block.pixels[1..]
            .iter()
            .fold((first, first), |(min, max), pixel| {
                (min.min_rgb(pixel), max.max_rgb(pixel))
            });
        Self { min, max }
    }

    /// Moves both corners towards each other by `(max - min) >> INSET_SHIFT` in every channel.
    ///
    /// The minimum never ends up above the maximum.
    #[inline]
    pub fn inset(self) -> Self {
        let (min_r, max_r) = inset_channel(self.min.r, self.max.r);
        let (min_g, max_g) = inset_channel(self.min.g, self.max.g);
        let (min_b, max_b) = inset_channel(self.min.b, self.max.b);
        Self {
            min: Color8888::new(min_r, min_g, min_b, 0),
            max: Color8888::new(max_r, max_g, max_b, 0),
        }
    }
}

/// Computes the inset bounding box of a block, i.e. the pre-quantization endpoints.
///
/// # Examples
///
/// ```
/// use dxt1_encode::bounding_box::compute_min_max;
/// use dxt1_encode::{Color8888, Rgba4x4Block};
///
/// let mut block = Rgba4x4Block::new(Color8888::new(0, 0, 0, 255));
/// block.pixels[5] = Color8888::new(160, 32, 255, 255);
///
/// let endpoints = compute_min_max(&block);
/// // extents 160, 32, 255 -> insets 10, 2, 15
/// assert_eq!(endpoints.min, Color8888::new(10, 2, 15, 0));
/// assert_eq!(endpoints.max, Color8888::new(150, 30, 240, 0));
/// ```
#[inline]
pub fn compute_min_max(block: &Rgba4x4Block) -> BlockEndpoints {
    BlockEndpoints::find_extremes(block).inset()
}

#[inline(always)]
fn inset_channel(min: u8, max: u8) -> (u8, u8) {
    let delta = max.saturating_sub(min) >> INSET_SHIFT;
    let max = max.saturating_sub(delta);
    let min = min.saturating_add(delta).min(max);
    (min, max)
}
