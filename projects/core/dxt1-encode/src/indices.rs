//! Per-pixel palette index selection.
//!
//! Each pixel's distance to the four palette colours is the sum of absolute RGB differences.
//! The index is then derived from five pairwise comparisons instead of an argmin, which keeps
//! it branch free and lets SIMD kernels produce the exact same result (ties included).

use crate::palette::Palette;
use dxt1_encode_common::rgba_4x4_block::{Rgba4x4Block, PIXELS_PER_BLOCK};

/// The 16 2-bit palette indices of a block, packed as pixel `i` in bits `2i..2i+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BlockIndices(u32);

impl BlockIndices {
    /// Wraps an already packed index word.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// Packs 16 raster-order indices. Only the low 2 bits of each value are kept.
    pub fn from_indices(indices: &[u8; PIXELS_PER_BLOCK]) -> Self {
        Self(
            indices
                .iter()
                .enumerate()
                .fold(0, |packed, (i, index)| {
                    packed | ((*index as u32 & 0b11) << (i * 2))
                }),
        )
    }

    /// The packed index word.
    #[inline]
    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// Index of pixel `i` (raster order).
    ///
    /// # Panics
    ///
    /// If `i >= 16`.
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        assert!(i < PIXELS_PER_BLOCK, "pixel index {i} outside of block");
        ((self.0 >> (i * 2)) & 0b11) as u8
    }

    /// All 16 indices in raster order.
    pub fn to_indices(&self) -> [u8; PIXELS_PER_BLOCK] {
        core::array::from_fn(|i| self.get(i))
    }
}

/// Selects a palette index from the pixel's distances to `color0..color3`.
///
/// ```text
/// b0 = d0 > d3    x0 = b1 & b2
/// b1 = d1 > d2    x1 = b0 & b3
/// b2 = d0 > d2    x2 = b0 & b4
/// b3 = d1 > d3
/// b4 = d2 > d3    index = x2 | (x0 | x1) << 1
/// ```
///
/// All comparisons are strict, so equal distances keep the lower-numbered colour;
/// in particular a pixel equidistant from `color0` and `color1` gets index 0.
#[inline(always)]
pub const fn select_index(d0: u32, d1: u32, d2: u32, d3: u32) -> u32 {
    let b0 = (d0 > d3) as u32;
    let b1 = (d1 > d2) as u32;
    let b2 = (d0 > d2) as u32;
    let b3 = (d1 > d3) as u32;
    let b4 = (d2 > d3) as u32;

    let x0 = b1 & b2;
    let x1 = b0 & b3;
    let x2 = b0 & b4;

    x2 | ((x0 | x1) << 1)
}

/// Classifies every pixel of `block` against `palette`.
#[inline]
pub fn assign_indices(block: &Rgba4x4Block, palette: &Palette) -> BlockIndices {
    let [c0, c1, c2, c3] = &palette.colors;
    let packed = block
        .pixels
        .iter()
        .enumerate()
        .fold(0u32, |packed, (i, pixel)| {
            let index = select_index(
                c0.sad_rgb(pixel),
                c1.sad_rgb(pixel),
                c2.sad_rgb(pixel),
                c3.sad_rgb(pixel),
            );
            packed | (index << (i * 2))
        });
    BlockIndices(packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0, 9, 5, 7], 0)] // color0 closest
    #[case([9, 0, 7, 5], 1)] // color1 closest
    #[case([5, 9, 0, 7], 2)] // color2 closest
    #[case([7, 5, 9, 0], 3)] // color3 closest
    #[case([3, 3, 6, 6], 0)] // color0/color1 tie
    #[case([4, 4, 4, 4], 0)] // all equal
    #[case([6, 2, 2, 6], 0)] // color1/color2 tie with color0 as far as color3 falls back to 0
    fn selects_expected_index(#[case] d: [u32; 4], #[case] expected: u32) {
        assert_eq!(select_index(d[0], d[1], d[2], d[3]), expected);
    }

    #[test]
    fn matches_argmin_when_distances_are_distinct_and_ordered_along_palette_line() {
        // Pixels on the segment color0 -> color2 -> color3 -> color1 get the nearest colour.
        let palette = Palette {
            colors: [
                Color8888::new(240, 0, 0, 0),
                Color8888::new(0, 0, 0, 0),
                Color8888::new(160, 0, 0, 0),
                Color8888::new(80, 0, 0, 0),
            ],
        };
        for (red, expected) in [(250u8, 0u8), (5, 1), (150, 2), (90, 3), (215, 0), (30, 1)] {
            let block = Rgba4x4Block::new(Color8888::new(red, 0, 0, 255));
            let indices = assign_indices(&block, &palette);
            assert!(
                indices.to_indices().iter().all(|i| *i == expected),
                "red {red} expected index {expected}, got {:?}",
                indices.to_indices()
            );
        }
    }

    #[test]
    fn pixel_equidistant_from_color0_and_color1_selects_color0() {
        let palette = Palette {
            colors: [
                Color8888::new(200, 0, 0, 0),
                Color8888::new(0, 0, 200, 0),
                Color8888::new(133, 0, 66, 0),
                Color8888::new(66, 0, 133, 0),
            ],
        };
        let pixel = Color8888::new(200, 200, 200, 255);
        // d0 = 0 + 200 + 200 = 400, d1 = 200 + 200 + 0 = 400,
        // d2 = 67 + 200 + 134 = 401, d3 = 134 + 200 + 67 = 401
        let distances: Vec<u32> = palette.colors.iter().map(|c| c.sad_rgb(&pixel)).collect();
        assert_eq!(distances, vec![400, 400, 401, 401]);

        let indices = assign_indices(&Rgba4x4Block::new(pixel), &palette);
        assert_eq!(indices.packed(), 0);
    }

    #[test]
    fn index_of_pixel_i_occupies_bits_2i() {
        let indices = BlockIndices::from_indices(&[0, 1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(indices.packed(), 0b11_100100 | (0b11 << 30));
        assert_eq!(indices.get(1), 1);
        assert_eq!(indices.get(15), 3);
    }
}
