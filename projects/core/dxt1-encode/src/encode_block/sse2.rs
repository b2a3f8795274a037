//! SSE2 block encoder.
//!
//! Processes one block per call. A whole 4-pixel row fits into a register, so the bounding box,
//! palette and distances are computed for four pixels at a time, and the comparison network runs
//! on eight 16-bit distances at a time.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{encode_row_with, BlockEncoder};
use crate::capability::Backend;
use crate::error::EncodeError;
use crate::image::RgbaImage;
use crate::indices::BlockIndices;
use crate::pack::{CompressedBlock, BLOCK_SIZE};
use crate::palette::RECIPROCAL_3;
use dxt1_encode_common::color_565::{Color565, MASK_5BIT, MASK_6BIT};
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

/// Encodes a block using SSE2.
///
/// # Safety
///
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn encode_block_sse2(block: &Rgba4x4Block) -> [u8; BLOCK_SIZE] {
    let rows = block.as_ptr() as *const __m128i;
    let rgb_mask = _mm_set1_epi32(0x00FF_FFFF);
    let row0 = _mm_and_si128(_mm_loadu_si128(rows), rgb_mask);
    let row1 = _mm_and_si128(_mm_loadu_si128(rows.add(1)), rgb_mask);
    let row2 = _mm_and_si128(_mm_loadu_si128(rows.add(2)), rgb_mask);
    let row3 = _mm_and_si128(_mm_loadu_si128(rows.add(3)), rgb_mask);

    // Bounding box; every 32-bit lane ends up holding the same min/max pixel.
    let mut min = _mm_min_epu8(_mm_min_epu8(row0, row1), _mm_min_epu8(row2, row3));
    let mut max = _mm_max_epu8(_mm_max_epu8(row0, row1), _mm_max_epu8(row2, row3));
    min = _mm_min_epu8(min, _mm_shuffle_epi32::<0b01_00_11_10>(min));
    max = _mm_max_epu8(max, _mm_shuffle_epi32::<0b01_00_11_10>(max));
    min = _mm_min_epu8(min, _mm_shuffle_epi32::<0b10_11_00_01>(min));
    max = _mm_max_epu8(max, _mm_shuffle_epi32::<0b10_11_00_01>(max));

    // Inset, in 16-bit lanes: [r, g, b, 0, r, g, b, 0]
    let zero = _mm_setzero_si128();
    let mut min = _mm_unpacklo_epi8(min, zero);
    let mut max = _mm_unpacklo_epi8(max, zero);
    let inset = _mm_srli_epi16::<4>(_mm_sub_epi16(max, min));
    max = _mm_sub_epi16(max, inset);
    min = _mm_min_epi16(_mm_add_epi16(min, inset), max);

    let color0 = Color565::from_rgb(
        _mm_extract_epi16::<0>(max) as u8,
        _mm_extract_epi16::<1>(max) as u8,
        _mm_extract_epi16::<2>(max) as u8,
    );
    let color1 = Color565::from_rgb(
        _mm_extract_epi16::<0>(min) as u8,
        _mm_extract_epi16::<1>(min) as u8,
        _mm_extract_epi16::<2>(min) as u8,
    );

    // Quantize to 565 and expand back: (v & mask) | (v >> 5) for red/blue, (v >> 6) for green.
    let keep_mask = _mm_setr_epi16(
        MASK_5BIT as i16,
        MASK_6BIT as i16,
        MASK_5BIT as i16,
        0,
        MASK_5BIT as i16,
        MASK_6BIT as i16,
        MASK_5BIT as i16,
        0,
    );
    let replicate = _mm_setr_epi16(1 << 11, 1 << 10, 1 << 11, 0, 1 << 11, 1 << 10, 1 << 11, 0);
    let c0 = _mm_or_si128(
        _mm_and_si128(max, keep_mask),
        _mm_mulhi_epu16(max, replicate),
    );
    let c1 = _mm_or_si128(
        _mm_and_si128(min, keep_mask),
        _mm_mulhi_epu16(min, replicate),
    );

    // (2a + b) <= 765 and 21846 both fit in i16, so the signed high multiply is exact.
    let reciprocal = _mm_set1_epi16(RECIPROCAL_3 as i16);
    let c2 = _mm_mulhi_epi16(_mm_add_epi16(_mm_add_epi16(c0, c0), c1), reciprocal);
    let c3 = _mm_mulhi_epi16(_mm_add_epi16(_mm_add_epi16(c1, c1), c0), reciprocal);

    // Palette entries broadcast to all four pixels.
    let palette = [
        _mm_packus_epi16(c0, c0),
        _mm_packus_epi16(c1, c1),
        _mm_packus_epi16(c2, c2),
        _mm_packus_epi16(c3, c3),
    ];

    // Distances to each entry, as i16 for pixels 0..8 and 8..16.
    let mut lo = [zero; 4];
    let mut hi = [zero; 4];
    for (colour, (lo, hi)) in palette.iter().zip(lo.iter_mut().zip(hi.iter_mut())) {
        *lo = _mm_packs_epi32(sad_rgb(row0, *colour), sad_rgb(row1, *colour));
        *hi = _mm_packs_epi32(sad_rgb(row2, *colour), sad_rgb(row3, *colour));
    }

    let indices = _mm_packus_epi16(select_indices(&lo), select_indices(&hi));
    let indices = BlockIndices::from_packed(pack_index_bytes(indices));

    CompressedBlock::new(color0, color1, indices).to_bytes()
}

/// Per-pixel `|r - r'| + |g - g'| + |b - b'|` in 32-bit lanes. Alpha must be zero in both inputs.
#[inline(always)]
unsafe fn sad_rgb(pixels: __m128i, colour: __m128i) -> __m128i {
    let diff = _mm_or_si128(_mm_subs_epu8(pixels, colour), _mm_subs_epu8(colour, pixels));
    let byte = _mm_set1_epi32(0xFF);
    let r = _mm_and_si128(diff, byte);
    let g = _mm_and_si128(_mm_srli_epi32::<8>(diff), byte);
    let b = _mm_srli_epi32::<16>(diff);
    _mm_add_epi32(_mm_add_epi32(r, g), b)
}

/// The index comparison network on eight pixels' distances; returns one index per 16-bit lane.
#[inline(always)]
unsafe fn select_indices(d: &[__m128i; 4]) -> __m128i {
    let b0 = _mm_cmpgt_epi16(d[0], d[3]);
    let b1 = _mm_cmpgt_epi16(d[1], d[2]);
    let b2 = _mm_cmpgt_epi16(d[0], d[2]);
    let b3 = _mm_cmpgt_epi16(d[1], d[3]);
    let b4 = _mm_cmpgt_epi16(d[2], d[3]);

    let x0 = _mm_and_si128(b1, b2);
    let x1 = _mm_and_si128(b0, b3);
    let x2 = _mm_and_si128(b0, b4);

    _mm_or_si128(
        _mm_and_si128(x2, _mm_set1_epi16(1)),
        _mm_and_si128(_mm_or_si128(x0, x1), _mm_set1_epi16(2)),
    )
}

/// Packs 16 bytes holding 2-bit indices into a `u32`, byte `i` landing at bits `2i..2i+2`.
#[inline(always)]
unsafe fn pack_index_bytes(bytes: __m128i) -> u32 {
    let mut v = bytes;
    v = _mm_and_si128(_mm_or_si128(v, _mm_srli_epi16::<6>(v)), _mm_set1_epi16(0x000F));
    v = _mm_and_si128(_mm_or_si128(v, _mm_srli_epi32::<12>(v)), _mm_set1_epi32(0x00FF));
    v = _mm_and_si128(
        _mm_or_si128(v, _mm_srli_epi64::<24>(v)),
        _mm_set_epi32(0, 0xFFFF, 0, 0xFFFF),
    );

    let low = _mm_cvtsi128_si32(v) as u32;
    let high = _mm_cvtsi128_si32(_mm_shuffle_epi32::<0b00_00_00_10>(v)) as u32;
    low | (high << 16)
}

/// [`BlockEncoder`] for [`Backend::Sse2`].
///
/// Only obtainable through [`Capability::encoder`](crate::Capability::encoder), whose
/// construction is where SSE2 support is vouched for.
#[derive(Debug)]
pub struct Sse2Encoder {
    _private: (),
}

impl Sse2Encoder {
    pub(crate) const fn new_unchecked() -> Self {
        Self { _private: () }
    }
}

impl BlockEncoder for Sse2Encoder {
    #[inline]
    fn backend(&self) -> Backend {
        Backend::Sse2
    }

    #[inline]
    fn encode_block(&self, block: &Rgba4x4Block) -> [u8; BLOCK_SIZE] {
        unsafe { encode_block_sse2(block) }
    }

    fn encode_row(
        &self,
        image: &RgbaImage<'_>,
        block_row: u32,
        output_row: &mut [u8],
    ) -> Result<(), EncodeError> {
        unsafe { encode_row_sse2(image, block_row, output_row) }
    }
}

#[target_feature(enable = "sse2")]
unsafe fn encode_row_sse2(
    image: &RgbaImage<'_>,
    block_row: u32,
    output_row: &mut [u8],
) -> Result<(), EncodeError> {
    encode_row_with(image, block_row, output_row, |block| encode_block_sse2(block))
}
