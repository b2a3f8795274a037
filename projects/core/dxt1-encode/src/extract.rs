//! Reads 4x4 pixel neighbourhoods out of an [`RgbaImage`].

use crate::error::EncodeError;
use crate::image::{RgbaImage, BYTES_PER_PIXEL};
use dxt1_encode_common::color_8888::Color8888;
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

/// Bytes in one 4-pixel row of a block.
const BLOCK_ROW_BYTES: usize = 4 * BYTES_PER_PIXEL;

/// Extracts the 4x4 block whose top-left pixel is at (`block_x`, `block_y`).
///
/// Pixels are read row by row using the image's stride, so the result is in raster order.
///
/// # Errors
///
/// [`EncodeError::OutOfBounds`] if `block_x + 4 > width` or `block_y + 4 > height`.
///
/// # Examples
///
/// ```
/// use dxt1_encode::extract::extract_block;
/// use dxt1_encode::RgbaImage;
///
/// let mut pixels = vec![0u8; 8 * 4 * 4];
/// pixels[4 * 4] = 200; // red channel of pixel (4, 0)
/// let image = RgbaImage::new(&pixels, 8, 4)?;
///
/// let block = extract_block(&image, 4, 0)?;
/// assert_eq!(block.pixels[0].r, 200);
/// # Ok::<(), dxt1_encode::EncodeError>(())
/// ```
pub fn extract_block(
    image: &RgbaImage,
    block_x: u32,
    block_y: u32,
) -> Result<Rgba4x4Block, EncodeError> {
    let out_of_bounds = EncodeError::OutOfBounds {
        block_x,
        block_y,
        width: image.width(),
        height: image.height(),
    };

    let fits_x = block_x.checked_add(4).is_some_and(|end| end <= image.width());
    let fits_y = block_y.checked_add(4).is_some_and(|end| end <= image.height());
    if !fits_x || !fits_y {
        return Err(out_of_bounds);
    }

    let stride = image.stride_bytes();
    let pixels = image.pixels();
    let mut block = Rgba4x4Block::default();

    for (row, block_row) in block.pixels.chunks_exact_mut(4).enumerate() {
        let start = (block_y as usize + row) * stride + block_x as usize * BYTES_PER_PIXEL;
        let src = pixels
            .get(start..start + BLOCK_ROW_BYTES)
            .ok_or(out_of_bounds)?;

        for (pixel, bytes) in block_row.iter_mut().zip(src.chunks_exact(BYTES_PER_PIXEL)) {
            *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
        }
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn reads_rows_with_image_stride() {
        // Each pixel stores its own (x, y) in r and g.
        let width = 12;
        let height = 8;
        let pixels = generate_coordinate_image(width, height);
        let image = RgbaImage::new(&pixels, width, height).unwrap();

        let block = extract_block(&image, 8, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let pixel = block.get_pixel(x, y);
                assert_eq!(pixel.r as usize, 8 + x);
                assert_eq!(pixel.g as usize, 4 + y);
            }
        }
    }

    #[test]
    fn keeps_alpha() {
        let mut pixels = vec![0u8; 4 * 4 * 4];
        pixels[3] = 77;
        let image = RgbaImage::new(&pixels, 4, 4).unwrap();
        assert_eq!(extract_block(&image, 0, 0).unwrap().pixels[0].a, 77);
    }

    #[rstest]
    #[case(8, 0)]
    #[case(0, 4)]
    #[case(5, 0)]
    #[case(u32::MAX, 0)]
    #[case(0, u32::MAX - 1)]
    fn rejects_blocks_past_the_edge(#[case] block_x: u32, #[case] block_y: u32) {
        let pixels = vec![0u8; 8 * 4 * 4];
        let image = RgbaImage::new(&pixels, 8, 4).unwrap();
        assert_eq!(
            extract_block(&image, block_x, block_y).unwrap_err(),
            EncodeError::OutOfBounds {
                block_x,
                block_y,
                width: 8,
                height: 4
            }
        );
    }

    #[test]
    fn accepts_unaligned_block_origin_inside_image() {
        // Coordinates need not be multiples of 4, only in bounds.
        let pixels = generate_coordinate_image(8, 8);
        let image = RgbaImage::new(&pixels, 8, 8).unwrap();
        let block = extract_block(&image, 1, 3).unwrap();
        assert_eq!(block.pixels[0].r, 1);
        assert_eq!(block.pixels[0].g, 3);
        assert_eq!(block.pixels[15].r, 4);
        assert_eq!(block.pixels[15].g, 6);
    }
}
