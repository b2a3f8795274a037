//! Common test imports and utilities for encoder tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
#[allow(unused_imports)] // Not every test module needs all of these.
pub use crate::capability::{Backend, Capability};
#[allow(unused_imports)]
pub use crate::error::EncodeError;
#[allow(unused_imports)]
pub use crate::image::RgbaImage;

// Common types from dxt1_encode_common
pub use dxt1_encode_common::color_565::Color565;
pub use dxt1_encode_common::color_8888::Color8888;
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use dxt1_encode_common::cpu_detect::*;
pub use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

/// Backends that can run on the current machine, reference backend first.
pub(crate) fn supported_backends() -> &'static [Backend] {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    if has_sse2() {
        return Backend::all_values();
    }

    &[Backend::Portable32]
}

/// Image where pixel `(x, y)` is `(x, y, x ^ y, 255)` (coordinates truncated to 8 bits).
pub(crate) fn generate_coordinate_image(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    pixels
}

/// Image filled with a single colour.
pub(crate) fn generate_solid_image(width: u32, height: u32, colour: Color8888) -> Vec<u8> {
    let pixel = [colour.r, colour.g, colour.b, colour.a];
    pixel.repeat(width as usize * height as usize)
}

/// Smooth diagonal gradients in every channel, with alpha varying too.
pub(crate) fn generate_gradient_image(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height).max(1)) as u8;
            pixels.extend_from_slice(&[r, g, b, (x * 7 + y * 3) as u8]);
        }
    }
    pixels
}

/// Pseudo-random pixels from a xorshift32 generator. `seed` must be non-zero.
pub(crate) fn generate_noise_image(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut state = seed;
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        pixels.extend_from_slice(&state.to_le_bytes());
    }
    pixels
}

/// A spread of blocks hitting the interesting paths: flat blocks, channel extremes,
/// outliers, ties and plain noise.
pub(crate) fn generate_block_corpus() -> Vec<Rgba4x4Block> {
    let mut corpus = Vec::new();

    // Flat blocks, including both ends of every channel.
    for colour in [
        Color8888::new(0, 0, 0, 255),
        Color8888::new(255, 255, 255, 255),
        Color8888::new(255, 0, 0, 0),
        Color8888::new(0, 255, 0, 128),
        Color8888::new(0, 0, 255, 255),
        Color8888::new(100, 100, 100, 255),
        Color8888::new(7, 3, 7, 255),
    ] {
        corpus.push(Rgba4x4Block::new(colour));
    }

    // Two-colour blocks split down the middle.
    for (left, right) in [
        (Color8888::new(255, 0, 0, 255), Color8888::new(0, 0, 255, 255)),
        (Color8888::new(0, 0, 0, 255), Color8888::new(255, 255, 255, 255)),
        (Color8888::new(10, 200, 30, 255), Color8888::new(12, 190, 40, 0)),
    ] {
        let mut block = Rgba4x4Block::new(left);
        for y in 0..4 {
            for x in 2..4 {
                block.set_pixel(x, y, right);
            }
        }
        corpus.push(block);
    }

    // One outlier in an otherwise flat block, at every position.
    for i in 0..16 {
        let mut block = Rgba4x4Block::new(Color8888::new(64, 128, 192, 255));
        block.pixels[i] = Color8888::new(255, 0, 17, 255);
        corpus.push(block);
    }

    // Ramps along each channel.
    for channel in 0..3 {
        let mut block = Rgba4x4Block::default();
        for (i, pixel) in block.pixels.iter_mut().enumerate() {
            let v = (i * 17) as u8;
            *pixel = match channel {
                0 => Color8888::new(v, 0, 0, 255),
                1 => Color8888::new(0, v, 0, 255),
                _ => Color8888::new(0, 0, v, 255),
            };
        }
        corpus.push(block);
    }

    // Noise.
    for seed in 1..=64u32 {
        let pixels = generate_noise_image(4, 4, seed.wrapping_mul(0x9E37_79B9) | 1);
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&pixels);
        corpus.push(Rgba4x4Block::from_bytes(&bytes));
    }

    corpus
}

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    num_blocks: usize,
) {
    if output_expected == output_test {
        return;
    }

    let first_difference = output_expected
        .chunks(8)
        .zip(output_test.chunks(8))
        .position(|(expected, actual)| expected != actual);
    panic!(
        "{impl_name} implementation produced different results than reference for {num_blocks} blocks.\n\
        First differing block: {first_difference:?}\n\
        Expected: {output_expected:02X?}\n\
        Actual:   {output_test:02X?}"
    );
}
