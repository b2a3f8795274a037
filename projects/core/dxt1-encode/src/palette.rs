//! The 4-colour palette interpolated from a block's endpoints.

use crate::bounding_box::BlockEndpoints;
use dxt1_encode_common::color_565::{requantize_5bit, requantize_6bit};
use dxt1_encode_common::color_8888::Color8888;

/// 16-bit fixed-point reciprocal of 3: `(1 << 16) / 3 + 1`.
///
/// Must stay exactly this value; other implementations of this encoder use it verbatim,
/// and changing it changes the low bits of `color2`/`color3`.
pub const RECIPROCAL_3: u32 = (1 << 16) / 3 + 1;

const _: () = assert!(RECIPROCAL_3 == 21846);

/// Approximates `x / 3` as `(x * 21846) >> 16`, saturated to 8 bits.
///
/// Inputs are sums of three 8-bit channel values (`2 * a + b`), i.e. `0..=765`.
///
/// # Examples
///
/// ```
/// use dxt1_encode::palette::reciprocal_mul3;
///
/// assert_eq!(reciprocal_mul3(3), 1);
/// assert_eq!(reciprocal_mul3(765), 255);
/// ```
#[inline(always)]
pub const fn reciprocal_mul3(x: u16) -> u8 {
    let quotient = (x as u32 * RECIPROCAL_3) >> 16;
    if quotient > u8::MAX as u32 {
        u8::MAX
    } else {
        quotient as u8
    }
}

/// The four colours a block's indices select from, in index order.
///
/// All entries have alpha zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// `[color0, color1, color2, color3]`
    pub colors: [Color8888; 4],
}

impl Palette {
    /// Builds the palette for a block from its (inset, unquantized) endpoints.
    ///
    /// - `color0`: the maximum corner, quantized to 565 and expanded back
    /// - `color1`: the minimum corner, quantized to 565 and expanded back
    /// - `color2`: `(2 * color0 + color1) / 3` via [`reciprocal_mul3`]
    /// - `color3`: `(color0 + 2 * color1) / 3` via [`reciprocal_mul3`]
    pub fn from_endpoints(endpoints: &BlockEndpoints) -> Self {
        let color0 = requantize(&endpoints.max);
        let color1 = requantize(&endpoints.min);
        Self {
            colors: [
                color0,
                color1,
                interpolate_two_thirds(&color0, &color1),
                interpolate_two_thirds(&color1, &color0),
            ],
        }
    }

    /// `color0`
    #[inline]
    pub fn color0(&self) -> Color8888 {
        self.colors[0]
    }

    /// `color1`
    #[inline]
    pub fn color1(&self) -> Color8888 {
        self.colors[1]
    }
}

/// Quantizes to 565 and expands back, without going through the packed form.
#[inline(always)]
fn requantize(color: &Color8888) -> Color8888 {
    Color8888::new(
        requantize_5bit(color.r),
        requantize_6bit(color.g),
        requantize_5bit(color.b),
        0,
    )
}

/// `(2 * near + far) / 3` per RGB channel.
#[inline(always)]
fn interpolate_two_thirds(near: &Color8888, far: &Color8888) -> Color8888 {
    let mix = |near: u8, far: u8| reciprocal_mul3(2 * near as u16 + far as u16);
    Color8888::new(mix(near.r, far.r), mix(near.g, far.g), mix(near.b, far.b), 0)
}
