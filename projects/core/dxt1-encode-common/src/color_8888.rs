//! 32-bit RGBA pixels and the alpha-free comparisons the encoder runs on them.

use crate::color_565::Color565;

/// Represents a single RGBA8888 pixel color, laid out in memory as `r, g, b, a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_encode_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a pixel from the first 4 bytes of `bytes` (`r, g, b, a` order).
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Quantizes this color to RGB565, discarding alpha.
    #[inline]
    pub const fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }

    /// Returns a copy of this colour with the alpha channel cleared to zero.
    #[inline]
    pub const fn without_alpha(&self) -> Self {
        Self::new(self.r, self.g, self.b, 0)
    }

    /// Per-channel minimum of the RGB channels. Alpha is cleared.
    #[inline]
    pub fn min_rgb(&self, other: &Self) -> Self {
        Self::new(
            self.r.min(other.r),
            self.g.min(other.g),
            self.b.min(other.b),
            0,
        )
    }

    /// Per-channel maximum of the RGB channels. Alpha is cleared.
    #[inline]
    pub fn max_rgb(&self, other: &Self) -> Self {
        Self::new(
            self.r.max(other.r),
            self.g.max(other.g),
            self.b.max(other.b),
            0,
        )
    }

    /// Sum of absolute differences over the RGB channels. Alpha is ignored.
    #[inline(always)]
    pub fn sad_rgb(&self, other: &Self) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}
