//! RGB565 endpoint colours and the 5/6-bit channel quantization used to build the palette.

use crate::color_8888::Color8888;

/// Mask selecting the 5 bits of an 8-bit channel that survive quantization to a 5-bit field.
pub const MASK_5BIT: u8 = 0xF8;

/// Mask selecting the 6 bits of an 8-bit channel that survive quantization to a 6-bit field.
pub const MASK_6BIT: u8 = 0xFC;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As used for the two endpoints of every DXT1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components.
    ///
    /// Each channel is truncated to its top 5 (red, blue) or 6 (green) bits,
    /// i.e. `(r >> 3) << 11 | (g >> 2) << 5 | (b >> 3)`.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_encode_common::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_rgb(255, 0, 0).raw_value(), 0xF800);
    /// assert_eq!(Color565::from_rgb(0, 255, 0).raw_value(), 0x07E0);
    /// assert_eq!(Color565::from_rgb(0, 0, 255).raw_value(), 0x001F);
    /// ```
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        // Masking and shifting into place in one expression; same result as
        // `(r >> 3) << 11 | (g >> 2) << 5 | (b >> 3)`.
        Self {
            value: ((r as u16 & MASK_5BIT as u16) << 8)
                | ((g as u16 & MASK_6BIT as u16) << 3)
                | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    // BC1 expands the endpoint values from 5 or 6 bits to 8 bits by replicating the top bits
    // into the freed low bits. A 565 value therefore always maps to one canonical 888 value.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Unpacks into the expanded `(r, g, b)` triple.
    #[inline]
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Converts this [`Color565`] to a [`Color8888`].
    ///
    /// The alpha channel is left at zero; the encoder never reads alpha, and keeping it at zero
    /// lets palette colours be compared against pixels with alpha masked out.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt1_encode_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_rgb(255, 0, 0).to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 0);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 0)
    }
}

/// Quantizes an 8-bit channel to 5 bits and expands it back by bit replication.
///
/// Equivalent to `Color565::from_rgb(v, 0, 0).red()`, without packing.
#[inline(always)]
pub const fn requantize_5bit(value: u8) -> u8 {
    (value & MASK_5BIT) | (value >> 5)
}

/// Quantizes an 8-bit channel to 6 bits and expands it back by bit replication.
///
/// Equivalent to `Color565::from_rgb(0, v, 0).green()`, without packing.
#[inline(always)]
pub const fn requantize_6bit(value: u8) -> u8 {
    (value & MASK_6BIT) | (value >> 6)
}
