#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod bounding_box;
pub mod capability;
pub mod encode_block;
pub mod encode_image;
pub mod error;
pub mod extract;
pub mod image;
pub mod indices;
pub mod pack;
pub mod palette;

pub use capability::{Backend, Capability};
pub use encode_block::{encode_block, BlockEncoder};
pub use encode_image::{compressed_size, encode_block_row_safe, encode_image, encode_image_safe};
pub use error::EncodeError;
pub use image::RgbaImage;

// Re-exported so callers don't need a direct dependency on the common crate.
pub use dxt1_encode_common::color_565::Color565;
pub use dxt1_encode_common::color_8888::Color8888;
pub use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
