#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod capability;
pub mod encode;
pub mod encode_builder;

pub use capability::detect_capability;
pub use encode::{compress, compress_into, compress_with_capability};
pub use encode_builder::Dxt1EncodeBuilder;

// Types needed to use the API without depending on the raw crates.
pub use dxt1_encode::{compressed_size, Backend, Capability, EncodeError};
