#![no_main]

// Whole-image encoding: validation, output size, and equality across backends and threading.

use dxt1_encode_api::{
    compressed_size, detect_capability, Capability, Dxt1EncodeBuilder, EncodeError,
};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub width: u8,
    pub height: u8,
    pub pixels: Vec<u8>,
}

fuzz_target!(|image: Image| {
    let width = image.width as u32;
    let height = image.height as u32;

    let portable = Dxt1EncodeBuilder::new()
        .capability(Capability::portable())
        .multithreaded(false)
        .encode(&image.pixels, width, height);

    let expected = match portable {
        Ok(expected) => expected,
        Err(EncodeError::InvalidDimensions { .. }) => {
            assert!(width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0);
            return;
        }
        Err(EncodeError::InputBufferTooSmall { needed, actual }) => {
            assert_eq!(needed, (width * height * 4) as usize);
            assert!(actual < needed);
            return;
        }
        Err(error) => panic!("unexpected error: {error}"),
    };
    assert_eq!(expected.len(), compressed_size(width, height));

    let accelerated = Dxt1EncodeBuilder::new()
        .capability(detect_capability())
        .multithreaded(true)
        .encode(&image.pixels, width, height)
        .unwrap();
    assert_eq!(accelerated, expected);
});
