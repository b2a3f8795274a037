#![no_main]

// Every backend must produce the same 8 bytes as the scalar reference for any block.

use dxt1_encode::encode_block::portable32::encode_block_portable32;
use dxt1_encode::pack::CompressedBlock;
use dxt1_encode::{encode_block, Backend, Capability};
use dxt1_encode_common::rgba_4x4_block::Rgba4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RgbaBlock {
    pub bytes: [u8; 64],
}

fuzz_target!(|input: RgbaBlock| {
    let block = Rgba4x4Block::from_bytes(&input.bytes);
    let expected = encode_block_portable32(&block);

    // Endpoints come from the per-channel max and min.
    let decoded = CompressedBlock::from_bytes(&expected);
    assert!(decoded.color0.raw_value() >= decoded.color1.raw_value());
    if decoded.color0 == decoded.color1 {
        assert_eq!(decoded.indices.packed(), 0);
    }

    let detected = dxt1_encode_api::detect_capability();
    for &backend in Backend::all_values() {
        if backend != Backend::Portable32 && backend != detected.backend() {
            continue;
        }

        let capability = unsafe { Capability::with_backend(backend) };
        assert_eq!(
            encode_block(&block, capability),
            expected,
            "{} doesn't match portable32",
            backend.name()
        );
    }
});
