use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dxt1_encode::{compressed_size, encode_image_safe, Backend, Capability};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// Noisy image so every block takes the full palette and index path.
fn generate_test_image(width: u32, height: u32) -> Vec<u8> {
    let mut state = 0x2545_F491_u32;
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // Mostly smooth with some noise, like real textures.
            let noise = (state & 0x1F) as u8;
            pixels.extend_from_slice(&[
                (x as u8).wrapping_add(noise),
                (y as u8).wrapping_add(noise),
                ((x + y) as u8) ^ noise,
                255,
            ]);
        }
    }
    pixels
}

fn is_supported(backend: Backend) -> bool {
    match backend {
        Backend::Portable32 => true,
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        Backend::Sse2 => dxt1_encode_common::cpu_detect::has_sse2(),
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
        Backend::Sse2 => false,
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT1 Encode Implementations");

    // 512x512 = 16384 blocks
    let (width, height) = (512, 512);
    let input = generate_test_image(width, height);
    let mut output = vec![0u8; compressed_size(width, height)];

    group.throughput(criterion::Throughput::Bytes(input.len() as u64));

    for &backend in Backend::all_values() {
        if !is_supported(backend) {
            continue;
        }

        let capability = unsafe { Capability::with_backend(backend) };
        group.bench_with_input(
            BenchmarkId::new(backend.name(), width),
            &width,
            |b, &_width| {
                b.iter(|| {
                    encode_image_safe(
                        black_box(&input),
                        width,
                        height,
                        black_box(&mut output),
                        capability,
                    )
                })
            },
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
