//! Benchmarks for lzscan encode and decode throughput.
//!
//! Measures both scan modes over data patterns from incompressible noise
//! to smooth gradients.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzscan::{decode, encode, EncodeOpts, ScanMode};

/// Generate random (incompressible) data
fn generate_random_data(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.push((state & 0xFF) as u8);
    }
    data
}

/// Generate a smooth gradient image (highly compressible after delta)
fn generate_gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// Generate repetitive data (highly compressible as-is)
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        let chunk_size = remaining.min(pattern.len());
        data.extend_from_slice(&pattern[..chunk_size]);
    }
    data
}

fn bench_static_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_encode");

    for size in [4 * 1024, 16 * 1024] {
        let datasets = [
            ("random", generate_random_data(size, 12345)),
            ("repetitive", generate_repetitive_data(size)),
            ("gradient", generate_gradient_image(128, size / 128)),
        ];

        for (name, data) in datasets {
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| encode(data, EncodeOpts::default()).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_adaptive_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_encode");

    for (width, height) in [(64usize, 64usize), (128, 128)] {
        let data = generate_gradient_image(width, height);
        let opts = EncodeOpts { mode: ScanMode::Adaptive, delta: true, width: width as u16 };

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("gradient_delta", format!("{}x{}", width, height)),
            &data,
            |b, data| {
                b.iter(|| encode(data, opts).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let datasets = [
        ("repetitive", encode(&generate_repetitive_data(16 * 1024), EncodeOpts::default()).unwrap()),
        (
            "gradient_adaptive",
            encode(
                &generate_gradient_image(128, 128),
                EncodeOpts { mode: ScanMode::Adaptive, delta: true, width: 128 },
            )
            .unwrap(),
        ),
        ("raw_fallback", encode(&generate_random_data(16 * 1024, 777), EncodeOpts::default()).unwrap()),
    ];

    for (name, stream) in datasets {
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &stream, |b, stream| {
            b.iter(|| decode(stream).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_static_encode, bench_adaptive_encode, bench_decode);
criterion_main!(benches);
