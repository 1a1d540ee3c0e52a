// benches/stego.rs
//! LSB embed/extract on covers of increasing size

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use kindi_rs::Carrier;
use std::hint::black_box;

fn bench_stego(c: &mut Criterion) {
    let mut group = c.benchmark_group("stego");

    for &side in &[128u32, 512, 1024] {
        let cover = Carrier::from_rgba(RgbaImage::from_fn(side, side, |x, y| {
            Rgba([x as u8, y as u8, (x ^ y) as u8, 0xFF])
        }));
        let payload = vec![0x5Au8; cover.payload_capacity()];
        let stego = cover.embed(&payload).unwrap();

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("embed", side), &payload, |b, payload| {
            b.iter(|| black_box(cover.embed(black_box(payload)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("extract", side), &stego, |b, stego| {
            b.iter(|| black_box(stego.extract().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stego);
criterion_main!(benches);
