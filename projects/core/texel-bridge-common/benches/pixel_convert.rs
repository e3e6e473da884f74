use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texel_bridge_common::channel_order::rgba_to_argb;
use texel_bridge_common::color_1555::Color1555;
use texel_bridge_common::row_mirror::row_mirror_index;

const PIXELS: usize = 4096;

fn bench_pixel_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_convert");
    group.throughput(criterion::Throughput::Elements(PIXELS as u64));

    let packed: Vec<u16> = (0..PIXELS).map(|v| v as u16).collect();
    group.bench_function("expand_1555", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &value in &packed {
                acc = acc.wrapping_add(Color1555::from_raw(black_box(value)).to_argb_word());
            }
            acc
        })
    });

    let words: Vec<u32> = (0..PIXELS).map(|v| v as u32 * 0x0101_0101).collect();
    group.bench_function("rgba_to_argb", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for &word in &words {
                acc = acc.wrapping_add(rgba_to_argb(black_box(word)));
            }
            acc
        })
    });

    group.bench_function("row_mirror", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for i in 0..PIXELS {
                acc = acc.wrapping_add(row_mirror_index(black_box(i), black_box(64)));
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pixel_convert);
criterion_main!(benches);
