//! Benchmarks for the pixcraft pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pixcraft::{
    build_palette, generate_document, pixelate, pixelate_grid, quantize, ArtworkConfig, Colour,
    Image, OutputSize, RenderStyle,
};

/// Smooth gradient with some high-frequency noise, so median cut has work
/// to do at every split.
fn photo_like(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |x, y| {
        let noise = (x.wrapping_mul(31) ^ y.wrapping_mul(17)) % 23;
        Colour::rgb(
            ((x * 255 / width.max(1)) + noise) as u8,
            ((y * 255 / height.max(1)) + noise) as u8,
            (((x + y) * 127 / (width + height).max(1)) + noise) as u8,
        )
    })
}

// -- Colour reduction benchmarks --

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    let small = photo_like(128, 128);
    let large = photo_like(1024, 768);

    group.bench_function("pixelate_small", |b| {
        b.iter(|| pixelate(black_box(&small), 8, 8))
    });

    group.bench_function("pixelate_grid_large", |b| {
        b.iter(|| pixelate_grid(black_box(&large), 100, 75))
    });

    let coarse = pixelate_grid(&large, 100, 75);
    for target in [8, 16, 32] {
        group.bench_function(format!("build_palette_{}", target), |b| {
            b.iter(|| build_palette(black_box(coarse.pixels()), target))
        });
    }

    group.bench_function("quantize_large", |b| {
        b.iter(|| quantize(black_box(&large), 16))
    });

    group.finish();
}

// -- Document benchmarks --

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    let image = photo_like(800, 600);

    let a4 = ArtworkConfig::new().with_grid(50, 50);
    group.bench_function("generate_a4", |b| {
        b.iter(|| generate_document(black_box(&image), &a4))
    });

    let a0 = ArtworkConfig::new()
        .with_grid(200, 200)
        .with_colour_count(32)
        .with_style(RenderStyle::Embossed)
        .with_output_size(OutputSize::A0)
        .with_thumbnail(true);
    group.bench_function("generate_a0_tiled", |b| {
        b.iter(|| generate_document(black_box(&image), &a0))
    });

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_document);
criterion_main!(benches);
