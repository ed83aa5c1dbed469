//! Benchmarks for tile compositing and PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench tile_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use heat_common::PixelPoint;
use renderer::{scheme, DotStamp, OpacityTable, TileCompositor};

/// Generate tile-local points spread across the tile plus its bleed margin.
fn generate_points(count: usize, weighted: bool) -> Vec<PixelPoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-32i64..288);
            let y = rng.gen_range(-32i64..288);
            let weight = if weighted {
                Some(rng.gen_range(0.05f64..2.0))
            } else {
                None
            };
            PixelPoint::carrying(x, y, None, weight)
        })
        .collect()
}

fn bench_compositing(c: &mut Criterion) {
    let compositor = TileCompositor::new(OpacityTable::default());
    let classic = scheme::classic();
    let dot = DotStamp::generate(12).unwrap();

    let mut group = c.benchmark_group("compositor");
    for count in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        let plain = generate_points(count, false);
        group.bench_with_input(BenchmarkId::new("unweighted", count), &plain, |b, pts| {
            b.iter(|| {
                compositor
                    .render(&classic, &dot, 12, black_box(pts), false, 200)
                    .unwrap()
            })
        });

        let weighted = generate_points(count, true);
        group.bench_with_input(BenchmarkId::new("weighted", count), &weighted, |b, pts| {
            b.iter(|| {
                compositor
                    .render(&classic, &dot, 12, black_box(pts), false, 200)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_empty_tile_path(c: &mut Criterion) {
    let compositor = TileCompositor::new(OpacityTable::default());
    let classic = scheme::classic();
    let dot = DotStamp::generate(12).unwrap();

    // Warm the cache so this measures the hit path.
    compositor
        .render(&classic, &dot, 12, &[], false, 200)
        .unwrap();

    c.bench_function("compositor/empty_cached", |b| {
        b.iter(|| {
            compositor
                .render(&classic, &dot, 12, black_box(&[]), false, 200)
                .unwrap()
        })
    });
}

fn bench_png_encode(c: &mut Criterion) {
    let compositor = TileCompositor::new(OpacityTable::default());
    let classic = scheme::classic();
    let dot = DotStamp::generate(12).unwrap();
    let points = generate_points(200, false);
    let tile = compositor
        .render(&classic, &dot, 12, &points, false, 200)
        .unwrap();

    let mut group = c.benchmark_group("png");
    group.throughput(Throughput::Bytes(tile.pixels().len() as u64));
    group.bench_function("encode_256x256", |b| {
        b.iter(|| black_box(tile.clone()).into_png().unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compositing,
    bench_empty_tile_path,
    bench_png_encode
);
criterion_main!(benches);
