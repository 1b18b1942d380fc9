//! Frame generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drafter_core::{BoundingBox, ViewDirection};
use drafter_view::{generate, FrameOptions};
use glam::DVec3;

fn bench_bounds() -> BoundingBox {
    BoundingBox::new(DVec3::new(-12.0, -4.0, 0.0), DVec3::new(18.0, 9.5, 6.2))
}

fn generate_plan(c: &mut Criterion) {
    let bounds = bench_bounds();
    let options = FrameOptions::default();

    c.bench_function("generate_plan", |b| {
        b.iter(|| generate(black_box(&bounds), ViewDirection::Plan, &options))
    });
}

fn generate_all_directions(c: &mut Criterion) {
    let bounds = bench_bounds();
    let options = FrameOptions::default();

    c.bench_function("generate_all_directions", |b| {
        b.iter(|| {
            for direction in ViewDirection::ALL {
                generate(black_box(&bounds), direction, &options);
            }
        })
    });
}

criterion_group!(benches, generate_plan, generate_all_directions);
criterion_main!(benches);
