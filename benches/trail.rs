//! Benchmarks for the per-frame numeric paths.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use firetrail::{build_billboard_strip, Firetrail, Rope, Spline, Vec3};

fn filled_spline(capacity: usize) -> Spline {
    let mut spline = Spline::new(capacity);
    for i in 0..capacity * 2 {
        let a = i as f32 * 0.3;
        spline.push_point(Vec3::new(a.cos() * 3.0, a.sin() * 3.0, a * 0.1));
    }
    spline
}

fn bench_spline(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline");

    for capacity in [40usize, 200, 1000] {
        group.bench_with_input(
            BenchmarkId::new("push_point", capacity),
            &capacity,
            |b, &capacity| {
                let mut spline = filled_spline(capacity);
                let mut i = 0u32;
                b.iter(|| {
                    let a = i as f32 * 0.3;
                    i = i.wrapping_add(1);
                    spline.push_point(black_box(Vec3::new(a.cos(), a.sin(), 0.0)));
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("position_at_length", capacity),
            &capacity,
            |b, &capacity| {
                let spline = filled_spline(capacity);
                let half = spline.length() * 0.5;
                b.iter(|| black_box(spline.position_at_length(black_box(half))))
            },
        );
    }

    group.finish();
}

fn bench_rope(c: &mut Criterion) {
    let mut group = c.benchmark_group("rope");

    for count in [40usize, 200, 1000] {
        group.bench_with_input(
            BenchmarkId::new("update_head_to_tail", count),
            &count,
            |b, &count| {
                let mut rope = Rope::new(count);
                rope.forces = Vec3::new(0.0, -0.01, 0.0);
                let mut frame = 0u32;
                b.iter(|| {
                    let a = frame as f32 * 0.1;
                    frame = frame.wrapping_add(1);
                    rope.head_mut().position = Vec3::new(a.cos() * 3.0, a.sin() * 3.0, 0.0);
                    rope.update_head_to_tail();
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("compute_normals", count),
            &count,
            |b, &count| {
                let mut rope = Rope::new(count);
                for frame in 0..count as u32 {
                    let a = frame as f32 * 0.1;
                    rope.head_mut().position = Vec3::new(a.cos() * 3.0, a.sin() * 3.0, 0.0);
                    rope.update_head_to_tail();
                }
                b.iter(|| rope.compute_normals())
            },
        );
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("frame_and_resample", |b| {
        let mut trail = Firetrail::builder()
            .with_sample_count(500)
            .build()
            .unwrap();
        let mut positions = Vec::new();
        let mut vertices = Vec::new();
        let mut frame = 0u32;
        b.iter(|| {
            let a = frame as f32 * 0.05;
            frame = frame.wrapping_add(1);
            trail.set_attractor(Vec3::new(a.cos() * 4.0, a.sin() * 2.0, 0.0));
            trail.advance();
            trail.sample_positions(&mut positions);
            build_billboard_strip(&positions, &mut vertices);
            black_box(vertices.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_spline, bench_rope, bench_pipeline);
criterion_main!(benches);
