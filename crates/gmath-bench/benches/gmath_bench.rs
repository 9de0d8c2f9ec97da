//! Benchmarks for gmath kernels and types.
//!
//! Each approximate kernel is measured next to its `std` counterpart.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use gmath_color::Color8;
use gmath_core::{Random, atan2_approx, cos_approx, fast_inverse_sqrt, fast_round_to_int, sin_approx};
use gmath_linalg::{DMat4, Mat4, Vec3, vec3};

/// Benchmark the approximate scalar kernels against `std`.
fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (1..=*size).map(|i| i as f32 * 0.01).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("fast_inverse_sqrt", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| fast_inverse_sqrt(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("std_inverse_sqrt", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| 1.0 / black_box(x).sqrt()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("sin_approx", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| sin_approx(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("std_sin", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| black_box(x).sin()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("cos_approx", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| cos_approx(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("atan2_approx", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| atan2_approx(black_box(x) - 500.0, 250.0))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("std_atan2", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| (black_box(x) - 500.0).atan2(250.0)).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark magic-number rounding against `round_ties_even`.
fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");

    let values: Vec<f64> = (0..10000).map(|i| i as f64 * 0.37 - 1850.0).collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("fast_round_to_int", |b| {
        b.iter(|| values.iter().map(|&x| fast_round_to_int(black_box(x))).collect::<Vec<_>>())
    });

    group.bench_function("round_ties_even", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|&x| black_box(x).round_ties_even() as i32)
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark vector operations.
fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    let mut rng = Random::from_seed(7);
    let vectors: Vec<Vec3> = (0..10000)
        .map(|_| {
            let mut v = Vec3::zero();
            v.randomize_with(&mut rng, -100.0, 100.0);
            v
        })
        .collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("normalized", |b| {
        b.iter(|| vectors.iter().map(|v| black_box(v).normalized()).collect::<Vec<_>>())
    });

    group.bench_function("dot", |b| {
        let axis = vec3(0.0f32, 1.0, 0.0);
        b.iter(|| vectors.iter().map(|&v| black_box(v).dot(axis)).sum::<f32>())
    });

    group.finish();
}

/// Benchmark 4x4 matrix operations.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let model = DMat4::translation(vec3(1.0, 2.0, 3.0))
        * DMat4::rotation(30.0, vec3(0.0, 1.0, 0.0))
        * DMat4::scale(vec3(2.0, 2.0, 2.0));

    group.bench_function("inverse", |b| b.iter(|| black_box(model).inverse()));
    group.bench_function("determinant", |b| b.iter(|| black_box(model).determinant()));
    group.bench_function("mul", |b| b.iter(|| black_box(model) * black_box(model)));

    group.bench_function("rotation", |b| {
        b.iter(|| Mat4::rotation(black_box(45.0), vec3(0.0, 0.0, 1.0)))
    });

    group.finish();
}

/// Benchmark color conversions.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    let colors: Vec<Color8> = (0..10000u32)
        .map(|i| Color8::from_hex(i.wrapping_mul(2_654_435_761)))
        .collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("normalized", |b| {
        b.iter(|| colors.iter().map(|c| black_box(c).normalized()).collect::<Vec<_>>())
    });

    group.bench_function("normalized_precise", |b| {
        b.iter(|| colors.iter().map(|c| black_box(c).normalized_precise()).collect::<Vec<_>>())
    });

    group.bench_function("get_hex", |b| {
        b.iter(|| colors.iter().map(|c| black_box(c).get_hex()).collect::<Vec<_>>())
    });

    group.bench_function("grayscale", |b| {
        b.iter(|| colors.iter().map(|c| black_box(c).grayscale()).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_kernels,
    bench_rounding,
    bench_vector,
    bench_matrix,
    bench_color,
);
criterion_main!(benches);
