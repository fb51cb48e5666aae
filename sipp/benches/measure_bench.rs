//! Measure Benchmarks
//!
//! - Static measures against bare `f64` arithmetic (should be identical)
//! - Runtime registry: unfolding nested definitions, parsing expressions
//! - DynamicMeasure arithmetic with signature checks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sipp::dynamic::{DynamicMeasure, UnitRegistry};
use sipp::si::{Kilogram, MeterPerSecond, MeterPerSecondSquared, Newton, Second};
use sipp::Measure;

// ============================================================================
// Static measures
// ============================================================================

fn bench_static(c: &mut Criterion) {
    let mut group = c.benchmark_group("static");

    let masses: Vec<Measure<f64, Kilogram>> = (0..1024).map(|i| Measure::new(i as f64)).collect();
    let accel: Measure<f64, MeterPerSecondSquared> = Measure::new(9.81);

    group.bench_function("force_sum_measure", |b| {
        b.iter(|| {
            let total: Measure<f64, Newton> = masses
                .iter()
                .map(|&m| Measure::<f64, Newton>::from_unit(m * black_box(accel)))
                .sum();
            black_box(total)
        })
    });

    let raw: Vec<f64> = (0..1024).map(|i| i as f64).collect();
    group.bench_function("force_sum_f64", |b| {
        b.iter(|| {
            let total: f64 = raw.iter().map(|&m| m * black_box(9.81)).sum();
            black_box(total)
        })
    });

    group.bench_function("kinematics_step", |b| {
        let dt: Measure<f64, Second> = Measure::new(0.01);
        b.iter(|| {
            let mut v: Measure<f64, MeterPerSecond> = Measure::new(0.0);
            for _ in 0..100 {
                v += black_box(accel) * dt;
            }
            black_box(v)
        })
    });

    group.finish();
}

// ============================================================================
// Runtime registry
// ============================================================================

/// A registry with a chain of `depth` derived units, each built on the last
fn chained_registry(depth: usize) -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    for name in ["t", "d", "m"] {
        let _ = registry.register_basic(name);
    }
    let _ = registry.register_derived("u0", &[("d", 1), ("t", -1)]);
    for i in 1..depth {
        let prev = format!("u{}", i - 1);
        let _ = registry.register_derived(&format!("u{}", i), &[(prev.as_str(), 1), ("m", 1)]);
    }
    registry
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for depth in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("register_chain", depth), &depth, |b, &depth| {
            b.iter(|| black_box(chained_registry(depth)))
        });
    }

    let registry = UnitRegistry::with_si();
    for expr in ["N", "kg*m/s^2", "(kg·m^2/s^3)/(A*(m/s)^2)"] {
        group.bench_with_input(BenchmarkId::new("parse", expr), expr, |b, expr| {
            b.iter(|| black_box(registry.parse(black_box(expr))))
        });
    }

    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let registry = UnitRegistry::with_si();
    let mut group = c.benchmark_group("dynamic");

    let a = registry.measure(9.81, "m/s^2").ok();
    let m = registry.measure(70.0, "kg").ok();
    if let (Some(a), Some(m)) = (a, m) {
        group.bench_function("checked_mul", |b| {
            b.iter(|| black_box(black_box(&a).checked_mul(black_box(&m))))
        });
        let f = DynamicMeasure::from_static(Measure::<f64, Newton>::new(1.0));
        group.bench_function("checked_add", |b| {
            b.iter(|| black_box(black_box(&f).checked_add(black_box(&f))))
        });
        group.bench_function("into_static", |b| {
            b.iter(|| black_box(black_box(&f).into_static::<Newton>()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_static, bench_registry, bench_dynamic);
criterion_main!(benches);
