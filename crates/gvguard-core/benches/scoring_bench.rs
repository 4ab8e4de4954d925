// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Scoring Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the per-step hot path: strain, accumulator
//! update and Sentinel evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gvguard_core::{classify_one_shot, compute_gv, compute_strain, RiskAccumulator, Sentinel};
use gvguard_types::{GuardConfig, TelemetrySample};

fn busy_sample() -> TelemetrySample {
    TelemetrySample {
        token_delta: 500.0,
        tool_calls_delta: 2.0,
        error_delta: 1.0,
        repeated_action_delta: 1.0,
        recursion_depth: 2.0,
        latency_ms: Some(1800.0),
    }
}

// ── compute_strain() ────────────────────────────────────────────────

fn bench_compute_strain(c: &mut Criterion) {
    let config = GuardConfig::default();
    let sample = busy_sample();
    c.bench_function("compute_strain", |b| {
        b.iter(|| compute_strain(black_box(&sample), &config))
    });
}

// ── RiskAccumulator.step() ──────────────────────────────────────────

fn bench_guard_step(c: &mut Criterion) {
    let mut guard = RiskAccumulator::default();
    let sample = busy_sample();
    c.bench_function("guard_step", |b| b.iter(|| guard.step(black_box(&sample))));
}

fn bench_guard_1000_steps(c: &mut Criterion) {
    let sample = busy_sample();
    let idle = TelemetrySample::default();
    c.bench_function("guard_1000_steps", |b| {
        b.iter(|| {
            let mut guard = RiskAccumulator::default();
            for i in 0..1000 {
                let s = if i % 3 == 0 { &sample } else { &idle };
                black_box(guard.step(black_box(s)));
            }
        })
    });
}

// ── Sentinel ────────────────────────────────────────────────────────

fn bench_compute_gv(c: &mut Criterion) {
    let values = [0.61, 0.19, 0.73];
    c.bench_function("compute_gv_3", |b| {
        b.iter(|| compute_gv(black_box(values), 0.8))
    });
}

fn bench_sentinel_evaluate(c: &mut Criterion) {
    c.bench_function("sentinel_evaluate", |b| {
        b.iter(|| {
            let mut sentinel = Sentinel::with_strength("bench", 0.8);
            sentinel.evaluate(black_box([
                ("uncertainty", 0.61),
                ("drift", 0.19),
                ("policy_pressure", 0.73),
            ]))
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_one_shot", |b| {
        b.iter(|| classify_one_shot(black_box(0.638)))
    });
}

criterion_group!(
    benches,
    bench_compute_strain,
    bench_guard_step,
    bench_guard_1000_steps,
    bench_compute_gv,
    bench_sentinel_evaluate,
    bench_classify,
);
criterion_main!(benches);
