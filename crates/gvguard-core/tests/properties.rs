// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Property Tests
// ─────────────────────────────────────────────────────────────────────

use proptest::prelude::*;

use gvguard_core::{classify, classify_one_shot, compute_gv, RiskAccumulator, Sentinel};
use gvguard_types::{
    AccumulatorState, Action, ClassifierScheme, GuardConfig, RiskBand, TelemetrySample,
};

fn counter() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..5_000.0_f64,
        1 => -100.0..0.0_f64,
        1 => Just(0.0),
    ]
}

fn sample_strategy() -> impl Strategy<Value = TelemetrySample> {
    (
        counter(),
        counter(),
        counter(),
        counter(),
        counter(),
        proptest::option::of(0.0..5_000.0_f64),
    )
        .prop_map(|(t, c, e, r, d, l)| TelemetrySample {
            token_delta: t,
            tool_calls_delta: c,
            error_delta: e,
            repeated_action_delta: r,
            recursion_depth: d,
            latency_ms: l,
        })
}

fn bump(sample: &TelemetrySample, field: usize, by: f64) -> TelemetrySample {
    let mut s = *sample;
    match field {
        0 => s.token_delta += by,
        1 => s.tool_calls_delta += by,
        2 => s.error_delta += by,
        3 => s.repeated_action_delta += by,
        _ => s.recursion_depth += by,
    }
    s
}

proptest! {
    #[test]
    fn one_shot_score_in_unit_interval(
        values in proptest::collection::vec(-10.0..10.0_f64, 0..16),
        strength in -1.0..2.0_f64,
    ) {
        let gv = compute_gv(values.iter().copied(), strength);
        prop_assert!((0.0..=1.0).contains(&gv));
    }

    #[test]
    fn strength_at_or_below_floor_reads_as_floor(
        values in proptest::collection::vec(0.0..0.01_f64, 1..8),
        strength in -5.0..=0.01_f64,
    ) {
        let floored = compute_gv(values.iter().copied(), 0.01);
        prop_assert_eq!(compute_gv(values.iter().copied(), strength), floored);
    }

    #[test]
    fn next_score_monotone_in_each_field(
        prior in 0.0..100.0_f64,
        sample in sample_strategy(),
        field in 0usize..5,
        by in 0.0..1_000.0_f64,
    ) {
        let state = AccumulatorState { score: prior, step_count: 0 };
        let mut base = RiskAccumulator::with_state(GuardConfig::default(), state);
        let mut raised = RiskAccumulator::with_state(GuardConfig::default(), state);
        let lo = base.step(&sample);
        let hi = raised.step(&bump(&sample.clamp_nonnegative(), field, by));
        prop_assert!(raised.score() >= base.score());
        prop_assert!(hi.score >= lo.score);
    }

    #[test]
    fn idle_steps_never_raise_score(
        prior in 0.0..=100.0_f64,
        steps in 1usize..60,
    ) {
        let mut g = RiskAccumulator::with_state(
            GuardConfig::default(),
            AccumulatorState { score: prior, step_count: 0 },
        );
        let mut last = g.score();
        for _ in 0..steps {
            g.step(&TelemetrySample::default());
            prop_assert!(g.score() <= last);
            prop_assert!(g.score() >= g.config().floor);
            last = g.score();
        }
    }

    #[test]
    fn score_stays_within_bounds(samples in proptest::collection::vec(sample_strategy(), 1..40)) {
        let mut g = RiskAccumulator::default();
        for s in &samples {
            let d = g.step(s);
            prop_assert!((0.0..=100.0).contains(&d.score));
            prop_assert!(d.strain >= 0.0);
        }
        prop_assert_eq!(g.step_count(), samples.len() as u64);
    }

    #[test]
    fn classification_is_total(score in proptest::num::f64::ANY) {
        let one_shot = classify_one_shot(score);
        let guard = classify(score, &ClassifierScheme::GUARD);
        prop_assert_eq!(guard.actions.len(), 1);
        prop_assert!(one_shot.actions.len() <= 3);
    }
}

#[test]
fn idle_score_converges_to_floor() {
    let mut g = RiskAccumulator::with_state(
        GuardConfig::default(),
        AccumulatorState {
            score: 100.0,
            step_count: 0,
        },
    );
    for _ in 0..1_000 {
        g.step(&TelemetrySample::default());
    }
    assert!(g.score() < 1e-6);
}

#[test]
fn boundary_scores_take_higher_band() {
    assert_eq!(classify_one_shot(0.5).band, RiskBand::Yellow);
    assert_eq!(classify_one_shot(0.75).band, RiskBand::Red);
    assert_eq!(classify(35.0, &ClassifierScheme::GUARD).band, RiskBand::Yellow);
    assert_eq!(classify(70.0, &ClassifierScheme::GUARD).band, RiskBand::Red);
}

#[test]
fn repeated_busy_sample_accumulates() {
    let sample = TelemetrySample {
        token_delta: 500.0,
        tool_calls_delta: 2.0,
        error_delta: 1.0,
        repeated_action_delta: 1.0,
        recursion_depth: 2.0,
        latency_ms: None,
    };
    let mut g = RiskAccumulator::default();
    let first = g.step(&sample);
    let second = g.step(&sample);
    assert!(second.score >= first.score);
}

#[test]
fn calm_steps_after_spike_strictly_decrease() {
    let mut g = RiskAccumulator::default();
    let spike = g.step(&TelemetrySample {
        token_delta: 2000.0,
        tool_calls_delta: 5.0,
        error_delta: 2.0,
        repeated_action_delta: 3.0,
        recursion_depth: 4.0,
        latency_ms: None,
    });
    let calm_1 = g.step(&TelemetrySample::default());
    let calm_2 = g.step(&TelemetrySample::default());
    assert!(calm_1.score < spike.score);
    assert!(calm_2.score < calm_1.score);
}

#[test]
fn one_shot_classification_actions() {
    let green = classify_one_shot(0.2);
    assert_eq!(green.band, RiskBand::Green);
    assert!(green.actions.is_empty());

    let yellow = classify_one_shot(0.6);
    assert_eq!(yellow.band, RiskBand::Yellow);
    assert!(yellow.contains(Action::Alert));

    let red = classify_one_shot(0.9);
    assert_eq!(red.band, RiskBand::Red);
    assert!(red.contains(Action::Alert));
    assert!(red.contains(Action::RequireHumanReview));
}

#[test]
fn sentinel_reference_signals() {
    let mut sentinel = Sentinel::with_strength("demo-agent", 0.8);
    let record = sentinel.evaluate([
        ("uncertainty", 0.61),
        ("drift", 0.19),
        ("policy_pressure", 0.73),
    ]);
    assert_eq!(record.score, 0.638);
    assert_eq!(record.band, RiskBand::Yellow);
    assert_eq!(sentinel.history().len(), 1);
}

#[test]
fn empty_signal_map_scores_zero() {
    let mut sentinel = Sentinel::with_strength("empty", 0.8);
    let record = sentinel.evaluate(Vec::<(&str, f64)>::new());
    assert_eq!(record.score, 0.0);
    assert_eq!(record.band, RiskBand::Green);
}
