// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard (Risk Accumulator)
// ─────────────────────────────────────────────────────────────────────
//! Deterministic runtime risk signal for agent/tool loops.
//!
//! Each step applies a leaky-integrator update:
//!
//! ```text
//! GV(t+1) = clamp(GV(t) + strain(t) - damping * GV(t), floor, ceiling)
//! ```
//!
//! With no strain the score decays geometrically (self-healing); under a
//! constant strain `s` it settles at `s / damping` when that lies inside
//! the bounds. The clamp is the only nonlinearity.

use gvguard_types::score::{clamp_score, round_to};
use gvguard_types::{AccumulatorState, Decision, GuardConfig, GuardResult, TelemetrySample};

use crate::classifier::{classify, guard_action};
use crate::strain::compute_strain;

/// Decimal places of `score` and `strain` in a [`Decision`].
const DECISION_PRECISION: i32 = 4;

/// Accumulating runtime guard. One instance tracks one risk trajectory.
///
/// Not internally synchronized: `step` takes `&mut self`. Hosts that
/// must share a guard across threads can wrap it in
/// [`SharedGuard`](crate::SharedGuard).
#[derive(Debug, Clone)]
pub struct RiskAccumulator {
    config: GuardConfig,
    state: AccumulatorState,
}

impl Default for RiskAccumulator {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl RiskAccumulator {
    /// Build a guard without validating `config`.
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            state: AccumulatorState::default(),
        }
    }

    /// Build a guard after `GuardConfig::validate()` succeeds.
    pub fn try_new(config: GuardConfig) -> GuardResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Resume from a caller-held state snapshot.
    ///
    /// The snapshot score is clamped into `[floor, ceiling]`.
    pub fn with_state(config: GuardConfig, state: AccumulatorState) -> Self {
        let score = clamp_score(state.score, config.floor, config.ceiling);
        Self {
            config,
            state: AccumulatorState {
                score,
                step_count: state.step_count,
            },
        }
    }

    /// Return to score 0 and step 0.
    pub fn reset(&mut self) {
        self.state = AccumulatorState::default();
        log::info!("GV guard reset");
    }

    /// Fold one telemetry sample into the score and classify the result.
    pub fn step(&mut self, sample: &TelemetrySample) -> Decision {
        let c = &self.config;
        let telemetry = sample.clamp_nonnegative();
        let strain = compute_strain(&telemetry, c);

        let gv_prev = self.state.score;
        let gv_next = clamp_score(gv_prev + strain - c.damping * gv_prev, c.floor, c.ceiling);

        let scheme = c.scheme();
        let prev_band = classify(gv_prev, &scheme).band;
        let classification = classify(gv_next, &scheme);

        self.state.score = gv_next;
        self.state.step_count += 1;

        log::debug!(
            "GV step {}: strain={strain:.4} gv {gv_prev:.4} -> {gv_next:.4} ({})",
            self.state.step_count,
            classification.band
        );
        if classification.band != prev_band {
            log::info!(
                "GV band {prev_band} -> {} at step {} (gv={gv_next:.4})",
                classification.band,
                self.state.step_count
            );
        }

        Decision {
            step_count: self.state.step_count,
            score: round_to(gv_next, DECISION_PRECISION),
            strain: round_to(strain, DECISION_PRECISION),
            band: classification.band,
            recommended_action: guard_action(classification.band),
            telemetry,
        }
    }

    /// Analytic steady-state score for a constant strain, clamped to bounds.
    ///
    /// With `damping = 0` any positive strain saturates at the ceiling.
    pub fn steady_state(&self, strain: f64) -> f64 {
        let c = &self.config;
        if c.damping == 0.0 {
            return if strain > 0.0 { c.ceiling } else { c.floor };
        }
        clamp_score(strain / c.damping, c.floor, c.ceiling)
    }

    /// Current unrounded score.
    pub fn score(&self) -> f64 {
        self.state.score
    }

    pub fn step_count(&self) -> u64 {
        self.state.step_count
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AccumulatorState {
        self.state
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}
