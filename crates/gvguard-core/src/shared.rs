// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Shared GV Guard Handle
// ─────────────────────────────────────────────────────────────────────
//! Cloneable handle that serializes `step` calls from several threads
//! onto one [`RiskAccumulator`].
//!
//! The accumulator itself carries no lock. Hosts whose tool loop spans
//! threads but tracks a single risk trajectory wrap it here instead.

use std::sync::Arc;

use parking_lot::Mutex;

use gvguard_types::{AccumulatorState, Decision, GuardConfig, TelemetrySample};

use crate::guard::RiskAccumulator;

/// Thread-safe: every operation takes the `parking_lot::Mutex` once.
#[derive(Debug, Clone)]
pub struct SharedGuard {
    inner: Arc<Mutex<RiskAccumulator>>,
}

impl SharedGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self::from_guard(RiskAccumulator::new(config))
    }

    pub fn from_guard(guard: RiskAccumulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(guard)),
        }
    }

    pub fn step(&self, sample: &TelemetrySample) -> Decision {
        self.inner.lock().step(sample)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn state(&self) -> AccumulatorState {
        self.inner.lock().state()
    }
}

impl Default for SharedGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}
