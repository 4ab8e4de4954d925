// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Sentinel (One-shot Averaging Scorer)
// ─────────────────────────────────────────────────────────────────────
//! Stateless GV scoring from normalized risk signals.
//!
//! GV is the mean signal relative to the system's ability to constrain
//! it: `min(mean / max(constraint_strength, 0.01), 1.0)`, rounded to
//! three decimals. Unlike the accumulating guard there is no memory
//! between calls, only an append-only record history.

use chrono::Utc;
use indexmap::IndexMap;

use gvguard_types::score::{clamp_score, round_to};
use gvguard_types::{SentinelConfig, SentinelRecord};

use crate::classifier::classify;

/// Decimal places of a Sentinel score.
const SCORE_PRECISION: i32 = 3;

/// Compute GV from signal values, summed in iteration order.
///
/// No signals gives exactly 0.0. The result is always in [0, 1]; a
/// non-finite mean clamps the same way as the guard score.
pub fn compute_gv<I>(values: I, constraint_strength: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        return 0.0;
    }

    let average_strain = sum / count as f64;
    let effective_constraint = SentinelConfig::with_strength(constraint_strength).effective_strength();
    let gv = clamp_score(average_strain / effective_constraint, 0.0, 1.0);

    round_to(gv, SCORE_PRECISION)
}

/// Runtime monitor producing one classified GV record per evaluation.
#[derive(Debug, Clone)]
pub struct Sentinel {
    system_id: String,
    config: SentinelConfig,
    history: Vec<SentinelRecord>,
}

impl Sentinel {
    pub fn new(system_id: impl Into<String>, config: SentinelConfig) -> Self {
        Self {
            system_id: system_id.into(),
            config,
            history: Vec::new(),
        }
    }

    pub fn with_strength(system_id: impl Into<String>, constraint_strength: f64) -> Self {
        Self::new(system_id, SentinelConfig::with_strength(constraint_strength))
    }

    /// Score, classify and record the given signals.
    ///
    /// Signals keep the order they are supplied in; a repeated name
    /// keeps its first position and its last value.
    pub fn evaluate<I, K>(&mut self, signals: I) -> SentinelRecord
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let signals: IndexMap<String, f64> =
            signals.into_iter().map(|(k, v)| (k.into(), v)).collect();

        let score = compute_gv(signals.values().copied(), self.config.constraint_strength);
        let classification = classify(score, &self.config.scheme());

        log::debug!(
            "Sentinel {}: {} signals -> gv={score:.3} ({})",
            self.system_id,
            signals.len(),
            classification.band
        );

        let record = SentinelRecord {
            system_id: self.system_id.clone(),
            score,
            band: classification.band,
            actions: classification.actions,
            signals,
            timestamp: Utc::now(),
        };

        self.history.push(record.clone());
        record
    }

    /// Every record produced so far, oldest first.
    pub fn history(&self) -> &[SentinelRecord] {
        &self.history
    }

    pub fn latest(&self) -> Option<&SentinelRecord> {
        self.history.last()
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    pub fn config(&self) -> &SentinelConfig {
        &self.config
    }
}
