// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Score Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetrySample;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
///
/// Total for any bounds: `lo` wins when `lo > hi`, and a NaN bound is
/// ignored by the comparison.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.min(hi).max(lo)
}

/// Round to `places` decimal places. Non-finite values pass through.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Risk band, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Green,
    Yellow,
    Red,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory action tag. The guard recommends; the host enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Continue,
    Slow,
    Halt,
    Alert,
    Throttle,
    RequireHumanReview,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Slow => "slow",
            Self::Halt => "halt",
            Self::Alert => "alert",
            Self::Throttle => "throttle",
            Self::RequireHumanReview => "require_human_review",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band plus the ordered actions recommended for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub band: RiskBand,
    pub actions: Vec<Action>,
}

impl ClassificationResult {
    /// First recommended action, if any. Single-action schemes always
    /// have exactly one.
    pub fn primary_action(&self) -> Option<Action> {
        self.actions.first().copied()
    }

    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// Accumulator state: current score and number of completed steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorState {
    pub score: f64,
    pub step_count: u64,
}

/// Output of one guard step.
///
/// `score` and `strain` are rounded to 4 decimal places. An infinite
/// strain serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub step_count: u64,
    pub score: f64,
    pub strain: f64,
    pub band: RiskBand,
    pub recommended_action: Action,
    /// The sample as read, after negative fields were clamped to zero.
    pub telemetry: TelemetrySample,
}

/// Output of one Sentinel evaluation, also kept in its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelRecord {
    pub system_id: String,
    /// Normalized score in [0, 1], rounded to 3 decimal places.
    pub score: f64,
    pub band: RiskBand,
    pub actions: Vec<Action>,
    /// Signals in the order the host supplied them.
    pub signals: IndexMap<String, f64>,
    pub timestamp: DateTime<Utc>,
}
