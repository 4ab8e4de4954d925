// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Telemetry Sample
// ─────────────────────────────────────────────────────────────────────
//! Telemetry captured from an agent or tool loop between two guard steps.
//!
//! Fields are deliberately coarse and observable from outside the
//! model: counters since the previous step plus the current recursion
//! depth and an optional wall-clock latency.

use serde::{Deserialize, Serialize};

/// One telemetry sample supplied by the host.
///
/// Every field defaults to zero; `latency_ms` defaults to absent.
/// Unknown fields are rejected so a misspelled counter cannot silently
/// read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetrySample {
    /// Tokens generated since the last step.
    pub token_delta: f64,
    /// Tool calls since the last step.
    pub tool_calls_delta: f64,
    /// Errors or exceptions since the last step.
    pub error_delta: f64,
    /// Repeated identical actions since the last step.
    pub repeated_action_delta: f64,
    /// Current recursion depth.
    pub recursion_depth: f64,
    /// Wall-clock latency of the step, if measured.
    pub latency_ms: Option<f64>,
}

#[inline]
fn non_negative(value: f64) -> f64 {
    // NaN fails the comparison and reads as zero.
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

impl TelemetrySample {
    /// Copy of this sample with every field forced to be non-negative.
    ///
    /// Negative and NaN values read as zero; `+Inf` is kept and left for
    /// the score clamp to resolve.
    pub fn clamp_nonnegative(&self) -> Self {
        Self {
            token_delta: non_negative(self.token_delta),
            tool_calls_delta: non_negative(self.tool_calls_delta),
            error_delta: non_negative(self.error_delta),
            repeated_action_delta: non_negative(self.repeated_action_delta),
            recursion_depth: non_negative(self.recursion_depth),
            latency_ms: self.latency_ms.map(non_negative),
        }
    }
}
