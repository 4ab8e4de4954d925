// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Strain Computer
// ─────────────────────────────────────────────────────────────────────
//! Per-step strain from a telemetry sample.
//!
//! Strain is a weighted linear combination of the sample's counters:
//!
//! ```text
//! strain = w_tokens*tokens + w_tool_calls*tool_calls + w_errors*errors
//!        + w_repeat*repeats + w_recursion*depth
//!        + latency_penalty   (only when latency_ms > latency_threshold_ms)
//! ```
//!
//! Errors carry the highest default weight, raw token volume the lowest.

use gvguard_types::score::clamp_score;
use gvguard_types::{GuardConfig, TelemetrySample};

/// `w * x`, with a zero weight silencing the term even for `x = +Inf`.
#[inline]
fn weighted(w: f64, x: f64) -> f64 {
    if w == 0.0 {
        0.0
    } else {
        w * x
    }
}

/// Compute the non-negative strain contributed by one sample.
///
/// Fields are clamped to be non-negative before weighting. The result
/// is never negative or NaN; it may be `+Inf` if a field is.
pub fn compute_strain(sample: &TelemetrySample, config: &GuardConfig) -> f64 {
    let s = sample.clamp_nonnegative();

    let mut strain = 0.0;
    strain += weighted(config.w_tokens, s.token_delta);
    strain += weighted(config.w_tool_calls, s.tool_calls_delta);
    strain += weighted(config.w_errors, s.error_delta);
    strain += weighted(config.w_repeat, s.repeated_action_delta);
    strain += weighted(config.w_recursion, s.recursion_depth);

    // Slow steps often correlate with thrash.
    if let Some(latency) = s.latency_ms {
        if latency > config.latency_threshold_ms {
            strain += config.latency_penalty;
        }
    }

    clamp_score(strain, 0.0, f64::INFINITY)
}
