// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Band Classifier
// ─────────────────────────────────────────────────────────────────────
//! Score → (band, recommended actions).
//!
//! One classifier serves both scoring schemes; the `ClassifierScheme`
//! variant selects the thresholds and the action representation.

use gvguard_types::{Action, ClassificationResult, ClassifierScheme, RiskBand};

/// Band for `score` given the lower bounds of yellow and red.
///
/// Comparisons are `>=`, so a score on a boundary takes the more
/// severe band. NaN compares false everywhere and lands in green.
#[inline]
pub fn band_for(score: f64, yellow_at: f64, red_at: f64) -> RiskBand {
    if score >= red_at {
        RiskBand::Red
    } else if score >= yellow_at {
        RiskBand::Yellow
    } else {
        RiskBand::Green
    }
}

/// Single recommended action used by the accumulating guard.
pub fn guard_action(band: RiskBand) -> Action {
    match band {
        RiskBand::Green => Action::Continue,
        RiskBand::Yellow => Action::Slow,
        RiskBand::Red => Action::Halt,
    }
}

/// Ordered action tags used by the Sentinel.
pub fn sentinel_actions(band: RiskBand) -> Vec<Action> {
    match band {
        RiskBand::Green => Vec::new(),
        RiskBand::Yellow => vec![Action::Alert],
        RiskBand::Red => vec![Action::Alert, Action::Throttle, Action::RequireHumanReview],
    }
}

/// Classify a score under the given scheme. Total over all `f64`.
pub fn classify(score: f64, scheme: &ClassifierScheme) -> ClassificationResult {
    let (yellow_at, red_at) = scheme.thresholds();
    let band = band_for(score, yellow_at, red_at);
    let actions = match scheme {
        ClassifierScheme::Sentinel { .. } => sentinel_actions(band),
        ClassifierScheme::Guard { .. } => vec![guard_action(band)],
    };
    ClassificationResult { band, actions }
}

/// Classify a normalized 0–1 score with the default Sentinel thresholds.
pub fn classify_one_shot(score: f64) -> ClassificationResult {
    classify(score, &ClassifierScheme::SENTINEL)
}
