// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Lower bound applied to the Sentinel constraint strength before division.
pub const MIN_CONSTRAINT_STRENGTH: f64 = 0.01;

/// Threshold scheme for the three-band classifier.
///
/// Both variants share the green/yellow/red structure; they differ in
/// scale and in how recommended actions are represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ClassifierScheme {
    /// Normalized 0–1 scale. Each band maps to an ordered list of action tags.
    Sentinel { yellow_at: f64, red_at: f64 },
    /// 0–100 accumulator scale. Each band maps to exactly one action.
    Guard { yellow_at: f64, red_at: f64 },
}

impl ClassifierScheme {
    /// Default Sentinel scheme: yellow at 0.5, red at 0.75.
    pub const SENTINEL: Self = Self::Sentinel {
        yellow_at: 0.5,
        red_at: 0.75,
    };

    /// Default guard scheme: yellow at 35, red at 70.
    pub const GUARD: Self = Self::Guard {
        yellow_at: 35.0,
        red_at: 70.0,
    };

    /// `(yellow_at, red_at)` lower bounds.
    pub fn thresholds(&self) -> (f64, f64) {
        match *self {
            Self::Sentinel { yellow_at, red_at } | Self::Guard { yellow_at, red_at } => {
                (yellow_at, red_at)
            }
        }
    }

    fn validate(&self) -> GuardResult<()> {
        let (yellow_at, red_at) = self.thresholds();
        if !yellow_at.is_finite() || !red_at.is_finite() {
            return Err(GuardError::Config(format!(
                "band thresholds must be finite, got yellow_at={yellow_at}, red_at={red_at}"
            )));
        }
        if yellow_at >= red_at {
            return Err(GuardError::Config(format!(
                "yellow_at must be < red_at, got {yellow_at} >= {red_at}"
            )));
        }
        Ok(())
    }
}

/// Tunable parameters for the accumulating runtime guard.
///
/// Immutable once handed to a guard. Partial JSON is accepted; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Fraction of the current score removed each step.
    /// Default: 0.06.
    pub damping: f64,

    /// Hard lower bound of the score. Default: 0.0.
    pub floor: f64,

    /// Hard upper bound of the score. Default: 100.0.
    pub ceiling: f64,

    /// Strain per generated token. Default: 0.002.
    pub w_tokens: f64,

    /// Strain per tool call. Default: 1.25.
    pub w_tool_calls: f64,

    /// Strain per error. Default: 3.0.
    pub w_errors: f64,

    /// Strain per repeated identical action. Default: 0.9.
    pub w_repeat: f64,

    /// Strain per level of recursion depth. Default: 0.6.
    pub w_recursion: f64,

    /// Latency above which the penalty applies (exclusive). Default: 1500 ms.
    pub latency_threshold_ms: f64,

    /// Flat strain added for a slow step. Default: 0.5.
    pub latency_penalty: f64,

    /// Score at which the band becomes yellow. Default: 35.0.
    pub yellow_at: f64,

    /// Score at which the band becomes red. Default: 70.0.
    pub red_at: f64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            damping: 0.06,
            floor: 0.0,
            ceiling: 100.0,
            w_tokens: 0.002,
            w_tool_calls: 1.25,
            w_errors: 3.0,
            w_repeat: 0.9,
            w_recursion: 0.6,
            latency_threshold_ms: 1500.0,
            latency_penalty: 0.5,
            yellow_at: 35.0,
            red_at: 70.0,
        }
    }
}

impl GuardConfig {
    /// Classifier scheme built from this config's band thresholds.
    pub fn scheme(&self) -> ClassifierScheme {
        ClassifierScheme::Guard {
            yellow_at: self.yellow_at,
            red_at: self.red_at,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> GuardResult<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(GuardError::Config(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if !self.floor.is_finite() || !self.ceiling.is_finite() {
            return Err(GuardError::Config(format!(
                "floor and ceiling must be finite, got {} and {}",
                self.floor, self.ceiling
            )));
        }
        // Damping pulls toward zero; a negative floor would let it pull upward.
        if self.floor < 0.0 {
            return Err(GuardError::Config(format!(
                "floor must be >= 0, got {}",
                self.floor
            )));
        }
        if self.floor >= self.ceiling {
            return Err(GuardError::Config(format!(
                "floor must be < ceiling, got {} >= {}",
                self.floor, self.ceiling
            )));
        }
        let weights = [
            ("w_tokens", self.w_tokens),
            ("w_tool_calls", self.w_tool_calls),
            ("w_errors", self.w_errors),
            ("w_repeat", self.w_repeat),
            ("w_recursion", self.w_recursion),
            ("latency_penalty", self.latency_penalty),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(GuardError::Config(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if self.latency_threshold_ms.is_nan() || self.latency_threshold_ms < 0.0 {
            return Err(GuardError::Config(format!(
                "latency_threshold_ms must be >= 0, got {}",
                self.latency_threshold_ms
            )));
        }
        self.scheme().validate()
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> GuardResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GuardError::Config(format!("JSON parse error: {e}")))
    }
}

/// Parameters for the one-shot averaging Sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Overall strength of the system's constraints. The mean signal is
    /// divided by `max(constraint_strength, 0.01)`. Default: 0.8.
    pub constraint_strength: f64,

    /// Default: 0.5.
    pub yellow_at: f64,

    /// Default: 0.75.
    pub red_at: f64,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            constraint_strength: 0.8,
            yellow_at: 0.5,
            red_at: 0.75,
        }
    }
}

impl SentinelConfig {
    pub fn with_strength(constraint_strength: f64) -> Self {
        Self {
            constraint_strength,
            ..Self::default()
        }
    }

    pub fn scheme(&self) -> ClassifierScheme {
        ClassifierScheme::Sentinel {
            yellow_at: self.yellow_at,
            red_at: self.red_at,
        }
    }

    /// Constraint strength after applying the 0.01 floor.
    ///
    /// NaN reads as the floor so the division stays finite.
    pub fn effective_strength(&self) -> f64 {
        if self.constraint_strength.is_nan() {
            return MIN_CONSTRAINT_STRENGTH;
        }
        self.constraint_strength.max(MIN_CONSTRAINT_STRENGTH)
    }

    pub fn validate(&self) -> GuardResult<()> {
        if !self.constraint_strength.is_finite() {
            return Err(GuardError::Config(format!(
                "constraint_strength must be finite, got {}",
                self.constraint_strength
            )));
        }
        self.scheme().validate()
    }

    pub fn from_json(json: &str) -> GuardResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GuardError::Config(format!("JSON parse error: {e}")))
    }
}
