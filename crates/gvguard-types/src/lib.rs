// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! GV runtime guard, the advisory risk monitor for agent tool loops.

pub mod config;
pub mod error;
pub mod score;
pub mod telemetry;

pub use config::{ClassifierScheme, GuardConfig, SentinelConfig, MIN_CONSTRAINT_STRENGTH};
pub use error::{GuardError, GuardResult};
pub use score::{
    clamp_score, round_to, Action, AccumulatorState, ClassificationResult, Decision, RiskBand,
    SentinelRecord,
};
pub use telemetry::TelemetrySample;
