// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Strain computation, damped risk accumulation, and band
//! classification for agent/tool-loop telemetry.
//!
//! The guard is advisory: it returns a recommended action and never
//! throttles or halts anything itself.
//!
//! # Invariants
//!
//! 1. **No failure path on numeric input**: negative and NaN telemetry
//!    reads as zero, a NaN score clamps to the floor, `+Inf` to the
//!    ceiling. `step()` and `evaluate()` cannot return an error.
//!
//! 2. **One mutation per step**: `RiskAccumulator::step` updates score
//!    and step counter exactly once; step counters strictly increase.
//!
//! 3. **Monotone in strain**: the update is linear before the clamp, so
//!    raising any telemetry counter never lowers the next score.
//!
//! 4. **Boundaries escalate**: a score equal to a band threshold belongs
//!    to the more severe band.

pub mod classifier;
pub mod guard;
pub mod sentinel;
pub mod shared;
pub mod strain;

pub use classifier::{classify, classify_one_shot, guard_action};
pub use guard::RiskAccumulator;
pub use sentinel::{compute_gv, Sentinel};
pub use shared::SharedGuard;
pub use strain::compute_strain;
