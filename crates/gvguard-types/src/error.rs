// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for the GV runtime guard.
///
/// Scoring itself never fails; only configuration and the
/// host-facing adapters have an error surface.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Invalid or unparseable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Absent or malformed host input (empty stream, bad JSON).
    #[error("input error: {0}")]
    Input(String),

    /// A decision could not be rendered for the host.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type GuardResult<T> = Result<T, GuardError>;
