use thiserror::Error;

/// Failures reported for a single pair. None of them aborts the other pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("diff computation failed: {0}")]
    EngineFailure(String),
    #[error("diff worker is no longer running")]
    WorkerUnavailable,
    #[error("invalid document slot {0}, expected 1, 2 or 3")]
    InvalidSlot(usize),
}
