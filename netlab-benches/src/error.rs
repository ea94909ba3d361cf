//! Benchmark setup error type.

use netlab_core::EpidemicError;

/// Errors that may occur while preparing benchmark fixtures.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Epidemic parameters were rejected.
    #[error("epidemic setup failed: {0}")]
    Epidemic(#[from] EpidemicError),
}
