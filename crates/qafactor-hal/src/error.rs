//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in sampler operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Sampler is not available.
    #[error("Sampler not available: {0}")]
    SamplerUnavailable(String),

    /// The problem violates the sampler's constraints.
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Invalid number of reads.
    #[error("Invalid number of reads: {0}")]
    InvalidReads(String),

    /// Sampling failed on the device side.
    #[error("Sampling failed: {0}")]
    SamplingFailed(String),

    /// Timeout waiting for the sample batch.
    #[error("Timeout after {0} seconds waiting for samples")]
    Timeout(u64),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from the model or sample types.
    #[error("Model error: {0}")]
    Ir(#[from] qafactor_ir::IrError),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
