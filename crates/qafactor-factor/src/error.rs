//! Error types for the factoring crate.

use qafactor_embed::{ChimeraCoord, EmbedError};
use qafactor_hal::HalError;
use qafactor_ir::{IrError, QubitId};
use thiserror::Error;

/// Errors that can occur while building, sampling and decoding a
/// factoring problem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactorError {
    /// The product needs more bits than the multiplier has.
    #[error("Product {product} is out of range (largest representable is {max})")]
    ProductOutOfRange {
        /// Requested product.
        product: u64,
        /// Largest representable product.
        max: u64,
    },

    /// A template site does not land in its variable's chain.
    #[error("Template site {coord} of '{variable}' is not in the embedded chain")]
    TemplateMismatch {
        /// Variable of the site.
        variable: String,
        /// Translated coordinate of the site.
        coord: ChimeraCoord,
    },

    /// A template coupling joins two qubits without a working coupler.
    #[error("Coupling between {0} and {1} is not a hardware edge")]
    NonAdjacentCoupling(QubitId, QubitId),

    /// A variable the multiplier needs is absent from the embedding.
    #[error("Variable '{0}' is not embedded")]
    MissingVariable(String),

    /// A sample set lacks an embedded qubit.
    #[error("Samples have no value for embedded {0}")]
    SampleMissingQubit(QubitId),

    /// Embedding, offset or placement failure.
    #[error("Embedding error: {0}")]
    Embed(#[from] EmbedError),

    /// Failure reported by the sampler.
    #[error("Sampler error: {0}")]
    Sampler(#[from] HalError),

    /// Model or sample error.
    #[error("Model error: {0}")]
    Ir(#[from] IrError),
}

impl FactorError {
    /// Whether the caller supplied input that can never succeed.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::ProductOutOfRange { .. }
            | Self::TemplateMismatch { .. }
            | Self::NonAdjacentCoupling(..)
            | Self::MissingVariable(_)
            | Self::SampleMissingQubit(_) => true,
            Self::Embed(err) => err.is_configuration(),
            Self::Sampler(_) | Self::Ir(_) => false,
        }
    }
}

/// Result type for factoring operations.
pub type FactorResult<T> = Result<T, FactorError>;
