//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in model and sample operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Variable not present in the model.
    #[error("Qubit {0} is not a variable of the model")]
    UnknownVariable(QubitId),

    /// A coupling was requested between a qubit and itself.
    #[error("Cannot couple qubit {0} to itself")]
    SelfCoupling(QubitId),

    /// A spin value outside {-1, +1}.
    #[error("Invalid spin value {0}, expected -1 or +1")]
    InvalidSpin(i64),

    /// Sample row length does not match the sample set's variable list.
    #[error("Sample has {got} values but the sample set has {expected} variables")]
    SampleLengthMismatch {
        /// Number of variables in the sample set.
        expected: usize,
        /// Number of values in the offending row.
        got: usize,
    },

    /// The same qubit appears twice in a sample set's variable list.
    #[error("Qubit {0} appears more than once in the sample variables")]
    DuplicateVariable(QubitId),

    /// A sample row claims zero reads.
    #[error("Sample row has zero occurrences")]
    ZeroOccurrences,
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
