//! Error types for the embedding crate.

use qafactor_ir::QubitId;
use thiserror::Error;

use crate::topology::ChimeraCoord;

/// Errors that can occur while embedding and scoring placements.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EmbedError {
    /// A logical variable was given no qubits.
    #[error("Chain for variable '{0}' is empty")]
    EmptyChain(String),

    /// A logical variable was inserted twice.
    #[error("Variable '{0}' is already embedded")]
    DuplicateVariable(String),

    /// One physical qubit is claimed by two chains.
    #[error("{qubit} is claimed by both '{first}' and '{second}'")]
    OverlappingChains {
        /// The shared qubit.
        qubit: QubitId,
        /// Variable that claimed it first.
        first: String,
        /// Variable that claimed it second.
        second: String,
    },

    /// A coordinate maps to a qubit that is not working.
    #[error("{0} is not a working qubit")]
    MissingQubit(QubitId),

    /// Two qubits that must be coupled share no working coupler.
    #[error("No working coupler between {0} and {1}")]
    MissingCoupler(QubitId, QubitId),

    /// A coordinate lies outside the hardware shape.
    #[error("Coordinate {0} is outside the hardware graph")]
    CoordinateOutOfRange(ChimeraCoord),

    /// The chain delay base must be finite and at least 1.
    #[error("Invalid delay base {0}: must be finite and >= 1")]
    InvalidDelayBase(f64),

    /// An offset range does not contain 0.
    #[error("Invalid anneal offset range [{min}, {max}] for {qubit}")]
    InvalidOffsetRange {
        /// Qubit the range belongs to.
        qubit: QubitId,
        /// Lower end.
        min: f64,
        /// Upper end.
        max: f64,
    },

    /// A qubit index beyond the hardware index space.
    #[error("{qubit} is out of range (hardware has {len} qubit indices)")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Size of the index space.
        len: usize,
    },

    /// No translation of the pattern fits on the working hardware.
    #[error("No valid placement of the pattern on the hardware graph")]
    NoValidPlacement,

    /// The offset-range linear program has no solution.
    #[error("Offset range fit is infeasible")]
    Infeasible,

    /// The offset-range linear program has no finite optimum.
    #[error("Offset range fit is unbounded")]
    Unbounded,
}

impl EmbedError {
    /// Whether the caller supplied input that can never succeed.
    pub fn is_configuration(&self) -> bool {
        !self.is_infeasible()
    }

    /// Whether the offset-range optimization failed.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible | Self::Unbounded)
    }

    /// Whether the error rules out one pattern translation, as opposed to
    /// the pattern or the configuration as a whole.
    pub(crate) fn is_invalid_translation(&self) -> bool {
        matches!(
            self,
            Self::MissingQubit(_) | Self::MissingCoupler(..) | Self::CoordinateOutOfRange(_)
        )
    }
}

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
