//! Qubit identifiers and spin values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Physical qubit in the hardware's linear indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The linear index as a `usize`, for indexing dense per-qubit tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// A spin value.
///
/// Serialized as the integers `-1` and `1`, which is how samplers report
/// spin-valued reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Spin {
    /// -1, the binary 0 state.
    Down,
    /// +1, the binary 1 state.
    Up,
}

impl Spin {
    /// Spin for a binary value (`true` → +1).
    pub fn from_bit(bit: bool) -> Self {
        if bit { Spin::Up } else { Spin::Down }
    }

    /// Binary value of this spin (+1 → `true`).
    pub fn to_bit(self) -> bool {
        matches!(self, Spin::Up)
    }

    /// Numeric value, -1.0 or 1.0.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Spin::Down => -1.0,
            Spin::Up => 1.0,
        }
    }

    /// The opposite spin.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Spin::Down => Spin::Up,
            Spin::Up => Spin::Down,
        }
    }
}

impl TryFrom<i8> for Spin {
    type Error = IrError;

    fn try_from(value: i8) -> IrResult<Self> {
        match value {
            -1 => Ok(Spin::Down),
            1 => Ok(Spin::Up),
            other => Err(IrError::InvalidSpin(i64::from(other))),
        }
    }
}

impl From<Spin> for i8 {
    fn from(spin: Spin) -> Self {
        match spin {
            Spin::Down => -1,
            Spin::Up => 1,
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i8::from(*self))
    }
}
