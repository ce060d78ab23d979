//! Anneal offsets for embedded chains.
//!
//! Two steps turn an embedding into the per-qubit offsets a sampler takes:
//!
//! 1. [`ideal_offsets`] assigns every chain qubit an unnormalized advance
//!    in `[-1, 0]` from the length of its chain.
//! 2. [`fit_offsets`] maps the advances affinely into each qubit's
//!    feasible [`OffsetRanges`] entry, maximizing the scale.

mod chain;
mod fit;
mod lp;

pub(crate) use chain::check_delay_base;
pub use chain::{chain_delay, ideal_offsets};
pub use fit::{OffsetStrategy, WorkingOffsets, fit_offsets};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qafactor_ir::QubitId;

use crate::error::{EmbedError, EmbedResult};

/// Feasible `[min, max]` anneal offset per hardware qubit, indexed by
/// linear qubit index. Every range contains 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct OffsetRanges {
    ranges: Vec<[f64; 2]>,
}

impl OffsetRanges {
    /// Validate and wrap a range table.
    pub fn new(ranges: Vec<[f64; 2]>) -> EmbedResult<Self> {
        for (i, &[min, max]) in ranges.iter().enumerate() {
            if !(min <= 0.0 && 0.0 <= max) {
                return Err(EmbedError::InvalidOffsetRange {
                    qubit: QubitId(i as u32),
                    min,
                    max,
                });
            }
        }
        Ok(Self { ranges })
    }

    /// The same range for `len` qubits.
    pub fn uniform(len: usize, min: f64, max: f64) -> EmbedResult<Self> {
        Self::new(vec![[min, max]; len])
    }

    /// Number of qubits covered.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Range of one qubit.
    pub fn get(&self, qubit: QubitId) -> Option<[f64; 2]> {
        self.ranges.get(qubit.index()).copied()
    }

    /// All ranges in linear index order.
    pub fn as_slice(&self) -> &[[f64; 2]] {
        &self.ranges
    }
}

impl TryFrom<Vec<[f64; 2]>> for OffsetRanges {
    type Error = EmbedError;

    fn try_from(ranges: Vec<[f64; 2]>) -> EmbedResult<Self> {
        Self::new(ranges)
    }
}

impl From<OffsetRanges> for Vec<[f64; 2]> {
    fn from(ranges: OffsetRanges) -> Self {
        ranges.ranges
    }
}

/// Unnormalized per-qubit advances. Qubits outside every chain are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdealOffsets {
    values: BTreeMap<QubitId, f64>,
}

impl IdealOffsets {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the advance of one qubit.
    pub fn insert(&mut self, qubit: QubitId, value: f64) {
        self.values.insert(qubit, value);
    }

    /// Advance of one qubit.
    pub fn get(&self, qubit: QubitId) -> Option<f64> {
        self.values.get(&qubit).copied()
    }

    /// Number of qubits with an advance.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no qubit has an advance.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in qubit order.
    pub fn iter(&self) -> impl Iterator<Item = (QubitId, f64)> + '_ {
        self.values.iter().map(|(&q, &v)| (q, v))
    }
}

impl FromIterator<(QubitId, f64)> for IdealOffsets {
    fn from_iter<T: IntoIterator<Item = (QubitId, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
