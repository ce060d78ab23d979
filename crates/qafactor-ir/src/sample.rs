//! Sample sets returned by samplers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::{QubitId, Spin};

/// One distinct read and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    /// Spin values, aligned with [`SampleSet::variables`].
    pub spins: Vec<Spin>,
    /// Number of reads that produced exactly this assignment.
    pub num_occurrences: u32,
    /// Model energy of the assignment, when the sampler reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

/// A batch of reads over a fixed list of qubits.
///
/// Repeated identical reads are meaningful: they are either pushed as
/// separate rows or carried in [`SampleRow::num_occurrences`], and both
/// count the same towards [`total_reads`](Self::total_reads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SampleSetRecord", into = "SampleSetRecord")]
pub struct SampleSet {
    variables: Vec<QubitId>,
    rows: Vec<SampleRow>,
    /// Column lookup, rebuilt on construction and deserialization.
    columns: FxHashMap<QubitId, usize>,
}

impl SampleSet {
    /// Create an empty sample set over the given qubits.
    pub fn new(variables: Vec<QubitId>) -> IrResult<Self> {
        let mut columns = FxHashMap::default();
        for (i, &q) in variables.iter().enumerate() {
            if columns.insert(q, i).is_some() {
                return Err(IrError::DuplicateVariable(q));
            }
        }
        Ok(Self {
            variables,
            rows: Vec::new(),
            columns,
        })
    }

    /// Append a single read.
    pub fn push(&mut self, spins: Vec<Spin>) -> IrResult<()> {
        self.push_row(SampleRow {
            spins,
            num_occurrences: 1,
            energy: None,
        })
    }

    /// Append a read that occurred `num_occurrences` times.
    pub fn push_counted(&mut self, spins: Vec<Spin>, num_occurrences: u32) -> IrResult<()> {
        self.push_row(SampleRow {
            spins,
            num_occurrences,
            energy: None,
        })
    }

    /// Append a fully specified row. Every row must stand for at least
    /// one read.
    pub fn push_row(&mut self, row: SampleRow) -> IrResult<()> {
        if row.spins.len() != self.variables.len() {
            return Err(IrError::SampleLengthMismatch {
                expected: self.variables.len(),
                got: row.spins.len(),
            });
        }
        if row.num_occurrences == 0 {
            return Err(IrError::ZeroOccurrences);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Qubits covered by every row, in column order.
    pub fn variables(&self) -> &[QubitId] {
        &self.variables
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// Number of stored rows (not reads).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of reads, counting occurrences.
    pub fn total_reads(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.num_occurrences)).sum()
    }

    /// Column index of a qubit.
    pub fn column(&self, qubit: QubitId) -> Option<usize> {
        self.columns.get(&qubit).copied()
    }

    /// Spin of `qubit` in `row`.
    pub fn spin(&self, row: &SampleRow, qubit: QubitId) -> Option<Spin> {
        self.column(qubit).and_then(|c| row.spins.get(c).copied())
    }

    /// Merge identical rows, keeping first-occurrence order and summing
    /// their occurrence counts.
    #[must_use]
    pub fn aggregated(&self) -> Self {
        let mut index: FxHashMap<&[Spin], usize> = FxHashMap::default();
        let mut rows: Vec<SampleRow> = Vec::new();
        for row in &self.rows {
            match index.get(row.spins.as_slice()) {
                Some(&i) => {
                    let merged = &mut rows[i].num_occurrences;
                    *merged = merged.saturating_add(row.num_occurrences);
                }
                None => {
                    index.insert(row.spins.as_slice(), rows.len());
                    rows.push(row.clone());
                }
            }
        }
        Self {
            variables: self.variables.clone(),
            rows,
            columns: self.columns.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SampleSetRecord {
    variables: Vec<QubitId>,
    rows: Vec<SampleRow>,
}

impl From<SampleSet> for SampleSetRecord {
    fn from(set: SampleSet) -> Self {
        Self {
            variables: set.variables,
            rows: set.rows,
        }
    }
}

impl TryFrom<SampleSetRecord> for SampleSet {
    type Error = IrError;

    fn try_from(record: SampleSetRecord) -> IrResult<Self> {
        let mut set = SampleSet::new(record.variables)?;
        for row in record.rows {
            set.push_row(row)?;
        }
        Ok(set)
    }
}
