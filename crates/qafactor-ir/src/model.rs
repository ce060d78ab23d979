//! Spin-valued binary quadratic model.
//!
//! The model is the objective handed to a sampler:
//!
//! ```text
//!   E(s) = offset + Σ h_q·s_q + Σ J_qr·s_q·s_r      s ∈ {-1, +1}
//! ```
//!
//! Couplings are stored symmetrically (both `q → r` and `r → q`) so that
//! fixing a variable only touches its own neighbourhood.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::{QubitId, Spin};

/// A spin-valued binary quadratic model over physical qubits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ModelRecord", from = "ModelRecord")]
pub struct QuadraticModel {
    /// Linear bias per variable. Every variable has an entry, possibly 0.
    linear: BTreeMap<QubitId, f64>,
    /// Symmetric adjacency: `adjacency[q][r] == adjacency[r][q] == J_qr`.
    adjacency: BTreeMap<QubitId, BTreeMap<QubitId, f64>>,
    /// Constant energy term.
    offset: f64,
}

impl QuadraticModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, accumulating `bias` onto any existing linear bias.
    pub fn add_variable(&mut self, qubit: QubitId, bias: f64) {
        *self.linear.entry(qubit).or_insert(0.0) += bias;
        self.adjacency.entry(qubit).or_default();
    }

    /// Add a coupling, accumulating onto any existing coupling.
    ///
    /// Both endpoints become variables of the model if they are not yet.
    pub fn add_interaction(&mut self, a: QubitId, b: QubitId, strength: f64) -> IrResult<()> {
        if a == b {
            return Err(IrError::SelfCoupling(a));
        }
        self.add_variable(a, 0.0);
        self.add_variable(b, 0.0);
        *self.adjacency.entry(a).or_default().entry(b).or_insert(0.0) += strength;
        *self.adjacency.entry(b).or_default().entry(a).or_insert(0.0) += strength;
        Ok(())
    }

    /// Add a constant to the energy offset.
    pub fn add_offset(&mut self, value: f64) {
        self.offset += value;
    }

    /// Linear bias of a variable.
    pub fn linear(&self, qubit: QubitId) -> Option<f64> {
        self.linear.get(&qubit).copied()
    }

    /// Coupling strength between two variables, if they are coupled.
    pub fn quadratic(&self, a: QubitId, b: QubitId) -> Option<f64> {
        self.adjacency.get(&a).and_then(|n| n.get(&b)).copied()
    }

    /// Constant energy term.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Check whether a qubit is a variable of the model.
    pub fn contains(&self, qubit: QubitId) -> bool {
        self.linear.contains_key(&qubit)
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Number of couplings (each unordered pair counted once).
    pub fn num_interactions(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Variables in ascending qubit order.
    pub fn variables(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.linear.keys().copied()
    }

    /// `(qubit, bias)` pairs in ascending qubit order.
    pub fn linear_terms(&self) -> impl Iterator<Item = (QubitId, f64)> + '_ {
        self.linear.iter().map(|(&q, &h)| (q, h))
    }

    /// Couplings as `(a, b, J)` with `a < b`.
    pub fn interactions(&self) -> impl Iterator<Item = (QubitId, QubitId, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&a, neighbors)| {
            neighbors
                .iter()
                .filter(move |&(&b, _)| a < b)
                .map(move |(&b, &j)| (a, b, j))
        })
    }

    /// Neighbours of a variable with their coupling strengths.
    pub fn neighbors(&self, qubit: QubitId) -> impl Iterator<Item = (QubitId, f64)> + '_ {
        self.adjacency
            .get(&qubit)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&r, &j)| (r, j)))
    }

    /// Clamp a variable to a spin value and remove it from the model.
    ///
    /// `h_q·s` moves into the offset and each `J_qr·s` into `h_r`.
    pub fn fix_variable(&mut self, qubit: QubitId, value: Spin) -> IrResult<()> {
        let bias = self
            .linear
            .remove(&qubit)
            .ok_or(IrError::UnknownVariable(qubit))?;
        let s = value.value();
        self.offset += bias * s;

        let neighbors = self.adjacency.remove(&qubit).unwrap_or_default();
        for (other, strength) in neighbors {
            *self.linear.entry(other).or_insert(0.0) += strength * s;
            if let Some(back) = self.adjacency.get_mut(&other) {
                back.remove(&qubit);
            }
        }
        Ok(())
    }

    /// Energy of a full assignment.
    ///
    /// Fails if the assignment lacks a value for any variable.
    pub fn energy(&self, assignment: &FxHashMap<QubitId, Spin>) -> IrResult<f64> {
        let spin = |q: QubitId| {
            assignment
                .get(&q)
                .map(|s| s.value())
                .ok_or(IrError::UnknownVariable(q))
        };

        let mut energy = self.offset;
        for (q, h) in self.linear_terms() {
            energy += h * spin(q)?;
        }
        for (a, b, j) in self.interactions() {
            energy += j * spin(a)? * spin(b)?;
        }
        Ok(energy)
    }
}

/// Wire form of [`QuadraticModel`]: couplings as a flat list because JSON
/// object keys cannot be pairs.
#[derive(Serialize, Deserialize)]
struct ModelRecord {
    linear: BTreeMap<QubitId, f64>,
    quadratic: Vec<(QubitId, QubitId, f64)>,
    offset: f64,
}

impl From<QuadraticModel> for ModelRecord {
    fn from(model: QuadraticModel) -> Self {
        Self {
            quadratic: model.interactions().collect(),
            linear: model.linear,
            offset: model.offset,
        }
    }
}

impl From<ModelRecord> for QuadraticModel {
    fn from(record: ModelRecord) -> Self {
        let mut model = QuadraticModel::new();
        for (q, h) in record.linear {
            model.add_variable(q, h);
        }
        for (a, b, j) in record.quadratic {
            // Self-couplings cannot be produced by `interactions()`; drop them.
            let _ = model.add_interaction(a, b, j);
        }
        model.offset = record.offset;
        model
    }
}
