//! Sampler property introspection.
//!
//! A sampler reports, once, what the factoring core needs to know about
//! the device: the shape of its hardware graph, which qubits and couplers
//! work, and the feasible anneal-offset interval of every qubit. The
//! layout follows what annealing devices publish as solver properties:
//!
//! ```text
//! {
//!   "topology": { "type": "chimera", "shape": [16, 16, 4] },
//!   "qubits": [0, 1, 2, ...],
//!   "couplers": [[0, 4], [0, 5], ...],
//!   "anneal_offset_ranges": [[-0.18, 0.04], ...],
//!   ...
//! }
//! ```
//!
//! All couplers are undirected.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use qafactor_ir::QuadraticModel;

use crate::error::{HalError, HalResult};

/// Hardware graph family and its shape, as reported by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyDescriptor {
    /// Graph family, e.g. `"chimera"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Family-specific shape parameters.
    pub shape: Vec<u32>,
}

impl TopologyDescriptor {
    /// Descriptor for a Chimera graph of `rows × cols` tiles with
    /// `shore` qubits per sub-lattice.
    pub fn chimera(rows: u32, cols: u32, shore: u32) -> Self {
        Self {
            kind: "chimera".into(),
            shape: vec![rows, cols, shore],
        }
    }

    /// Interpret the descriptor as Chimera `[rows, cols, shore]`.
    pub fn as_chimera(&self) -> HalResult<[u32; 3]> {
        match (self.kind.as_str(), self.shape.as_slice()) {
            ("chimera", &[rows, cols, shore]) => Ok([rows, cols, shore]),
            ("chimera", other) => Err(HalError::Configuration(format!(
                "chimera shape needs 3 parameters, got {}",
                other.len()
            ))),
            (kind, _) => Err(HalError::Configuration(format!(
                "unsupported topology type '{kind}'"
            ))),
        }
    }
}

/// Properties of a sampler.
///
/// Cached by the sampler at construction; [`Sampler::properties`] is
/// synchronous and infallible.
///
/// [`Sampler::properties`]: crate::Sampler::properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerProperties {
    /// Name of the solver.
    pub name: String,
    /// Hardware graph family and shape.
    pub topology: TopologyDescriptor,
    /// Working qubits (linear indices).
    pub qubits: Vec<u32>,
    /// Working couplers.
    pub couplers: Vec<(u32, u32)>,
    /// Feasible `[min, max]` anneal offset per linear index, covering the
    /// whole index space including non-working qubits.
    pub anneal_offset_ranges: Vec<[f64; 2]>,
    /// Maximum reads per request.
    pub max_reads: u32,
    /// Whether this is a simulator (`true`) or a physical device (`false`).
    pub is_simulator: bool,
}

impl SamplerProperties {
    /// Number of entries in the linear index space.
    pub fn num_qubits(&self) -> usize {
        self.anneal_offset_ranges.len()
    }

    /// Check a request against the device constraints before sampling.
    ///
    /// - `num_reads` in `1..=max_reads`
    /// - one anneal offset per linear index, each inside its range
    /// - every model variable is a working qubit
    /// - every model coupling is a working coupler
    pub fn validate_problem(
        &self,
        model: &QuadraticModel,
        anneal_offsets: &[f64],
        num_reads: u32,
    ) -> HalResult<()> {
        if num_reads == 0 || num_reads > self.max_reads {
            return Err(HalError::InvalidReads(format!(
                "{num_reads} requested, allowed range is 1..={}",
                self.max_reads
            )));
        }

        if !anneal_offsets.is_empty() {
            if anneal_offsets.len() != self.num_qubits() {
                return Err(HalError::InvalidProblem(format!(
                    "expected {} anneal offsets, got {}",
                    self.num_qubits(),
                    anneal_offsets.len()
                )));
            }
            for (q, (&offset, &[lo, hi])) in anneal_offsets
                .iter()
                .zip(&self.anneal_offset_ranges)
                .enumerate()
            {
                if !(lo..=hi).contains(&offset) {
                    return Err(HalError::InvalidProblem(format!(
                        "anneal offset {offset} on qubit {q} outside [{lo}, {hi}]"
                    )));
                }
            }
        }

        let qubits: FxHashSet<u32> = self.qubits.iter().copied().collect();
        if let Some(q) = model.variables().find(|q| !qubits.contains(&q.0)) {
            return Err(HalError::InvalidProblem(format!(
                "{q} is not a working qubit"
            )));
        }

        let couplers: FxHashSet<(u32, u32)> = self
            .couplers
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        if let Some((a, b, _)) = model
            .interactions()
            .find(|(a, b, _)| !couplers.contains(&(a.0.min(b.0), a.0.max(b.0))))
        {
            return Err(HalError::InvalidProblem(format!(
                "no working coupler between {a} and {b}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qafactor_ir::QubitId;

    fn tiny_properties() -> SamplerProperties {
        SamplerProperties {
            name: "tiny".into(),
            topology: TopologyDescriptor::chimera(1, 1, 1),
            qubits: vec![0, 1],
            couplers: vec![(0, 1)],
            anneal_offset_ranges: vec![[-0.1, 0.1], [-0.2, 0.05]],
            max_reads: 100,
            is_simulator: true,
        }
    }

    fn coupled_model() -> QuadraticModel {
        let mut model = QuadraticModel::new();
        model.add_interaction(QubitId(0), QubitId(1), -1.0).unwrap();
        model
    }

    #[test]
    fn test_descriptor_roundtrip() {
        let descriptor = TopologyDescriptor::chimera(16, 16, 4);
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "chimera");
        assert_eq!(descriptor.as_chimera().unwrap(), [16, 16, 4]);
    }

    #[test]
    fn test_descriptor_rejects_other_families() {
        let descriptor = TopologyDescriptor {
            kind: "pegasus".into(),
            shape: vec![16],
        };
        assert!(matches!(
            descriptor.as_chimera(),
            Err(HalError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_accepts_valid_problem() {
        let props = tiny_properties();
        props
            .validate_problem(&coupled_model(), &[0.05, -0.2], 10)
            .unwrap();
        // Offsets may be omitted entirely.
        props.validate_problem(&coupled_model(), &[], 10).unwrap();
    }

    #[test]
    fn test_validate_rejects_reads() {
        let props = tiny_properties();
        assert!(matches!(
            props.validate_problem(&coupled_model(), &[], 0),
            Err(HalError::InvalidReads(_))
        ));
        assert!(matches!(
            props.validate_problem(&coupled_model(), &[], 101),
            Err(HalError::InvalidReads(_))
        ));
    }

    #[test]
    fn test_validate_rejects_offsets_out_of_range() {
        let props = tiny_properties();
        let result = props.validate_problem(&coupled_model(), &[0.0, 0.06], 1);
        assert!(matches!(result, Err(HalError::InvalidProblem(_))));
    }

    #[test]
    fn test_validate_rejects_missing_coupler() {
        let mut props = tiny_properties();
        props.couplers.clear();
        let result = props.validate_problem(&coupled_model(), &[], 1);
        assert!(matches!(result, Err(HalError::InvalidProblem(_))));
    }
}
