//! Logical-variable to physical-chain embeddings.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use qafactor_ir::QubitId;

use crate::error::{EmbedError, EmbedResult};

/// A mapping from logical variable names to chains of physical qubits.
///
/// Chains are non-empty and pairwise disjoint. Both properties are checked
/// on every insertion and on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<QubitId>>",
    into = "BTreeMap<String, Vec<QubitId>>"
)]
pub struct Embedding {
    chains: BTreeMap<String, Vec<QubitId>>,
    /// Reverse lookup from qubit to owning variable.
    owners: FxHashMap<QubitId, String>,
}

impl Embedding {
    /// Create an empty embedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an embedding from `(variable, chain)` pairs.
    pub fn from_chains<I, S>(chains: I) -> EmbedResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<QubitId>)>,
        S: Into<String>,
    {
        let mut embedding = Self::new();
        for (variable, chain) in chains {
            embedding.insert(variable, chain)?;
        }
        Ok(embedding)
    }

    /// Add a chain for a new variable.
    pub fn insert(&mut self, variable: impl Into<String>, chain: Vec<QubitId>) -> EmbedResult<()> {
        let variable = variable.into();
        if chain.is_empty() {
            return Err(EmbedError::EmptyChain(variable));
        }
        if self.chains.contains_key(&variable) {
            return Err(EmbedError::DuplicateVariable(variable));
        }

        let mut claimed: FxHashMap<QubitId, String> = FxHashMap::default();
        for &q in &chain {
            let previous = self.owners.get(&q).or_else(|| claimed.get(&q));
            if let Some(first) = previous {
                return Err(EmbedError::OverlappingChains {
                    qubit: q,
                    first: first.clone(),
                    second: variable,
                });
            }
            claimed.insert(q, variable.clone());
        }

        self.owners.extend(claimed);
        self.chains.insert(variable, chain);
        Ok(())
    }

    /// Chain of a variable.
    pub fn chain(&self, variable: &str) -> Option<&[QubitId]> {
        self.chains.get(variable).map(Vec::as_slice)
    }

    /// Variable whose chain contains `qubit`.
    pub fn owner(&self, qubit: QubitId) -> Option<&str> {
        self.owners.get(&qubit).map(String::as_str)
    }

    /// Whether the variable is embedded.
    pub fn contains(&self, variable: &str) -> bool {
        self.chains.contains_key(variable)
    }

    /// Number of embedded variables.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether no variable is embedded.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Number of physical qubits across all chains.
    pub fn num_qubits(&self) -> usize {
        self.owners.len()
    }

    /// Iterate over `(variable, chain)` in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[QubitId])> + '_ {
        self.chains
            .iter()
            .map(|(name, chain)| (name.as_str(), chain.as_slice()))
    }

    /// Iterate over every physical qubit used by a chain.
    pub fn used_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.chains.values().flatten().copied()
    }

    /// A copy of this embedding without the given variables.
    pub fn without<S: AsRef<str>>(&self, variables: &[S]) -> Self {
        let mut reduced = self.clone();
        for variable in variables {
            if let Some(chain) = reduced.chains.remove(variable.as_ref()) {
                for q in chain {
                    reduced.owners.remove(&q);
                }
            }
        }
        reduced
    }
}

impl TryFrom<BTreeMap<String, Vec<QubitId>>> for Embedding {
    type Error = EmbedError;

    fn try_from(chains: BTreeMap<String, Vec<QubitId>>) -> EmbedResult<Self> {
        Self::from_chains(chains)
    }
}

impl From<Embedding> for BTreeMap<String, Vec<QubitId>> {
    fn from(embedding: Embedding) -> Self {
        embedding.chains
    }
}
