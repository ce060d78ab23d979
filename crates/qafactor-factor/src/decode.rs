//! Decoding samples back into multiplicand pairs.
//!
//! Each read is mapped through the embedding: a chain whose qubits agree
//! yields that spin for its variable. The multiplicand bits `a0..a2` and
//! `b0..b2` are read little-endian into integers, and identical `(a, b)`
//! pairs are tallied in order of first appearance.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use qafactor_embed::Embedding;
use qafactor_ir::{SampleSet, Spin};

use crate::error::{FactorError, FactorResult};
use crate::template::{A_BITS, B_BITS};

/// What to do with a chain whose qubits disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainBreakPolicy {
    /// Drop any read with a broken chain.
    #[default]
    Discard,
    /// Take the majority spin of the chain; ties resolve to spin down
    /// (bit 0).
    MajorityVote,
}

impl fmt::Display for ChainBreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard => f.write_str("discard"),
            Self::MajorityVote => f.write_str("majority_vote"),
        }
    }
}

impl FromStr for ChainBreakPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "discard" => Ok(Self::Discard),
            "majority_vote" | "majority" => Ok(Self::MajorityVote),
            other => Err(format!("unknown chain break policy '{other}'")),
        }
    }
}

/// One distinct multiplicand pair and how often it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedResult {
    /// First multiplicand.
    pub a: u64,
    /// Second multiplicand.
    pub b: u64,
    /// Whether `a · b` equals the product.
    pub valid: bool,
    /// Reads that decoded to this pair.
    pub num_of_occurrences: u64,
    /// `100 · num_of_occurrences / total reads`.
    pub percentage_of_occurrences: f64,
}

/// Decoded results of one sample batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Distinct pairs in order of first appearance.
    pub results: Vec<DecodedResult>,
    /// Reads in the batch, including discarded ones.
    pub total_reads: u64,
    /// Reads with at least one broken chain. Under
    /// [`ChainBreakPolicy::Discard`] these are missing from `results`.
    pub chain_breaks: u64,
}

impl DecodeReport {
    /// Percentage of all reads that decoded to a valid factorization.
    pub fn valid_percentage(&self) -> f64 {
        self.results
            .iter()
            .filter(|r| r.valid)
            .map(|r| r.percentage_of_occurrences)
            .sum()
    }
}

/// Resolve a chain's spins to one value and report whether it was broken.
/// The value is `None` for a broken chain under
/// [`ChainBreakPolicy::Discard`].
fn resolve_chain(spins: impl Iterator<Item = Spin>, policy: ChainBreakPolicy) -> (Option<Spin>, bool) {
    let (mut up, mut down) = (0usize, 0usize);
    for spin in spins {
        match spin {
            Spin::Up => up += 1,
            Spin::Down => down += 1,
        }
    }
    match (up, down) {
        (_, 0) => (Some(Spin::Up), false),
        (0, _) => (Some(Spin::Down), false),
        _ => match policy {
            ChainBreakPolicy::Discard => (None, true),
            ChainBreakPolicy::MajorityVote => {
                let spin = if up > down { Spin::Up } else { Spin::Down };
                (Some(spin), true)
            }
        },
    }
}

/// Decode a sample batch into multiplicand pairs for `product`.
///
/// Every embedded chain is checked for breaks, not only the multiplicand
/// chains. The result is a pure function of its inputs.
pub fn decode(
    samples: &SampleSet,
    embedding: &Embedding,
    product: u64,
    policy: ChainBreakPolicy,
) -> FactorResult<DecodeReport> {
    // Sample columns of every chain, in embedding order.
    let mut names = Vec::with_capacity(embedding.len());
    let mut columns = Vec::with_capacity(embedding.len());
    for (name, chain) in embedding.iter() {
        let cols = chain
            .iter()
            .map(|&q| samples.column(q).ok_or(FactorError::SampleMissingQubit(q)))
            .collect::<FactorResult<Vec<_>>>()?;
        names.push(name);
        columns.push(cols);
    }
    let position = |bit: &str| {
        names
            .iter()
            .position(|&n| n == bit)
            .ok_or_else(|| FactorError::MissingVariable(bit.to_string()))
    };
    let a_pos = A_BITS.iter().map(|b| position(b)).collect::<FactorResult<Vec<_>>>()?;
    let b_pos = B_BITS.iter().map(|b| position(b)).collect::<FactorResult<Vec<_>>>()?;

    let mut results: Vec<DecodedResult> = Vec::new();
    let mut index: FxHashMap<(u64, u64), usize> = FxHashMap::default();
    let mut chain_breaks = 0u64;
    let mut values = vec![Spin::Down; columns.len()];

    for row in samples.rows() {
        let reads = u64::from(row.num_occurrences);
        let mut broken = false;
        let mut discarded = false;
        for (value, cols) in values.iter_mut().zip(&columns) {
            let (spin, chain_broken) = resolve_chain(cols.iter().map(|&c| row.spins[c]), policy);
            broken |= chain_broken;
            match spin {
                Some(spin) => *value = spin,
                None => discarded = true,
            }
        }
        if broken {
            chain_breaks += reads;
        }
        if discarded {
            continue;
        }

        let number = |positions: &[usize]| {
            positions
                .iter()
                .enumerate()
                .filter(|&(_, &p)| values[p].to_bit())
                .fold(0u64, |acc, (i, _)| acc | 1 << i)
        };
        let (a, b) = (number(&a_pos), number(&b_pos));

        let slot = *index.entry((a, b)).or_insert_with(|| {
            results.push(DecodedResult {
                a,
                b,
                valid: a * b == product,
                num_of_occurrences: 0,
                percentage_of_occurrences: 0.0,
            });
            results.len() - 1
        });
        results[slot].num_of_occurrences += reads;
    }

    let total_reads = samples.total_reads();
    for result in &mut results {
        result.percentage_of_occurrences =
            100.0 * result.num_of_occurrences as f64 / total_reads as f64;
    }

    Ok(DecodeReport {
        results,
        total_reads,
        chain_breaks,
    })
}
