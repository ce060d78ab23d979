//! Ideal advances from chain lengths.
//!
//! Long chains freeze out earlier than short ones during the anneal. A
//! chain of length `k` gets a delay `c^((k-1)/k) - 1`, which is 0 for
//! `k = 1` and grows concavely towards `c - 1`. Delays are normalized by
//! the largest one and negated, so the longest chain gets an advance of
//! exactly -1 and unit chains stay at 0.

use tracing::warn;

use crate::embedding::Embedding;
use crate::error::{EmbedError, EmbedResult};

use super::IdealOffsets;

/// Unnormalized delay of a chain of `length` qubits for delay base `base`.
pub fn chain_delay(length: usize, base: f64) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let k = length as f64;
    base.powf((k - 1.0) / k) - 1.0
}

pub(crate) fn check_delay_base(base: f64) -> EmbedResult<()> {
    if base.is_finite() && base >= 1.0 {
        Ok(())
    } else {
        Err(EmbedError::InvalidDelayBase(base))
    }
}

/// Per-qubit advances in `[-1, 0]` for every qubit of every chain.
///
/// When every delay is 0 (all chains of length 1, or `base == 1`) there is
/// nothing to normalize by and every advance is 0.
pub fn ideal_offsets(embedding: &Embedding, base: f64) -> EmbedResult<IdealOffsets> {
    check_delay_base(base)?;

    let delays: Vec<(&[_], f64)> = embedding
        .iter()
        .map(|(_, chain)| (chain, chain_delay(chain.len(), base)))
        .collect();
    let max_delay = delays.iter().map(|&(_, d)| d).fold(0.0, f64::max);

    if max_delay == 0.0 {
        if !embedding.is_empty() {
            warn!(
                variables = embedding.len(),
                "all chain delays are zero, using zero advances"
            );
        }
        return Ok(embedding.used_qubits().map(|q| (q, 0.0)).collect());
    }

    Ok(delays
        .into_iter()
        .flat_map(|(chain, delay)| {
            let advance = -delay / max_delay;
            chain.iter().map(move |&q| (q, advance))
        })
        .collect())
}
