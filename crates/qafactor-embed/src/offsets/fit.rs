//! Fitting ideal advances into the device's feasible offset ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qafactor_ir::QubitId;

use crate::error::{EmbedError, EmbedResult};

use super::lp::{self, Band};
use super::{IdealOffsets, OffsetRanges};

/// How the affine map from advances to offsets is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetStrategy {
    /// Maximize the scale with a free shift (two-variable LP).
    #[default]
    Full,
    /// Maximize the scale with the shift pinned to 0 (closed form).
    Zeroed,
}

impl fmt::Display for OffsetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Zeroed => f.write_str("zeroed"),
        }
    }
}

impl FromStr for OffsetStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "zeroed" => Ok(Self::Zeroed),
            other => Err(format!("unknown offset strategy '{other}'")),
        }
    }
}

/// Dense per-qubit anneal offsets and the map that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingOffsets {
    /// One offset per linear qubit index, 0 for qubits outside every chain.
    pub offsets: Vec<f64>,
    /// Multiplier applied to the ideal advances.
    pub scale: f64,
    /// Constant added after scaling.
    pub shift: f64,
}

impl WorkingOffsets {
    /// Offset of one qubit.
    pub fn get(&self, qubit: QubitId) -> Option<f64> {
        self.offsets.get(qubit.index()).copied()
    }

    /// `max - min` of the offsets over the given qubits, 0 when empty.
    pub fn range_over(&self, qubits: impl IntoIterator<Item = QubitId>) -> f64 {
        let (min, max) = qubits
            .into_iter()
            .filter_map(|q| self.get(q))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max { 0.0 } else { max - min }
    }
}

/// Map ideal advances into the offset ranges.
///
/// Each qubit `q` with advance `v` gets `scale · v + shift`, clamped into
/// its range; every other qubit gets 0. The scale is as large as the
/// ranges allow under `strategy`. An empty or all-zero advance map yields
/// scale 0 and shift 0.
#[instrument(skip_all, fields(qubits = ideal.len(), strategy = %strategy))]
pub fn fit_offsets(
    ranges: &OffsetRanges,
    ideal: &IdealOffsets,
    strategy: OffsetStrategy,
) -> EmbedResult<WorkingOffsets> {
    let mut bands = Vec::with_capacity(ideal.len());
    for (qubit, value) in ideal.iter() {
        let [lo, hi] = ranges.get(qubit).ok_or(EmbedError::QubitOutOfRange {
            qubit,
            len: ranges.len(),
        })?;
        bands.push(Band { value, lo, hi });
    }

    let (scale, shift) = if bands.iter().all(|b| b.value == 0.0) {
        (0.0, 0.0)
    } else {
        match strategy {
            OffsetStrategy::Full => lp::maximize_scale(&bands)?,
            OffsetStrategy::Zeroed => (zeroed_scale(&bands), 0.0),
        }
    };
    debug!(scale, shift, "fitted offset map");

    let mut offsets = vec![0.0; ranges.len()];
    for (qubit, value) in ideal.iter() {
        let [lo, hi] = ranges.as_slice()[qubit.index()];
        offsets[qubit.index()] = (scale * value + shift).clamp(lo, hi);
    }

    Ok(WorkingOffsets {
        offsets,
        scale,
        shift,
    })
}

/// Largest `s` with `lo <= s · v <= hi` for every band.
fn zeroed_scale(bands: &[Band]) -> f64 {
    bands
        .iter()
        .filter(|b| b.value != 0.0)
        .map(|b| {
            if b.value > 0.0 {
                b.hi / b.value
            } else {
                b.lo / b.value
            }
        })
        .fold(f64::INFINITY, f64::min)
}
