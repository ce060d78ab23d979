//! Placement search over tile translations of a fixed pattern.
//!
//! A [`PatternTemplate`] fixes, for every logical variable, a chain of
//! coordinates relative to a template origin at tile `(0, 0)`. The search
//! tries every translation of that origin within [`SearchBounds`],
//! row-major, and keeps the one whose fitted offsets span the widest range
//! over the qubits it uses.
//!
//! ```text
//!   for (row, col) in bounds:
//!       embedding = translate(template, row, col)   // skip if broken
//!       ideal     = ideal_offsets(embedding)
//!       offsets   = fit_offsets(ranges, ideal)      // skip if LP fails
//!       range     = max - min over used qubits
//!   keep first strictly greatest range
//! ```
//!
//! Candidates are independent, so they are scored on the rayon pool when
//! parallel search is enabled. Selection always runs afterwards in scan
//! order, which keeps the result identical to the sequential search.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use qafactor_ir::QubitId;

use crate::embedding::Embedding;
use crate::error::{EmbedError, EmbedResult};
use crate::offsets::{OffsetRanges, OffsetStrategy, WorkingOffsets, fit_offsets, ideal_offsets};
use crate::topology::{ChimeraCoord, ChimeraShape, HardwareTopology};

/// Default base of the chain delay function.
pub const DEFAULT_DELAY_BASE: f64 = 2.0;

/// Chains and couplers of a pattern, in coordinates relative to its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternTemplate {
    chains: Vec<(String, Vec<ChimeraCoord>)>,
    couplers: Vec<(ChimeraCoord, ChimeraCoord)>,
}

impl PatternTemplate {
    /// Create a template. Every chain must be non-empty.
    pub fn new(
        chains: Vec<(String, Vec<ChimeraCoord>)>,
        couplers: Vec<(ChimeraCoord, ChimeraCoord)>,
    ) -> EmbedResult<Self> {
        if let Some((name, _)) = chains.iter().find(|(_, chain)| chain.is_empty()) {
            return Err(EmbedError::EmptyChain(name.clone()));
        }
        Ok(Self { chains, couplers })
    }

    /// Variables and their relative chains, in template order.
    pub fn chains(&self) -> &[(String, Vec<ChimeraCoord>)] {
        &self.chains
    }

    /// Coupled coordinate pairs.
    pub fn couplers(&self) -> &[(ChimeraCoord, ChimeraCoord)] {
        &self.couplers
    }

    /// Tiles spanned by the template, as `(rows, cols)`.
    pub fn extent(&self) -> (u32, u32) {
        self.chains
            .iter()
            .flat_map(|(_, chain)| chain)
            .fold((0, 0), |(rows, cols), c| {
                (rows.max(c.row + 1), cols.max(c.col + 1))
            })
    }
}

/// Tile translation of a template origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileOffset {
    /// Tile rows moved down.
    pub row: u32,
    /// Tile columns moved right.
    pub col: u32,
}

impl TileOffset {
    /// Create a translation.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Apply the translation to a relative coordinate.
    pub fn apply(self, coord: ChimeraCoord) -> ChimeraCoord {
        coord.translated(self.row, self.col)
    }
}

impl fmt::Display for TileOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Largest translation tried in each direction, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBounds {
    /// Largest row offset.
    pub max_row_offset: u32,
    /// Largest column offset.
    pub max_col_offset: u32,
}

impl SearchBounds {
    /// Create bounds.
    pub fn new(max_row_offset: u32, max_col_offset: u32) -> Self {
        Self {
            max_row_offset,
            max_col_offset,
        }
    }

    /// Bounds that keep the whole template inside `shape`, or `None` when
    /// the template does not fit at all.
    pub fn for_template(shape: ChimeraShape, template: &PatternTemplate) -> Option<Self> {
        let (rows, cols) = template.extent();
        Some(Self::new(
            shape.rows.checked_sub(rows)?,
            shape.cols.checked_sub(cols)?,
        ))
    }

    /// The tighter of these bounds and `limit`, per direction.
    #[must_use]
    pub fn clamped(self, limit: Self) -> Self {
        Self::new(
            self.max_row_offset.min(limit.max_row_offset),
            self.max_col_offset.min(limit.max_col_offset),
        )
    }

    /// Translations in scan order: row offset ascending, then column offset.
    pub fn origins(&self) -> Vec<TileOffset> {
        (0..=self.max_row_offset)
            .flat_map(|row| (0..=self.max_col_offset).map(move |col| TileOffset::new(row, col)))
            .collect()
    }
}

/// A template translated onto concrete qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Translation applied to the template.
    pub origin: TileOffset,
    /// The resulting chains.
    pub embedding: Embedding,
}

/// A placement with its fitted offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlacement {
    /// The placement.
    pub placement: Placement,
    /// Offsets fitted for its embedding.
    pub offsets: WorkingOffsets,
    /// Spread of `offsets` over the qubits the embedding uses.
    pub range: f64,
}

/// Candidate counts of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Translations tried.
    pub evaluated: usize,
    /// Translations that hit a broken qubit or coupler.
    pub invalid: usize,
    /// Valid translations whose offset fit failed.
    pub infeasible: usize,
}

/// Best placement and how the search got there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Winning placement.
    pub best: ScoredPlacement,
    /// Candidate counts.
    pub stats: SearchStats,
}

/// Exhaustive search over template translations.
#[derive(Debug, Clone)]
pub struct PlacementSearch<'a> {
    topology: &'a HardwareTopology,
    ranges: &'a OffsetRanges,
    delay_base: f64,
    strategy: OffsetStrategy,
    bounds: Option<SearchBounds>,
    parallel: bool,
}

impl<'a> PlacementSearch<'a> {
    /// Create a search with the default delay base, full fitting, bounds
    /// derived from the template and parallel scoring.
    pub fn new(topology: &'a HardwareTopology, ranges: &'a OffsetRanges) -> Self {
        Self {
            topology,
            ranges,
            delay_base: DEFAULT_DELAY_BASE,
            strategy: OffsetStrategy::Full,
            bounds: None,
            parallel: true,
        }
    }

    /// Set the chain delay base.
    pub fn with_delay_base(mut self, delay_base: f64) -> Self {
        self.delay_base = delay_base;
        self
    }

    /// Set the offset fitting strategy.
    pub fn with_strategy(mut self, strategy: OffsetStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Override the translation bounds.
    pub fn with_bounds(mut self, bounds: Option<SearchBounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Enable or disable parallel candidate scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Translate the template by `origin`.
    ///
    /// Fails with [`EmbedError::CoordinateOutOfRange`],
    /// [`EmbedError::MissingQubit`] or [`EmbedError::MissingCoupler`] when
    /// the translation does not land on working hardware.
    pub fn place(&self, template: &PatternTemplate, origin: TileOffset) -> EmbedResult<Placement> {
        let mut embedding = Embedding::new();
        for (variable, chain) in template.chains() {
            let qubits = chain
                .iter()
                .map(|&c| self.resolve(origin.apply(c)))
                .collect::<EmbedResult<Vec<_>>>()?;
            embedding.insert(variable.clone(), qubits)?;
        }

        for &(a, b) in template.couplers() {
            let qa = self.resolve(origin.apply(a))?;
            let qb = self.resolve(origin.apply(b))?;
            if !self.topology.is_adjacent(qa, qb) {
                return Err(EmbedError::MissingCoupler(qa, qb));
            }
        }

        Ok(Placement { origin, embedding })
    }

    fn resolve(&self, coord: ChimeraCoord) -> EmbedResult<QubitId> {
        let shape = self.topology.shape();
        let qubit = shape
            .index(coord)
            .ok_or(EmbedError::CoordinateOutOfRange(coord))?;
        if self.topology.contains(qubit) {
            Ok(qubit)
        } else {
            Err(EmbedError::MissingQubit(qubit))
        }
    }

    /// Fit offsets for an existing placement and measure their range.
    pub fn evaluate(&self, placement: Placement) -> EmbedResult<ScoredPlacement> {
        let ideal = ideal_offsets(&placement.embedding, self.delay_base)?;
        let offsets = fit_offsets(self.ranges, &ideal, self.strategy)?;
        let range = offsets.range_over(placement.embedding.used_qubits());
        Ok(ScoredPlacement {
            placement,
            offsets,
            range,
        })
    }

    /// Place and evaluate a single translation.
    pub fn score(&self, template: &PatternTemplate, origin: TileOffset) -> EmbedResult<ScoredPlacement> {
        self.evaluate(self.place(template, origin)?)
    }

    /// Find the translation with the widest offset range.
    ///
    /// Translations that miss working hardware and translations whose fit
    /// fails are skipped. Fails with [`EmbedError::NoValidPlacement`] when
    /// no translation lands on working hardware, and with the fit error
    /// when every valid translation failed to fit.
    #[instrument(skip_all, fields(strategy = %self.strategy, parallel = self.parallel))]
    pub fn search(&self, template: &PatternTemplate) -> EmbedResult<SearchOutcome> {
        crate::offsets::check_delay_base(self.delay_base)?;

        // Explicit bounds never reach past the hardware.
        let bounds = SearchBounds::for_template(self.topology.shape(), template)
            .map(|fit| self.bounds.map_or(fit, |b| b.clamped(fit)));
        let origins = bounds.map(|b| b.origins()).unwrap_or_default();
        debug!(candidates = origins.len(), ?bounds, "scoring translations");

        let scored: Vec<EmbedResult<ScoredPlacement>> = if self.parallel {
            origins
                .into_par_iter()
                .map(|origin| self.score(template, origin))
                .collect()
        } else {
            origins
                .into_iter()
                .map(|origin| self.score(template, origin))
                .collect()
        };

        let mut stats = SearchStats {
            evaluated: scored.len(),
            ..SearchStats::default()
        };
        let mut best: Option<ScoredPlacement> = None;
        let mut first_fit_error = None;

        for result in scored {
            match result {
                Ok(candidate) => {
                    if best.as_ref().is_none_or(|b| candidate.range > b.range) {
                        best = Some(candidate);
                    }
                }
                Err(err) if err.is_invalid_translation() => {
                    debug!(error = %err, "skipping translation");
                    stats.invalid += 1;
                }
                Err(err) if err.is_infeasible() => {
                    debug!(error = %err, "offset fit failed");
                    stats.infeasible += 1;
                    first_fit_error.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }

        match (best, first_fit_error) {
            (Some(best), _) => {
                info!(
                    origin = %best.placement.origin,
                    range = best.range,
                    evaluated = stats.evaluated,
                    invalid = stats.invalid,
                    infeasible = stats.infeasible,
                    "placement search complete"
                );
                Ok(SearchOutcome { best, stats })
            }
            (None, Some(err)) => Err(err),
            (None, None) => Err(EmbedError::NoValidPlacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two variables in one tile: `x` is a vertical pair spanning two
    /// tiles, `y` a single horizontal qubit coupled to it.
    fn two_tile_template() -> PatternTemplate {
        PatternTemplate::new(
            vec![
                (
                    "x".into(),
                    vec![ChimeraCoord::new(0, 0, 0, 0), ChimeraCoord::new(1, 0, 0, 0)],
                ),
                ("y".into(), vec![ChimeraCoord::new(0, 0, 1, 0)]),
            ],
            vec![
                (ChimeraCoord::new(0, 0, 0, 0), ChimeraCoord::new(1, 0, 0, 0)),
                (ChimeraCoord::new(0, 0, 0, 0), ChimeraCoord::new(0, 0, 1, 0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_extent_and_bounds() {
        let template = two_tile_template();
        assert_eq!(template.extent(), (2, 1));

        let bounds = SearchBounds::for_template(ChimeraShape::new(3, 2, 1), &template).unwrap();
        assert_eq!(bounds, SearchBounds::new(1, 1));
        assert_eq!(
            bounds.origins(),
            vec![
                TileOffset::new(0, 0),
                TileOffset::new(0, 1),
                TileOffset::new(1, 0),
                TileOffset::new(1, 1),
            ]
        );
        assert!(SearchBounds::for_template(ChimeraShape::new(1, 4, 1), &template).is_none());
    }

    #[test]
    fn test_place_translates_chains() {
        let shape = ChimeraShape::new(3, 2, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.1, 0.1).unwrap();
        let search = PlacementSearch::new(&topo, &ranges);

        let placement = search.place(&two_tile_template(), TileOffset::new(1, 1)).unwrap();
        let expected = [
            shape.index(ChimeraCoord::new(1, 1, 0, 0)).unwrap(),
            shape.index(ChimeraCoord::new(2, 1, 0, 0)).unwrap(),
        ];
        assert_eq!(placement.embedding.chain("x"), Some(&expected[..]));
    }

    #[test]
    fn test_place_out_of_shape() {
        let shape = ChimeraShape::new(2, 1, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.1, 0.1).unwrap();
        let search = PlacementSearch::new(&topo, &ranges);

        let err = search
            .place(&two_tile_template(), TileOffset::new(1, 0))
            .unwrap_err();
        assert!(matches!(err, EmbedError::CoordinateOutOfRange(_)));
    }

    #[test]
    fn test_search_prefers_wider_range() {
        // Column 1 has wider ranges than column 0.
        let shape = ChimeraShape::new(2, 2, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges: Vec<[f64; 2]> = (0..shape.num_qubits() as u32)
            .map(|q| {
                let col = shape.coordinate(QubitId(q)).unwrap().col;
                if col == 1 { [-0.4, 0.4] } else { [-0.1, 0.1] }
            })
            .collect();
        let ranges = OffsetRanges::new(ranges).unwrap();

        let outcome = PlacementSearch::new(&topo, &ranges)
            .search(&two_tile_template())
            .unwrap();
        assert_eq!(outcome.best.placement.origin, TileOffset::new(0, 1));
        assert!((outcome.best.range - 0.8).abs() < 1e-12);
        assert_eq!(
            outcome.stats,
            SearchStats {
                evaluated: 2,
                invalid: 0,
                infeasible: 0
            }
        );
    }

    #[test]
    fn test_search_ties_keep_first() {
        let shape = ChimeraShape::new(2, 3, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.2, 0.2).unwrap();

        let outcome = PlacementSearch::new(&topo, &ranges)
            .with_parallel(false)
            .search(&two_tile_template())
            .unwrap();
        assert_eq!(outcome.best.placement.origin, TileOffset::new(0, 0));
    }

    #[test]
    fn test_search_skips_broken_hardware() {
        let shape = ChimeraShape::new(2, 2, 1);
        let ideal = HardwareTopology::chimera(shape);
        let broken = shape.index(ChimeraCoord::new(1, 0, 0, 0)).unwrap();
        let topo = HardwareTopology::from_parts(
            shape,
            ideal.qubits().iter().copied().filter(|&q| q != broken),
            ideal
                .edges()
                .iter()
                .copied()
                .filter(|&(a, b)| a != broken && b != broken),
        )
        .unwrap();
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.2, 0.2).unwrap();

        let outcome = PlacementSearch::new(&topo, &ranges)
            .search(&two_tile_template())
            .unwrap();
        assert_eq!(outcome.best.placement.origin, TileOffset::new(0, 1));
        assert_eq!(outcome.stats.invalid, 1);
    }

    #[test]
    fn test_search_no_valid_placement() {
        let shape = ChimeraShape::new(1, 2, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.2, 0.2).unwrap();

        let err = PlacementSearch::new(&topo, &ranges)
            .search(&two_tile_template())
            .unwrap_err();
        assert_eq!(err, EmbedError::NoValidPlacement);
    }

    #[test]
    fn test_explicit_bounds_clamped_to_shape() {
        let shape = ChimeraShape::new(3, 2, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.2, 0.2).unwrap();

        let outcome = PlacementSearch::new(&topo, &ranges)
            .with_bounds(Some(SearchBounds::new(u32::MAX, u32::MAX)))
            .search(&two_tile_template())
            .unwrap();
        assert_eq!(
            outcome.stats,
            SearchStats {
                evaluated: 4,
                invalid: 0,
                infeasible: 0
            }
        );

        let clamped = SearchBounds::new(u32::MAX, 0).clamped(SearchBounds::new(1, 1));
        assert_eq!(clamped, SearchBounds::new(1, 0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let shape = ChimeraShape::new(4, 4, 1);
        let topo = HardwareTopology::chimera(shape);
        let ranges: Vec<[f64; 2]> = (0..shape.num_qubits())
            .map(|q| [-0.05 - 0.01 * (q % 7) as f64, 0.05 + 0.01 * (q % 5) as f64])
            .collect();
        let ranges = OffsetRanges::new(ranges).unwrap();
        let template = two_tile_template();

        let parallel = PlacementSearch::new(&topo, &ranges).search(&template).unwrap();
        let sequential = PlacementSearch::new(&topo, &ranges)
            .with_parallel(false)
            .search(&template)
            .unwrap();
        assert_eq!(parallel, sequential);
    }
}
