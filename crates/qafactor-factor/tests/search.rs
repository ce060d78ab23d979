//! Placement search over the multiplier pattern.

use qafactor_embed::{
    ChimeraCoord, ChimeraShape, EmbedError, HardwareTopology, OffsetRanges, OffsetStrategy,
    PlacementSearch, SearchBounds, TileOffset,
};
use qafactor_factor::multiplier_pattern;
use qafactor_ir::QubitId;

/// A Chimera device with some qubits reported broken.
fn damaged(shape: ChimeraShape, broken: &[ChimeraCoord]) -> HardwareTopology {
    let broken: Vec<QubitId> = broken.iter().map(|&c| shape.index(c).unwrap()).collect();
    let qubits = (0..shape.num_qubits() as u32)
        .map(QubitId)
        .filter(|q| !broken.contains(q));
    let couplers = shape
        .ideal_edges()
        .into_iter()
        .filter(|(a, b)| !broken.contains(a) && !broken.contains(b));
    HardwareTopology::from_parts(shape, qubits, couplers).unwrap()
}

fn uniform(topology: &HardwareTopology) -> OffsetRanges {
    OffsetRanges::uniform(topology.shape().num_qubits(), -0.2, 0.2).unwrap()
}

#[test]
fn test_exact_fit_has_one_candidate() {
    let topology = HardwareTopology::chimera(ChimeraShape::new(6, 5, 4));
    let ranges = uniform(&topology);
    let template = multiplier_pattern().unwrap();
    let search = PlacementSearch::new(&topology, &ranges);

    let outcome = search.search(&template).unwrap();
    assert_eq!(outcome.stats.evaluated, 1);
    assert_eq!(outcome.best.placement.origin, TileOffset::new(0, 0));

    let direct = search.score(&template, TileOffset::new(0, 0)).unwrap();
    assert_eq!(outcome.best.range, direct.range);
    assert!(outcome.best.range > 0.0);
}

#[test]
fn test_too_small_device() {
    let topology = HardwareTopology::chimera(ChimeraShape::new(5, 5, 4));
    let ranges = uniform(&topology);
    let err = PlacementSearch::new(&topology, &ranges)
        .search(&multiplier_pattern().unwrap())
        .unwrap_err();
    assert_eq!(err, EmbedError::NoValidPlacement);
}

#[test]
fn test_broken_qubit_under_every_translation() {
    // a2 occupies column 0, rows 0..5 at origin (0, 0); row 2 is covered
    // by both translations of a 7 × 5 device.
    let topology = damaged(ChimeraShape::new(7, 5, 4), &[ChimeraCoord::new(2, 0, 0, 1)]);
    let ranges = uniform(&topology);
    let err = PlacementSearch::new(&topology, &ranges)
        .search(&multiplier_pattern().unwrap())
        .unwrap_err();
    assert_eq!(err, EmbedError::NoValidPlacement);
}

#[test]
fn test_broken_qubit_skips_translation() {
    let topology = damaged(ChimeraShape::new(7, 5, 4), &[ChimeraCoord::new(0, 0, 0, 1)]);
    let ranges = uniform(&topology);
    let outcome = PlacementSearch::new(&topology, &ranges)
        .search(&multiplier_pattern().unwrap())
        .unwrap();

    assert_eq!(outcome.stats.evaluated, 2);
    assert_eq!(outcome.stats.invalid, 1);
    assert_eq!(outcome.best.placement.origin, TileOffset::new(1, 0));
}

#[test]
fn test_parallel_matches_sequential() {
    let topology = HardwareTopology::chimera(ChimeraShape::new(9, 8, 4));
    // Per-qubit ranges that differ, so translations score differently.
    let ranges = OffsetRanges::new(
        (0..topology.num_qubits())
            .map(|q| {
                let t = (q * 37 % 23) as f64 / 23.0;
                [-0.1 - 0.1 * t, 0.2 - 0.1 * t]
            })
            .collect(),
    )
    .unwrap();
    let template = multiplier_pattern().unwrap();

    let parallel = PlacementSearch::new(&topology, &ranges).search(&template).unwrap();
    let sequential = PlacementSearch::new(&topology, &ranges)
        .with_parallel(false)
        .search(&template)
        .unwrap();

    assert_eq!(parallel.stats.evaluated, 16);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_explicit_bounds_limit_candidates() {
    let topology = HardwareTopology::chimera(ChimeraShape::new(16, 16, 4));
    let ranges = uniform(&topology);
    let outcome = PlacementSearch::new(&topology, &ranges)
        .with_bounds(Some(SearchBounds::new(1, 2)))
        .search(&multiplier_pattern().unwrap())
        .unwrap();
    assert_eq!(outcome.stats.evaluated, 6);
    // Uniform ranges score every translation alike; the first one wins.
    assert_eq!(outcome.best.placement.origin, TileOffset::new(0, 0));
}

#[test]
fn test_full_fit_dominates_zeroed() {
    let topology = HardwareTopology::chimera(ChimeraShape::new(6, 5, 4));
    let ranges = OffsetRanges::new(
        (0..topology.num_qubits())
            .map(|q| if q % 3 == 0 { [-0.05, 0.3] } else { [-0.25, 0.1] })
            .collect(),
    )
    .unwrap();
    let template = multiplier_pattern().unwrap();
    let origin = TileOffset::new(0, 0);

    let full = PlacementSearch::new(&topology, &ranges)
        .score(&template, origin)
        .unwrap();
    let zeroed = PlacementSearch::new(&topology, &ranges)
        .with_strategy(OffsetStrategy::Zeroed)
        .score(&template, origin)
        .unwrap();
    assert!(full.range >= zeroed.range - 1e-12);

    for q in full.placement.embedding.used_qubits() {
        let [lo, hi] = ranges.get(q).unwrap();
        for offsets in [&full.offsets, &zeroed.offsets] {
            let value = offsets.get(q).unwrap();
            assert!(lo - 1e-12 <= value && value <= hi + 1e-12);
        }
    }
}
