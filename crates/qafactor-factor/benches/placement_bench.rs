//! Benchmarks for the multiplier placement search
//!
//! Run with: cargo bench -p qafactor-factor

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qafactor_embed::{
    ChimeraShape, HardwareTopology, OffsetRanges, OffsetStrategy, PlacementSearch, TileOffset,
    fit_offsets, ideal_offsets,
};
use qafactor_factor::multiplier_pattern;

/// Offset ranges with a deterministic per-qubit spread.
fn ranges(len: usize) -> OffsetRanges {
    OffsetRanges::new(
        (0..len)
            .map(|q| {
                let spread = (q * 7919 % 101) as f64 / 100.0;
                [-0.15 - 0.05 * spread, 0.15 + 0.05 * (1.0 - spread)]
            })
            .collect(),
    )
    .unwrap()
}

/// Benchmark the full translation search on growing devices
fn bench_search(c: &mut Criterion) {
    let template = multiplier_pattern().unwrap();
    let mut group = c.benchmark_group("placement_search");

    for size in &[8u32, 12, 16] {
        let shape = ChimeraShape::new(*size, *size, 4);
        let topology = HardwareTopology::chimera(shape);
        let ranges = ranges(shape.num_qubits());

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            let search = PlacementSearch::new(&topology, &ranges);
            b.iter(|| search.search(black_box(&template)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            let search = PlacementSearch::new(&topology, &ranges).with_parallel(false);
            b.iter(|| search.search(black_box(&template)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark fitting one placement in both modes
fn bench_fit(c: &mut Criterion) {
    let template = multiplier_pattern().unwrap();
    let shape = ChimeraShape::new(16, 16, 4);
    let topology = HardwareTopology::chimera(shape);
    let ranges = ranges(shape.num_qubits());
    let placement = PlacementSearch::new(&topology, &ranges)
        .place(&template, TileOffset::new(3, 4))
        .unwrap();
    let ideal = ideal_offsets(&placement.embedding, 2.0).unwrap();

    let mut group = c.benchmark_group("offset_fit");
    for strategy in [OffsetStrategy::Full, OffsetStrategy::Zeroed] {
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| fit_offsets(black_box(&ranges), black_box(&ideal), strategy).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_fit);
criterion_main!(benches);
