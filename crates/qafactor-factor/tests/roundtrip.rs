//! Build, fix and decode the multiplier without a sampler.

use std::sync::Arc;

use qafactor_embed::{
    ChimeraShape, Embedding, HardwareTopology, OffsetRanges, PlacementSearch, TileOffset,
};
use qafactor_factor::{
    A_BITS, B_BITS, ChainBreakPolicy, DecodedResult, FactorError, PRODUCT_BITS, ProblemBuilder,
    decode, fix_product_bits, multiplier_pattern,
};
use qafactor_ir::{QuadraticModel, QubitId, SampleSet, Spin};

fn fixed_problem(product: u64) -> (QuadraticModel, Embedding) {
    let topology = Arc::new(HardwareTopology::chimera(ChimeraShape::new(6, 5, 4)));
    let ranges = OffsetRanges::uniform(topology.num_qubits(), -0.1, 0.1).unwrap();
    let placement = PlacementSearch::new(&topology, &ranges)
        .place(&multiplier_pattern().unwrap(), TileOffset::new(0, 0))
        .unwrap();
    let model = ProblemBuilder::new(topology).build(&placement).unwrap();
    fix_product_bits(&model, &placement.embedding, product).unwrap()
}

/// A read where every chain agrees and `a`, `b` are encoded in their bits.
fn consistent_read(variables: &[QubitId], embedding: &Embedding, a: u64, b: u64) -> Vec<Spin> {
    variables
        .iter()
        .map(|&q| {
            let owner = embedding.owner(q).unwrap_or_default();
            let bit = if let Some(i) = A_BITS.iter().position(|&n| n == owner) {
                a >> i & 1 == 1
            } else if let Some(i) = B_BITS.iter().position(|&n| n == owner) {
                b >> i & 1 == 1
            } else {
                false
            };
            Spin::from_bit(bit)
        })
        .collect()
}

#[test]
fn test_product_qubits_leave_model_and_embedding() {
    let (model, embedding) = fixed_problem(21);

    assert_eq!(embedding.len(), 45);
    for bit in PRODUCT_BITS {
        assert!(!embedding.contains(bit));
    }
    // p0 has a two-qubit chain, every other product bit a single qubit.
    assert_eq!(model.num_variables(), 128 - 7);
    assert_eq!(embedding.num_qubits(), model.num_variables());
    for q in embedding.used_qubits() {
        assert!(model.contains(q));
    }
}

#[test]
fn test_single_consistent_read() {
    let (model, embedding) = fixed_problem(21);
    let variables: Vec<QubitId> = model.variables().collect();
    let mut samples = SampleSet::new(variables.clone()).unwrap();
    samples
        .push(consistent_read(&variables, &embedding, 3, 7))
        .unwrap();

    let report = decode(&samples, &embedding, 21, ChainBreakPolicy::Discard).unwrap();
    assert_eq!(
        report.results,
        vec![DecodedResult {
            a: 3,
            b: 7,
            valid: true,
            num_of_occurrences: 1,
            percentage_of_occurrences: 100.0,
        }]
    );
    assert_eq!(report.chain_breaks, 0);
}

#[test]
fn test_mixed_reads_keep_first_appearance_order() {
    let (model, embedding) = fixed_problem(21);
    let variables: Vec<QubitId> = model.variables().collect();
    let valid = consistent_read(&variables, &embedding, 3, 7);
    let wrong = consistent_read(&variables, &embedding, 1, 1);

    let mut samples = SampleSet::new(variables.clone()).unwrap();
    samples.push(valid.clone()).unwrap();
    samples.push(wrong).unwrap();
    samples.push_counted(valid, 2).unwrap();

    let report = decode(&samples, &embedding, 21, ChainBreakPolicy::Discard).unwrap();
    assert_eq!(report.total_reads, 4);
    assert_eq!(report.results.len(), 2);

    let first = &report.results[0];
    assert_eq!((first.a, first.b, first.valid), (3, 7, true));
    assert_eq!(first.num_of_occurrences, 3);
    assert!((first.percentage_of_occurrences - 75.0).abs() < 1e-12);

    let second = &report.results[1];
    assert_eq!((second.a, second.b, second.valid), (1, 1, false));
    assert!((second.percentage_of_occurrences - 25.0).abs() < 1e-12);
    assert!((report.valid_percentage() - 75.0).abs() < 1e-12);
}

#[test]
fn test_broken_chain_counts_against_total() {
    let (model, embedding) = fixed_problem(21);
    let variables: Vec<QubitId> = model.variables().collect();
    let good = consistent_read(&variables, &embedding, 3, 7);

    // Flip one qubit of the a0 chain.
    let a0 = embedding.chain("a0").unwrap()[0];
    let column = variables.iter().position(|&q| q == a0).unwrap();
    let mut broken = good.clone();
    broken[column] = broken[column].flipped();

    let mut samples = SampleSet::new(variables).unwrap();
    samples.push(good).unwrap();
    samples.push(broken).unwrap();

    let discard = decode(&samples, &embedding, 21, ChainBreakPolicy::Discard).unwrap();
    assert_eq!(discard.chain_breaks, 1);
    assert_eq!(discard.results.len(), 1);
    assert!((discard.results[0].percentage_of_occurrences - 50.0).abs() < 1e-12);

    // Four of five a0 qubits still agree, so the vote restores a = 3.
    let vote = decode(&samples, &embedding, 21, ChainBreakPolicy::MajorityVote).unwrap();
    assert_eq!(vote.chain_breaks, 1);
    assert_eq!(vote.results.len(), 1);
    assert_eq!(vote.results[0].num_of_occurrences, 2);
}

#[test]
fn test_decode_is_repeatable() {
    let (model, embedding) = fixed_problem(35);
    let variables: Vec<QubitId> = model.variables().collect();
    let mut samples = SampleSet::new(variables.clone()).unwrap();
    samples
        .push(consistent_read(&variables, &embedding, 5, 7))
        .unwrap();
    samples
        .push(consistent_read(&variables, &embedding, 7, 5))
        .unwrap();

    let first = decode(&samples, &embedding, 35, ChainBreakPolicy::Discard).unwrap();
    let second = decode(&samples, &embedding, 35, ChainBreakPolicy::Discard).unwrap();
    assert_eq!(first, second);
    assert!(first.results.iter().all(|r| r.valid));
}

#[test]
fn test_samples_must_cover_embedding() {
    let (_, embedding) = fixed_problem(21);
    let samples = SampleSet::new(vec![QubitId(0)]).unwrap();
    let err = decode(&samples, &embedding, 21, ChainBreakPolicy::Discard).unwrap_err();
    assert!(matches!(err, FactorError::SampleMissingQubit(_)));
}

#[test]
fn test_fixing_shifts_energy_consistently() {
    // Energy of the fixed model equals that of the full model with the
    // product bits set, for any assignment of the remaining qubits.
    let topology = Arc::new(HardwareTopology::chimera(ChimeraShape::new(6, 5, 4)));
    let ranges = OffsetRanges::uniform(topology.num_qubits(), -0.1, 0.1).unwrap();
    let placement = PlacementSearch::new(&topology, &ranges)
        .place(&multiplier_pattern().unwrap(), TileOffset::new(0, 0))
        .unwrap();
    let model = ProblemBuilder::new(topology).build(&placement).unwrap();
    let (fixed, embedding) = fix_product_bits(&model, &placement.embedding, 21).unwrap();

    let variables: Vec<QubitId> = fixed.variables().collect();
    let read = consistent_read(&variables, &embedding, 3, 7);
    let mut assignment: rustc_hash::FxHashMap<QubitId, Spin> =
        variables.iter().copied().zip(read).collect();
    let fixed_energy = fixed.energy(&assignment).unwrap();

    // 21 = 0b010101, p5 first.
    for (bit, name) in PRODUCT_BITS.iter().enumerate() {
        let spin = Spin::from_bit((21u64 >> (5 - bit)) & 1 == 1);
        for &q in placement.embedding.chain(name).unwrap() {
            assignment.insert(q, spin);
        }
    }
    let full_energy = model.energy(&assignment).unwrap();
    assert!((fixed_energy - full_energy).abs() < 1e-9);
}
