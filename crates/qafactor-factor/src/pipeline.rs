//! End-to-end factoring against a sampler.
//!
//! ```text
//!   SamplerProperties ──→ HardwareTopology + OffsetRanges     (once)
//!   search_placement()  ──→ best translation of the multiplier
//!   factor(P)           ──→ build → fix P → sample → decode
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use qafactor_embed::{
    ChimeraShape, HardwareTopology, OffsetRanges, PatternTemplate, Placement, PlacementSearch,
    ScoredPlacement, SearchOutcome, WorkingOffsets,
};
use qafactor_hal::{Sampler, SamplerProperties};
use qafactor_ir::QubitId;

use crate::builder::{ProblemBuilder, check_product, fix_product_bits};
use crate::config::FactoringConfig;
use crate::decode::{DecodedResult, decode};
use crate::error::FactorResult;
use crate::template::multiplier_pattern;

/// Wall-clock time spent in each stage, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Placement search, or offset refit for a given placement.
    pub placement_secs: f64,
    /// Waiting for the sampler.
    pub sample_secs: f64,
    /// The whole request.
    pub total_secs: f64,
}

/// Everything one factoring request produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorOutput {
    /// The product that was factored.
    pub product: u64,
    /// Placement of the multiplier, before the product bits were fixed.
    pub placement: Placement,
    /// Offset spread over the placement's qubits.
    pub range: f64,
    /// Offsets sent to the sampler.
    pub anneal_offsets: WorkingOffsets,
    /// Reads requested.
    pub num_reads: u32,
    /// Decoded multiplicand pairs in order of first appearance.
    pub results: Vec<DecodedResult>,
    /// Reads with a broken chain.
    pub chain_breaks: u64,
    /// Stage timings.
    pub timing: Timing,
}

impl FactorOutput {
    /// Percentage of reads that decoded to a valid factorization.
    pub fn valid_percentage(&self) -> f64 {
        self.results
            .iter()
            .filter(|r| r.valid)
            .map(|r| r.percentage_of_occurrences)
            .sum()
    }
}

/// Hardware graph described by a sampler's properties.
pub fn topology_from_properties(properties: &SamplerProperties) -> FactorResult<HardwareTopology> {
    let [rows, cols, shore] = properties.topology.as_chimera()?;
    let topology = HardwareTopology::from_parts(
        ChimeraShape::new(rows, cols, shore),
        properties.qubits.iter().copied().map(QubitId),
        properties
            .couplers
            .iter()
            .map(|&(a, b)| (QubitId(a), QubitId(b))),
    )?;
    Ok(topology)
}

/// Factors small integers on one sampler with the multiplier pattern.
pub struct Factorer {
    sampler: Arc<dyn Sampler>,
    topology: Arc<HardwareTopology>,
    ranges: OffsetRanges,
    template: PatternTemplate,
    builder: ProblemBuilder,
    config: FactoringConfig,
}

impl Factorer {
    /// Read the sampler's properties once and prepare for factoring.
    pub fn new(sampler: Arc<dyn Sampler>, config: FactoringConfig) -> FactorResult<Self> {
        let properties = sampler.properties();
        let topology = Arc::new(topology_from_properties(properties)?);
        let ranges = OffsetRanges::new(properties.anneal_offset_ranges.clone())?;
        info!(
            sampler = sampler.name(),
            shape = %topology.shape(),
            working_qubits = topology.qubits().len(),
            couplers = topology.edges().len(),
            "prepared factorer"
        );

        Ok(Self {
            builder: ProblemBuilder::new(topology.clone()),
            template: multiplier_pattern()?,
            sampler,
            topology,
            ranges,
            config,
        })
    }

    /// The hardware graph.
    pub fn topology(&self) -> &HardwareTopology {
        &self.topology
    }

    /// Feasible offset ranges per qubit.
    pub fn ranges(&self) -> &OffsetRanges {
        &self.ranges
    }

    /// The run configuration.
    pub fn config(&self) -> &FactoringConfig {
        &self.config
    }

    /// The multiplier pattern being placed.
    pub fn template(&self) -> &PatternTemplate {
        &self.template
    }

    fn placement_search(&self) -> PlacementSearch<'_> {
        PlacementSearch::new(&self.topology, &self.ranges)
            .with_delay_base(self.config.delay_base)
            .with_strategy(self.config.offset_strategy)
            .with_bounds(self.config.search_bounds)
            .with_parallel(self.config.parallel_search)
    }

    /// Find the translation of the multiplier with the widest offset range.
    pub fn search_placement(&self) -> FactorResult<SearchOutcome> {
        Ok(self.placement_search().search(&self.template)?)
    }

    /// Refit offsets for a placement found earlier.
    pub fn evaluate_placement(&self, placement: Placement) -> FactorResult<ScoredPlacement> {
        Ok(self.placement_search().evaluate(placement)?)
    }

    /// Factor `product`, on `placement` if given, otherwise on a freshly
    /// searched one.
    #[instrument(skip(self, placement), fields(sampler = self.sampler.name()))]
    pub async fn factor(&self, product: u64, placement: Option<&Placement>) -> FactorResult<FactorOutput> {
        check_product(product)?;
        let start = Instant::now();

        let scored = match placement {
            Some(placement) => self.evaluate_placement(placement.clone())?,
            None => self.search_placement()?.best,
        };
        let placement_secs = start.elapsed().as_secs_f64();

        let model = self.builder.build(&scored.placement)?;
        let (model, embedding) = fix_product_bits(&model, &scored.placement.embedding, product)?;

        let sample_start = Instant::now();
        let samples = self
            .sampler
            .sample(&model, &scored.offsets.offsets, self.config.num_reads)
            .await?;
        let sample_secs = sample_start.elapsed().as_secs_f64();

        let report = decode(&samples, &embedding, product, self.config.chain_break)?;
        let output = FactorOutput {
            product,
            placement: scored.placement,
            range: scored.range,
            anneal_offsets: scored.offsets,
            num_reads: self.config.num_reads,
            results: report.results,
            chain_breaks: report.chain_breaks,
            timing: Timing {
                placement_secs,
                sample_secs,
                total_secs: start.elapsed().as_secs_f64(),
            },
        };

        info!(
            origin = %output.placement.origin,
            valid_percentage = output.valid_percentage(),
            chain_breaks = output.chain_breaks,
            "factoring complete"
        );
        Ok(output)
    }
}

impl std::fmt::Debug for Factorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factorer")
            .field("sampler", &self.sampler.name())
            .field("shape", &self.topology.shape())
            .field("config", &self.config)
            .finish()
    }
}
