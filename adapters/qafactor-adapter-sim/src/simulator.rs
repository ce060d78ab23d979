//! Simulated-annealing sampler implementation.

use std::time::Instant;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qafactor_embed::ChimeraShape;
use qafactor_hal::{
    HalError, HalResult, Sampler, SamplerConfig, SamplerFactory, SamplerProperties,
    TopologyDescriptor,
};
use qafactor_ir::{QuadraticModel, SampleRow, SampleSet};

use crate::anneal::{CompiledModel, Schedule, anneal};

/// Settings of an [`AnnealingSimulator`].
///
/// Deserialized from the `extra` map of a [`SamplerConfig`]; missing keys
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// Tile rows of the simulated Chimera graph.
    pub rows: u32,
    /// Tile columns.
    pub cols: u32,
    /// Qubits per sub-lattice.
    pub shore: u32,
    /// Linear indices of qubits to report as broken.
    pub broken_qubits: Vec<u32>,
    /// Metropolis sweeps per read.
    pub sweeps: u32,
    /// Temperature at the start of the schedule.
    pub t_initial: f64,
    /// Temperature at the end of the schedule.
    pub t_final: f64,
    /// Schedule progress per unit of anneal offset.
    pub offset_gain: f64,
    /// Nominal `[min, max]` anneal offset range.
    pub offset_range: [f64; 2],
    /// Largest fraction by which a qubit's range end may fall short of the
    /// nominal one.
    pub offset_jitter: f64,
    /// Maximum reads per request.
    pub max_reads: u32,
    /// Seed for offset ranges and sampling.
    pub seed: u64,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            shore: 4,
            broken_qubits: Vec::new(),
            sweeps: 1000,
            t_initial: 5.0,
            t_final: 0.05,
            offset_gain: 1.0,
            offset_range: [-0.2, 0.2],
            offset_jitter: 0.25,
            max_reads: 10_000,
            seed: 0,
        }
    }
}

impl SimulatorSettings {
    fn validate(&self) -> HalResult<()> {
        let fail = |msg: String| Err(HalError::Configuration(msg));
        if self.rows == 0 || self.cols == 0 || self.shore == 0 {
            return fail(format!(
                "chimera shape must be non-empty, got {}x{}x{}",
                self.rows, self.cols, self.shore
            ));
        }
        if self.sweeps == 0 || self.max_reads == 0 {
            return fail("sweeps and max_reads must be positive".into());
        }
        if !(self.t_initial >= self.t_final && self.t_final > 0.0) {
            return fail(format!(
                "temperatures must satisfy t_initial >= t_final > 0, got {} and {}",
                self.t_initial, self.t_final
            ));
        }
        let [lo, hi] = self.offset_range;
        if !(lo <= 0.0 && 0.0 <= hi) {
            return fail(format!("offset range [{lo}, {hi}] must contain 0"));
        }
        if !(0.0..=1.0).contains(&self.offset_jitter) {
            return fail(format!("offset jitter {} not in [0, 1]", self.offset_jitter));
        }
        Ok(())
    }

    fn schedule(&self) -> Schedule {
        Schedule {
            t_initial: self.t_initial,
            t_final: self.t_final,
            sweeps: self.sweeps,
            offset_gain: self.offset_gain,
        }
    }
}

/// Local sampler running simulated annealing on a Chimera graph.
pub struct AnnealingSimulator {
    settings: SimulatorSettings,
    properties: SamplerProperties,
}

impl AnnealingSimulator {
    /// Create a simulator with default settings.
    pub fn new() -> Self {
        // Defaults always validate.
        Self::build("simulator".into(), SimulatorSettings::default())
    }

    /// Create a simulator with custom settings.
    pub fn with_settings(settings: SimulatorSettings) -> HalResult<Self> {
        settings.validate()?;
        Ok(Self::build("simulator".into(), settings))
    }

    fn build(name: String, settings: SimulatorSettings) -> Self {
        let shape = ChimeraShape::new(settings.rows, settings.cols, settings.shore);
        let broken: FxHashSet<u32> = settings.broken_qubits.iter().copied().collect();

        let qubits = (0..shape.num_qubits() as u32)
            .filter(|q| !broken.contains(q))
            .collect();
        let couplers = shape
            .ideal_edges()
            .into_iter()
            .map(|(a, b)| (a.0, b.0))
            .filter(|(a, b)| !broken.contains(a) && !broken.contains(b))
            .collect();

        let mut rng = StdRng::seed_from_u64(settings.seed);
        let [lo, hi] = settings.offset_range;
        let jitter = settings.offset_jitter;
        let anneal_offset_ranges = (0..shape.num_qubits())
            .map(|_| {
                let lo = lo * (1.0 - jitter * rng.gen_range(0.0..=1.0));
                let hi = hi * (1.0 - jitter * rng.gen_range(0.0..=1.0));
                [lo, hi]
            })
            .collect();

        let properties = SamplerProperties {
            name: name.clone(),
            topology: TopologyDescriptor::chimera(shape.rows, shape.cols, shape.shore),
            qubits,
            couplers,
            anneal_offset_ranges,
            max_reads: settings.max_reads,
            is_simulator: true,
        };

        Self {
            settings,
            properties,
        }
    }

    /// The simulator's settings.
    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    /// Run the anneals synchronously.
    #[instrument(skip(self, model, anneal_offsets))]
    fn run_anneals(
        &self,
        model: &QuadraticModel,
        anneal_offsets: &[f64],
        num_reads: u32,
    ) -> HalResult<SampleSet> {
        let start = Instant::now();
        let compiled = CompiledModel::new(model);
        let schedule = self.settings.schedule();
        let shifts: Vec<f64> = compiled
            .variables
            .iter()
            .map(|q| {
                anneal_offsets.get(q.index()).copied().unwrap_or(0.0) * schedule.offset_gain
            })
            .collect();
        debug!(
            variables = compiled.len(),
            sweeps = schedule.sweeps,
            num_reads,
            "starting anneals"
        );

        let mut rng = StdRng::seed_from_u64(self.settings.seed);
        let mut samples = SampleSet::new(compiled.variables.clone())?;
        for _ in 0..num_reads {
            let (spins, energy) = anneal(&compiled, &shifts, &schedule, &mut rng);
            samples.push_row(SampleRow {
                spins,
                num_occurrences: 1,
                energy: Some(energy),
            })?;
        }
        let samples = samples.aggregated();

        debug!(
            distinct = samples.len(),
            elapsed = ?start.elapsed(),
            "anneals completed"
        );
        Ok(samples)
    }
}

impl Default for AnnealingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sampler for AnnealingSimulator {
    fn name(&self) -> &str {
        &self.properties.name
    }

    fn properties(&self) -> &SamplerProperties {
        &self.properties
    }

    #[instrument(skip(self, model, anneal_offsets))]
    async fn sample(
        &self,
        model: &QuadraticModel,
        anneal_offsets: &[f64],
        num_reads: u32,
    ) -> HalResult<SampleSet> {
        self.properties
            .validate_problem(model, anneal_offsets, num_reads)?;
        self.run_anneals(model, anneal_offsets, num_reads)
    }
}

impl SamplerFactory for AnnealingSimulator {
    fn from_config(config: SamplerConfig) -> HalResult<Self> {
        let settings: SimulatorSettings =
            serde_json::from_value(serde_json::Value::Object(config.extra))?;
        settings.validate()?;
        Ok(Self::build(config.name, settings))
    }
}
