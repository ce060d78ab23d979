//! Metropolis simulated annealing over a spin model.

use rand::Rng;
use rustc_hash::FxHashMap;

use qafactor_ir::{QuadraticModel, QubitId, Spin};

/// Temperature schedule of one anneal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Schedule {
    pub t_initial: f64,
    pub t_final: f64,
    pub sweeps: u32,
    /// Schedule progress added per unit of anneal offset.
    pub offset_gain: f64,
}

impl Schedule {
    /// Temperature at schedule progress `p` in `[0, 1]`, geometric between
    /// the end points.
    fn temperature(&self, p: f64) -> f64 {
        self.t_initial * (self.t_final / self.t_initial).powf(p.clamp(0.0, 1.0))
    }

    fn progress(&self, sweep: u32) -> f64 {
        if self.sweeps <= 1 {
            1.0
        } else {
            f64::from(sweep) / f64::from(self.sweeps - 1)
        }
    }
}

/// A model laid out in dense arrays for fast local-field updates.
#[derive(Debug, Clone)]
pub(crate) struct CompiledModel {
    pub variables: Vec<QubitId>,
    bias: Vec<f64>,
    neighbors: Vec<Vec<(usize, f64)>>,
    offset: f64,
}

impl CompiledModel {
    pub fn new(model: &QuadraticModel) -> Self {
        let variables: Vec<QubitId> = model.variables().collect();
        let index: FxHashMap<QubitId, usize> =
            variables.iter().enumerate().map(|(i, &q)| (q, i)).collect();

        let bias = model.linear_terms().map(|(_, h)| h).collect();
        let mut neighbors = vec![Vec::new(); variables.len()];
        for (a, b, j) in model.interactions() {
            let (ia, ib) = (index[&a], index[&b]);
            neighbors[ia].push((ib, j));
            neighbors[ib].push((ia, j));
        }

        Self {
            variables,
            bias,
            neighbors,
            offset: model.offset(),
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    fn local_field(&self, i: usize, spins: &[f64]) -> f64 {
        self.bias[i]
            + self.neighbors[i]
                .iter()
                .map(|&(j, strength)| strength * spins[j])
                .sum::<f64>()
    }

    pub fn energy(&self, spins: &[f64]) -> f64 {
        let mut energy = self.offset;
        for (i, &s) in spins.iter().enumerate() {
            energy += self.bias[i] * s;
            for &(j, strength) in &self.neighbors[i] {
                if i < j {
                    energy += strength * s * spins[j];
                }
            }
        }
        energy
    }
}

/// Run one anneal and return the final spins, aligned with
/// `model.variables`.
///
/// `progress_shift[i]` moves variable `i` along the schedule: a positive
/// shift makes it colder than the rest at every sweep.
pub(crate) fn anneal<R: Rng>(
    model: &CompiledModel,
    progress_shift: &[f64],
    schedule: &Schedule,
    rng: &mut R,
) -> (Vec<Spin>, f64) {
    let n = model.len();
    let mut spins: Vec<f64> = (0..n)
        .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
        .collect();
    let mut temperatures = vec![0.0; n];

    for sweep in 0..schedule.sweeps {
        let p = schedule.progress(sweep);
        for (t, &shift) in temperatures.iter_mut().zip(progress_shift) {
            *t = schedule.temperature(p + shift);
        }

        for i in 0..n {
            // Energy change of flipping spin i.
            let delta = -2.0 * spins[i] * model.local_field(i, &spins);
            if delta <= 0.0 || rng.gen_range(0.0..1.0) < (-delta / temperatures[i]).exp() {
                spins[i] = -spins[i];
            }
        }
    }

    let energy = model.energy(&spins);
    let spins = spins
        .into_iter()
        .map(|s| if s > 0.0 { Spin::Up } else { Spin::Down })
        .collect();
    (spins, energy)
}
