//! Qafactor Local Annealing Simulator
//!
//! This crate provides a [`Sampler`](qafactor_hal::Sampler) that runs
//! Metropolis simulated annealing on the local machine, standing in for a
//! Chimera annealer during development and in tests.
//!
//! # Features
//!
//! - **Chimera properties**: a full Chimera graph of configurable shape,
//!   with optional broken qubits
//! - **Per-qubit offset ranges**: drawn reproducibly around a nominal
//!   interval, like the spread reported by physical devices
//! - **Anneal offsets**: a qubit's offset shifts its position on the
//!   temperature schedule, so positive offsets freeze earlier
//! - **Reproducible**: every random choice comes from a seeded `StdRng`
//!
//! # Example
//!
//! ```ignore
//! use qafactor_adapter_sim::AnnealingSimulator;
//! use qafactor_hal::Sampler;
//! use qafactor_ir::{QuadraticModel, QubitId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sim = AnnealingSimulator::new();
//!
//!     // Two ferromagnetically coupled qubits in the first tile.
//!     let mut model = QuadraticModel::new();
//!     model.add_interaction(QubitId(0), QubitId(4), -1.0)?;
//!
//!     let offsets = vec![0.0; sim.properties().num_qubits()];
//!     let samples = sim.sample(&model, &offsets, 100).await?;
//!     println!("{} distinct reads", samples.len());
//!     Ok(())
//! }
//! ```

mod anneal;
mod simulator;

pub use simulator::{AnnealingSimulator, SimulatorSettings};
