//! Qafactor Problem Representation
//!
//! This crate holds the data types that flow between the embedding layer,
//! the factoring problem builder and the samplers.
//!
//! # Core Components
//!
//! - **Qubits and spins**: [`QubitId`] addresses a physical qubit in the
//!   hardware's linear indexing, [`Spin`] is a ±1 value
//! - **Model**: [`QuadraticModel`] is a spin-valued binary quadratic model
//!   (linear biases, pairwise couplings, constant offset) that supports
//!   fixing variables to known values
//! - **Samples**: [`SampleSet`] is a batch of reads returned by a sampler,
//!   with duplicate rows counted rather than collapsed
//!
//! # Example: Fixing a Variable
//!
//! ```rust
//! use qafactor_ir::{QuadraticModel, QubitId, Spin};
//!
//! let mut model = QuadraticModel::new();
//! model.add_variable(QubitId(0), 1.0);
//! model.add_variable(QubitId(1), -0.5);
//! model.add_interaction(QubitId(0), QubitId(1), -1.0).unwrap();
//!
//! // Clamp q0 to +1: its bias moves into the offset, the coupling into q1's bias.
//! model.fix_variable(QubitId(0), Spin::Up).unwrap();
//!
//! assert_eq!(model.num_variables(), 1);
//! assert_eq!(model.linear(QubitId(1)), Some(-1.5));
//! assert_eq!(model.offset(), 1.0);
//! ```

pub mod error;
pub mod model;
pub mod qubit;
pub mod sample;

pub use error::{IrError, IrResult};
pub use model::QuadraticModel;
pub use qubit::{QubitId, Spin};
pub use sample::{SampleRow, SampleSet};
