//! Qafactor Sampler Abstraction Layer
//!
//! This crate provides the interface between the factoring core and
//! whatever produces samples: a physical annealer, a cloud service or a
//! local simulator.
//!
//! # Overview
//!
//! The HAL collapses device communication into a single request/response:
//!
//! ```text
//!   properties() ──→ sample(model, anneal_offsets, num_reads) ──→ SampleSet
//!   (sync, &ref)     (async, blocks until the batch returns)
//! ```
//!
//! - A common [`Sampler`] trait for submitting a model with per-qubit
//!   anneal offsets
//! - [`SamplerProperties`] describing the hardware graph and each qubit's
//!   feasible anneal-offset range, reported once at construction
//! - [`SamplerConfig`] and [`SamplerFactory`] for building samplers from
//!   configuration
//!
//! Failures (transport, timeout, rejected problem) surface as
//! [`HalError`]; the HAL performs no retries.
//!
//! # Implementing a Sampler
//!
//! ```ignore
//! use qafactor_hal::{HalResult, Sampler, SamplerProperties};
//! use qafactor_ir::{QuadraticModel, SampleSet};
//! use async_trait::async_trait;
//!
//! struct MySampler {
//!     properties: SamplerProperties,
//! }
//!
//! #[async_trait]
//! impl Sampler for MySampler {
//!     fn name(&self) -> &str { "my_sampler" }
//!
//!     fn properties(&self) -> &SamplerProperties {
//!         &self.properties
//!     }
//!
//!     async fn sample(
//!         &self,
//!         model: &QuadraticModel,
//!         anneal_offsets: &[f64],
//!         num_reads: u32,
//!     ) -> HalResult<SampleSet> {
//!         self.properties.validate_problem(model, anneal_offsets, num_reads)?;
//!         // Submit to the device and block until the reads come back
//!         # todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod properties;
pub mod sampler;

pub use error::{HalError, HalResult};
pub use properties::{SamplerProperties, TopologyDescriptor};
pub use sampler::{Sampler, SamplerConfig, SamplerFactory};
