//! Qafactor Factoring
//!
//! This crate turns a product `P < 64` into a sampling problem on a
//! Chimera annealer and reads the answers back.
//!
//! # Core Components
//!
//! - **Template**: [`multiplier_pattern`] is the hand-placed 3×3-bit
//!   multiplier as a placement pattern, with its biases and couplings
//!   kept as an immutable table
//! - **Builder**: [`ProblemBuilder`] lays the multiplier model over a
//!   [`Placement`](qafactor_embed::Placement); [`fix_product_bits`] clamps
//!   the product bits and drops them from the embedding
//! - **Decoder**: [`decode`] maps reads back through the embedding into
//!   `(a, b)` pairs with occurrence statistics
//! - **Pipeline**: [`Factorer`] runs search, build, fix, sample and decode
//!   against any [`Sampler`](qafactor_hal::Sampler)
//!
//! # Example: Factoring on the Simulator
//!
//! ```ignore
//! use std::sync::Arc;
//! use qafactor_adapter_sim::AnnealingSimulator;
//! use qafactor_factor::{Factorer, FactoringConfig};
//!
//! let sampler = Arc::new(AnnealingSimulator::new());
//! let factorer = Factorer::new(sampler, FactoringConfig::default())?;
//! let output = factorer.factor(21, None).await?;
//!
//! for result in output.results.iter().filter(|r| r.valid) {
//!     println!("{} × {} ({:.1}%)", result.a, result.b, result.percentage_of_occurrences);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod pipeline;
pub mod template;

pub use builder::{ProblemBuilder, check_product, fix_product_bits};
pub use config::{DEFAULT_NUM_READS, FactoringConfig};
pub use decode::{ChainBreakPolicy, DecodeReport, DecodedResult, decode};
pub use error::{FactorError, FactorResult};
pub use pipeline::{FactorOutput, Factorer, Timing, topology_from_properties};
pub use template::{A_BITS, B_BITS, MAX_PRODUCT, PRODUCT_BITS, multiplier_pattern};
