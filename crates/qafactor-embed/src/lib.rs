//! Qafactor Embedding and Anneal Offsets
//!
//! This crate places a fixed chain pattern on a Chimera annealer and
//! computes the per-qubit anneal offsets for it.
//!
//! # Core Components
//!
//! - **Topology**: [`HardwareTopology`] holds the working qubits and
//!   couplers of a Chimera device and translates between
//!   [`ChimeraCoord`] tile coordinates and linear qubit indices
//! - **Embedding**: [`Embedding`] maps logical variables to disjoint,
//!   non-empty chains of physical qubits
//! - **Offsets**: [`ideal_offsets`] derives an advance per chain qubit
//!   from its chain length; [`fit_offsets`] maps those advances into the
//!   device's [`OffsetRanges`]
//! - **Search**: [`PlacementSearch`] scores every tile translation of a
//!   [`PatternTemplate`] by the offset range it achieves
//!
//! # Example: Scoring a Placement
//!
//! ```rust
//! use qafactor_embed::{
//!     ChimeraCoord, ChimeraShape, HardwareTopology, OffsetRanges, PatternTemplate,
//!     PlacementSearch,
//! };
//!
//! let shape = ChimeraShape::new(2, 2, 4);
//! let topology = HardwareTopology::chimera(shape);
//! let ranges = OffsetRanges::uniform(shape.num_qubits(), -0.1, 0.1).unwrap();
//!
//! // A two-qubit vertical chain next to a single qubit.
//! let template = PatternTemplate::new(
//!     vec![
//!         ("x".into(), vec![ChimeraCoord::new(0, 0, 0, 0), ChimeraCoord::new(1, 0, 0, 0)]),
//!         ("y".into(), vec![ChimeraCoord::new(0, 0, 1, 0)]),
//!     ],
//!     vec![(ChimeraCoord::new(0, 0, 0, 0), ChimeraCoord::new(0, 0, 1, 0))],
//! )
//! .unwrap();
//!
//! let outcome = PlacementSearch::new(&topology, &ranges).search(&template).unwrap();
//! assert_eq!(outcome.stats.evaluated, 2);
//! assert!((outcome.best.range - 0.2).abs() < 1e-12);
//! ```

pub mod embedding;
pub mod error;
pub mod offsets;
pub mod search;
pub mod topology;

pub use embedding::Embedding;
pub use error::{EmbedError, EmbedResult};
pub use offsets::{
    IdealOffsets, OffsetRanges, OffsetStrategy, WorkingOffsets, chain_delay, fit_offsets,
    ideal_offsets,
};
pub use search::{
    DEFAULT_DELAY_BASE, PatternTemplate, Placement, PlacementSearch, ScoredPlacement,
    SearchBounds, SearchOutcome, SearchStats, TileOffset,
};
pub use topology::{ChimeraCoord, ChimeraShape, HardwareTopology};
