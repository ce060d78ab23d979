//! Chimera hardware topology.
//!
//! A Chimera graph is an `rows × cols` grid of tiles. Each tile holds two
//! sub-lattices (`u = 0` and `u = 1`) of `shore` qubits each, forming a
//! complete bipartite `K_{shore,shore}`. Qubits of the `u = 0` sub-lattice
//! also couple to their counterpart in the tile below, qubits of the
//! `u = 1` sub-lattice to their counterpart in the tile to the right.
//!
//! ```text
//!   linear index = ((row · cols + col) · 2 + u) · shore + k
//! ```
//!
//! The coordinate mapping is fixed by the shape. A [`HardwareTopology`]
//! pairs the shape with the set of qubits and couplers that actually work,
//! and is immutable once built.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use qafactor_ir::QubitId;

use crate::error::{EmbedError, EmbedResult};

/// Shape of a Chimera graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChimeraShape {
    /// Number of tile rows.
    pub rows: u32,
    /// Number of tile columns.
    pub cols: u32,
    /// Qubits per sub-lattice in a tile.
    pub shore: u32,
}

impl ChimeraShape {
    /// Create a shape.
    pub fn new(rows: u32, cols: u32, shore: u32) -> Self {
        Self { rows, cols, shore }
    }

    /// Size of the linear index space.
    pub fn num_qubits(&self) -> usize {
        self.rows as usize * self.cols as usize * 2 * self.shore as usize
    }

    /// Whether the coordinate lies inside this shape.
    pub fn contains(&self, coord: ChimeraCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols && coord.u < 2 && coord.k < self.shore
    }

    /// Linear index of a coordinate, if it lies inside the shape.
    pub fn index(&self, coord: ChimeraCoord) -> Option<QubitId> {
        if !self.contains(coord) {
            return None;
        }
        let tile = coord.row * self.cols + coord.col;
        Some(QubitId((tile * 2 + coord.u) * self.shore + coord.k))
    }

    /// Coordinate of a linear index, if it lies inside the shape.
    pub fn coordinate(&self, qubit: QubitId) -> Option<ChimeraCoord> {
        if qubit.index() >= self.num_qubits() {
            return None;
        }
        let k = qubit.0 % self.shore;
        let rest = qubit.0 / self.shore;
        let u = rest % 2;
        let tile = rest / 2;
        Some(ChimeraCoord::new(tile / self.cols, tile % self.cols, u, k))
    }

    /// All edges of the ideal (defect-free) graph, each as `(a, b)` with
    /// `a < b`, sorted.
    pub fn ideal_edges(&self) -> Vec<(QubitId, QubitId)> {
        let mut edges = Vec::new();
        let mut push = |a: ChimeraCoord, b: ChimeraCoord| {
            if let (Some(a), Some(b)) = (self.index(a), self.index(b)) {
                edges.push((a.min(b), a.max(b)));
            }
        };

        for row in 0..self.rows {
            for col in 0..self.cols {
                for k in 0..self.shore {
                    for k2 in 0..self.shore {
                        push(
                            ChimeraCoord::new(row, col, 0, k),
                            ChimeraCoord::new(row, col, 1, k2),
                        );
                    }
                    if row + 1 < self.rows {
                        push(
                            ChimeraCoord::new(row, col, 0, k),
                            ChimeraCoord::new(row + 1, col, 0, k),
                        );
                    }
                    if col + 1 < self.cols {
                        push(
                            ChimeraCoord::new(row, col, 1, k),
                            ChimeraCoord::new(row, col + 1, 1, k),
                        );
                    }
                }
            }
        }

        edges.sort_unstable();
        edges
    }
}

impl fmt::Display for ChimeraShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({}, {}, {})", self.rows, self.cols, self.shore)
    }
}

/// Tile coordinate of a qubit: tile row, tile column, sub-lattice and
/// index within the sub-lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChimeraCoord {
    /// Tile row.
    pub row: u32,
    /// Tile column.
    pub col: u32,
    /// Sub-lattice, 0 (vertical) or 1 (horizontal).
    pub u: u32,
    /// Index within the sub-lattice.
    pub k: u32,
}

impl ChimeraCoord {
    /// Create a coordinate.
    pub const fn new(row: u32, col: u32, u: u32, k: u32) -> Self {
        Self { row, col, u, k }
    }

    /// The same coordinate moved by whole tiles. Saturates at `u32::MAX`,
    /// which no shape contains.
    pub fn translated(self, rows: u32, cols: u32) -> Self {
        Self {
            row: self.row.saturating_add(rows),
            col: self.col.saturating_add(cols),
            ..self
        }
    }
}

impl From<[u32; 4]> for ChimeraCoord {
    fn from([row, col, u, k]: [u32; 4]) -> Self {
        Self::new(row, col, u, k)
    }
}

impl fmt::Display for ChimeraCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.row, self.col, self.u, self.k)
    }
}

/// Working qubits and couplers of a Chimera device.
#[derive(Debug, Clone)]
pub struct HardwareTopology {
    shape: ChimeraShape,
    /// Working qubits, sorted.
    qubits: Vec<QubitId>,
    /// Dense working flag per linear index.
    working: Vec<bool>,
    /// Working couplers as `(a, b)` with `a < b`, sorted.
    edges: Vec<(QubitId, QubitId)>,
    adjacency: FxHashSet<(QubitId, QubitId)>,
}

impl HardwareTopology {
    /// The defect-free graph of the given shape.
    pub fn chimera(shape: ChimeraShape) -> Self {
        let qubits: Vec<QubitId> = (0..shape.num_qubits() as u32).map(QubitId).collect();
        let edges = shape.ideal_edges();
        Self::assemble(shape, qubits, edges)
    }

    /// A graph built from reported working qubits and couplers.
    ///
    /// Qubits and couplers absent from the lists are treated as broken.
    /// Every reported qubit must lie inside the shape and every coupler
    /// must join two reported qubits.
    pub fn from_parts(
        shape: ChimeraShape,
        qubits: impl IntoIterator<Item = QubitId>,
        couplers: impl IntoIterator<Item = (QubitId, QubitId)>,
    ) -> EmbedResult<Self> {
        let len = shape.num_qubits();
        let mut working = vec![false; len];
        for q in qubits {
            if q.index() >= len {
                return Err(EmbedError::QubitOutOfRange { qubit: q, len });
            }
            working[q.index()] = true;
        }

        let mut edges = Vec::new();
        for (a, b) in couplers {
            for q in [a, b] {
                if q.index() >= len {
                    return Err(EmbedError::QubitOutOfRange { qubit: q, len });
                }
                if !working[q.index()] {
                    return Err(EmbedError::MissingQubit(q));
                }
            }
            if a != b {
                edges.push((a.min(b), a.max(b)));
            }
        }
        edges.sort_unstable();
        edges.dedup();

        let qubits = (0..len as u32)
            .map(QubitId)
            .filter(|q| working[q.index()])
            .collect();
        Ok(Self::assemble(shape, qubits, edges))
    }

    fn assemble(shape: ChimeraShape, qubits: Vec<QubitId>, edges: Vec<(QubitId, QubitId)>) -> Self {
        let mut working = vec![false; shape.num_qubits()];
        for q in &qubits {
            working[q.index()] = true;
        }
        let adjacency = edges.iter().copied().collect();
        Self {
            shape,
            qubits,
            working,
            edges,
            adjacency,
        }
    }

    /// Shape of the graph.
    pub fn shape(&self) -> ChimeraShape {
        self.shape
    }

    /// Size of the linear index space, working or not.
    pub fn num_qubits(&self) -> usize {
        self.shape.num_qubits()
    }

    /// Working qubits in ascending order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Working couplers, each with the smaller index first.
    pub fn edges(&self) -> &[(QubitId, QubitId)] {
        &self.edges
    }

    /// Whether `qubit` is a working qubit.
    pub fn contains(&self, qubit: QubitId) -> bool {
        self.working.get(qubit.index()).copied().unwrap_or(false)
    }

    /// Whether a working coupler joins `a` and `b`.
    pub fn is_adjacent(&self, a: QubitId, b: QubitId) -> bool {
        self.adjacency.contains(&(a.min(b), a.max(b)))
    }

    /// Linear index of a working qubit at `coord`.
    ///
    /// Returns `None` when the coordinate is outside the shape or the
    /// qubit there is broken.
    pub fn linear_index(&self, coord: ChimeraCoord) -> Option<QubitId> {
        self.shape.index(coord).filter(|&q| self.contains(q))
    }

    /// Coordinate of a linear index inside the shape.
    pub fn coordinate(&self, qubit: QubitId) -> Option<ChimeraCoord> {
        self.shape.coordinate(qubit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tile() {
        let topo = HardwareTopology::chimera(ChimeraShape::new(1, 1, 4));
        assert_eq!(topo.num_qubits(), 8);
        assert_eq!(topo.qubits().len(), 8);
        // K_{4,4}
        assert_eq!(topo.edges().len(), 16);
        assert!(topo.is_adjacent(QubitId(0), QubitId(4)));
        assert!(topo.is_adjacent(QubitId(7), QubitId(3)));
        assert!(!topo.is_adjacent(QubitId(0), QubitId(1)));
    }

    #[test]
    fn test_edge_count() {
        let shape = ChimeraShape::new(2, 3, 4);
        let topo = HardwareTopology::chimera(shape);
        let intra = 6 * 16;
        let vertical = 3 * 4;
        let horizontal = 2 * 2 * 4;
        assert_eq!(topo.edges().len(), intra + vertical + horizontal);
    }

    #[test]
    fn test_inter_tile_edges() {
        let shape = ChimeraShape::new(2, 2, 4);
        let topo = HardwareTopology::chimera(shape);
        let idx = |r, c, u, k| shape.index(ChimeraCoord::new(r, c, u, k)).unwrap();

        assert!(topo.is_adjacent(idx(0, 0, 0, 2), idx(1, 0, 0, 2)));
        assert!(topo.is_adjacent(idx(0, 0, 1, 3), idx(0, 1, 1, 3)));
        // Vertical qubits do not couple horizontally.
        assert!(!topo.is_adjacent(idx(0, 0, 0, 2), idx(0, 1, 0, 2)));
        assert!(!topo.is_adjacent(idx(0, 0, 1, 3), idx(1, 0, 1, 3)));
    }

    #[test]
    fn test_linear_index_roundtrip() {
        let shape = ChimeraShape::new(16, 16, 4);
        assert_eq!(shape.index(ChimeraCoord::new(0, 0, 1, 0)), Some(QubitId(4)));
        assert_eq!(shape.index(ChimeraCoord::new(0, 1, 0, 0)), Some(QubitId(8)));
        assert_eq!(shape.index(ChimeraCoord::new(1, 0, 0, 0)), Some(QubitId(128)));
        for q in 0..shape.num_qubits() as u32 {
            let coord = shape.coordinate(QubitId(q)).unwrap();
            assert_eq!(shape.index(coord), Some(QubitId(q)));
        }
        assert_eq!(shape.coordinate(QubitId(2048)), None);
        assert_eq!(shape.index(ChimeraCoord::new(16, 0, 0, 0)), None);
        assert_eq!(shape.index(ChimeraCoord::new(0, 0, 2, 0)), None);
    }

    #[test]
    fn test_translated_saturates_out_of_shape() {
        let shape = ChimeraShape::new(16, 16, 4);
        let moved = ChimeraCoord::new(3, 2, 1, 0).translated(u32::MAX, 1);
        assert_eq!(moved, ChimeraCoord::new(u32::MAX, 3, 1, 0));
        assert_eq!(shape.index(moved), None);
    }

    #[test]
    fn test_from_parts_with_broken_qubit() {
        let shape = ChimeraShape::new(1, 1, 2);
        let ideal = HardwareTopology::chimera(shape);
        let qubits = ideal.qubits().iter().copied().filter(|&q| q != QubitId(1));
        let edges = ideal
            .edges()
            .iter()
            .copied()
            .filter(|&(a, b)| a != QubitId(1) && b != QubitId(1));
        let topo = HardwareTopology::from_parts(shape, qubits, edges).unwrap();

        assert!(!topo.contains(QubitId(1)));
        assert_eq!(topo.linear_index(ChimeraCoord::new(0, 0, 0, 1)), None);
        assert_eq!(
            topo.linear_index(ChimeraCoord::new(0, 0, 0, 0)),
            Some(QubitId(0))
        );
        assert_eq!(topo.edges().len(), 2);
    }

    #[test]
    fn test_from_parts_rejects_bad_input() {
        let shape = ChimeraShape::new(1, 1, 2);
        let err = HardwareTopology::from_parts(shape, [QubitId(8)], []).unwrap_err();
        assert!(matches!(err, EmbedError::QubitOutOfRange { .. }));

        let err =
            HardwareTopology::from_parts(shape, [QubitId(0)], [(QubitId(0), QubitId(2))])
                .unwrap_err();
        assert_eq!(err, EmbedError::MissingQubit(QubitId(2)));
    }
}
