use fxhash::FxHashMap;

use crate::edge::{DistancePair, NodeId};

/// Sentinel distance for pairs no path connects.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Square all-pairs distance table over the distinct node ids of an edge
/// list. Stored as a flat row-major vector; the offset for a pair is
/// `row * num_nodes + col`.
pub struct DistanceMatrix {
    node_ids: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix over the given ids with every entry at the
    /// unreachable sentinel. Ids are deduplicated and kept sorted.
    pub(crate) fn with_nodes(mut node_ids: Vec<NodeId>) -> Self {
        node_ids.sort_unstable();
        node_ids.dedup();

        let index = node_ids
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();
        let num_nodes = node_ids.len();

        DistanceMatrix {
            node_ids,
            index,
            distances: vec![UNREACHABLE; num_nodes * num_nodes],
        }
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.node_ids.len() + col
    }

    pub fn num_nodes(&self) -> usize {
        self.node_ids.len()
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub(crate) fn position(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let row = self.position(from)?;
        let col = self.position(to)?;
        Some(self.get(row, col))
    }

    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.distances[self.offset(row, col)]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, distance: f64) {
        let offset = self.offset(row, col);
        self.distances[offset] = distance;
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.node_ids.len();
        (0..n).all(|row| (0..n).all(|col| self.get(row, col) == self.get(col, row)))
    }

    /// Emits one record per ordered pair with distinct endpoints, exactly
    /// N×(N−1) rows. Unreachable pairs keep the sentinel distance.
    pub fn unroll(&self) -> Vec<DistancePair> {
        let n = self.node_ids.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1));

        for (row, &id_start) in self.node_ids.iter().enumerate() {
            for (col, &id_end) in self.node_ids.iter().enumerate() {
                if row == col {
                    continue;
                }
                pairs.push(DistancePair {
                    id_start,
                    id_end,
                    distance: self.get(row, col),
                });
            }
        }

        pairs
    }
}
