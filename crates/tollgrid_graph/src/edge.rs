use serde::{Deserialize, Serialize};

pub type NodeId = u64;

/// An undirected edge between two toll locations. The reverse direction is
/// implied with the same distance.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TollEdge {
    pub id_start: NodeId,
    pub id_end: NodeId,
    pub distance: f64,
}

impl TollEdge {
    pub fn new(id_start: NodeId, id_end: NodeId, distance: f64) -> Self {
        TollEdge {
            id_start,
            id_end,
            distance,
        }
    }
}

/// One ordered pair of an unrolled distance matrix, `id_start != id_end`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DistancePair {
    pub id_start: NodeId,
    pub id_end: NodeId,
    pub distance: f64,
}
