use thiserror::Error;

use crate::edge::NodeId;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("negative distance {distance} on edge {id_start} -> {id_end}")]
    NegativeDistance {
        id_start: NodeId,
        id_end: NodeId,
        distance: f64,
    },
    #[error("conflicting duplicate edge {id_start} -> {id_end}: {existing} vs {duplicate}")]
    ConflictingEdge {
        id_start: NodeId,
        id_end: NodeId,
        existing: f64,
        duplicate: f64,
    },
}
