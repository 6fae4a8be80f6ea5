use tracing::debug;

use crate::{
    edge::TollEdge,
    error::GraphError,
    matrix::{DistanceMatrix, UNREACHABLE},
};

/// Resolves a sparse undirected edge list into the complete all-pairs
/// shortest-distance matrix via Floyd-Warshall relaxation.
///
/// Distances must be non-negative. Duplicate edges are accepted only when
/// they agree on the distance; a conflicting duplicate is rejected rather
/// than letting input order pick a winner. An empty edge list yields an
/// empty matrix.
pub fn resolve(edges: &[TollEdge]) -> Result<DistanceMatrix, GraphError> {
    let mut node_ids = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        node_ids.push(edge.id_start);
        node_ids.push(edge.id_end);
    }

    let mut matrix = DistanceMatrix::with_nodes(node_ids);
    let n = matrix.num_nodes();
    debug!("resolving distance matrix over {} nodes", n);

    for edge in edges {
        if edge.distance < 0.0 {
            return Err(GraphError::NegativeDistance {
                id_start: edge.id_start,
                id_end: edge.id_end,
                distance: edge.distance,
            });
        }

        // Both endpoints were registered above, the lookups cannot miss.
        let row = matrix.position(edge.id_start).unwrap();
        let col = matrix.position(edge.id_end).unwrap();

        let existing = matrix.get(row, col);
        if existing != UNREACHABLE && existing != edge.distance {
            return Err(GraphError::ConflictingEdge {
                id_start: edge.id_start,
                id_end: edge.id_end,
                existing,
                duplicate: edge.distance,
            });
        }

        matrix.set(row, col, edge.distance);
        matrix.set(col, row, edge.distance);
    }

    for k in 0..n {
        for i in 0..n {
            let through_k = matrix.get(i, k);
            if through_k == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                let candidate = through_k + matrix.get(k, j);
                if candidate < matrix.get(i, j) {
                    matrix.set(i, j, candidate);
                }
            }
        }
    }

    for i in 0..n {
        matrix.set(i, i, 0.0);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_edges() -> Vec<TollEdge> {
        vec![TollEdge::new(1, 2, 10.0), TollEdge::new(2, 3, 5.0)]
    }

    #[test]
    fn test_resolve_via_intermediate_node() {
        let matrix = resolve(&chain_edges()).unwrap();

        assert_eq!(matrix.distance(1, 3), Some(15.0));
        assert_eq!(matrix.distance(1, 1), Some(0.0));
    }

    #[test]
    fn test_resolve_prefers_shorter_indirect_path() {
        let mut edges = chain_edges();
        edges.push(TollEdge::new(1, 3, 100.0));

        let matrix = resolve(&edges).unwrap();

        assert_eq!(matrix.distance(1, 3), Some(15.0));
    }

    #[test]
    fn test_resolved_matrix_is_symmetric_with_zero_diagonal() {
        let matrix = resolve(&chain_edges()).unwrap();

        assert!(matrix.is_symmetric());
        for &id in matrix.node_ids() {
            assert_eq!(matrix.distance(id, id), Some(0.0));
        }
    }

    #[test]
    fn test_triangle_inequality_holds() {
        let edges = vec![
            TollEdge::new(1, 2, 3.0),
            TollEdge::new(2, 3, 4.0),
            TollEdge::new(1, 3, 10.0),
            TollEdge::new(3, 4, 2.0),
        ];

        let matrix = resolve(&edges).unwrap();

        let ids = matrix.node_ids().to_vec();
        for &i in &ids {
            for &j in &ids {
                for &k in &ids {
                    let direct = matrix.distance(i, j).unwrap();
                    let through = matrix.distance(i, k).unwrap() + matrix.distance(k, j).unwrap();
                    assert!(direct <= through);
                }
            }
        }
    }

    #[test]
    fn test_disconnected_pair_stays_unreachable() {
        let edges = vec![TollEdge::new(1, 2, 1.0), TollEdge::new(3, 4, 1.0)];

        let matrix = resolve(&edges).unwrap();

        assert_eq!(matrix.distance(1, 3), Some(UNREACHABLE));
        assert_eq!(matrix.distance(1, 2), Some(1.0));
    }

    #[test]
    fn test_empty_edge_list() {
        let matrix = resolve(&[]).unwrap();

        assert_eq!(matrix.num_nodes(), 0);
        assert!(matrix.unroll().is_empty());
    }

    #[test]
    fn test_negative_distance_is_rejected() {
        let edges = vec![TollEdge::new(1, 2, -1.0)];

        assert!(matches!(
            resolve(&edges),
            Err(GraphError::NegativeDistance { .. })
        ));
    }

    #[test]
    fn test_conflicting_duplicate_edge_is_rejected() {
        let edges = vec![TollEdge::new(1, 2, 10.0), TollEdge::new(2, 1, 12.0)];

        assert!(matches!(
            resolve(&edges),
            Err(GraphError::ConflictingEdge { .. })
        ));
    }

    #[test]
    fn test_identical_duplicate_edge_is_accepted() {
        let edges = vec![TollEdge::new(1, 2, 10.0), TollEdge::new(2, 1, 10.0)];

        let matrix = resolve(&edges).unwrap();

        assert_eq!(matrix.distance(1, 2), Some(10.0));
    }

    #[test]
    fn test_unroll_row_count() {
        let matrix = resolve(&chain_edges()).unwrap();

        assert_eq!(matrix.unroll().len(), 3 * 2);
    }
}
