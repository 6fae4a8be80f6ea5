use tracing::warn;

use crate::edge::{DistancePair, NodeId};

/// Rows whose distance lies within ±10% (inclusive) of the mean distance of
/// the reference id's rows. The reference id's own rows are excluded and the
/// result is sorted by `id_start`, then `id_end`. An id with no rows yields
/// an empty result.
pub fn find_within_threshold(rows: &[DistancePair], reference_id: NodeId) -> Vec<DistancePair> {
    let reference_distances: Vec<f64> = rows
        .iter()
        .filter(|row| row.id_start == reference_id)
        .map(|row| row.distance)
        .collect();

    if reference_distances.is_empty() {
        warn!("no rows with id_start {}", reference_id);
        return Vec::new();
    }

    let mean = reference_distances.iter().sum::<f64>() / reference_distances.len() as f64;
    let lower_bound = mean * 0.9;
    let upper_bound = mean * 1.1;

    let mut matches: Vec<DistancePair> = rows
        .iter()
        .filter(|row| {
            row.id_start != reference_id
                && row.distance >= lower_bound
                && row.distance <= upper_bound
        })
        .copied()
        .collect();

    matches.sort_by(|a, b| a.id_start.cmp(&b.id_start).then(a.id_end.cmp(&b.id_end)));

    matches
}
