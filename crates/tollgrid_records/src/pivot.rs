use fxhash::FxHashMap;

use tollgrid_graph::edge::NodeId;

use crate::record::TrafficRecord;

/// Pivot of a per-record value with `id_1` rows and `id_2` columns, stored
/// as a flat row-major vector.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotMatrix {
    row_ids: Vec<NodeId>,
    col_ids: Vec<NodeId>,
    values: Vec<f64>,
}

impl PivotMatrix {
    pub fn row_ids(&self) -> &[NodeId] {
        &self.row_ids
    }

    pub fn col_ids(&self) -> &[NodeId] {
        &self.col_ids
    }

    pub fn value(&self, row_id: NodeId, col_id: NodeId) -> Option<f64> {
        let row = self.row_ids.iter().position(|&id| id == row_id)?;
        let col = self.col_ids.iter().position(|&id| id == col_id)?;
        Some(self.values[row * self.col_ids.len() + col])
    }

    /// Volume adjustment: entries above 20 scale down by 0.75 and the rest
    /// up by 1.25. Results are rounded to one decimal.
    pub fn scale_by_volume(&self) -> PivotMatrix {
        PivotMatrix {
            row_ids: self.row_ids.clone(),
            col_ids: self.col_ids.clone(),
            values: self
                .values
                .iter()
                .map(|&value| {
                    let scaled = if value > 20.0 {
                        value * 0.75
                    } else {
                        value * 1.25
                    };
                    (scaled * 10.0).round() / 10.0
                })
                .collect(),
        }
    }
}

/// Pivots car volumes into an `id_1` × `id_2` matrix. Missing combinations
/// are 0 and the diagonal is forced to 0.
pub fn car_volume_matrix(records: &[TrafficRecord]) -> PivotMatrix {
    let mut row_ids: Vec<NodeId> = records.iter().map(|record| record.id_1).collect();
    row_ids.sort_unstable();
    row_ids.dedup();

    let mut col_ids: Vec<NodeId> = records.iter().map(|record| record.id_2).collect();
    col_ids.sort_unstable();
    col_ids.dedup();

    let row_index: FxHashMap<NodeId, usize> = row_ids
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();
    let col_index: FxHashMap<NodeId, usize> = col_ids
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();

    let mut values = vec![0.0; row_ids.len() * col_ids.len()];
    for record in records {
        if record.id_1 == record.id_2 {
            continue;
        }
        values[row_index[&record.id_1] * col_ids.len() + col_index[&record.id_2]] = record.car;
    }

    PivotMatrix {
        row_ids,
        col_ids,
        values,
    }
}
