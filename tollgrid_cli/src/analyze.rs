use std::path::Path;

use comfy_table::Table;
use tracing::info;

use tollgrid_records::{congestion, coverage, pivot, usage};

use crate::load;

pub fn run(records_path: &Path) -> Result<(), anyhow::Error> {
    let records = load::read_traffic_records(records_path)?;
    info!("loaded {} traffic records", records.len());

    let mut counts_table = Table::new();
    counts_table.set_header(vec!["congestion", "records"]);
    for (level, count) in congestion::congestion_counts(&records) {
        counts_table.add_row(vec![level.to_string(), count.to_string()]);
    }
    println!("{}", counts_table);

    let heavy = usage::heavy_bus_indexes(&records);
    println!("\nrecords with bus volume above twice the mean: {:?}", heavy);

    let routes = usage::busy_truck_routes(&records);
    println!("routes with mean truck volume above 7: {:?}", routes);

    let matrix = pivot::car_volume_matrix(&records);
    println!("\ncar volumes, adjusted:");
    println!("{}", pivot_table(&matrix.scale_by_volume()));

    Ok(())
}

fn pivot_table(matrix: &pivot::PivotMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec!["id_1".to_string()];
    header.extend(matrix.col_ids().iter().map(|id| id.to_string()));
    table.set_header(header);

    for &row_id in matrix.row_ids() {
        let mut row = vec![row_id.to_string()];
        for &col_id in matrix.col_ids() {
            // Both ids come from the matrix itself, the lookup cannot miss.
            row.push(format!("{:.1}", matrix.value(row_id, col_id).unwrap()));
        }
        table.add_row(row);
    }

    table
}

pub fn run_coverage(log_path: &Path) -> Result<(), anyhow::Error> {
    let records = load::read_time_log(log_path)?;
    info!("loaded {} log rows", records.len());

    let mut table = Table::new();
    table.set_header(vec!["id", "id_2", "full week"]);
    for ((id, id_2), complete) in coverage::weekly_coverage(&records) {
        table.add_row(vec![id.to_string(), id_2.to_string(), complete.to_string()]);
    }
    println!("{}", table);

    Ok(())
}
