use comfy_table::Table;

use tollgrid_graph::edge::DistancePair;
use tollgrid_rates::{rates::TollRateRow, window::WindowedTollRateRow};

pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "unreachable".to_string()
    } else {
        format!("{:.2}", distance)
    }
}

pub fn distance_pairs(pairs: &[DistancePair]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["id_start", "id_end", "distance"]);
    for pair in pairs {
        table.add_row(vec![
            pair.id_start.to_string(),
            pair.id_end.to_string(),
            format_distance(pair.distance),
        ]);
    }
    table
}

pub fn toll_rate_rows(rows: &[TollRateRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "id_start", "id_end", "distance", "moto", "car", "rv", "bus", "truck",
    ]);
    for row in rows {
        table.add_row(vec![
            row.id_start.to_string(),
            row.id_end.to_string(),
            format_distance(row.distance),
            format!("{:.2}", row.rates.moto),
            format!("{:.2}", row.rates.car),
            format!("{:.2}", row.rates.rv),
            format!("{:.2}", row.rates.bus),
            format!("{:.2}", row.rates.truck),
        ]);
    }
    table
}

pub fn windowed_rows(rows: &[WindowedTollRateRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "id_start",
        "id_end",
        "start_day",
        "start_time",
        "end_day",
        "end_time",
        "moto",
        "car",
        "rv",
        "bus",
        "truck",
    ]);
    for row in rows {
        table.add_row(vec![
            row.id_start.to_string(),
            row.id_end.to_string(),
            format!("{:?}", row.start_day),
            row.start_time.to_string(),
            format!("{:?}", row.end_day),
            row.end_time.to_string(),
            format!("{:.2}", row.rates.moto),
            format!("{:.2}", row.rates.car),
            format!("{:.2}", row.rates.rv),
            format!("{:.2}", row.rates.bus),
            format!("{:.2}", row.rates.truck),
        ]);
    }
    table
}
