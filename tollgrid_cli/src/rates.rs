use std::path::Path;

use tracing::info;

use tollgrid_graph::resolver;
use tollgrid_rates::{rates, window};

use crate::{load, tables};

pub fn run(edges_path: &Path, schedule_path: Option<&Path>) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(edges_path)?;
    let matrix = resolver::resolve(&edges)?;
    let pairs = matrix.unroll();

    let rows = rates::base_rates(&pairs);
    info!("priced {} pairs", rows.len());
    println!("{}", tables::toll_rate_rows(&rows));

    if let Some(path) = schedule_path {
        let intervals = load::read_schedule(path)?;
        let windowed = window::apply_time_windows(&intervals)?;
        println!("\ntime-windowed rates:");
        println!("{}", tables::windowed_rows(&windowed));
    }

    Ok(())
}
