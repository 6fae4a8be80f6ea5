use std::path::Path;

use tracing::info;

use tollgrid_graph::{edge::NodeId, resolver, threshold};

use crate::{load, tables};

pub fn run(edges_path: &Path, reference: Option<NodeId>) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(edges_path)?;
    let matrix = resolver::resolve(&edges)?;
    info!(
        "resolved {} nodes from {} edges",
        matrix.num_nodes(),
        edges.len()
    );

    let pairs = matrix.unroll();
    println!("{}", tables::distance_pairs(&pairs));

    if let Some(reference_id) = reference {
        let matches = threshold::find_within_threshold(&pairs, reference_id);
        println!(
            "\npairs within 10% of the mean distance of id {}:",
            reference_id
        );
        println!("{}", tables::distance_pairs(&matches));
    }

    Ok(())
}
