use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tollgrid_graph::edge::NodeId;

mod analyze;
mod load;
mod rates;
mod resolve;
mod tables;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an edge list into all-pairs shortest distances
    Resolve {
        /// CSV with id_start, id_end, distance columns
        #[arg(short, long)]
        edges: PathBuf,

        /// Also list the pairs within 10% of this id's mean distance
        #[arg(short, long)]
        reference: Option<NodeId>,
    },
    /// Derive per-category toll rates, optionally time-windowed
    Rates {
        /// CSV with id_start, id_end, distance columns
        #[arg(short, long)]
        edges: PathBuf,

        /// CSV with per-pair day codes and times
        #[arg(short, long)]
        schedule: Option<PathBuf>,
    },
    /// Summarize a traffic record table
    Analyze {
        /// CSV of traffic records
        #[arg(short, long)]
        records: PathBuf,
    },
    /// Check a time log for full week coverage per location pair
    Coverage {
        /// CSV of logged toll intervals
        #[arg(short, long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Resolve { edges, reference } => resolve::run(&edges, reference),
        Commands::Rates { edges, schedule } => rates::run(&edges, schedule.as_deref()),
        Commands::Analyze { records } => analyze::run(&records),
        Commands::Coverage { log } => analyze::run_coverage(&log),
    }
}
