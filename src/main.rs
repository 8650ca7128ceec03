use std::time::Instant;

use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

pub mod all_pairs;
pub mod edmonds_karp;
pub mod generator;
pub mod gomory_hu;
pub mod network;
pub mod report;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
pub struct Cli {
    /// Number of nodes in the random graph.
    #[arg(short, long, default_value_t = 30)]
    pub nodes: usize,
    /// Number of undirected edges in the random graph.
    #[arg(short, long, default_value_t = 60)]
    pub edges: usize,
    /// Maximum edge capacity; every edge gets a capacity in [1, max].
    #[arg(short = 'c', long, default_value_t = 50)]
    pub max_capacity: i64,
    /// Seed for the graph generator (OS entropy if not specified).
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Print the generated graph and the cut tree in DOT format.
    #[arg(long)]
    pub print_dot: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("MINCUT_LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();
    let cli = Cli::parse();

    let mut network = generator::random_network(cli.nodes, cli.edges, cli.max_capacity, cli.seed)?;
    info!(
        nodes = network.node_count(),
        edges = network.undirected_edge_count(),
        "generated graph"
    );
    if cli.print_dot {
        println!("{}", report::to_dot(&network));
    }

    let start = Instant::now();
    let reference = all_pairs::all_pairs_min_cut(&mut network)?;
    info!(elapsed = ?start.elapsed(), "all pairs min-cut on the original graph");

    let start = Instant::now();
    let mut tree = gomory_hu::build_tree(&mut network)?;
    let from_tree = all_pairs::all_pairs_min_cut(&mut tree)?;
    info!(elapsed = ?start.elapsed(), "gomory-hu construction and all pairs lookup");

    if cli.print_dot {
        println!("{}", report::to_dot(&tree));
    }

    let agreement = report::compare(&reference, &from_tree);
    info!(
        matching = agreement.matching,
        differing = agreement.differing,
        "comparison finished"
    );
    if agreement.differing > 0 {
        anyhow::bail!(
            "{} pairs disagree between the tree and the reference",
            agreement.differing
        );
    }
    Ok(())
}
