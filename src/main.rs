//! Fault-tree dataset generator - CLI driver.

use anyhow::{Context, Result};
use clap::Parser;
use fault_tree_gen::{
    DotExporter, Exporter, FaultTree, FaultTreeGenerator, GeneratorConfig, JsonExporter,
    RunConfigFile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

/// Generate random fault-tree graphs as a labeled dataset
#[derive(Parser, Debug)]
#[command(name = "ftgen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of children per gate
    #[arg(long, default_value_t = 3)]
    max_children: u32,

    /// Minimum number of children per gate
    #[arg(long, default_value_t = 2)]
    min_children: u32,

    /// Maximum tree depth (the top event sits at depth 0)
    #[arg(long, default_value_t = 4)]
    max_depth: u32,

    /// Number of graphs to generate
    #[arg(long, default_value_t = 1)]
    num_graphs: u32,

    /// Dataset output directory
    #[arg(long, default_value = "models/disjoint_graphs")]
    path: PathBuf,

    /// Also write a Graphviz DOT rendering per model
    #[arg(long)]
    visualization: bool,

    /// Dump every node with its attributes to stdout
    #[arg(long)]
    print_out: bool,

    /// Seed the random source for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GeneratorConfig {
        max_num_children: args.max_children,
        min_children: args.min_children,
        max_depth: args.max_depth,
        num_graphs: args.num_graphs,
        ..GeneratorConfig::default()
    };

    match args.seed {
        Some(seed) => run(&args, config, StdRng::seed_from_u64(seed)),
        None => run(&args, config, rand::rng()),
    }
}

fn run<R: Rng>(args: &Args, config: GeneratorConfig, rng: R) -> Result<()> {
    let run_config = RunConfigFile::new(&args.path);
    let counters = run_config.read().with_context(|| {
        format!("failed to read run counters from {}", run_config.path().display())
    })?;

    let json = JsonExporter::new(&args.path);
    let dot = args.visualization.then(|| DotExporter::new(&args.path));

    let num_graphs = config.num_graphs;
    let mut generator =
        FaultTreeGenerator::new(config, counters, rng).context("invalid configuration")?;

    for _ in 0..num_graphs {
        let tree = generator.generate()?;
        let path = json.export(&tree).context("failed to export model")?;
        if let Some(dot) = &dot {
            dot.export(&tree).context("failed to write visualization")?;
        }
        if args.print_out {
            print_nodes(&tree);
        }
        run_config
            .write(&generator.counters())
            .context("failed to persist run counters")?;

        let model_id = tree.metadata().map(|m| m.model_id).unwrap_or_default();
        info!(
            model_id,
            nodes = tree.node_count(),
            "wrote {}",
            path.display()
        );
    }

    Ok(())
}

fn print_nodes(tree: &FaultTree) {
    for (id, attrs) in tree.nodes() {
        println!("Node ID: {id}, Attributes: {attrs:?}");
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .compact()
        .init();
}
