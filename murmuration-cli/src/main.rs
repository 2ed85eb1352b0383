use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use murmuration_cli::{build, load_config, run, FlockStats, Overrides};
use murmuration_core::{FlockConfig, NeighborStrategy, UpdatePolicy, Vector, Vector2D, Vector3D};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless starling murmuration simulation", long_about = None)]
struct Args {
    /// World width
    #[arg(long, default_value_t = 1920.0)]
    width: f32,

    /// World height
    #[arg(long, default_value_t = 1080.0)]
    height: f32,

    /// World depth; simulates in 3D when given
    #[arg(long)]
    depth: Option<f32>,

    /// Number of starlings (overrides the config file)
    #[arg(short, long)]
    population: Option<usize>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Log flock statistics every N ticks (0 disables)
    #[arg(short, long, default_value_t = 100)]
    report_every: u64,

    /// Seed for a reproducible initial flock
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with flock parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Update policy (overrides the config file)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Neighbour index (overrides the config file)
    #[arg(long, value_enum)]
    index: Option<IndexArg>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Snapshot,
    InPlace,
}

impl From<PolicyArg> for UpdatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Snapshot => UpdatePolicy::Snapshot,
            PolicyArg::InPlace => UpdatePolicy::InPlace,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IndexArg {
    BruteForce,
    Grid,
}

impl From<IndexArg> for NeighborStrategy {
    fn from(arg: IndexArg) -> Self {
        match arg {
            IndexArg::BruteForce => NeighborStrategy::BruteForce,
            IndexArg::Grid => NeighborStrategy::Grid,
        }
    }
}

fn simulate<V: Vector + 'static>(bounds: V, config: FlockConfig, args: &Args) -> Result<FlockStats> {
    let mut murmuration = build(bounds, config, args.seed)?;
    Ok(run(&mut murmuration, args.ticks, args.report_every))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => FlockConfig::default(),
    };
    let overrides = Overrides {
        population: args.population,
        update_policy: args.policy.map(Into::into),
        neighbor_strategy: args.index.map(Into::into),
    };
    let config = overrides.apply(base);
    log::debug!("Flock configuration: {:?}", config);

    let stats = match args.depth {
        Some(depth) => simulate(Vector3D::new(args.width, args.height, depth), config, &args),
        None => simulate(Vector2D::new(args.width, args.height), config, &args),
    }
    .context("Simulation error")?;

    println!("{}", stats);

    Ok(())
}
