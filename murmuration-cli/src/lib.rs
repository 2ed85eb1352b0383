pub mod settings;
pub mod stats;

use anyhow::{Context, Result};
use murmuration_core::{FlockConfig, Murmuration, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use settings::{load_config, parse_config, Overrides};
pub use stats::FlockStats;

/// Builds a flock, reproducibly when a seed is given.
pub fn build<V: Vector + 'static>(
    bounds: V,
    config: FlockConfig,
    seed: Option<u64>,
) -> Result<Murmuration<V>> {
    let murmuration = match seed {
        Some(seed) => {
            log::debug!("Seeding flock with {}", seed);
            Murmuration::from_rng(bounds, config, &mut StdRng::seed_from_u64(seed))
        }
        None => Murmuration::new(bounds, config),
    };
    murmuration.context("Failed to initialize flock")
}

/// Ticks the flock `ticks` times, logging stats every `report_every` ticks
/// (never when 0). Returns the stats after the last tick.
pub fn run<V: Vector>(murmuration: &mut Murmuration<V>, ticks: u64, report_every: u64) -> FlockStats {
    log::info!("Running {} ticks over {} starlings", ticks, murmuration.size());

    for _ in 0..ticks {
        murmuration.tick();
        if report_every > 0 && murmuration.ticks() % report_every == 0 {
            log::info!("{}", FlockStats::measure(murmuration));
        }
    }

    FlockStats::measure(murmuration)
}
