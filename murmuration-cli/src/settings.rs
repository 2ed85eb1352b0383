use anyhow::{Context, Result};
use murmuration_core::{FlockConfig, NeighborStrategy, UpdatePolicy};
use std::path::Path;

/// Parses a JSON flock configuration. Missing fields keep their defaults.
pub fn parse_config(json: &str) -> Result<FlockConfig> {
    let config = serde_json::from_str(json).context("Invalid flock configuration JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<FlockConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&json).with_context(|| format!("Failed to load {}", path.display()))
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub population: Option<usize>,
    pub update_policy: Option<UpdatePolicy>,
    pub neighbor_strategy: Option<NeighborStrategy>,
}

impl Overrides {
    pub fn apply(&self, mut config: FlockConfig) -> FlockConfig {
        if let Some(population) = self.population {
            config.population = population;
        }
        if let Some(policy) = self.update_policy {
            config.update_policy = policy;
        }
        if let Some(strategy) = self.neighbor_strategy {
            config.neighbor_strategy = strategy;
        }
        config
    }
}
