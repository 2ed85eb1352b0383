use crate::error::ConfigError;
use crate::vector::Vector;

/// How a tick orders its reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UpdatePolicy {
    /// Every rule reads the start-of-tick state. Results do not depend on
    /// the order starlings are visited in.
    #[default]
    Snapshot,
    /// Each starling is updated as it is visited, so later starlings see
    /// the already-moved earlier ones.
    InPlace,
}

/// Which neighbour index backs the neighbour query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NeighborStrategy {
    #[default]
    BruteForce,
    Grid,
}

/// Configuration for the flocking simulation, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    pub population: usize,
    /// Distance from each wall at which the inward push starts.
    pub boundary_margin: f32,
    pub boundary_coefficient: f32,
    pub speed_limit: f32,
    /// Upper end of the per-axis range initial velocities are drawn from.
    pub initial_speed: f32,
    /// Neighbour radius for alignment and cohesion.
    pub visual_field: f32,
    /// Neighbour radius for separation.
    pub separation_distance: f32,
    pub separation_coefficient: f32,
    pub alignment_coefficient: f32,
    pub cohesion_coefficient: f32,
    pub update_policy: UpdatePolicy,
    pub neighbor_strategy: NeighborStrategy,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            population: 600,
            boundary_margin: 200.0,
            boundary_coefficient: 0.8,
            speed_limit: 12.0,
            initial_speed: 8.0,
            visual_field: 75.0,
            separation_distance: 20.0,
            separation_coefficient: 0.05,
            alignment_coefficient: 0.05,
            cohesion_coefficient: 0.01,
            update_policy: UpdatePolicy::Snapshot,
            neighbor_strategy: NeighborStrategy::BruteForce,
        }
    }
}

impl FlockConfig {
    pub fn with_population(population: usize) -> Self {
        Self {
            population,
            ..Self::default()
        }
    }

    /// Checks the configuration against the world it will run in.
    pub fn validate<V: Vector>(&self, bounds: &V) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        for axis in 0..V::DIM {
            let value = bounds.component(axis);
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidBound { axis, value });
            }
        }

        if !self.speed_limit.is_finite() || self.speed_limit <= 0.0 {
            return Err(ConfigError::InvalidSpeedLimit(self.speed_limit));
        }

        let finite = [
            ("boundary_margin", self.boundary_margin),
            ("boundary_coefficient", self.boundary_coefficient),
            ("initial_speed", self.initial_speed),
            ("visual_field", self.visual_field),
            ("separation_distance", self.separation_distance),
            ("separation_coefficient", self.separation_coefficient),
            ("alignment_coefficient", self.alignment_coefficient),
            ("cohesion_coefficient", self.cohesion_coefficient),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        if self.boundary_margin < 0.0 {
            return Err(ConfigError::Negative("boundary_margin", self.boundary_margin));
        }
        if self.initial_speed < 0.0 {
            return Err(ConfigError::Negative("initial_speed", self.initial_speed));
        }

        if self.visual_field <= 0.0 {
            return Err(ConfigError::NonPositiveRadius("visual_field", self.visual_field));
        }
        if self.separation_distance <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(
                "separation_distance",
                self.separation_distance,
            ));
        }
        if self.separation_distance > self.visual_field {
            return Err(ConfigError::SeparationExceedsVisualField {
                separation: self.separation_distance,
                visual_field: self.visual_field,
            });
        }

        Ok(())
    }
}
