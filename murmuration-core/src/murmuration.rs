use alloc::boxed::Box;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use rand::Rng;

use crate::behavior;
use crate::config::{FlockConfig, NeighborStrategy, UpdatePolicy};
use crate::error::ConfigError;
use crate::neighbours::{BruteForce, NeighborIndex, UniformGrid};
use crate::starling::Starling;
use crate::vector::{Vector, Vector2D, Vector3D};

/// A fixed-size flock and the driver that steps it.
///
/// The flock is only ever written by [`Murmuration::tick`]; between ticks
/// the state can be read through [`Murmuration::starlings`] or, flattened
/// for a renderer, through [`Murmuration::flock`].
pub struct Murmuration<V: Vector> {
    bounds: V,
    config: FlockConfig,
    flock: Vec<Starling<V>>,
    snapshot: Vec<Starling<V>>,
    index: Box<dyn NeighborIndex<V>>,
    export: Vec<f32>,
    visual: Vec<usize>,
    local: Vec<usize>,
    ticks: u64,
}

fn index_for<V: Vector>(config: &FlockConfig) -> Result<Box<dyn NeighborIndex<V>>, ConfigError> {
    let index: Box<dyn NeighborIndex<V>> = match config.neighbor_strategy {
        NeighborStrategy::BruteForce => Box::new(BruteForce),
        NeighborStrategy::Grid => Box::new(UniformGrid::new(config.visual_field)?),
    };
    Ok(index)
}

impl<V: Vector + 'static> Murmuration<V> {
    /// Randomly populates `config.population` starlings inside `bounds`.
    #[cfg(feature = "std")]
    pub fn new(bounds: V, config: FlockConfig) -> Result<Self, ConfigError> {
        Self::from_rng(bounds, config, &mut rand::thread_rng())
    }

    /// Like [`Murmuration::new`] with a caller-supplied random source, so a
    /// seeded generator reproduces the same flock.
    #[cfg(feature = "std")]
    pub fn from_rng<R: Rng + ?Sized>(
        bounds: V,
        config: FlockConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate(&bounds)?;
        let flock = (0..config.population)
            .map(|_| Starling::random(&bounds, config.initial_speed, rng))
            .collect();
        Self::build(bounds, config, flock)
    }

    /// Uses the given starlings as the flock. The population is the length
    /// of `starlings`, whatever `config.population` says.
    pub fn from_starlings(
        bounds: V,
        config: FlockConfig,
        starlings: Vec<Starling<V>>,
    ) -> Result<Self, ConfigError> {
        let config = FlockConfig {
            population: starlings.len(),
            ..config
        };
        config.validate(&bounds)?;
        Self::build(bounds, config, starlings)
    }

    fn build(bounds: V, config: FlockConfig, flock: Vec<Starling<V>>) -> Result<Self, ConfigError> {
        log::info!(
            "Initializing murmuration: {} starlings, {}D, policy {:?}, index {:?}",
            flock.len(),
            V::DIM,
            config.update_policy,
            config.neighbor_strategy
        );

        let index = index_for(&config)?;
        let mut murmuration = Self {
            bounds,
            config,
            snapshot: Vec::with_capacity(flock.len()),
            export: Vec::with_capacity(flock.len() * 2 * V::DIM),
            flock,
            index,
            visual: Vec::new(),
            local: Vec::new(),
            ticks: 0,
        };
        murmuration.refresh_export();
        Ok(murmuration)
    }

    /// Replaces the neighbour index. Any index must return the same sets as
    /// [`BruteForce`].
    pub fn with_index(mut self, index: Box<dyn NeighborIndex<V>>) -> Self {
        self.index = index;
        self
    }
}

impl<V: Vector> Murmuration<V> {
    /// Advances the flock by one step.
    pub fn tick(&mut self) {
        match self.config.update_policy {
            UpdatePolicy::Snapshot => self.tick_snapshot(),
            UpdatePolicy::InPlace => self.tick_in_place(),
        }
        self.refresh_export();
        self.ticks += 1;
        log::trace!("tick {} complete", self.ticks);
    }

    fn tick_snapshot(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.flock);
        self.index.rebuild(&self.snapshot);

        for idx in 0..self.snapshot.len() {
            self.visual.clear();
            self.local.clear();
            self.index
                .query(&self.snapshot, idx, self.config.visual_field, &mut self.visual);
            self.index.query(
                &self.snapshot,
                idx,
                self.config.separation_distance,
                &mut self.local,
            );

            let velocity = behavior::steer(
                &self.snapshot[idx],
                &self.snapshot,
                &self.visual,
                &self.local,
                &self.bounds,
                &self.config,
            );

            let starling = &mut self.flock[idx];
            starling.velocity = velocity;
            starling.advance();
        }
    }

    fn tick_in_place(&mut self) {
        for idx in 0..self.flock.len() {
            self.visual.clear();
            self.local.clear();
            BruteForce::scan(&self.flock, idx, self.config.visual_field, &mut self.visual);
            BruteForce::scan(
                &self.flock,
                idx,
                self.config.separation_distance,
                &mut self.local,
            );

            let velocity = behavior::steer(
                &self.flock[idx],
                &self.flock,
                &self.visual,
                &self.local,
                &self.bounds,
                &self.config,
            );

            let starling = &mut self.flock[idx];
            starling.velocity = velocity;
            starling.advance();
        }
    }

    fn refresh_export(&mut self) {
        self.export.clear();
        for starling in &self.flock {
            starling.position.extend_into(&mut self.export);
            starling.velocity.extend_into(&mut self.export);
        }
    }

    /// Indices of every other starling closer than `radius` to starling `index`.
    pub fn neighbours(&self, index: usize, radius: f32) -> Vec<usize> {
        let mut out = Vec::new();
        BruteForce::scan(&self.flock, index, radius, &mut out);
        out
    }

    /// Number of starlings; fixed for the lifetime of the flock.
    pub fn size(&self) -> usize {
        self.flock.len()
    }

    pub fn bounds(&self) -> V {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.component(0)
    }

    pub fn height(&self) -> f32 {
        self.bounds.component(1)
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn starlings(&self) -> &[Starling<V>] {
        &self.flock
    }

    /// The flock as `[x, y, (z,) dx, dy, (dz)]` per starling, in flock order.
    /// Valid until the next tick.
    pub fn flock(&self) -> &[f32] {
        &self.export
    }

    /// Scalars per starling in [`Murmuration::flock`].
    pub fn stride(&self) -> usize {
        2 * V::DIM
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Murmuration<Vector2D> {
    /// A 2D flock with default parameters.
    #[cfg(feature = "std")]
    pub fn with_size(width: f32, height: f32, population: usize) -> Result<Self, ConfigError> {
        Self::new(
            Vector2D::new(width, height),
            FlockConfig::with_population(population),
        )
    }
}

impl Murmuration<Vector3D> {
    /// A 3D flock with default parameters.
    #[cfg(feature = "std")]
    pub fn with_size(
        width: f32,
        height: f32,
        depth: f32,
        population: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(
            Vector3D::new(width, height, depth),
            FlockConfig::with_population(population),
        )
    }

    pub fn depth(&self) -> f32 {
        self.bounds.z
    }
}
