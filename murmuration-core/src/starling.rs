#[cfg(feature = "std")]
use rand::Rng;

use crate::vector::Vector;

/// A single flocking agent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Starling<V> {
    pub position: V,
    /// Displacement per tick.
    pub velocity: V,
}

impl<V: Vector> Starling<V> {
    pub fn new(position: V, velocity: V) -> Self {
        Self { position, velocity }
    }

    /// Uniform position inside `bounds`, velocity uniform in `[0, initial_speed)` per axis.
    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(bounds: &V, initial_speed: f32, rng: &mut R) -> Self {
        let position = V::from_fn(|axis| rng.gen::<f32>() * bounds.component(axis));
        let velocity = V::from_fn(|_| rng.gen::<f32>() * initial_speed);
        Self::new(position, velocity)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    pub fn heading(&self) -> V {
        self.velocity.heading()
    }

    /// Advances the position by one tick of the current velocity.
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}
