//! The flocking rules. Each returns the velocity delta it contributes; the
//! caller folds the deltas into the starling's velocity.

use crate::config::FlockConfig;
use crate::starling::Starling;
use crate::vector::Vector;

/// Steer away from starlings inside the separation radius.
pub fn separation<V: Vector>(
    starling: &Starling<V>,
    flock: &[Starling<V>],
    neighbours: &[usize],
    config: &FlockConfig,
) -> V {
    let mut delta = V::zero();
    for &idx in neighbours {
        delta += starling.position - flock[idx].position;
    }
    delta * config.separation_coefficient
}

/// Steer towards the average heading of the visual field.
pub fn alignment<V: Vector>(flock: &[Starling<V>], neighbours: &[usize], config: &FlockConfig) -> V {
    if neighbours.is_empty() {
        return V::zero();
    }

    let mut sum = V::zero();
    for &idx in neighbours {
        sum += flock[idx].velocity;
    }
    sum / neighbours.len() as f32 * config.alignment_coefficient
}

/// Steer towards the centre of mass of the visual field.
pub fn cohesion<V: Vector>(
    starling: &Starling<V>,
    flock: &[Starling<V>],
    neighbours: &[usize],
    config: &FlockConfig,
) -> V {
    if neighbours.is_empty() {
        return V::zero();
    }

    let mut sum = V::zero();
    for &idx in neighbours {
        sum += flock[idx].position;
    }
    (sum / neighbours.len() as f32 - starling.position) * config.cohesion_coefficient
}

/// Constant inward nudge on every axis where the starling is inside the margin.
pub fn containment<V: Vector>(position: &V, bounds: &V, config: &FlockConfig) -> V {
    let margin = config.boundary_margin;
    let push = config.boundary_coefficient;
    V::from_fn(|axis| {
        let p = position.component(axis);
        let mut nudge = 0.0;
        if p > bounds.component(axis) - margin {
            nudge -= push;
        }
        if p < margin {
            nudge += push;
        }
        nudge
    })
}

/// The velocity a starling leaves the tick with: cohesion, separation and
/// alignment, then containment, then the speed limit.
pub fn steer<V: Vector>(
    starling: &Starling<V>,
    flock: &[Starling<V>],
    visual: &[usize],
    local: &[usize],
    bounds: &V,
    config: &FlockConfig,
) -> V {
    let mut velocity = starling.velocity;
    velocity += cohesion(starling, flock, visual, config);
    velocity += separation(starling, flock, local, config);
    velocity += alignment(flock, visual, config);
    velocity += containment(&starling.position, bounds, config);
    velocity.limit(config.speed_limit)
}
