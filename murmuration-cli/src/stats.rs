use murmuration_core::{Murmuration, Vector};
use std::fmt;

/// Summary of the flock after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FlockStats {
    pub tick: u64,
    pub mean_speed: f32,
    pub max_speed: f32,
    /// Mean position, one entry per axis.
    pub centroid: Vec<f32>,
    /// Length of the mean heading: 1 when every starling flies the same way,
    /// near 0 when headings cancel out. Stationary starlings have no heading
    /// and count as 0.
    pub polarization: f32,
}

impl FlockStats {
    pub fn measure<V: Vector>(murmuration: &Murmuration<V>) -> Self {
        let starlings = murmuration.starlings();
        let count = starlings.len() as f32;

        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut position_sum = V::zero();
        let mut heading_sum = V::zero();

        for starling in starlings {
            let speed = starling.speed();
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            position_sum += starling.position;
            heading_sum += starling.velocity.normalize();
        }

        let centroid = position_sum / count;
        Self {
            tick: murmuration.ticks(),
            mean_speed: speed_sum / count,
            max_speed,
            centroid: (0..V::DIM).map(|axis| centroid.component(axis)).collect(),
            polarization: (heading_sum / count).magnitude(),
        }
    }
}

impl fmt::Display for FlockStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: mean speed {:.2}, max speed {:.2}, polarization {:.3}, centroid {:.1?}",
            self.tick, self.mean_speed, self.max_speed, self.polarization, self.centroid
        )
    }
}
