//! Neighbour discovery.
//!
//! A starling's neighbours within radius `R` are every *other* starling
//! (compared by index, never by value) whose distance is strictly less than
//! `R`. Every index returns exactly that set; they differ only in how many
//! candidates they look at.

use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::starling::Starling;
use crate::vector::Vector;

/// Whether `other` counts as a neighbour of `starling` at `radius`.
#[inline]
pub fn within<V: Vector>(starling: &Starling<V>, other: &Starling<V>, radius: f32) -> bool {
    starling.position.distance(&other.position) < radius
}

/// A neighbour lookup structure over a flock.
pub trait NeighborIndex<V: Vector> {
    /// Called once per tick, before any query, with the state queries will read.
    fn rebuild(&mut self, flock: &[Starling<V>]);

    /// Appends to `out` the index of every neighbour of `flock[index]` within
    /// `radius`. `flock` must be the slice last passed to `rebuild`.
    fn query(&self, flock: &[Starling<V>], index: usize, radius: f32, out: &mut Vec<usize>);
}

/// Scans the whole flock for every query.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl BruteForce {
    pub fn scan<V: Vector>(flock: &[Starling<V>], index: usize, radius: f32, out: &mut Vec<usize>) {
        let starling = &flock[index];
        for (other_idx, other) in flock.iter().enumerate() {
            if other_idx != index && within(starling, other, radius) {
                out.push(other_idx);
            }
        }
    }
}

impl<V: Vector> NeighborIndex<V> for BruteForce {
    fn rebuild(&mut self, _flock: &[Starling<V>]) {}

    fn query(&self, flock: &[Starling<V>], index: usize, radius: f32, out: &mut Vec<usize>) {
        Self::scan(flock, index, radius, out);
    }
}

type Cell = [i32; 3];

/// Uniform grid of cubic cells. Starlings are bucketed by the cell holding
/// their position; a query visits every cell the search sphere can touch.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f32,
    // (cell, starling index), sorted by cell
    entries: Vec<(Cell, usize)>,
}

impl UniformGrid {
    /// `cell_size` must be finite and positive.
    pub fn new(cell_size: f32) -> Result<Self, ConfigError> {
        if !cell_size.is_finite() {
            return Err(ConfigError::NonFinite("cell_size"));
        }
        if cell_size <= 0.0 {
            return Err(ConfigError::NonPositiveRadius("cell_size", cell_size));
        }
        Ok(Self {
            cell_size,
            entries: Vec::new(),
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    fn coordinate(&self, value: f32) -> i32 {
        let scaled = value / self.cell_size;
        #[cfg(feature = "std")]
        let floored = scaled.floor();
        #[cfg(not(feature = "std"))]
        let floored = libm::floorf(scaled);
        floored as i32
    }

    fn cell_of<V: Vector>(&self, position: &V) -> Cell {
        let mut cell = [0; 3];
        for (axis, slot) in cell.iter_mut().enumerate().take(V::DIM) {
            *slot = self.coordinate(position.component(axis));
        }
        cell
    }

    fn bucket(&self, cell: &Cell) -> &[(Cell, usize)] {
        let start = self.entries.partition_point(|(c, _)| c < cell);
        let end = start + self.entries[start..].partition_point(|(c, _)| c == cell);
        &self.entries[start..end]
    }
}

impl<V: Vector> NeighborIndex<V> for UniformGrid {
    fn rebuild(&mut self, flock: &[Starling<V>]) {
        self.entries.clear();
        self.entries.reserve(flock.len());
        for (idx, starling) in flock.iter().enumerate() {
            let cell = self.cell_of(&starling.position);
            self.entries.push((cell, idx));
        }
        self.entries.sort_unstable();
    }

    fn query(&self, flock: &[Starling<V>], index: usize, radius: f32, out: &mut Vec<usize>) {
        let starling = &flock[index];
        let centre = self.cell_of(&starling.position);

        #[cfg(feature = "std")]
        let reach = (radius / self.cell_size).ceil();
        #[cfg(not(feature = "std"))]
        let reach = libm::ceilf(radius / self.cell_size);
        let reach = reach as i32;

        let mut span = [(0, 0); 3];
        for (axis, range) in span.iter_mut().enumerate().take(V::DIM) {
            *range = (
                centre[axis].saturating_sub(reach),
                centre[axis].saturating_add(reach),
            );
        }

        let start = out.len();
        for x in span[0].0..=span[0].1 {
            for y in span[1].0..=span[1].1 {
                for z in span[2].0..=span[2].1 {
                    for &(_, other_idx) in self.bucket(&[x, y, z]) {
                        if other_idx != index && within(starling, &flock[other_idx], radius) {
                            out.push(other_idx);
                        }
                    }
                }
            }
        }
        // Keep flock order so float sums match the brute-force scan.
        out[start..].sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2D, Vector3D};

    fn still(x: f32, y: f32) -> Starling<Vector2D> {
        Starling::new(Vector2D::new(x, y), Vector2D::zero())
    }

    #[test]
    fn test_excludes_self() {
        let flock = [still(0.0, 0.0), still(1.0, 0.0)];
        let mut out = Vec::new();
        BruteForce::scan(&flock, 0, 100.0, &mut out);
        assert_eq!(out, [1]);
    }

    #[test]
    fn test_radius_is_exclusive() {
        let flock = [still(0.0, 0.0), still(3.0, 4.0), still(2.0, 0.0)];
        let mut out = Vec::new();
        BruteForce::scan(&flock, 0, 5.0, &mut out);
        assert_eq!(out, [2]);
    }

    #[test]
    fn test_coincident_starlings_are_neighbours() {
        let flock = [still(10.0, 10.0), still(10.0, 10.0)];
        let mut out = Vec::new();
        BruteForce::scan(&flock, 1, 1.0, &mut out);
        assert_eq!(out, [0]);
    }

    #[test]
    fn test_empty_when_isolated() {
        let flock = [still(0.0, 0.0), still(500.0, 500.0)];
        let mut out = Vec::new();
        BruteForce::scan(&flock, 0, 75.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_grid_matches_brute_force() {
        let mut flock = Vec::new();
        for i in 0..12 {
            for j in 0..9 {
                let x = i as f32 * 17.3 + (j % 3) as f32;
                let y = j as f32 * 23.9 - (i % 4) as f32;
                let z = ((i * j) % 7) as f32 * 11.0;
                flock.push(Starling::new(Vector3D::new(x, y, z), Vector3D::zero()));
            }
        }

        let mut grid = UniformGrid::new(30.0).unwrap();
        grid.rebuild(flock.as_slice());

        for radius in [5.0, 20.0, 30.0, 75.0] {
            for idx in 0..flock.len() {
                let mut expected = Vec::new();
                let mut actual = Vec::new();
                BruteForce::scan(&flock, idx, radius, &mut expected);
                grid.query(flock.as_slice(), idx, radius, &mut actual);
                assert_eq!(expected, actual, "radius {} starling {}", radius, idx);
            }
        }
    }

    #[test]
    fn test_grid_handles_negative_coordinates() {
        let flock = [still(-1.0, -1.0), still(1.0, 1.0), still(-40.0, 0.0)];
        let mut grid = UniformGrid::new(10.0).unwrap();
        grid.rebuild(&flock[..]);
        let mut out = Vec::new();
        grid.query(&flock[..], 0, 5.0, &mut out);
        assert_eq!(out, [1]);
    }

    #[test]
    fn test_grid_rejects_degenerate_cell_size() {
        assert_eq!(
            UniformGrid::new(0.0).err(),
            Some(ConfigError::NonPositiveRadius("cell_size", 0.0))
        );
        assert_eq!(
            UniformGrid::new(-10.0).err(),
            Some(ConfigError::NonPositiveRadius("cell_size", -10.0))
        );
        assert_eq!(
            UniformGrid::new(f32::INFINITY).err(),
            Some(ConfigError::NonFinite("cell_size"))
        );
        assert!(UniformGrid::new(f32::NAN).is_err());
    }

    #[test]
    fn test_small_cell_grid_query_terminates() {
        let flock = [still(0.0, 0.0), still(15.0, 0.0), still(0.0, 30.0)];
        let mut grid = UniformGrid::new(0.5).unwrap();
        grid.rebuild(&flock[..]);
        let mut out = Vec::new();
        grid.query(&flock[..], 0, 20.0, &mut out);
        assert_eq!(out, [1]);
    }
}
