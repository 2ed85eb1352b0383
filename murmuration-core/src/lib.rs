#![cfg_attr(not(feature = "std"), no_std)]

//! Boids flocking kernel.
//!
//! A [`Murmuration`] owns a fixed population of [`Starling`]s and steps it
//! one tick at a time with the three classic rules (separation, alignment,
//! cohesion), a soft push back from the walls and a hard speed limit. The
//! same code drives 2D ([`Vector2D`]) and 3D ([`Vector3D`]) flocks.

extern crate alloc;

pub mod behavior;
pub mod config;
pub mod error;
pub mod murmuration;
pub mod neighbours;
pub mod starling;
pub mod vector;

pub use config::{FlockConfig, NeighborStrategy, UpdatePolicy};
pub use error::ConfigError;
pub use murmuration::Murmuration;
pub use neighbours::{BruteForce, NeighborIndex, UniformGrid};
pub use starling::Starling;
pub use vector::{Vector, Vector2D, Vector3D};
