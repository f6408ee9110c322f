//! `st-flock`: Reynolds-style flocking as a weighted sum of forces.
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`config`]   | `FlockerConfig`: per-agent enables and weights  |
//! | [`strategy`] | `FlockingStrategy`, `FlockForces` breakdown      |
//!
//! Each tick starts from a unit force straight ahead and adds, when enabled:
//! obstacle/predator avoidance, separation from crowding boids, alignment
//! with and centering on neighbors, and attraction to the nearest light.
//! The agent then travels along the resulting force at full speed.

pub mod config;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use config::{FlockerConfig, DEFAULT_CONE_DEGREES};
pub use strategy::{escape_angle, Centroid, FlockForces, FlockingStrategy, LOOKAHEAD_DISTANCE};
