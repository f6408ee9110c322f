//! `st-pursuit`: predators chasing boids.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`nearest`]     | `NearestPursuit`: head straight for the closest boid |
//! | [`predictive`]  | `PredictivePursuit`, `lead_angle`, `Interception`     |
//! | [`pursuer`]     | `PursuitMode`, `Pursuer`: runtime-selected variant   |
//!
//! Both variants are stateless.  Intents carry the *target's* speed as an
//! annotation; the pursuer's own speed is its profile maximum, applied by the
//! motion integrator.

pub mod nearest;
pub mod predictive;
pub mod pursuer;


pub use nearest::NearestPursuit;
pub use predictive::{lead_angle, Interception, PredictivePursuit};
pub use pursuer::{Pursuer, PursuitMode};
