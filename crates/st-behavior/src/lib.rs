//! `st-behavior`: steering model trait and intent types.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`intent`]      | `SteeringIntent`: bearing, lookahead distance, speed        |
//! | [`context`]     | `PerceptContext<'a>`: one agent's read-only tick snapshot   |
//! | [`model`]       | `SteeringModel` trait                                        |
//! | [`profile`]     | `AgentKind`, `AgentProfile` (kinematic limits), appearance   |
//! | [`disposition`] | `Disposition` and the (kind, category) lookup table          |
//! | [`noop`]        | `HoldCourse`: placeholder that never produces an intent     |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Design notes
//!
//! A decision call is a pure function of the percept snapshot and the
//! model's immutable configuration, plus (for stateful models) the agent's
//! own `State`.  The result is a single optional intent: `None` means "no
//! change this tick".  Acceleration and turn-rate limits are enforced by the
//! motion integrator downstream, never here.

pub mod context;
pub mod disposition;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod profile;

#[cfg(test)]
mod tests;

pub use context::{nearest_by, PerceptContext};
pub use disposition::{disposition, Disposition};
pub use error::{BehaviorError, BehaviorResult};
pub use intent::SteeringIntent;
pub use model::SteeringModel;
pub use noop::HoldCourse;
pub use profile::{AgentKind, AgentProfile};
