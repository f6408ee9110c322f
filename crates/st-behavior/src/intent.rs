//! Steering intents: the single output of a decision call.

use st_core::{normalize_angle, Percept};

/// Where an agent wants to go this tick.
///
/// Produced by [`SteeringModel::compute_intent`][crate::SteeringModel::compute_intent]
/// and handed to the external motion integrator, which turns it into heading
/// and position updates under the agent's own acceleration and turn limits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringIntent {
    /// Desired travel direction relative to the current heading, `(-π, π]`.
    pub bearing: f64,

    /// Advisory distance to the goal.  Strategies without a concrete goal
    /// report a constant lookahead here.
    pub distance: f64,

    /// Desired speed.  Pursuit strategies annotate the target's speed here
    /// for display; the pursuer still travels at its own maximum.
    pub speed: f64,
}

impl SteeringIntent {
    /// Build an intent; `bearing` is folded into the canonical range.
    #[inline]
    pub fn new(bearing: f64, distance: f64, speed: f64) -> Self {
        Self {
            bearing: normalize_angle(bearing),
            distance,
            speed,
        }
    }

    /// Head straight for a perceived object, echoing its distance and speed.
    #[inline]
    pub fn toward(percept: &Percept) -> Self {
        Self::new(percept.bearing, percept.distance, percept.speed)
    }

    /// Head for a perceived object at a chosen speed.
    #[inline]
    pub fn toward_at(percept: &Percept, speed: f64) -> Self {
        Self::new(percept.bearing, percept.distance, speed)
    }
}

impl std::fmt::Display for SteeringIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bearing {:+.3} rad, distance {:.1}, speed {:.2}",
            self.bearing, self.distance, self.speed
        )
    }
}
