//! Lead-angle interception.
//!
//! The pursuer, the target, and the interception point form a triangle.  With
//! `β` the angle between the target's heading and the line of sight, the law
//! of sines gives the lead angle `α`:
//!
//! ```text
//! sin α = v_target · sin β / v_pursuer
//! ```
//!
//! and the pursuer's path to the interception point has length
//! `d / cos α`.  When `|v_target · sin β| > v_pursuer` the triangle does not
//! close and the target is not a candidate this tick.  At exactly `±1` the
//! lead is a right angle and the path, though huge, is still finite.

use st_behavior::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};
use st_core::{ObjectCategory, Percept};
use tracing::debug;

/// A solved interception triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interception {
    /// Offset from the target's bearing to aim at, radians.
    pub lead_angle: f64,
    /// Pursuer path length to the interception point.
    pub distance: f64,
}

/// Solve the interception triangle for `target`, or `None` if the target
/// cannot be caught at `pursuer_max_speed` on its current heading.
pub fn lead_angle(target: &Percept, pursuer_max_speed: f64) -> Option<Interception> {
    let beta = target.orientation - target.bearing;
    let ratio = target.speed * beta.sin() / pursuer_max_speed;
    if !ratio.is_finite() || ratio.abs() > 1.0 {
        return None;
    }
    let alpha = ratio.asin();
    let distance = target.distance / alpha.cos();
    if !distance.is_finite() {
        return None;
    }
    Some(Interception { lead_angle: alpha, distance })
}

/// Aim ahead of the boid with the shortest interception path.
#[derive(Clone, Debug)]
pub struct PredictivePursuit {
    pub profile: AgentProfile,
}

impl PredictivePursuit {
    pub fn new(profile: AgentProfile) -> Self {
        Self { profile }
    }

    /// Best interceptable boid and its solution.  Ties go to the first boid
    /// in perception order.
    pub fn best_target<'a>(&self, percepts: &'a [Percept]) -> Option<(&'a Percept, Interception)> {
        let mut best: Option<(&Percept, Interception)> = None;
        for p in percepts.iter().filter(|p| p.is(ObjectCategory::Boid)) {
            let Some(solution) = lead_angle(p, self.profile.max_speed) else {
                debug!(
                    distance = p.distance,
                    speed = p.speed,
                    "boid cannot be intercepted; skipped"
                );
                continue;
            };
            if best.is_none_or(|(_, b)| solution.distance < b.distance) {
                best = Some((p, solution));
            }
        }
        best
    }
}

impl SteeringModel for PredictivePursuit {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        ctx:    &PerceptContext<'_>,
        _state: &mut (),
    ) -> Option<SteeringIntent> {
        self.best_target(ctx.percepts).map(|(target, solution)| {
            SteeringIntent::new(
                target.bearing + solution.lead_angle,
                solution.distance,
                target.speed,
            )
        })
    }
}
