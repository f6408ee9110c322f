//! Stateless grazer: every tick is decided from the current percepts alone.
//!
//! Priority, highest first:
//!
//! 1. A light within the threshold has been reached: head for a light of the
//!    next palette colour.  The first such light in perception order wins,
//!    not the nearest.
//! 2. A light almost exactly straight ahead: keep going.
//! 3. The nearest light.

use st_behavior::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};
use st_core::{normalize_angle, Hue, ObjectCategory, Percept};

use crate::PatrolConfig;

/// Bearing band, radians, treated as "already facing this light".
pub const STRAIGHT_AHEAD_TOLERANCE: f64 = 0.01;

#[derive(Clone, Debug)]
pub struct ReactivePatrol {
    pub config:  PatrolConfig,
    pub profile: AgentProfile,
}

impl ReactivePatrol {
    pub fn new(config: PatrolConfig, profile: AgentProfile) -> Self {
        Self { config, profile }
    }

    /// The light to head for this tick.
    pub fn select<'a>(&self, percepts: &'a [Percept]) -> Option<&'a Percept> {
        let mut ahead: Option<&Percept> = None;
        let mut nearest: Option<&Percept> = None;

        for p in percepts.iter().filter(|p| p.is(ObjectCategory::Light)) {
            if p.distance <= self.config.threshold {
                let next = Hue::after(p.color);
                return percepts
                    .iter()
                    .find(|q| q.is(ObjectCategory::Light) && q.color == Some(next));
            }
            if normalize_angle(p.bearing).abs() <= STRAIGHT_AHEAD_TOLERANCE {
                ahead = Some(p);
            } else if nearest.is_none_or(|n| p.distance < n.distance) {
                nearest = Some(p);
            }
        }
        ahead.or(nearest)
    }
}

impl SteeringModel for ReactivePatrol {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        ctx:    &PerceptContext<'_>,
        _state: &mut (),
    ) -> Option<SteeringIntent> {
        self.select(ctx.percepts)
            .map(|light| SteeringIntent::toward_at(light, self.profile.max_speed))
    }
}
