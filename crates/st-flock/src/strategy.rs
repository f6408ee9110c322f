//! The flocking decision.

use std::f64::consts::PI;

use st_behavior::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};
use st_core::{normalize_angle, Force, ObjectCategory, Percept};
use tracing::trace;

use crate::FlockerConfig;

/// Advisory distance reported with every flocking intent.  Flocking has no
/// concrete goal, so this is a constant lookahead rather than a target range.
pub const LOOKAHEAD_DISTANCE: f64 = 100.0;

/// Escape direction for a threat at `bearing` inside a cone of half-width
/// `cone` (`0..=π`): the cone edge on the side opposite the threat.  A threat dead
/// ahead (or anywhere at or right of center) sends the agent to `+cone`.
#[inline]
pub fn escape_angle(bearing: f64, cone: f64) -> f64 {
    if bearing <= 0.0 { cone } else { -cone }
}

/// Average position of the neighbors that fed alignment and centering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Centroid {
    pub bearing:  f64,
    pub distance: f64,
}

/// Per-component breakdown of one flocking decision.
///
/// `total` is what steers the agent; the components are kept for debug
/// overlays and tests.  Disabled components stay at zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlockForces {
    pub avoidance:  Force,
    pub separation: Force,
    /// Mean of the neighbors' alignment forces.
    pub alignment:  Force,
    pub centering:  Force,
    pub light:      Force,
    pub total:      Force,
    /// Boids inside the detection band (beyond separation range).
    pub neighbors:  usize,
    pub centroid:   Option<Centroid>,
}

/// Weighted-force flocking for one agent.
#[derive(Clone, Debug)]
pub struct FlockingStrategy {
    pub config:  FlockerConfig,
    pub profile: AgentProfile,
}

impl FlockingStrategy {
    pub fn new(config: FlockerConfig, profile: AgentProfile) -> Self {
        Self { config, profile }
    }

    /// Compose every enabled force for `percepts` in a single pass.
    pub fn forces(&self, percepts: &[Percept]) -> FlockForces {
        let cfg = &self.config;
        let cone = cfg.cone.clamp(0.0, PI);
        let mut out = FlockForces::default();

        let mut alignment_sum = Force::zero();
        let mut bearing_sum = 0.0;
        let mut distance_sum = 0.0;
        let mut nearest_light: Option<&Percept> = None;

        for p in percepts {
            match p.category {
                ObjectCategory::Predator | ObjectCategory::Obstacle => {
                    if !cfg.avoids_obstacles || p.distance > cfg.clearance {
                        continue;
                    }
                    let bearing = normalize_angle(p.bearing);
                    if bearing.abs() > cone {
                        continue;
                    }
                    let weight = cfg.clearance * cfg.obstacle_weight / p.safe_distance();
                    out.avoidance += Force::from_polar(weight, escape_angle(bearing, cone));
                }

                ObjectCategory::Boid => {
                    if p.distance <= cfg.separation_distance {
                        if cfg.avoids_collisions {
                            let weight =
                                cfg.separation_distance * cfg.separation_weight / p.safe_distance();
                            out.separation += Force::from_polar(weight, -p.bearing);
                        }
                    } else if p.distance <= cfg.detection_distance {
                        alignment_sum += Force::from_polar(cfg.alignment_weight, p.orientation);
                        bearing_sum += p.bearing;
                        distance_sum += p.distance;
                        out.neighbors += 1;
                    }
                }

                ObjectCategory::Light => {
                    if nearest_light.is_none_or(|best| p.distance < best.distance) {
                        nearest_light = Some(p);
                    }
                }

                ObjectCategory::Corpse => {}
            }
        }

        if out.neighbors > 0 {
            let n = out.neighbors as f64;
            if cfg.aligns_with_neighbors {
                alignment_sum.reweight(1.0 / n);
                out.alignment = alignment_sum;
            }
            if cfg.does_centering {
                let centroid = Centroid {
                    bearing:  Force::from_polar(1.0, bearing_sum / n).angle(),
                    distance: distance_sum / n,
                };
                out.centering = Force::from_polar(cfg.centering_weight, centroid.bearing);
                out.centroid = Some(centroid);
            }
        }

        if cfg.follows_light {
            if let Some(light) = nearest_light {
                out.light = Force::from_polar(cfg.follow_weight, light.bearing);
            }
        }

        out.total = Force::from_polar(1.0, 0.0)
            + out.avoidance
            + out.separation
            + out.alignment
            + out.centering
            + out.light;
        out
    }

    /// The intent for `percepts`: follow the total force at full speed.
    pub fn steer(&self, percepts: &[Percept]) -> SteeringIntent {
        let forces = self.forces(percepts);
        trace!(
            neighbors = forces.neighbors,
            total = %forces.total,
            "flocking forces composed"
        );
        SteeringIntent::new(forces.total.angle(), LOOKAHEAD_DISTANCE, self.profile.max_speed)
    }
}

impl SteeringModel for FlockingStrategy {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        ctx:    &PerceptContext<'_>,
        _state: &mut (),
    ) -> Option<SteeringIntent> {
        Some(self.steer(ctx.percepts))
    }
}
