//! Unit tests for st-flock.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use st_behavior::{AgentKind, AgentProfile, PerceptContext, SteeringModel};
use st_core::{AgentId, Hue, ObjectCategory, Percept, Tick};

use crate::{escape_angle, FlockerConfig, FlockingStrategy, LOOKAHEAD_DISTANCE};

const EPS: f64 = 1e-9;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn strategy(config: FlockerConfig) -> FlockingStrategy {
    FlockingStrategy::new(config, AgentProfile::default_for(AgentKind::Flocker))
}

fn only(enable: impl FnOnce(&mut FlockerConfig)) -> FlockingStrategy {
    let mut config = FlockerConfig::all_disabled();
    enable(&mut config);
    strategy(config)
}

fn boid(distance: f64, bearing: f64) -> Percept {
    Percept::new(ObjectCategory::Boid, distance, bearing)
}

fn mixed_scene() -> Vec<Percept> {
    vec![
        Percept::new(ObjectCategory::Obstacle, 30.0, 0.2),
        boid(20.0, -1.0),
        boid(120.0, 0.8).with_orientation(0.4),
        Percept::new(ObjectCategory::Predator, 90.0, -0.3),
        Percept::light(Hue::Green, 300.0, 2.0),
        Percept::new(ObjectCategory::Corpse, 5.0, 0.0),
    ]
}

// ── Baseline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod baseline_tests {
    use super::*;

    #[test]
    fn empty_percepts_go_straight_at_full_speed() {
        let s = strategy(FlockerConfig::default());
        let intent = s.steer(&[]);
        assert_eq!(intent.bearing, 0.0);
        assert_eq!(intent.distance, LOOKAHEAD_DISTANCE);
        assert_eq!(intent.speed, s.profile.max_speed);
    }

    #[test]
    fn all_disabled_always_bears_zero() {
        let s = strategy(FlockerConfig::all_disabled());
        assert!(s.steer(&mixed_scene()).bearing.abs() < EPS);
    }

    #[test]
    fn corpses_are_ignored() {
        let s = strategy(FlockerConfig::default());
        let percepts = [Percept::new(ObjectCategory::Corpse, 1.0, 0.5)];
        assert!(s.steer(&percepts).bearing.abs() < EPS);
    }

    #[test]
    fn model_always_returns_an_intent() {
        let s = strategy(FlockerConfig::default());
        let scene = mixed_scene();
        let ctx = PerceptContext::new(Tick(3), AgentId(1), &scene);
        let intent = s.compute_intent(&ctx, &mut ()).unwrap();
        assert_eq!(intent, s.steer(&scene));
    }
}

// ── Obstacle avoidance ────────────────────────────────────────────────────────

#[cfg(test)]
mod avoidance_tests {
    use super::*;

    #[test]
    fn head_on_obstacle_escapes_to_cone_edge() {
        let s = only(|c| c.avoids_obstacles = true);
        let clearance = s.config.clearance;
        let percepts = [Percept::new(ObjectCategory::Obstacle, clearance / 2.0, 0.0)];

        let forces = s.forces(&percepts);
        assert!((forces.avoidance.angle() - FRAC_PI_3).abs() < EPS);
        assert!((forces.avoidance.magnitude() - 2.0 * s.config.obstacle_weight).abs() < EPS);

        let bearing = s.steer(&percepts).bearing;
        assert!(bearing > 0.5 && bearing < FRAC_PI_3, "got {bearing}");
    }

    #[test]
    fn escape_is_away_from_threat_side() {
        assert_eq!(escape_angle(-0.4, 1.0), 1.0);
        assert_eq!(escape_angle(0.0, 1.0), 1.0);
        assert_eq!(escape_angle(0.4, 1.0), -1.0);

        let s = only(|c| c.avoids_obstacles = true);
        let left = [Percept::new(ObjectCategory::Predator, 50.0, 0.5)];
        assert!(s.steer(&left).bearing < 0.0);
    }

    #[test]
    fn out_of_range_cone_never_steers_into_threat() {
        let threat = [Percept::new(ObjectCategory::Obstacle, 30.0, 0.2)];

        let wrapped = only(|c| {
            c.avoids_obstacles = true;
            c.cone = (-30.0f64).to_radians().rem_euclid(2.0 * PI);
        });
        // Clamped to a half turn: the escape points straight back, never
        // to the threat's side.
        let forces = wrapped.forces(&threat);
        assert!(forces.avoidance.x() < 0.0);
        assert!(forces.avoidance.y() <= 0.0, "pulled toward the threat: {}", forces.avoidance);
        assert!(forces.total.y() <= 0.0);

        let negative = only(|c| {
            c.avoids_obstacles = true;
            c.cone = -0.5;
        });
        assert!(negative.forces(&threat).avoidance.is_zero());
    }

    #[test]
    fn outside_cone_or_range_is_ignored() {
        let s = only(|c| c.avoids_obstacles = true);
        let percepts = [
            Percept::new(ObjectCategory::Obstacle, 50.0, FRAC_PI_2),
            Percept::new(ObjectCategory::Obstacle, 50.0, -FRAC_PI_2),
            Percept::new(ObjectCategory::Obstacle, s.config.clearance + 1.0, 0.0),
        ];
        assert!(s.forces(&percepts).avoidance.is_zero());
    }

    #[test]
    fn zero_distance_stays_finite() {
        let s = only(|c| c.avoids_obstacles = true);
        let percepts = [Percept::new(ObjectCategory::Obstacle, 0.0, 0.0)];
        let intent = s.steer(&percepts);
        assert!(intent.bearing.is_finite());
        assert!((intent.bearing - FRAC_PI_3).abs() < 1e-6);
    }
}

// ── Separation, alignment, centering ──────────────────────────────────────────

#[cfg(test)]
mod neighbor_tests {
    use super::*;

    #[test]
    fn separation_pushes_directly_away() {
        let s = only(|c| c.avoids_collisions = true);
        let forces = s.forces(&[boid(25.0, 0.5)]);
        assert!((forces.separation.angle() + 0.5).abs() < EPS);
        let expected = s.config.separation_distance * s.config.separation_weight / 25.0;
        assert!((forces.separation.magnitude() - expected).abs() < EPS);
    }

    #[test]
    fn close_boid_is_not_a_neighbor_even_when_separation_disabled() {
        let s = only(|c| c.aligns_with_neighbors = true);
        let forces = s.forces(&[boid(10.0, 0.5).with_orientation(1.0)]);
        assert_eq!(forces.neighbors, 0);
        assert!(forces.alignment.is_zero());
    }

    #[test]
    fn alignment_is_averaged_with_real_division() {
        let s = only(|c| c.aligns_with_neighbors = true);
        let percepts = [
            boid(100.0, 0.0).with_orientation(0.3),
            boid(150.0, 0.0).with_orientation(0.3),
            boid(200.0, 0.0).with_orientation(0.3),
        ];
        let forces = s.forces(&percepts);
        assert_eq!(forces.neighbors, 3);
        assert!((forces.alignment.magnitude() - s.config.alignment_weight).abs() < EPS);
        assert!((forces.alignment.angle() - 0.3).abs() < EPS);
    }

    #[test]
    fn centering_aims_at_mean_bearing() {
        let s = only(|c| c.does_centering = true);
        let forces = s.forces(&[boid(100.0, 0.2), boid(200.0, 0.6)]);
        let centroid = forces.centroid.unwrap();
        assert!((centroid.bearing - 0.4).abs() < EPS);
        assert!((centroid.distance - 150.0).abs() < EPS);
        assert!((forces.centering.magnitude() - s.config.centering_weight).abs() < EPS);
    }

    #[test]
    fn boids_beyond_detection_are_ignored() {
        let s = strategy(FlockerConfig::default());
        let forces = s.forces(&[boid(s.config.detection_distance + 1.0, 1.0)]);
        assert_eq!(forces.neighbors, 0);
        assert!(forces.total.angle().abs() < EPS);
    }
}

// ── Light following ───────────────────────────────────────────────────────────

#[cfg(test)]
mod light_tests {
    use super::*;

    #[test]
    fn follows_nearest_light_only() {
        let s = only(|c| c.follows_light = true);
        let percepts = [
            Percept::light(Hue::Red, 400.0, -2.0),
            Percept::light(Hue::Blue, 80.0, 1.0),
            Percept::light(Hue::Green, 80.0, -1.0),
        ];
        let forces = s.forces(&percepts);
        assert!((forces.light.angle() - 1.0).abs() < EPS);
        assert!(s.steer(&percepts).bearing > 0.0);
    }

    #[test]
    fn light_behind_can_turn_agent_around() {
        let mut config = FlockerConfig::all_disabled();
        config.follows_light = true;
        config.follow_weight = 10.0;
        let s = strategy(config);
        let bearing = s.steer(&[Percept::light(Hue::Red, 50.0, PI)]).bearing;
        assert!((bearing - PI).abs() < EPS, "got {bearing}");
    }
}
