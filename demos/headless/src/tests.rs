//! Unit tests for the headless arena.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::{SeedableRng, rngs::SmallRng};

use st_behavior::{AgentKind, AgentProfile};
use st_core::{Hue, ObjectCategory};

use crate::world::{Arena, Body, Contacts, Light};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn body(kind: AgentKind, x: f64, y: f64, heading: f64) -> Body {
    let profile = AgentProfile::default_for(kind);
    Body { profile, x, y, heading, speed: profile.max_speed, alive: true }
}

fn arena_with(bodies: Vec<Body>) -> Arena {
    let mut arena = Arena::new(1_000.0, 1_000.0, 200.0);
    arena.bodies = bodies;
    arena
}

fn group_of(arena: &Arena) -> crate::world::Group {
    crate::world::Group { start: 0, len: arena.bodies.len() }
}

// ── Contacts ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact_tests {
    use super::*;

    #[test]
    fn predator_touching_boid_leaves_a_corpse() {
        let mut arena = arena_with(vec![
            body(AgentKind::Predator, 100.0, 100.0, 0.0),
            body(AgentKind::Flocker, 105.0, 100.0, 0.0),
        ]);
        let mut rng = SmallRng::seed_from_u64(1);
        let contacts = arena.resolve_contacts(&mut rng);
        assert_eq!(contacts, Contacts { kills: 1, lights_eaten: 0 });
        assert!(!arena.bodies[1].alive);
        assert!(arena.bodies[0].alive);

        // The dead flocker now shows up as a corpse to the predator.
        let seen = arena.percepts(group_of(&arena));
        assert!(seen[0].iter().any(|p| p.is(ObjectCategory::Corpse)));
        assert!(seen[1].is_empty());
    }

    #[test]
    fn flocker_eats_light_it_touches() {
        let mut arena = arena_with(vec![body(AgentKind::Flocker, 300.0, 300.0, 0.0)]);
        arena.lights.push(Light { x: 303.0, y: 300.0, hue: Hue::Green });
        let mut rng = SmallRng::seed_from_u64(7);

        let contacts = arena.resolve_contacts(&mut rng);
        assert_eq!(contacts.lights_eaten, 1);
        assert_eq!(arena.lights.len(), 1);
        assert_eq!(arena.lights[0].hue, Hue::Green);
        assert!((arena.lights[0].x, arena.lights[0].y) != (303.0, 300.0));
    }

    #[test]
    fn grazers_and_predators_leave_lights_alone() {
        let mut arena = arena_with(vec![
            body(AgentKind::Grazer, 300.0, 300.0, 0.0),
            body(AgentKind::Predator, 600.0, 600.0, 0.0),
        ]);
        arena.lights.push(Light { x: 301.0, y: 300.0, hue: Hue::Red });
        arena.lights.push(Light { x: 600.0, y: 601.0, hue: Hue::Blue });
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(arena.resolve_contacts(&mut rng), Contacts::default());
        assert_eq!(arena.lights[0].x, 301.0);
    }
}

// ── Perception and motion ─────────────────────────────────────────────────────

#[cfg(test)]
mod perception_tests {
    use super::*;

    #[test]
    fn bearing_and_orientation_are_relative_to_heading() {
        // Observer faces north; the other agent is due east, facing south.
        let arena = arena_with(vec![
            body(AgentKind::Flocker, 500.0, 500.0, FRAC_PI_2),
            body(AgentKind::Predator, 550.0, 500.0, -FRAC_PI_2),
        ]);
        let seen = &arena.percepts(group_of(&arena))[0];
        assert_eq!(seen.len(), 1);
        let p = seen[0];
        assert_eq!(p.category, ObjectCategory::Predator);
        assert!((p.distance - 50.0).abs() < 1e-9);
        assert!((p.bearing + FRAC_PI_2).abs() < 1e-9);
        assert!((p.orientation - PI).abs() < 1e-9);
    }

    #[test]
    fn percepts_see_across_the_wrap() {
        let arena = arena_with(vec![
            body(AgentKind::Flocker, 995.0, 500.0, 0.0),
            body(AgentKind::Flocker, 5.0, 500.0, 0.0),
        ]);
        let seen = &arena.percepts(group_of(&arena))[0];
        assert!((seen[0].distance - 10.0).abs() < 1e-9);
        assert!(seen[0].bearing.abs() < 1e-9);
    }

    #[test]
    fn polarization_measures_agreement() {
        let aligned = arena_with(vec![
            body(AgentKind::Flocker, 0.0, 0.0, 0.3),
            body(AgentKind::Flocker, 50.0, 0.0, 0.3),
        ]);
        assert!((aligned.polarization(group_of(&aligned)) - 1.0).abs() < 1e-9);

        let opposed = arena_with(vec![
            body(AgentKind::Flocker, 0.0, 0.0, 0.0),
            body(AgentKind::Flocker, 50.0, 0.0, PI),
        ]);
        assert!(opposed.polarization(group_of(&opposed)) < 1e-9);
    }
}
