//! Unit tests for st-behavior.

use st_core::{AgentId, Hue, ObjectCategory, Percept, Tick};

use crate::{
    AgentKind, AgentProfile, HoldCourse, PerceptContext, SteeringIntent, SteeringModel,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_context(percepts: &[Percept]) -> PerceptContext<'_> {
    PerceptContext::new(Tick(0), AgentId(0), percepts)
}

// ── SteeringIntent ────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn bearing_is_normalized() {
        let intent = SteeringIntent::new(3.0 * PI, 10.0, 2.0);
        assert!((intent.bearing - PI).abs() < 1e-9);
        assert_eq!(intent.distance, 10.0);
        assert_eq!(intent.speed, 2.0);
    }

    #[test]
    fn toward_echoes_percept() {
        let p = Percept::new(ObjectCategory::Boid, 40.0, -0.5).with_speed(3.0);
        let intent = SteeringIntent::toward(&p);
        assert_eq!(intent, SteeringIntent::new(-0.5, 40.0, 3.0));
        assert_eq!(SteeringIntent::toward_at(&p, 6.0).speed, 6.0);
    }
}

// ── PerceptContext ────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn filters_by_category() {
        let percepts = [
            Percept::light(Hue::Red, 5.0, 0.0),
            Percept::new(ObjectCategory::Boid, 2.0, 0.0),
            Percept::light(Hue::Blue, 9.0, 0.0),
        ];
        let ctx = make_context(&percepts);
        assert_eq!(ctx.of(ObjectCategory::Light).count(), 2);
        assert_eq!(ctx.nearest(ObjectCategory::Light).unwrap().color, Some(Hue::Red));
        assert!(ctx.nearest(ObjectCategory::Obstacle).is_none());
    }

    #[test]
    fn nearest_ties_go_to_first_seen() {
        let percepts = [
            Percept::light(Hue::Green, 7.0, 0.1),
            Percept::light(Hue::Blue, 7.0, 0.2),
        ];
        let ctx = make_context(&percepts);
        assert_eq!(ctx.nearest(ObjectCategory::Light).unwrap().color, Some(Hue::Green));
    }
}

// ── Profiles and dispositions ─────────────────────────────────────────────────

#[cfg(test)]
mod profile_tests {
    use crate::{disposition, Disposition};

    use super::*;

    #[test]
    fn defaults_validate() {
        for kind in AgentKind::ALL {
            let profile = AgentProfile::default_for(kind);
            assert_eq!(profile.kind, kind);
            profile.validate().unwrap();
        }
        assert_eq!(AgentProfile::default_for(AgentKind::Predator).max_speed, 6.0);
    }

    #[test]
    fn rejects_non_positive_max_speed() {
        let mut profile = AgentProfile::default_for(AgentKind::Grazer);
        profile.max_speed = 0.0;
        assert!(profile.validate().is_err());
        profile.max_speed = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn rejects_min_above_max() {
        let mut profile = AgentProfile::default_for(AgentKind::Flocker);
        profile.min_speed = profile.max_speed + 1.0;
        let err = profile.validate().unwrap_err().to_string();
        assert!(err.contains("flocker"), "got {err}");
    }

    #[test]
    fn appearance() {
        assert_eq!(AgentKind::Predator.looks_like(true), ObjectCategory::Predator);
        assert_eq!(AgentKind::Predator.looks_like(false), ObjectCategory::Corpse);
        assert_eq!(AgentKind::Flocker.looks_like(true), ObjectCategory::Boid);
    }

    #[test]
    fn disposition_table() {
        assert_eq!(disposition(AgentKind::Flocker, ObjectCategory::Light), Disposition::Attack);
        assert_eq!(disposition(AgentKind::Predator, ObjectCategory::Boid), Disposition::Attack);
        assert_eq!(disposition(AgentKind::Predator, ObjectCategory::Corpse), Disposition::Coexist);
        for category in ObjectCategory::ALL {
            assert_eq!(disposition(AgentKind::Grazer, category), Disposition::Coexist);
        }
    }
}

// ── Models ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    /// Counts its own decisions; exercises mutable per-agent state.
    struct CountingModel {
        profile: AgentProfile,
    }

    impl SteeringModel for CountingModel {
        type State = u32;

        fn profile(&self) -> &AgentProfile {
            &self.profile
        }

        fn compute_intent(&self, ctx: &PerceptContext<'_>, calls: &mut u32) -> Option<SteeringIntent> {
            *calls += 1;
            ctx.nearest(ObjectCategory::Light)
                .map(|p| SteeringIntent::toward_at(p, self.profile.max_speed))
        }
    }

    #[test]
    fn hold_course_never_steers() {
        let model = HoldCourse::new(AgentProfile::default_for(AgentKind::Flocker));
        let percepts = [Percept::light(Hue::Red, 1.0, 0.0)];
        assert!(model.compute_intent(&make_context(&percepts), &mut ()).is_none());
        assert_eq!(model.kind(), AgentKind::Flocker);
    }

    #[test]
    fn stateful_model_mutates_own_state() {
        let model = CountingModel { profile: AgentProfile::default_for(AgentKind::Grazer) };
        let percepts = [Percept::light(Hue::Red, 4.0, 0.3)];
        let mut calls = 0;
        let intent = model.compute_intent(&make_context(&percepts), &mut calls).unwrap();
        model.compute_intent(&make_context(&[]), &mut calls);
        assert_eq!(calls, 2);
        assert_eq!(intent.speed, 5.0);
    }

    #[test]
    fn model_is_object_safe_via_box() {
        let model: Box<dyn SteeringModel<State = ()>> =
            Box::new(HoldCourse::new(AgentProfile::default_for(AgentKind::Grazer)));
        assert!(model.compute_intent(&make_context(&[]), &mut ()).is_none());
    }
}
