//! A no-op steering model: agents never change course.

use crate::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};

/// A [`SteeringModel`] that always returns `None`.
///
/// Useful as a placeholder in tests or for passive populations that drift on
/// their current heading.
#[derive(Clone, Debug)]
pub struct HoldCourse {
    pub profile: AgentProfile,
}

impl HoldCourse {
    pub fn new(profile: AgentProfile) -> Self {
        Self { profile }
    }
}

impl SteeringModel for HoldCourse {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        _ctx:   &PerceptContext<'_>,
        _state: &mut (),
    ) -> Option<SteeringIntent> {
        None
    }
}
