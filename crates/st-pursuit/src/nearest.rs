//! Reactive chase of the closest visible boid.

use st_behavior::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};
use st_core::ObjectCategory;

/// Steer at the nearest boid exactly as perceived.  Ties go to the first
/// boid in perception order.
#[derive(Clone, Debug)]
pub struct NearestPursuit {
    pub profile: AgentProfile,
}

impl NearestPursuit {
    pub fn new(profile: AgentProfile) -> Self {
        Self { profile }
    }
}

impl SteeringModel for NearestPursuit {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        ctx:    &PerceptContext<'_>,
        _state: &mut (),
    ) -> Option<SteeringIntent> {
        ctx.nearest(ObjectCategory::Boid).map(SteeringIntent::toward)
    }
}
