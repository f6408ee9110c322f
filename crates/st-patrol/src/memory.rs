//! Stateful grazer: remembers which colour it is looking for.

use st_behavior::{nearest_by, AgentProfile, PerceptContext, SteeringIntent, SteeringModel};
use st_core::{Hue, ObjectCategory};
use tracing::debug;

use crate::PatrolConfig;

/// A grazer's memory.  Owned by its agent and mutated at most once per tick,
/// by that agent's own decision call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PatrolState {
    /// No light chosen yet; the first tick goes for the nearest of any colour.
    #[default]
    NotStarted,
    /// Looking for the nearest light of this colour.
    Seek(Hue),
}

impl PatrolState {
    #[inline]
    pub fn has_started(self) -> bool {
        !matches!(self, PatrolState::NotStarted)
    }

    #[inline]
    pub fn target_color(self) -> Option<Hue> {
        match self {
            PatrolState::NotStarted => None,
            PatrolState::Seek(hue)  => Some(hue),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MemoryPatrol {
    pub config:  PatrolConfig,
    pub profile: AgentProfile,
}

impl MemoryPatrol {
    pub fn new(config: PatrolConfig, profile: AgentProfile) -> Self {
        Self { config, profile }
    }
}

impl SteeringModel for MemoryPatrol {
    type State = PatrolState;

    fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    fn compute_intent(
        &self,
        ctx:   &PerceptContext<'_>,
        state: &mut PatrolState,
    ) -> Option<SteeringIntent> {
        let lights = ctx.of(ObjectCategory::Light);
        let target = match *state {
            PatrolState::NotStarted => nearest_by(lights.filter(|p| p.color.is_some())),
            PatrolState::Seek(hue)  => nearest_by(lights.filter(|p| p.color == Some(hue))),
        }?;
        let hue = target.color?;

        let intent = SteeringIntent::toward_at(target, self.profile.max_speed);

        // The switch only affects the next tick's selection.
        *state = if target.distance <= self.config.threshold {
            debug!(agent = %ctx.agent, tick = %ctx.tick, reached = %hue, next = %hue.next(), "light reached");
            PatrolState::Seek(hue.next())
        } else {
            PatrolState::Seek(hue)
        };

        Some(intent)
    }
}
