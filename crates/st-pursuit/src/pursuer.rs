//! Runtime choice between the two pursuit variants.

use st_behavior::{AgentProfile, PerceptContext, SteeringIntent, SteeringModel};

use crate::{NearestPursuit, PredictivePursuit};

/// Which pursuit variant a predator runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PursuitMode {
    Nearest,
    #[default]
    Predictive,
}

impl PursuitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PursuitMode::Nearest    => "nearest",
            PursuitMode::Predictive => "predictive",
        }
    }
}

impl std::fmt::Display for PursuitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predator whose variant is picked from configuration.
#[derive(Clone, Debug)]
pub enum Pursuer {
    Nearest(NearestPursuit),
    Predictive(PredictivePursuit),
}

impl Pursuer {
    pub fn new(mode: PursuitMode, profile: AgentProfile) -> Self {
        match mode {
            PursuitMode::Nearest    => Pursuer::Nearest(NearestPursuit::new(profile)),
            PursuitMode::Predictive => Pursuer::Predictive(PredictivePursuit::new(profile)),
        }
    }

    pub fn mode(&self) -> PursuitMode {
        match self {
            Pursuer::Nearest(_)    => PursuitMode::Nearest,
            Pursuer::Predictive(_) => PursuitMode::Predictive,
        }
    }
}

impl SteeringModel for Pursuer {
    type State = ();

    fn profile(&self) -> &AgentProfile {
        match self {
            Pursuer::Nearest(m)    => m.profile(),
            Pursuer::Predictive(m) => m.profile(),
        }
    }

    fn compute_intent(
        &self,
        ctx:   &PerceptContext<'_>,
        state: &mut (),
    ) -> Option<SteeringIntent> {
        match self {
            Pursuer::Nearest(m)    => m.compute_intent(ctx, state),
            Pursuer::Predictive(m) => m.compute_intent(ctx, state),
        }
    }
}
