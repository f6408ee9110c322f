//! The `SteeringModel` trait: the extension point every strategy implements.

use crate::{AgentKind, AgentProfile, PerceptContext, SteeringIntent};

/// Pluggable per-tick steering decision.
///
/// A model owns its immutable configuration and the agent's fixed
/// [`AgentProfile`]; both are set at construction.  Per-agent memory lives in
/// `Self::State`, owned by the caller and handed in mutably, so one model
/// value never holds data that could race between agents.
///
/// # Thread safety
///
/// Decision calls for distinct agents may run in parallel (see `st-sim`'s
/// `parallel` feature), so implementations must be `Send + Sync` and `State`
/// must be `Send`.  The caller guarantees at most one call per agent per tick.
///
/// # Example
///
/// ```rust,ignore
/// struct ChaseNearestLight { profile: AgentProfile }
///
/// impl SteeringModel for ChaseNearestLight {
///     type State = ();
///
///     fn profile(&self) -> &AgentProfile { &self.profile }
///
///     fn compute_intent(&self, ctx: &PerceptContext<'_>, _: &mut ()) -> Option<SteeringIntent> {
///         ctx.nearest(ObjectCategory::Light)
///             .map(|p| SteeringIntent::toward_at(p, self.profile.max_speed))
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    /// Per-agent memory.  Stateless strategies use `()`.
    type State: Default + Send + 'static;

    /// The agent's fixed kinematic profile.
    fn profile(&self) -> &AgentProfile;

    /// Behavior family, derived from the profile by default.
    fn kind(&self) -> AgentKind {
        self.profile().kind
    }

    /// Decide this tick's steering.  `None` means "no change".
    fn compute_intent(
        &self,
        ctx:   &PerceptContext<'_>,
        state: &mut Self::State,
    ) -> Option<SteeringIntent>;
}
