//! The `Population` struct and its decision tick.

use st_behavior::{PerceptContext, SteeringIntent, SteeringModel};
use st_core::{AgentId, CoreError, Percept, Tick};
use tracing::trace;

use crate::{DecisionObserver, SimError, SimResult};

/// A set of agents sharing one strategy type.
///
/// Holds each agent's model (its immutable configuration and profile) and
/// its mutable state in parallel arrays indexed by `AgentId`.  Because a
/// decision touches only its own agent's state, the decision phase can be
/// split across threads without locking.
///
/// Create via [`PopulationBuilder`][crate::PopulationBuilder].
pub struct Population<M: SteeringModel> {
    /// Tick the next `decide` call runs at.
    pub tick: Tick,

    pub(crate) models: Vec<M>,
    pub(crate) states: Vec<M::State>,
    pub(crate) strict: bool,
}

impl<M: SteeringModel> Population<M> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn model(&self, agent: AgentId) -> SimResult<&M> {
        self.models
            .get(agent.index())
            .ok_or(SimError::Core(CoreError::AgentNotFound(agent)))
    }

    pub fn state(&self, agent: AgentId) -> SimResult<&M::State> {
        self.states
            .get(agent.index())
            .ok_or(SimError::Core(CoreError::AgentNotFound(agent)))
    }

    pub fn states(&self) -> &[M::State] {
        &self.states
    }

    // ── Decision tick ─────────────────────────────────────────────────────

    /// Run one decision per agent for the current tick, then advance it.
    ///
    /// `percepts[i]` is agent `i`'s snapshot.  Returns one optional intent
    /// per agent in `AgentId` order; `None` means "no change this tick".
    pub fn decide<P, O>(
        &mut self,
        percepts: &[P],
        observer: &mut O,
    ) -> SimResult<Vec<Option<SteeringIntent>>>
    where
        P: AsRef<[Percept]> + Sync,
        O: DecisionObserver,
    {
        if percepts.len() != self.models.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.models.len(),
                got:      percepts.len(),
                what:     "percept batch",
            });
        }
        if self.strict {
            check_batch(percepts)?;
        }

        let now = self.tick;
        observer.on_tick_start(now);

        let intents = self.compute_intents(now, percepts);

        let mut steered = 0;
        for (i, intent) in intents.iter().enumerate() {
            steered += usize::from(intent.is_some());
            observer.on_decision(now, AgentId(i as u32), intent.as_ref());
        }
        observer.on_tick_end(now, steered);
        trace!(tick = %now, agents = intents.len(), steered, "decision tick complete");

        self.tick = now.next();
        Ok(intents)
    }

    /// Call `compute_intent` for every agent.
    ///
    /// With the `parallel` Cargo feature the calls run on Rayon's thread
    /// pool; each worker gets `&mut` to a disjoint agent state.
    fn compute_intents<P>(&mut self, now: Tick, percepts: &[P]) -> Vec<Option<SteeringIntent>>
    where
        P: AsRef<[Percept]> + Sync,
    {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let models = self.models.as_slice();
        let states = &mut self.states;

        #[cfg(not(feature = "parallel"))]
        {
            models
                .iter()
                .zip(states.iter_mut())
                .zip(percepts)
                .enumerate()
                .map(|(i, ((model, state), seen))| {
                    let ctx = PerceptContext::new(now, AgentId(i as u32), seen.as_ref());
                    model.compute_intent(&ctx, state)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            models
                .par_iter()
                .zip(states.par_iter_mut())
                .zip(percepts.par_iter())
                .enumerate()
                .map(|(i, ((model, state), seen))| {
                    let ctx = PerceptContext::new(now, AgentId(i as u32), seen.as_ref());
                    model.compute_intent(&ctx, state)
                })
                .collect()
        }
    }
}

/// Reject the first non-finite percept in the batch.
fn check_batch<P: AsRef<[Percept]>>(percepts: &[P]) -> SimResult<()> {
    for (i, seen) in percepts.iter().enumerate() {
        for p in seen.as_ref() {
            p.check_finite().map_err(|source| SimError::Percept {
                agent: AgentId(i as u32),
                source,
            })?;
        }
    }
    Ok(())
}
