//! Fluent builder for constructing a [`Population`].

use st_behavior::SteeringModel;
use st_core::Tick;

use crate::{Population, SimError, SimResult};

/// Fluent builder for [`Population<M>`].
///
/// Each agent gets its own model value, so agents of the same strategy may
/// carry different configurations.
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                        |
/// |--------------------|--------------------------------|
/// | `.states(v)`       | `M::State::default()` per agent |
/// | `.start_tick(t)`   | `Tick(0)`                      |
/// | `.strict(true)`    | off (percepts are trusted)    |
///
/// # Example
///
/// ```rust,ignore
/// let grazers = PopulationBuilder::new()
///     .uniform(MemoryPatrol::new(patrol, profile), 20)
///     .strict(true)
///     .build()?;
/// ```
pub struct PopulationBuilder<M: SteeringModel> {
    models: Vec<M>,
    states: Option<Vec<M::State>>,
    start:  Tick,
    strict: bool,
}

impl<M: SteeringModel> Default for PopulationBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SteeringModel> PopulationBuilder<M> {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            states: None,
            start:  Tick::ZERO,
            strict: false,
        }
    }

    /// Add one agent running `model`.
    pub fn push(mut self, model: M) -> Self {
        self.models.push(model);
        self
    }

    /// Add `count` agents sharing a copy of `model`.
    pub fn uniform(mut self, model: M, count: usize) -> Self
    where
        M: Clone,
    {
        self.models.extend(std::iter::repeat_n(model, count));
        self
    }

    /// Supply initial per-agent states (must be length `agent_count`).
    pub fn states(mut self, states: Vec<M::State>) -> Self {
        self.states = Some(states);
        self
    }

    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start = tick;
        self
    }

    /// Reject percept batches carrying non-finite values instead of passing
    /// them to the strategies.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate inputs and return a ready-to-run [`Population`].
    pub fn build(self) -> SimResult<Population<M>> {
        let agent_count = self.models.len();

        let states = match self.states {
            Some(s) => {
                if s.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      s.len(),
                        what:     "initial states",
                    });
                }
                s
            }
            None => std::iter::repeat_with(M::State::default).take(agent_count).collect(),
        };

        Ok(Population {
            tick:   self.start,
            models: self.models,
            states,
            strict: self.strict,
        })
    }
}
