//! Observer trait for progress reporting and decision logging.

use st_behavior::SteeringIntent;
use st_core::{AgentId, Tick};

/// Callbacks invoked by [`Population::decide`][crate::Population::decide].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks run sequentially after the
/// (possibly parallel) decision phase, in ascending `AgentId` order.
pub trait DecisionObserver {
    /// Called before any decision for `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent with that agent's result.
    fn on_decision(&mut self, _tick: Tick, _agent: AgentId, _intent: Option<&SteeringIntent>) {}

    /// Called after every agent has decided.  `steered` counts agents that
    /// produced an intent.
    fn on_tick_end(&mut self, _tick: Tick, _steered: usize) {}
}

/// A [`DecisionObserver`] that does nothing.
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {}

/// Running totals across ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecisionTally {
    pub ticks:   u64,
    pub steered: u64,
    pub idle:    u64,
}

impl DecisionObserver for DecisionTally {
    fn on_decision(&mut self, _tick: Tick, _agent: AgentId, intent: Option<&SteeringIntent>) {
        match intent {
            Some(_) => self.steered += 1,
            None    => self.idle += 1,
        }
    }

    fn on_tick_end(&mut self, _tick: Tick, _steered: usize) {
        self.ticks += 1;
    }
}
