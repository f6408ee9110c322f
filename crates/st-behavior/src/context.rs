//! Read-only per-agent tick snapshot passed to every decision call.

use st_core::{AgentId, ObjectCategory, Percept, Tick};

/// Everything one agent perceives during one tick.
///
/// Built by the caller for each decision and dropped afterwards.  The
/// percept slice is owned by the perception system; strategies only borrow it.
#[derive(Copy, Clone, Debug)]
pub struct PerceptContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The deciding agent.
    pub agent: AgentId,

    /// Range- and field-of-view-filtered percepts, in perception order.
    pub percepts: &'a [Percept],
}

impl<'a> PerceptContext<'a> {
    #[inline]
    pub fn new(tick: Tick, agent: AgentId, percepts: &'a [Percept]) -> Self {
        Self { tick, agent, percepts }
    }

    /// Percepts of one category, in perception order.
    pub fn of(&self, category: ObjectCategory) -> impl Iterator<Item = &'a Percept> + 'a {
        self.percepts.iter().filter(move |p| p.category == category)
    }

    /// Nearest percept of `category`; ties go to the first one seen.
    pub fn nearest(&self, category: ObjectCategory) -> Option<&'a Percept> {
        nearest_by(self.of(category))
    }
}

/// Minimum-distance element of `percepts`; ties go to the first one seen.
pub fn nearest_by<'a, I>(percepts: I) -> Option<&'a Percept>
where
    I: IntoIterator<Item = &'a Percept>,
{
    percepts.into_iter().fold(None, |best: Option<&Percept>, p| match best {
        Some(b) if !(p.distance < b.distance) => Some(b),
        _ => Some(p),
    })
}
