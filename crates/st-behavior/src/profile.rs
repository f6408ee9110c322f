//! Agent kinds and their fixed kinematic profiles.
//!
//! A profile is read once at agent construction and never mutated.  Only
//! `max_speed` feeds the steering decision; the remaining limits are carried
//! for the motion integrator, which is responsible for enforcing them.

use std::f64::consts::PI;
use std::fmt;

use st_core::ObjectCategory;

use crate::{BehaviorError, BehaviorResult};

/// Which family of steering behavior an agent belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AgentKind {
    /// Flocking boid.
    Flocker,
    /// Boid-hunting predator.
    Predator,
    /// Colour-cycling light grazer.
    Grazer,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Flocker, AgentKind::Predator, AgentKind::Grazer];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            AgentKind::Flocker  => 0,
            AgentKind::Predator => 1,
            AgentKind::Grazer   => 2,
        }
    }

    /// How an agent of this kind appears in other agents' percepts.
    pub fn looks_like(self, alive: bool) -> ObjectCategory {
        if !alive {
            return ObjectCategory::Corpse;
        }
        match self {
            AgentKind::Predator => ObjectCategory::Predator,
            AgentKind::Flocker | AgentKind::Grazer => ObjectCategory::Boid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Flocker  => "flocker",
            AgentKind::Predator => "predator",
            AgentKind::Grazer   => "grazer",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed physical limits of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentProfile {
    pub kind:      AgentKind,
    /// Body radius, used for contact checks by the host.
    pub size:      f64,
    pub max_speed: f64,
    pub min_speed: f64,
    pub max_accel: f64,
    pub max_decel: f64,
    /// Maximum heading change per tick, radians.
    pub max_turn:  f64,
}

impl AgentProfile {
    /// Built-in defaults per kind.
    pub fn default_for(kind: AgentKind) -> Self {
        let (max_speed, max_turn) = match kind {
            AgentKind::Flocker  => (5.0, PI / 8.0),
            AgentKind::Predator => (6.0, PI),
            AgentKind::Grazer   => (5.0, PI),
        };
        Self {
            kind,
            size: 10.0,
            max_speed,
            min_speed: 0.0,
            max_accel: 1.0,
            max_decel: 1.0,
            max_turn,
        }
    }

    /// Reject non-finite or inconsistent limits.
    pub fn validate(&self) -> BehaviorResult<()> {
        let invalid = |reason: String| BehaviorError::InvalidProfile { kind: self.kind, reason };

        let fields = [
            ("size",      self.size),
            ("max_speed", self.max_speed),
            ("min_speed", self.min_speed),
            ("max_accel", self.max_accel),
            ("max_decel", self.max_decel),
            ("max_turn",  self.max_turn),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be finite and non-negative, got {value}")));
            }
        }
        if self.max_speed <= 0.0 {
            return Err(invalid("max_speed must be positive".into()));
        }
        if self.min_speed > self.max_speed {
            return Err(invalid(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}
