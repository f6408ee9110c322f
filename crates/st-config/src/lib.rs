//! `st-config`: load the immutable steering configuration from JSON.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`record`] | Serde records mirroring the file layout                   |
//! | [`loader`] | `load_config`, `load_config_reader`, `write_config`       |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                          |
//!
//! The loaded [`SteeringConfig`] is plain data: strategies receive copies of
//! its parts at construction and nothing mutates it afterwards.

pub mod error;
pub mod loader;
pub mod record;


pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_config_reader, write_config};

use st_behavior::{AgentKind, AgentProfile};
use st_flock::FlockerConfig;
use st_patrol::PatrolConfig;
use st_pursuit::PursuitMode;

/// One kinematic profile per agent kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Profiles {
    pub flocker:  AgentProfile,
    pub predator: AgentProfile,
    pub grazer:   AgentProfile,
}

impl Profiles {
    pub fn get(&self, kind: AgentKind) -> &AgentProfile {
        match kind {
            AgentKind::Flocker  => &self.flocker,
            AgentKind::Predator => &self.predator,
            AgentKind::Grazer   => &self.grazer,
        }
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            flocker:  AgentProfile::default_for(AgentKind::Flocker),
            predator: AgentProfile::default_for(AgentKind::Predator),
            grazer:   AgentProfile::default_for(AgentKind::Grazer),
        }
    }
}

/// Fully validated configuration for every strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SteeringConfig {
    pub flocker:  FlockerConfig,
    pub pursuit:  PursuitMode,
    pub patrol:   PatrolConfig,
    pub profiles: Profiles,
}
