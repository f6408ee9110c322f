//! On-disk layout of the configuration file.
//!
//! # JSON format
//!
//! Every section and every field is optional; missing values take the
//! built-in defaults.  The short attribute names of the classic flocking
//! configs (`clear`, `ow`, `cw`, …) are accepted as aliases.
//!
//! ```json
//! {
//!   "flocker": { "clearance": 140, "cone": 60, "separation": 50, "ow": 2.0 },
//!   "pursuit": { "mode": "predictive" },
//!   "patrol":  { "threshold": 30 },
//!   "profiles": {
//!     "predator": { "max_speed": 6.0, "max_turn_degrees": 180 }
//!   }
//! }
//! ```
//!
//! Angles in the file are degrees; the loaded configuration holds radians.

use serde::{Deserialize, Serialize};

use st_behavior::{AgentKind, AgentProfile};
use st_flock::{FlockerConfig, DEFAULT_CONE_DEGREES};
use st_patrol::PatrolConfig;
use st_pursuit::PursuitMode;

use crate::{ConfigError, ConfigResult, Profiles, SteeringConfig};

// ── File root ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub flocker:  FlockerRecord,
    pub pursuit:  PursuitRecord,
    pub patrol:   PatrolRecord,
    pub profiles: ProfilesRecord,
}

impl ConfigFile {
    /// Validate every section and convert to radians / domain types.
    pub fn into_config(self) -> ConfigResult<SteeringConfig> {
        Ok(SteeringConfig {
            flocker:  self.flocker.into_config()?,
            pursuit:  self.pursuit.mode.into(),
            patrol:   self.patrol.into_config()?,
            profiles: self.profiles.into_profiles()?,
        })
    }
}

impl From<&SteeringConfig> for ConfigFile {
    fn from(config: &SteeringConfig) -> Self {
        Self {
            flocker:  FlockerRecord::from(&config.flocker),
            pursuit:  PursuitRecord { mode: config.pursuit.into() },
            patrol:   PatrolRecord { threshold: config.patrol.threshold },
            profiles: ProfilesRecord {
                flocker:  Some(ProfileRecord::from(&config.profiles.flocker)),
                predator: Some(ProfileRecord::from(&config.profiles.predator)),
                grazer:   Some(ProfileRecord::from(&config.profiles.grazer)),
            },
        }
    }
}

// ── Flocker ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlockerRecord {
    #[serde(alias = "clear")]
    pub avoids_obstacles:      bool,
    #[serde(alias = "evade")]
    pub avoids_collisions:     bool,
    #[serde(alias = "align")]
    pub aligns_with_neighbors: bool,
    #[serde(alias = "center")]
    pub does_centering:        bool,
    #[serde(alias = "follow")]
    pub follows_light:         bool,
    pub clearance:             f64,
    /// Threat cone half-width, degrees.
    #[serde(alias = "cone")]
    pub cone_degrees:          f64,
    #[serde(alias = "separation")]
    pub separation_distance:   f64,
    #[serde(alias = "detection")]
    pub detection_distance:    f64,
    #[serde(alias = "ow")]
    pub obstacle_weight:       f64,
    #[serde(alias = "sw")]
    pub separation_weight:     f64,
    #[serde(alias = "aw")]
    pub alignment_weight:      f64,
    #[serde(alias = "cw")]
    pub centering_weight:      f64,
    #[serde(alias = "lw")]
    pub follow_weight:         f64,
}

impl Default for FlockerRecord {
    fn default() -> Self {
        Self {
            cone_degrees: DEFAULT_CONE_DEGREES,
            ..Self::from(&FlockerConfig::default())
        }
    }
}

impl From<&FlockerConfig> for FlockerRecord {
    fn from(c: &FlockerConfig) -> Self {
        Self {
            avoids_obstacles:      c.avoids_obstacles,
            avoids_collisions:     c.avoids_collisions,
            aligns_with_neighbors: c.aligns_with_neighbors,
            does_centering:        c.does_centering,
            follows_light:         c.follows_light,
            clearance:             c.clearance,
            cone_degrees:          c.cone.to_degrees(),
            separation_distance:   c.separation_distance,
            detection_distance:    c.detection_distance,
            obstacle_weight:       c.obstacle_weight,
            separation_weight:     c.separation_weight,
            alignment_weight:      c.alignment_weight,
            centering_weight:      c.centering_weight,
            follow_weight:         c.follow_weight,
        }
    }
}

impl FlockerRecord {
    pub fn into_config(self) -> ConfigResult<FlockerConfig> {
        non_negative("flocker.clearance",           self.clearance)?;
        non_negative("flocker.separation_distance", self.separation_distance)?;
        non_negative("flocker.detection_distance",  self.detection_distance)?;
        non_negative("flocker.obstacle_weight",     self.obstacle_weight)?;
        non_negative("flocker.separation_weight",   self.separation_weight)?;
        non_negative("flocker.alignment_weight",    self.alignment_weight)?;
        non_negative("flocker.centering_weight",    self.centering_weight)?;
        non_negative("flocker.follow_weight",       self.follow_weight)?;
        if !(0.0..=180.0).contains(&self.cone_degrees) {
            return Err(ConfigError::Invalid {
                field:  "flocker.cone_degrees",
                reason: format!("must be within 0..=180 degrees, got {}", self.cone_degrees),
            });
        }
        if self.separation_distance > self.detection_distance {
            return Err(ConfigError::Invalid {
                field:  "flocker.separation_distance",
                reason: format!(
                    "{} exceeds detection_distance {}",
                    self.separation_distance, self.detection_distance
                ),
            });
        }

        Ok(FlockerConfig {
            avoids_obstacles:      self.avoids_obstacles,
            avoids_collisions:     self.avoids_collisions,
            aligns_with_neighbors: self.aligns_with_neighbors,
            does_centering:        self.does_centering,
            follows_light:         self.follows_light,
            clearance:             self.clearance,
            cone:                  self.cone_degrees.to_radians(),
            separation_distance:   self.separation_distance,
            detection_distance:    self.detection_distance,
            obstacle_weight:       self.obstacle_weight,
            separation_weight:     self.separation_weight,
            alignment_weight:      self.alignment_weight,
            centering_weight:      self.centering_weight,
            follow_weight:         self.follow_weight,
        })
    }
}

// ── Pursuit ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeRecord {
    Nearest,
    #[default]
    Predictive,
}

impl From<ModeRecord> for PursuitMode {
    fn from(m: ModeRecord) -> Self {
        match m {
            ModeRecord::Nearest    => PursuitMode::Nearest,
            ModeRecord::Predictive => PursuitMode::Predictive,
        }
    }
}

impl From<PursuitMode> for ModeRecord {
    fn from(m: PursuitMode) -> Self {
        match m {
            PursuitMode::Nearest    => ModeRecord::Nearest,
            PursuitMode::Predictive => ModeRecord::Predictive,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PursuitRecord {
    pub mode: ModeRecord,
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatrolRecord {
    pub threshold: f64,
}

impl Default for PatrolRecord {
    fn default() -> Self {
        Self { threshold: PatrolConfig::default().threshold }
    }
}

impl PatrolRecord {
    pub fn into_config(self) -> ConfigResult<PatrolConfig> {
        non_negative("patrol.threshold", self.threshold)?;
        Ok(PatrolConfig { threshold: self.threshold })
    }
}

// ── Profiles ──────────────────────────────────────────────────────────────────

/// Overrides for one kind's profile; absent fields keep the kind's default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size:             Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_speed:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_accel:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_decel:        Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_turn_degrees: Option<f64>,
}

impl From<&AgentProfile> for ProfileRecord {
    fn from(p: &AgentProfile) -> Self {
        Self {
            size:             Some(p.size),
            max_speed:        Some(p.max_speed),
            min_speed:        Some(p.min_speed),
            max_accel:        Some(p.max_accel),
            max_decel:        Some(p.max_decel),
            max_turn_degrees: Some(p.max_turn.to_degrees()),
        }
    }
}

impl ProfileRecord {
    fn apply(self, kind: AgentKind) -> ConfigResult<AgentProfile> {
        let base = AgentProfile::default_for(kind);
        let profile = AgentProfile {
            kind,
            size:      self.size.unwrap_or(base.size),
            max_speed: self.max_speed.unwrap_or(base.max_speed),
            min_speed: self.min_speed.unwrap_or(base.min_speed),
            max_accel: self.max_accel.unwrap_or(base.max_accel),
            max_decel: self.max_decel.unwrap_or(base.max_decel),
            max_turn:  self.max_turn_degrees.map_or(base.max_turn, f64::to_radians),
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilesRecord {
    pub flocker:  Option<ProfileRecord>,
    pub predator: Option<ProfileRecord>,
    pub grazer:   Option<ProfileRecord>,
}

impl ProfilesRecord {
    pub fn into_profiles(self) -> ConfigResult<Profiles> {
        Ok(Profiles {
            flocker:  self.flocker.unwrap_or_default().apply(AgentKind::Flocker)?,
            predator: self.predator.unwrap_or_default().apply(AgentKind::Predator)?,
            grazer:   self.grazer.unwrap_or_default().apply(AgentKind::Grazer)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite and non-negative, got {value}"),
        })
    }
}
