//! Flocking tunables.

/// Default threat-cone half-width, degrees.
pub const DEFAULT_CONE_DEGREES: f64 = 60.0;

/// Immutable per-agent flocking parameters.
///
/// Set once at construction (usually by `st-config`) and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlockerConfig {
    pub avoids_obstacles:      bool,
    pub avoids_collisions:     bool,
    pub aligns_with_neighbors: bool,
    pub does_centering:        bool,
    pub follows_light:         bool,

    /// Range within which obstacles and predators are a concern.
    pub clearance: f64,
    /// Half-width of the threat cone around straight ahead, radians.
    pub cone: f64,
    /// Personal space; closer boids are pushed away.
    pub separation_distance: f64,
    /// Neighbor awareness range for alignment and centering.
    pub detection_distance: f64,

    pub obstacle_weight:   f64,
    pub separation_weight: f64,
    pub alignment_weight:  f64,
    pub centering_weight:  f64,
    pub follow_weight:     f64,
}

impl Default for FlockerConfig {
    fn default() -> Self {
        Self {
            avoids_obstacles:      true,
            avoids_collisions:     true,
            aligns_with_neighbors: true,
            does_centering:        true,
            follows_light:         true,
            clearance:             140.0,
            cone:                  DEFAULT_CONE_DEGREES.to_radians(),
            separation_distance:   50.0,
            detection_distance:    250.0,
            obstacle_weight:       2.0,
            separation_weight:     2.0,
            alignment_weight:      5.0,
            centering_weight:      10.0,
            follow_weight:         5.0,
        }
    }
}

impl FlockerConfig {
    /// Defaults with every sub-behavior switched off.
    pub fn all_disabled() -> Self {
        Self {
            avoids_obstacles:      false,
            avoids_collisions:     false,
            aligns_with_neighbors: false,
            does_centering:        false,
            follows_light:         false,
            ..Self::default()
        }
    }
}
