//! Per-tick observations produced by the (external) perception system.
//!
//! A [`Percept`] describes one sensed object for a single tick.  Strategies
//! treat percepts as read-only; they borrow the snapshot as `&[Percept]`.

use crate::{CoreError, CoreResult};

/// Smallest distance used as a divisor.  Percepts reported at distance zero
/// are clamped to this before any inverse-distance weighting.
pub const MIN_DISTANCE: f64 = 1e-6;

/// What kind of object a percept describes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectCategory {
    Boid,
    Predator,
    Obstacle,
    Light,
    Corpse,
}

impl ObjectCategory {
    pub const ALL: [ObjectCategory; 5] = [
        ObjectCategory::Boid,
        ObjectCategory::Predator,
        ObjectCategory::Obstacle,
        ObjectCategory::Light,
        ObjectCategory::Corpse,
    ];

    /// Dense index, used by lookup tables keyed on category.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ObjectCategory::Boid     => 0,
            ObjectCategory::Predator => 1,
            ObjectCategory::Obstacle => 2,
            ObjectCategory::Light    => 3,
            ObjectCategory::Corpse   => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectCategory::Boid     => "boid",
            ObjectCategory::Predator => "predator",
            ObjectCategory::Obstacle => "obstacle",
            ObjectCategory::Light    => "light",
            ObjectCategory::Corpse   => "corpse",
        }
    }
}

impl std::fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed three-colour palette grazers cycle through.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hue {
    Red,
    Green,
    Blue,
}

impl Hue {
    pub const CYCLE: [Hue; 3] = [Hue::Red, Hue::Green, Hue::Blue];

    /// Next colour in the cycle: red → green → blue → red.
    #[inline]
    pub fn next(self) -> Hue {
        match self {
            Hue::Red   => Hue::Green,
            Hue::Green => Hue::Blue,
            Hue::Blue  => Hue::Red,
        }
    }

    /// Successor of an arbitrary (possibly off-palette) colour.
    ///
    /// Anything that is not red or green is followed by red.
    #[inline]
    pub fn after(color: Option<Hue>) -> Hue {
        match color {
            Some(hue) => hue.next(),
            None      => Hue::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hue::Red   => "red",
            Hue::Green => "green",
            Hue::Blue  => "blue",
        }
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sensed object, valid for a single tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percept {
    pub category:    ObjectCategory,
    /// Palette colour, `None` for objects outside the palette.
    pub color:       Option<Hue>,
    /// Range to the object (≥ 0).
    pub distance:    f64,
    /// Direction to the object relative to the observer's heading.
    pub bearing:     f64,
    /// The object's own heading, in the observer's frame.
    pub orientation: f64,
    pub speed:       f64,
}

impl Percept {
    /// A stationary, uncoloured object facing the same way as the observer.
    #[inline]
    pub fn new(category: ObjectCategory, distance: f64, bearing: f64) -> Self {
        Self {
            category,
            color: None,
            distance,
            bearing,
            orientation: 0.0,
            speed: 0.0,
        }
    }

    /// A coloured light.
    #[inline]
    pub fn light(hue: Hue, distance: f64, bearing: f64) -> Self {
        Self::new(ObjectCategory::Light, distance, bearing).with_color(hue)
    }

    #[inline]
    pub fn with_color(mut self, hue: Hue) -> Self {
        self.color = Some(hue);
        self
    }

    #[inline]
    pub fn with_orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    #[inline]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn is(&self, category: ObjectCategory) -> bool {
        self.category == category
    }

    /// Distance clamped to [`MIN_DISTANCE`], safe to divide by.
    #[inline]
    pub fn safe_distance(&self) -> f64 {
        self.distance.max(MIN_DISTANCE)
    }

    /// Reject percepts carrying `NaN` or infinite fields.
    pub fn check_finite(&self) -> CoreResult<()> {
        let fields = [
            ("distance",    self.distance),
            ("bearing",     self.bearing),
            ("orientation", self.orientation),
            ("speed",       self.speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CoreError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}
