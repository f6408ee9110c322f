//! Weighted 2-D forces.
//!
//! A [`Force`] is built and queried in polar form (weight, angle) but stored
//! as cartesian components.  Magnitude and angle are always derived from the
//! components, never cached, so repeated accumulation cannot drift.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::angle::normalize_angle;

/// A weighted direction in the agent's own frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Force {
    x: f64,
    y: f64,
}

impl Force {
    pub const ZERO: Force = Force { x: 0.0, y: 0.0 };

    /// A force of `weight` pointing along `angle` (radians, agent frame).
    #[inline]
    pub fn from_polar(weight: f64, angle: f64) -> Self {
        Self {
            x: weight * angle.cos(),
            y: weight * angle.sin(),
        }
    }

    #[inline]
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Accumulate `other` into `self` (component-wise sum).
    #[inline]
    pub fn add_in(&mut self, other: Force) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Scale both components by `factor`.
    #[inline]
    pub fn reweight(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Euclidean norm of the components.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of the force in `(-π, π]`.  The zero force points ahead (`0`).
    #[inline]
    pub fn angle(&self) -> f64 {
        normalize_angle(self.y.atan2(self.x))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Force {
    type Output = Force;
    #[inline]
    fn add(mut self, rhs: Force) -> Force {
        self.add_in(rhs);
        self
    }
}

impl AddAssign for Force {
    #[inline]
    fn add_assign(&mut self, rhs: Force) {
        self.add_in(rhs);
    }
}

impl Sum for Force {
    fn sum<I: Iterator<Item = Force>>(iter: I) -> Force {
        iter.fold(Force::ZERO, Add::add)
    }
}

impl std::fmt::Display for Force {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}@{:.3}rad", self.magnitude(), self.angle())
    }
}
