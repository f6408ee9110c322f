//! Angle conventions shared by every steering strategy.
//!
//! All angles are radians.  Bearings and orientations are relative to the
//! observer's own heading: `0` is straight ahead and positive angles turn
//! counter-clockwise.  Every angle that is compared or returned is first
//! folded into the canonical range `(-π, π]`.

use std::f64::consts::{PI, TAU};

/// Fold `angle` into the canonical range `(-π, π]`.
///
/// Non-finite input propagates as `NaN`; callers that accept external angles
/// are expected to have rejected those already.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
#[inline]
pub fn angle_diff(to: f64, from: f64) -> f64 {
    normalize_angle(to - from)
}
