//! Angle policy.
//!
//! Rotations live in the canonical range `(-π, π]`. Values are wrapped into
//! it before blending so that interpolation never takes the long way around.

use std::f32::consts::PI;

use crate::range::Range;

/// The canonical angle range, `(-π, π]`.
pub const ANGLE_RANGE: Range = Range::new(-PI, PI);

/// Returns `true` if `angle` lies in `(-π, π]`.
#[inline]
#[must_use]
pub fn is_angle_in_range(angle: f32) -> bool {
    -PI < angle && angle <= PI
}

/// Wraps any finite angle into `(-π, π]`.
#[inline]
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    ANGLE_RANGE.normalize_wildly(angle)
}
