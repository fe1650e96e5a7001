//! Cubic Hermite evaluation shared by splines and target curves.
//!
//! Both evaluate a segment from `(v0, d0)` to `(v1, d1)` over a segment of
//! width `dt`, where `d0`/`d1` are derivatives with respect to the curve's own
//! x axis (not the normalised parameter).

/// Hermite basis weights at normalised parameter `t`.
#[inline]
fn basis(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;

    let s2 = -2.0 * t3 + 3.0 * t2;
    let s3 = t3 - t2;
    let s0 = 1.0 - s2;
    let s1 = s3 - t2 + t;
    (s0, s1, s2, s3)
}

/// Value of the Hermite segment at normalised parameter `t` in `[0, 1]`.
#[inline]
#[must_use]
pub fn hermite(v0: f32, d0: f32, v1: f32, d1: f32, t: f32, dt: f32) -> f32 {
    let (s0, s1, s2, s3) = basis(t);
    let m0 = d0 * dt;
    let m1 = d1 * dt;
    s0 * v0 + s1 * m0 + s2 * v1 + s3 * m1
}

/// Derivative (with respect to x, not `t`) of the Hermite segment.
#[inline]
#[must_use]
pub fn hermite_derivative(v0: f32, d0: f32, v1: f32, d1: f32, t: f32, dt: f32) -> f32 {
    if dt <= f32::EPSILON {
        return 0.0;
    }
    let t2 = t * t;
    let ds0 = 6.0 * t2 - 6.0 * t;
    let ds1 = 3.0 * t2 - 4.0 * t + 1.0;
    let ds2 = -ds0;
    let ds3 = 3.0 * t2 - 2.0 * t;
    let m0 = d0 * dt;
    let m1 = d1 * dt;
    (ds0 * v0 + ds1 * m0 + ds2 * v1 + ds3 * m1) / dt
}

/// Smooth 0→1 ramp with zero slope at both ends.
#[inline]
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
