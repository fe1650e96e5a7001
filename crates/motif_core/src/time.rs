//! Animation time.

/// Time in the animation system, in seconds.
///
/// Spline x coordinates, target node times, blend durations and the value
/// returned by "time remaining" queries all share this unit.
pub type MotiveTime = f32;

/// Sentinel for "never settles", returned by looping splines.
pub const MOTIVE_TIME_ENDLESS: MotiveTime = MotiveTime::INFINITY;
