//! One-dimensional motivators.
//!
//! A [`Motivator1f`] is a scalar that moves over time. It either seeks a
//! [`MotiveTarget1f`] along Hermite curves, or follows a shared [`Spline`]
//! according to a [`SplinePlayback`]. Retargeting never resets the current
//! value or velocity; new curves always start from where the motivator is.
//!
//! Motivators are created through a [`MotiveEngine`], which carries the
//! engine-wide [`EngineSettings`], and are advanced explicitly with
//! [`Motivator1f::advance`] by whoever owns them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use motif_core::{MOTIVE_TIME_ENDLESS, MotiveTime, Range};

use crate::curve::{hermite, hermite_derivative, smoothstep};
use crate::matrix_op::MatrixOperationType;
use crate::playback::{SplinePlayback, advance_x};
use crate::spline::{Spline, SplineCursor};
use crate::target::{MotiveNode1f, MotiveTarget1f};

// ============================================================================
// Configuration
// ============================================================================

/// Describes how a motivator interprets its values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivatorInit {
    /// Modular range of the value. When valid, values wrap inside it and
    /// curves take the shortest way around. [`Range::INVALID`] means the
    /// value is unbounded.
    pub range: Range,
}

impl MotivatorInit {
    #[inline]
    #[must_use]
    pub const fn new(range: Range) -> Self {
        Self { range }
    }

    /// Motivator settings suited to `op_type`: rotations wrap in the angle
    /// range, everything else is unbounded.
    #[inline]
    #[must_use]
    pub fn for_op(op_type: MatrixOperationType) -> Self {
        Self::new(op_type.valid_range())
    }
}

/// Engine-wide motivator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Longest time step a single `advance` call will simulate. Longer
    /// steps are cut short, so motivators fall behind wall-clock time after
    /// a frame hitch instead of jumping. `None` simulates every step in full.
    pub max_delta_time: Option<MotiveTime>,
    /// How long a motivator kicked with a velocity but no destination takes
    /// to come back to rest.
    pub settle_time: MotiveTime,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_delta_time: None,
            settle_time: 0.25,
        }
    }
}

/// Context that creates motivators.
#[derive(Debug, Default)]
pub struct MotiveEngine {
    settings: EngineSettings,
    motivators_created: usize,
}

impl MotiveEngine {
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            motivators_created: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Total number of motivators this engine has constructed.
    #[inline]
    #[must_use]
    pub fn motivators_created(&self) -> usize {
        self.motivators_created
    }
}

// ============================================================================
// Trajectories
// ============================================================================

/// Hermite path from the state at the time the target was set, through each
/// node in turn. Node values are stored unwrapped so consecutive nodes are
/// always the short way apart.
#[derive(Debug, Clone)]
struct TargetCurve {
    start_value: f32,
    start_velocity: f32,
    nodes: SmallVec<[MotiveNode1f; 3]>,
    elapsed: MotiveTime,
}

impl TargetCurve {
    fn end_time(&self) -> MotiveTime {
        self.nodes.last().map_or(0.0, |n| n.time)
    }

    /// Value and velocity at the current elapsed time.
    fn sample(&self) -> (f32, f32) {
        let t = self.elapsed;
        let mut prev = MotiveNode1f::new(self.start_value, self.start_velocity, 0.0);
        for node in &self.nodes {
            if t < node.time {
                let dt = node.time - prev.time;
                let u = ((t - prev.time) / dt).clamp(0.0, 1.0);
                return (
                    hermite(prev.value, prev.velocity, node.value, node.velocity, u, dt),
                    hermite_derivative(prev.value, prev.velocity, node.value, node.velocity, u, dt),
                );
            }
            prev = *node;
        }
        (prev.value, prev.velocity)
    }
}

#[derive(Debug, Clone)]
struct SplineFollower {
    spline: Arc<Spline>,
    cursor: SplineCursor,
    x: f32,
    playback_rate: f32,
    repeat: bool,
    at_rest: bool,
    blend_time: MotiveTime,
    blend_elapsed: MotiveTime,
    blend_from: f32,
}

impl SplineFollower {
    fn time_remaining(&self) -> MotiveTime {
        let blend_left = (self.blend_time - self.blend_elapsed).max(0.0);
        if self.repeat {
            return MOTIVE_TIME_ENDLESS;
        }
        let curve_left = if self.playback_rate > 0.0 {
            (self.spline.end_x() - self.x) / self.playback_rate
        } else if self.playback_rate < 0.0 {
            (self.x - self.spline.start_x()) / -self.playback_rate
        } else if self.at_rest {
            0.0
        } else {
            MOTIVE_TIME_ENDLESS
        };
        curve_left.max(0.0).max(blend_left)
    }

    fn target_value(&self) -> f32 {
        if self.playback_rate < 0.0 {
            self.spline.start_y()
        } else {
            self.spline.end_y()
        }
    }
}

#[derive(Debug, Clone, Default)]
enum Trajectory {
    #[default]
    Idle,
    Target(TargetCurve),
    Spline(SplineFollower),
}

// ============================================================================
// Motivator1f
// ============================================================================

/// A scalar value driven over time by targets or splines.
#[derive(Debug, Clone)]
pub struct Motivator1f {
    range: Range,
    max_delta_time: Option<MotiveTime>,
    settle_time: MotiveTime,
    /// Current value, unwrapped. Reported through `range.normalize_wildly`.
    value: f32,
    velocity: f32,
    trajectory: Trajectory,
}

impl Motivator1f {
    /// Creates a motivator at rest at zero.
    pub fn new(init: &MotivatorInit, engine: &mut MotiveEngine) -> Self {
        engine.motivators_created += 1;
        log::trace!(
            "Motivator #{} created (range valid: {})",
            engine.motivators_created,
            init.range.is_valid()
        );
        Self {
            range: init.range,
            max_delta_time: engine.settings.max_delta_time,
            settle_time: engine.settings.settle_time,
            value: 0.0,
            velocity: 0.0,
            trajectory: Trajectory::Idle,
        }
    }

    /// Current value, wrapped into the modular range if there is one.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.range.normalize_wildly(self.value)
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Value the motivator is heading to.
    #[must_use]
    pub fn target_value(&self) -> f32 {
        match &self.trajectory {
            Trajectory::Idle => self.value(),
            Trajectory::Target(curve) => self
                .range
                .normalize_wildly(curve.nodes.last().map_or(self.value, |n| n.value)),
            Trajectory::Spline(follower) => follower.target_value(),
        }
    }

    /// Shortest signed distance from the current value to the target value.
    #[must_use]
    pub fn difference(&self) -> f32 {
        self.range
            .modular_difference(self.value(), self.target_value())
    }

    /// Time until the target value is reached.
    ///
    /// Zero when at rest; [`MOTIVE_TIME_ENDLESS`] for looping splines and
    /// paused splines that have not reached an end.
    #[must_use]
    pub fn target_time(&self) -> MotiveTime {
        match &self.trajectory {
            Trajectory::Idle => 0.0,
            Trajectory::Target(curve) => (curve.end_time() - curve.elapsed).max(0.0),
            Trajectory::Spline(follower) => follower.time_remaining(),
        }
    }

    /// `true` while following a spline.
    #[inline]
    #[must_use]
    pub fn is_following_spline(&self) -> bool {
        matches!(self.trajectory, Trajectory::Spline(_))
    }

    /// Seeks `target`, continuing from the current value and velocity.
    ///
    /// A leading node at time zero replaces the current state outright. If
    /// that leaves a velocity with nowhere to go, the motivator drifts and
    /// settles back over the engine's settle time.
    pub fn set_target(&mut self, target: &MotiveTarget1f) {
        let mut nodes = target.nodes();

        if let Some((first, rest)) = nodes.split_first() {
            if first.time <= 0.0 {
                self.value = self.unwrap_near(self.value, first.value);
                self.velocity = first.velocity;
                nodes = rest;
            }
        }

        if nodes.is_empty() {
            self.trajectory = if self.velocity == 0.0 {
                Trajectory::Idle
            } else {
                let mut settle = SmallVec::new();
                settle.push(MotiveNode1f::new(self.value, 0.0, self.settle_time));
                Trajectory::Target(TargetCurve {
                    start_value: self.value,
                    start_velocity: self.velocity,
                    nodes: settle,
                    elapsed: 0.0,
                })
            };
            return;
        }

        let mut curve_nodes = SmallVec::with_capacity(nodes.len());
        let mut previous = self.value;
        for node in nodes {
            let value = self.unwrap_near(previous, node.value);
            curve_nodes.push(MotiveNode1f::new(value, node.velocity, node.time));
            previous = value;
        }

        self.trajectory = Trajectory::Target(TargetCurve {
            start_value: self.value,
            start_velocity: self.velocity,
            nodes: curve_nodes,
            elapsed: 0.0,
        });
    }

    /// Follows `spline` according to `playback`, easing in from the current
    /// value over `playback.blend_x`.
    pub fn set_spline(&mut self, spline: Arc<Spline>, playback: &SplinePlayback) {
        let (x, at_rest) = advance_x(
            playback.start_x,
            0.0,
            spline.start_x(),
            spline.end_x(),
            playback.repeat,
        );
        let follower = SplineFollower {
            spline,
            cursor: SplineCursor::default(),
            x,
            playback_rate: playback.playback_rate,
            repeat: playback.repeat,
            at_rest: at_rest && playback.playback_rate == 0.0,
            blend_time: playback.blend_x.max(0.0),
            blend_elapsed: 0.0,
            blend_from: self.value,
        };
        self.trajectory = Trajectory::Spline(follower);
        self.resample();
    }

    /// Changes the speed of spline playback. Ignored unless following a
    /// spline.
    pub fn set_spline_playback_rate(&mut self, playback_rate: f32) {
        if let Trajectory::Spline(follower) = &mut self.trajectory {
            follower.playback_rate = playback_rate;
            follower.at_rest = false;
        }
    }

    /// Steps the motivator forward by `dt`.
    pub fn advance(&mut self, dt: MotiveTime) {
        let dt = self.max_delta_time.map_or(dt, |max| dt.min(max));
        if dt <= 0.0 {
            return;
        }
        match &mut self.trajectory {
            Trajectory::Idle => return,
            Trajectory::Target(curve) => {
                curve.elapsed += dt;
            }
            Trajectory::Spline(follower) => {
                let (x, at_rest) = advance_x(
                    follower.x,
                    dt * follower.playback_rate,
                    follower.spline.start_x(),
                    follower.spline.end_x(),
                    follower.repeat,
                );
                follower.x = x;
                follower.at_rest = at_rest;
                follower.blend_elapsed = (follower.blend_elapsed + dt).min(follower.blend_time);
            }
        }
        self.resample();
    }

    /// Recomputes `value`/`velocity` from the trajectory, and drops finished
    /// target curves.
    fn resample(&mut self) {
        let mut finished = false;
        match &mut self.trajectory {
            Trajectory::Idle => {}
            Trajectory::Target(curve) => {
                let (value, velocity) = curve.sample();
                self.value = value;
                self.velocity = velocity;
                finished = curve.elapsed >= curve.end_time();
            }
            Trajectory::Spline(follower) => {
                let y = follower
                    .spline
                    .evaluate_with_cursor(follower.x, &mut follower.cursor);
                let slope = if follower.at_rest {
                    0.0
                } else {
                    follower
                        .spline
                        .derivative_with_cursor(follower.x, &mut follower.cursor)
                        * follower.playback_rate
                };

                if follower.blend_elapsed < follower.blend_time {
                    let w = smoothstep(follower.blend_elapsed / follower.blend_time);
                    let span = self.range.modular_difference(follower.blend_from, y);
                    self.value = follower.blend_from + span * w;
                    self.velocity = slope * w;
                } else {
                    self.value = y;
                    self.velocity = slope;
                }
            }
        }

        if finished {
            self.velocity = 0.0;
            self.trajectory = Trajectory::Idle;
        }
    }

    /// Representation of `value` closest to `reference` in the modular range.
    fn unwrap_near(&self, reference: f32, value: f32) -> f32 {
        if self.range.is_valid() {
            reference + self.range.modular_difference(reference, value)
        } else {
            value
        }
    }
}
