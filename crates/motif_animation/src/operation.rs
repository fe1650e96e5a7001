//! Runtime state of one matrix operation.

use std::sync::Arc;

use glam::Mat4;

use motif_core::{MotiveTime, is_angle_in_range};

use crate::matrix_op::{MAX_MATRIX_OP_ID, MatrixOpId, MatrixOperationType};
use crate::motivator::{MotiveEngine, Motivator1f};
use crate::op_init::{MatrixOpValue, MatrixOperationInit};
use crate::playback::SplinePlayback;
use crate::target::MotiveTarget1f;

/// Where an operation's value comes from. Chosen once at construction.
///
/// The motivator is boxed so that constant operations, which are the
/// majority in most rigs, stay a few bytes wide.
#[derive(Debug)]
enum AnimatedValue {
    Motivator(Box<Motivator1f>),
    Constant(f32),
}

/// One operation of an animated matrix, plus the value driving it.
///
/// An operation is either constant or motivator-driven for its whole life.
/// A motivator-driven operation exclusively owns its motivator, which is
/// dropped with it. Operations are retargeted in place with
/// [`blend_to_op`](Self::blend_to_op) and
/// [`blend_to_default`](Self::blend_to_default) so that their value moves
/// on continuously from wherever it is.
#[derive(Debug)]
pub struct MatrixOperation {
    id: MatrixOpId,
    op_type: MatrixOperationType,
    value: AnimatedValue,
}

impl MatrixOperation {
    /// Creates the operation described by `init`.
    ///
    /// Constructs a motivator if `init` has motivator settings, then applies
    /// `init`'s value with default playback.
    ///
    /// # Panics
    ///
    /// Panics if `init.id()` is above [`MAX_MATRIX_OP_ID`].
    pub fn new(init: &MatrixOperationInit, engine: &mut MotiveEngine) -> Self {
        Self::with_playback(init, &SplinePlayback::default(), engine)
    }

    /// Like [`new`](Self::new), but applies `init`'s value with `playback`.
    pub fn with_playback(
        init: &MatrixOperationInit,
        playback: &SplinePlayback,
        engine: &mut MotiveEngine,
    ) -> Self {
        assert!(
            init.id() <= MAX_MATRIX_OP_ID,
            "matrix operation id {} exceeds maximum {MAX_MATRIX_OP_ID}",
            init.id()
        );

        let value = match init.motivator_init() {
            Some(motivator_init) => {
                AnimatedValue::Motivator(Box::new(Motivator1f::new(motivator_init, engine)))
            }
            None => AnimatedValue::Constant(init.op_type().default_value()),
        };

        let mut op = Self {
            id: init.id(),
            op_type: init.op_type(),
            value,
        };

        // An empty descriptor leaves the motivator untouched.
        op.blend_to_op(init, playback);
        op
    }

    /// Id that matches this operation across animations.
    #[inline]
    #[must_use]
    pub fn id(&self) -> MatrixOpId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn op_type(&self) -> MatrixOperationType {
        self.op_type
    }

    /// Current value: the motivator's value, or the constant.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        match &self.value {
            AnimatedValue::Motivator(motivator) => motivator.value(),
            AnimatedValue::Constant(value) => *value,
        }
    }

    /// The matrix this operation contributes at its current value.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.op_type.matrix(self.value())
    }

    #[inline]
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self.value, AnimatedValue::Constant(_))
    }

    #[inline]
    #[must_use]
    pub fn is_motivated(&self) -> bool {
        matches!(self.value, AnimatedValue::Motivator(_))
    }

    /// `true` if `init` describes the same operation, so this one can be
    /// retargeted with it instead of being replaced.
    #[inline]
    #[must_use]
    pub fn blendable(&self, init: &MatrixOperationInit) -> bool {
        self.id == init.id()
    }

    /// The driving motivator, or `None` for a constant operation.
    #[inline]
    #[must_use]
    pub fn value_motivator(&self) -> Option<&Motivator1f> {
        match &self.value {
            AnimatedValue::Motivator(motivator) => Some(motivator.as_ref()),
            AnimatedValue::Constant(_) => None,
        }
    }

    /// Mutable access to the driving motivator, for direct control.
    #[inline]
    pub fn value_motivator_mut(&mut self) -> Option<&mut Motivator1f> {
        match &mut self.value {
            AnimatedValue::Motivator(motivator) => Some(motivator.as_mut()),
            AnimatedValue::Constant(_) => None,
        }
    }

    /// Sends the motivator towards `target`.
    ///
    /// # Panics
    ///
    /// Panics if the operation is constant.
    pub fn set_target(&mut self, target: &MotiveTarget1f) {
        match &mut self.value {
            AnimatedValue::Motivator(motivator) => motivator.set_target(target),
            AnimatedValue::Constant(_) => panic!(
                "set_target on constant operation {} ({})",
                self.id, self.op_type
            ),
        }
    }

    /// Overwrites the constant value.
    ///
    /// # Panics
    ///
    /// Panics if the operation is motivator-driven. In debug builds, also
    /// panics if this is a rotation and `value` lies outside `(-π, π]`.
    pub fn set_value(&mut self, value: f32) {
        debug_assert!(
            !self.op_type.is_rotate() || is_angle_in_range(value),
            "rotation {value} for operation {} is outside (-π, π]",
            self.id
        );
        match &mut self.value {
            AnimatedValue::Constant(constant) => *constant = value,
            AnimatedValue::Motivator(_) => panic!(
                "set_value on motivator-driven operation {} ({})",
                self.id, self.op_type
            ),
        }
    }

    /// Retargets this operation to `init`.
    ///
    /// Constants take the new value immediately; a constant has no
    /// trajectory to ease from. Motivators continue from their current value
    /// and velocity:
    /// - `Empty` leaves the motivator as it is,
    /// - `InitialValue` eases to the value over `playback.blend_x`,
    /// - `Target` hands over the waypoints,
    /// - `Spline` plays the curve with `playback`.
    ///
    /// # Panics
    ///
    /// Panics if a constant operation is given anything but an initial value.
    pub fn blend_to_op(&mut self, init: &MatrixOperationInit, playback: &SplinePlayback) {
        match &mut self.value {
            AnimatedValue::Motivator(motivator) => match init.value() {
                MatrixOpValue::Empty => {}
                MatrixOpValue::InitialValue(value) => {
                    motivator.set_target(&MotiveTarget1f::target(*value, 0.0, playback.blend_x));
                }
                MatrixOpValue::Target(target) => motivator.set_target(target),
                MatrixOpValue::Spline(spline) => {
                    motivator.set_spline(Arc::clone(spline), playback);
                }
            },
            AnimatedValue::Constant(constant) => match init.value() {
                MatrixOpValue::InitialValue(value) => *constant = *value,
                other => panic!(
                    "constant operation {} ({}) cannot blend to {other:?}",
                    self.id, self.op_type
                ),
            },
        }
    }

    /// Eases a motivator-driven operation to the value that leaves the
    /// matrix unchanged, over `blend_time` (immediately if zero).
    ///
    /// Constant operations are left alone: their default is their constant.
    pub fn blend_to_default(&mut self, blend_time: MotiveTime) {
        let default_value = self.op_type.default_value();
        let AnimatedValue::Motivator(motivator) = &mut self.value else {
            return;
        };

        let target = if blend_time == 0.0 {
            MotiveTarget1f::current(default_value)
        } else {
            MotiveTarget1f::target(default_value, 0.0, blend_time)
        };
        motivator.set_target(&target);
    }

    /// Changes the spline playback speed. Ignored for constants.
    pub fn set_playback_rate(&mut self, playback_rate: f32) {
        if let AnimatedValue::Motivator(motivator) = &mut self.value {
            motivator.set_spline_playback_rate(playback_rate);
        }
    }

    /// Time until the operation reaches its target. Constants are always
    /// there.
    #[must_use]
    pub fn time_remaining(&self) -> MotiveTime {
        match &self.value {
            AnimatedValue::Motivator(motivator) => motivator.target_time(),
            AnimatedValue::Constant(_) => 0.0,
        }
    }

    /// Steps the motivator forward by `dt`. Constants do not move.
    pub fn advance(&mut self, dt: MotiveTime) {
        if let AnimatedValue::Motivator(motivator) = &mut self.value {
            motivator.advance(dt);
        }
    }
}
