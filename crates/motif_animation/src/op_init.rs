//! Descriptors for initialising and retargeting a matrix operation.

use std::sync::Arc;

use crate::matrix_op::{MatrixOpId, MatrixOperationType};
use crate::motivator::MotivatorInit;
use crate::spline::Spline;
use crate::target::MotiveTarget1f;

/// What a descriptor asks the operation's value to do.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixOpValue {
    /// Leave the motivator alone. Its target is set later.
    Empty,
    /// Hold a constant, or ease a motivator to this value.
    InitialValue(f32),
    /// Send a motivator through these waypoints.
    Target(MotiveTarget1f),
    /// Have a motivator follow this curve.
    Spline(Arc<Spline>),
}

/// Init params for one operation on a matrix.
///
/// Built by animation-authoring code, then consumed by
/// [`MatrixOperation::new`](crate::MatrixOperation::new) or
/// [`MatrixOperation::blend_to_op`](crate::MatrixOperation::blend_to_op).
/// A descriptor without a [`MotivatorInit`] describes a constant operation
/// and always carries [`MatrixOpValue::InitialValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOperationInit {
    init: Option<MotivatorInit>,
    id: MatrixOpId,
    op_type: MatrixOperationType,
    value: MatrixOpValue,
}

impl MatrixOperationInit {
    /// The operation never changes. For example `RotateAboutX` by π/2 lays an
    /// upright object flat on the ground.
    #[must_use]
    pub fn constant(id: MatrixOpId, op_type: MatrixOperationType, const_value: f32) -> Self {
        Self {
            init: None,
            id,
            op_type,
            value: MatrixOpValue::InitialValue(const_value),
        }
    }

    /// The operation is driven by a motivator whose target is set later.
    #[must_use]
    pub fn motivated(id: MatrixOpId, op_type: MatrixOperationType, init: MotivatorInit) -> Self {
        Self {
            init: Some(init),
            id,
            op_type,
            value: MatrixOpValue::Empty,
        }
    }

    /// The operation is driven by a motivator that starts heading to
    /// `initial_value`.
    #[must_use]
    pub fn with_initial_value(
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        initial_value: f32,
    ) -> Self {
        Self {
            init: Some(init),
            id,
            op_type,
            value: MatrixOpValue::InitialValue(initial_value),
        }
    }

    /// The operation is driven by a motivator that traverses `target`.
    #[must_use]
    pub fn with_target(
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        target: MotiveTarget1f,
    ) -> Self {
        Self {
            init: Some(init),
            id,
            op_type,
            value: MatrixOpValue::Target(target),
        }
    }

    /// The operation is driven by a motivator that follows `spline`.
    #[must_use]
    pub fn with_spline(
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        spline: Arc<Spline>,
    ) -> Self {
        Self {
            init: Some(init),
            id,
            op_type,
            value: MatrixOpValue::Spline(spline),
        }
    }

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

    /// Motivator settings, or `None` for a constant operation.
    #[inline]
    #[must_use]
    pub fn motivator_init(&self) -> Option<&MotivatorInit> {
        self.init.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &MatrixOpValue {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.init.is_none()
    }

    /// The spline this descriptor plays, if any.
    #[inline]
    #[must_use]
    pub fn spline(&self) -> Option<&Arc<Spline>> {
        match &self.value {
            MatrixOpValue::Spline(spline) => Some(spline),
            _ => None,
        }
    }
}
