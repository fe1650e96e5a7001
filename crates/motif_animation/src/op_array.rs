//! Ordered list of operation descriptors for one animation definition.

use std::sync::Arc;

use motif_core::MotiveTime;

use crate::matrix_op::{MatrixOpId, MatrixOperationType};
use crate::motivator::MotivatorInit;
use crate::op_init::MatrixOperationInit;
use crate::spline::Spline;
use crate::target::MotiveTarget1f;

/// Builds the sequence of operations that make up one animated matrix.
///
/// Order is significant: operations are composed in insertion order. The
/// array is meant to be cleared and refilled for every animation load, so
/// it keeps its allocation across [`clear`](Self::clear).
#[derive(Debug, Clone)]
pub struct MatrixOpArray {
    ops: Vec<MatrixOperationInit>,
}

impl Default for MatrixOpArray {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPECTED_NUM_OPS)
    }
}

impl MatrixOpArray {
    /// Guess at the number of operations per matrix. A slightly high guess
    /// costs less than reallocating.
    pub const DEFAULT_EXPECTED_NUM_OPS: usize = 8;

    #[must_use]
    pub fn new(expected_num_ops: usize) -> Self {
        Self {
            ops: Vec::with_capacity(expected_num_ops),
        }
    }

    /// Removes every operation and makes room for `expected_num_ops` more.
    pub fn clear(&mut self, expected_num_ops: usize) {
        self.ops.clear();
        self.ops.reserve(expected_num_ops);
    }

    /// Appends an operation that never changes.
    pub fn add_const_op(&mut self, id: MatrixOpId, op_type: MatrixOperationType, const_value: f32) {
        self.push(MatrixOperationInit::constant(id, op_type, const_value));
    }

    /// Appends a motivator-driven operation with no initial target.
    pub fn add_op(&mut self, id: MatrixOpId, op_type: MatrixOperationType, init: MotivatorInit) {
        self.push(MatrixOperationInit::motivated(id, op_type, init));
    }

    /// Appends a motivator-driven operation that heads to `initial_value`.
    pub fn add_op_with_value(
        &mut self,
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        initial_value: f32,
    ) {
        self.push(MatrixOperationInit::with_initial_value(
            id,
            op_type,
            init,
            initial_value,
        ));
    }

    /// Appends a motivator-driven operation that traverses `target`.
    pub fn add_op_with_target(
        &mut self,
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        target: MotiveTarget1f,
    ) {
        self.push(MatrixOperationInit::with_target(id, op_type, init, target));
    }

    /// Appends a motivator-driven operation that follows `spline`.
    pub fn add_op_with_spline(
        &mut self,
        id: MatrixOpId,
        op_type: MatrixOperationType,
        init: MotivatorInit,
        spline: Arc<Spline>,
    ) {
        self.push(MatrixOperationInit::with_spline(id, op_type, init, spline));
    }

    #[inline]
    pub fn push(&mut self, op: MatrixOperationInit) {
        self.ops.push(op);
    }

    /// Longest spline among the operations, i.e. the natural duration of the
    /// animation. Zero if no operation follows a spline.
    #[must_use]
    pub fn end_time(&self) -> MotiveTime {
        self.ops
            .iter()
            .filter_map(MatrixOperationInit::spline)
            .map(|spline| spline.end_x())
            .fold(0.0, MotiveTime::max)
    }

    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[MatrixOperationInit] {
        &self.ops
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MatrixOperationInit> {
        self.ops.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ops.capacity()
    }
}

impl<'a> IntoIterator for &'a MatrixOpArray {
    type Item = &'a MatrixOperationInit;
    type IntoIter = std::slice::Iter<'a, MatrixOperationInit>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
