//! A live sequence of matrix operations for one animated node.
//!
//! [`MatrixOpSequence`] owns the runtime operations built from a
//! [`MatrixOpArray`] and implements the transition protocol between
//! animations: operations are matched by id and retargeted in place, old
//! operations with no counterpart fade to their neutral value, and new
//! operations with no counterpart are created.

use glam::Mat4;

use motif_core::MotiveTime;

use crate::matrix_op::MatrixOpId;
use crate::motivator::MotiveEngine;
use crate::op_array::MatrixOpArray;
use crate::op_init::MatrixOperationInit;
use crate::operation::MatrixOperation;
use crate::playback::SplinePlayback;

#[derive(Debug, Default)]
pub struct MatrixOpSequence {
    ops: Vec<MatrixOperation>,
}

impl MatrixOpSequence {
    /// Builds one runtime operation per descriptor in `array`, in order.
    #[must_use]
    pub fn new(array: &MatrixOpArray, engine: &mut MotiveEngine) -> Self {
        let ops = array
            .iter()
            .map(|init| MatrixOperation::new(init, engine))
            .collect();
        Self { ops }
    }

    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[MatrixOperation] {
        &self.ops
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

    /// First operation with `id`.
    #[must_use]
    pub fn op(&self, id: MatrixOpId) -> Option<&MatrixOperation> {
        self.ops.iter().find(|op| op.id() == id)
    }

    pub fn op_mut(&mut self, id: MatrixOpId) -> Option<&mut MatrixOperation> {
        self.ops.iter_mut().find(|op| op.id() == id)
    }

    /// Transitions to the animation described by `array`.
    ///
    /// Both the current operations and `array` are expected in ascending id
    /// order, which is the order authoring code assigns ids in. They are
    /// merged by id:
    /// - matching ids are retargeted with [`MatrixOperation::blend_to_op`],
    ///   unless the kind of operation or the constant/motivator-driven split
    ///   differs, in which case the old operation is replaced,
    /// - current-only operations ease to their default over
    ///   `playback.blend_x` and stay in place,
    /// - new-only descriptors become new operations.
    ///
    /// If either side is out of order, operations are matched by looking up
    /// their id instead, and current-only operations move to the end.
    pub fn blend_to_ops(
        &mut self,
        array: &MatrixOpArray,
        playback: &SplinePlayback,
        engine: &mut MotiveEngine,
    ) {
        let ordered = ids_ascending(self.ops.iter().map(MatrixOperation::id))
            && ids_ascending(array.iter().map(MatrixOperationInit::id));

        let old_ops = std::mem::take(&mut self.ops);
        let mut merged = Vec::with_capacity(array.len().max(old_ops.len()));
        let mut counts = BlendCounts::default();

        if ordered {
            let mut old_ops = old_ops.into_iter().peekable();
            for init in array {
                // Fade out old operations that come before this descriptor.
                while let Some(op) = old_ops.next_if(|op| op.id() < init.id()) {
                    merged.push(counts.fade_to_default(op, playback));
                }
                let previous = old_ops.next_if(|op| op.blendable(init));
                merged.push(counts.blend_or_create(previous, init, playback, engine));
            }
            merged.extend(old_ops.map(|op| counts.fade_to_default(op, playback)));
        } else {
            log::warn!("Matrix op ids out of order; matching by id lookup");
            let mut old_ops: Vec<Option<MatrixOperation>> = old_ops.into_iter().map(Some).collect();
            for init in array {
                let previous = old_ops
                    .iter_mut()
                    .find(|slot| slot.as_ref().is_some_and(|op| op.blendable(init)))
                    .and_then(Option::take);
                merged.push(counts.blend_or_create(previous, init, playback, engine));
            }
            merged.extend(
                old_ops
                    .into_iter()
                    .flatten()
                    .map(|op| counts.fade_to_default(op, playback)),
            );
        }

        log::debug!(
            "Blended matrix ops: {} retargeted, {} to default, {} created",
            counts.matched,
            counts.defaulted,
            counts.created
        );
        self.ops = merged;
    }

    /// Eases every operation to its default value.
    pub fn blend_to_default(&mut self, blend_time: MotiveTime) {
        for op in &mut self.ops {
            op.blend_to_default(blend_time);
        }
    }

    pub fn set_playback_rate(&mut self, playback_rate: f32) {
        for op in &mut self.ops {
            op.set_playback_rate(playback_rate);
        }
    }

    /// Steps every operation forward by `dt`.
    pub fn advance(&mut self, dt: MotiveTime) {
        for op in &mut self.ops {
            op.advance(dt);
        }
    }

    /// Time until every operation has reached its target.
    #[must_use]
    pub fn time_remaining(&self) -> MotiveTime {
        self.ops
            .iter()
            .map(MatrixOperation::time_remaining)
            .fold(0.0, MotiveTime::max)
    }

    /// Current values, in composition order.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.ops.iter().map(MatrixOperation::value)
    }

    /// Composes every operation, in order, into one matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |matrix, op| matrix * op.matrix())
    }
}

#[derive(Debug, Default)]
struct BlendCounts {
    matched: usize,
    defaulted: usize,
    created: usize,
}

impl BlendCounts {
    fn fade_to_default(&mut self, mut op: MatrixOperation, playback: &SplinePlayback) -> MatrixOperation {
        op.blend_to_default(playback.blend_x);
        self.defaulted += 1;
        op
    }

    /// Retargets `previous` to `init` if it is the same kind of operation,
    /// otherwise builds a fresh one.
    fn blend_or_create(
        &mut self,
        previous: Option<MatrixOperation>,
        init: &MatrixOperationInit,
        playback: &SplinePlayback,
        engine: &mut MotiveEngine,
    ) -> MatrixOperation {
        if let Some(mut op) = previous {
            if op.op_type() == init.op_type() && op.is_constant() == init.is_constant() {
                op.blend_to_op(init, playback);
                self.matched += 1;
                return op;
            }
            log::debug!(
                "Matrix op {} changes from {} to {}; replacing instead of blending",
                op.id(),
                op.op_type(),
                init.op_type()
            );
        }

        // Nothing to blend from, so start directly on the new value.
        let start = SplinePlayback {
            blend_x: 0.0,
            ..*playback
        };
        self.created += 1;
        MatrixOperation::with_playback(init, &start, engine)
    }
}

fn ids_ascending(mut ids: impl Iterator<Item = MatrixOpId>) -> bool {
    let Some(mut previous) = ids.next() else {
        return true;
    };
    ids.all(|id| {
        let ascending = previous <= id;
        previous = id;
        ascending
    })
}
