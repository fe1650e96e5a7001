//! Matrix Operation Tests
//!
//! Tests for:
//! - MatrixOperationType classification, defaults and ranges
//! - MatrixOperationInit descriptor shapes
//! - MatrixOpArray building, clearing and end time
//! - MatrixOperation constant / motivator state machine
//! - Precondition faults on misuse

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use motif::animation::{
    INVALID_MATRIX_OP_ID, MAX_MATRIX_OP_ID, MatrixOpArray, MatrixOpValue, MatrixOperation,
    MatrixOperationInit, MatrixOperationType, MotiveEngine, MotiveTarget1f, MotivatorInit,
    Spline, SplinePlayback, checked_op_id,
};
use motif::motif_core::{ANGLE_RANGE, MotifError, Range};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn translate_init() -> MotivatorInit {
    MotivatorInit::for_op(MatrixOperationType::TranslateY)
}

fn spline_of_length(length: f32) -> Arc<Spline> {
    Arc::new(Spline::ease(0.0, 1.0, length))
}

// ============================================================================
// Taxonomy
// ============================================================================

#[test]
fn classification_is_exclusive_and_exhaustive() {
    for op in MatrixOperationType::ALL {
        let memberships = [op.is_rotate(), op.is_translate(), op.is_scale()];
        let count = memberships.iter().filter(|&&m| m).count();
        assert_eq!(count, 1, "{op} belongs to {count} classes");
    }

    let invalid = MatrixOperationType::Invalid;
    assert!(!invalid.is_rotate() && !invalid.is_translate() && !invalid.is_scale());
}

#[test]
fn default_value_is_one_only_for_scales() {
    for op in MatrixOperationType::ALL {
        let expected = if op.is_scale() { 1.0 } else { 0.0 };
        assert_eq!(op.default_value(), expected, "{op}");
    }
}

#[test]
fn valid_range_is_angle_range_only_for_rotations() {
    for op in MatrixOperationType::ALL {
        if op.is_rotate() {
            assert_eq!(op.valid_range(), ANGLE_RANGE);
        } else {
            assert_eq!(op.valid_range(), Range::INVALID);
            assert!(!op.valid_range().is_valid());
        }
    }
}

#[test]
fn operation_type_from_raw_byte() {
    assert_eq!(
        MatrixOperationType::try_from(1),
        Ok(MatrixOperationType::RotateAboutX)
    );
    assert_eq!(
        MatrixOperationType::try_from(10),
        Ok(MatrixOperationType::ScaleUniformly)
    );
    assert_eq!(
        MatrixOperationType::try_from(11),
        Err(MotifError::UnknownOperationType(11))
    );
    assert_eq!(MatrixOperationType::ScaleUniformly.name(), "Scale Uniformly");
}

#[test]
fn op_id_validation() {
    assert_eq!(checked_op_id(MAX_MATRIX_OP_ID), Ok(MAX_MATRIX_OP_ID));
    assert!(checked_op_id(INVALID_MATRIX_OP_ID).is_err());
}

// ============================================================================
// MatrixOpArray
// ============================================================================

#[test]
fn op_array_preserves_insertion_order_and_shapes() {
    let mut ops = MatrixOpArray::default();
    ops.add_op(3, MatrixOperationType::TranslateX, translate_init());
    ops.add_const_op(1, MatrixOperationType::RotateAboutZ, 0.5);
    ops.add_op_with_value(2, MatrixOperationType::ScaleX, translate_init(), 2.0);
    ops.add_op_with_target(
        4,
        MatrixOperationType::TranslateZ,
        translate_init(),
        MotiveTarget1f::target(1.0, 0.0, 1.0),
    );

    let ids: Vec<_> = ops.iter().map(MatrixOperationInit::id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);

    assert_eq!(*ops.ops()[0].value(), MatrixOpValue::Empty);
    assert!(ops.ops()[1].is_constant());
    assert_eq!(*ops.ops()[1].value(), MatrixOpValue::InitialValue(0.5));
    assert_eq!(*ops.ops()[2].value(), MatrixOpValue::InitialValue(2.0));
    assert!(matches!(ops.ops()[3].value(), MatrixOpValue::Target(_)));
}

#[test]
fn end_time_is_longest_spline() {
    let mut ops = MatrixOpArray::default();
    ops.add_op_with_spline(1, MatrixOperationType::TranslateX, translate_init(), spline_of_length(5.0));
    ops.add_const_op(2, MatrixOperationType::RotateAboutX, 1.0);
    ops.add_op_with_spline(3, MatrixOperationType::TranslateY, translate_init(), spline_of_length(12.0));
    ops.add_op_with_value(4, MatrixOperationType::ScaleX, translate_init(), 40.0);
    ops.add_op_with_spline(5, MatrixOperationType::TranslateZ, translate_init(), spline_of_length(3.0));

    assert_eq!(ops.end_time(), 12.0);
}

#[test]
fn end_time_without_splines_is_zero() {
    let mut ops = MatrixOpArray::default();
    assert_eq!(ops.end_time(), 0.0);

    ops.add_const_op(1, MatrixOperationType::ScaleUniformly, 3.0);
    ops.add_op_with_value(2, MatrixOperationType::TranslateX, translate_init(), 7.0);
    assert_eq!(ops.end_time(), 0.0);
}

#[test]
fn clear_empties_and_reserves() {
    let mut ops = MatrixOpArray::new(2);
    ops.add_const_op(1, MatrixOperationType::RotateAboutX, 1.0);
    ops.add_const_op(2, MatrixOperationType::RotateAboutY, 1.0);

    ops.clear(32);
    assert!(ops.is_empty());
    assert!(ops.capacity() >= 32);
    assert_eq!(ops.end_time(), 0.0);
}

// ============================================================================
// Constant operations
// ============================================================================

#[test]
fn constant_value_is_exact_through_every_update() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::TranslateX, 3.25);
    let mut op = MatrixOperation::new(&init, &mut engine);

    assert!(op.is_constant());
    assert_eq!(op.value(), 3.25);
    assert_eq!(engine.motivators_created(), 0);

    op.set_value(-8.5);
    assert_eq!(op.value(), -8.5);

    let next = MatrixOperationInit::constant(1, MatrixOperationType::TranslateX, 42.0);
    op.blend_to_op(&next, &SplinePlayback::default().with_blend(5.0));
    assert_eq!(op.value(), 42.0, "constants never interpolate");

    op.advance(1.0);
    assert_eq!(op.value(), 42.0);
}

#[test]
fn constant_ignores_default_blend_and_playback_rate() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::ScaleX, 4.0);
    let mut op = MatrixOperation::new(&init, &mut engine);

    op.blend_to_default(0.0);
    op.blend_to_default(1.0);
    op.set_playback_rate(3.0);

    assert_eq!(op.value(), 4.0);
    assert_eq!(op.time_remaining(), 0.0);
    assert!(op.value_motivator().is_none());
}

#[test]
#[should_panic(expected = "set_value on motivator-driven operation")]
fn set_value_on_motivator_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::with_initial_value(1, MatrixOperationType::TranslateX, translate_init(), 1.0);
    let mut op = MatrixOperation::new(&init, &mut engine);
    op.set_value(2.0);
}

#[test]
#[should_panic(expected = "outside")]
fn set_value_rotation_out_of_range_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::RotateAboutY, 0.0);
    let mut op = MatrixOperation::new(&init, &mut engine);
    op.set_value(PI + 0.5);
}

#[test]
#[should_panic(expected = "cannot blend to")]
fn constant_given_spline_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::TranslateX, 0.0);
    let mut op = MatrixOperation::new(&init, &mut engine);

    let spline = MatrixOperationInit::with_spline(1, MatrixOperationType::TranslateX, translate_init(), spline_of_length(1.0));
    op.blend_to_op(&spline, &SplinePlayback::default());
}

#[test]
#[should_panic(expected = "cannot blend to")]
fn constant_given_target_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::ScaleY, 1.0);
    let mut op = MatrixOperation::new(&init, &mut engine);

    let target = MatrixOperationInit::with_target(1, MatrixOperationType::ScaleY, translate_init(), MotiveTarget1f::target(2.0, 0.0, 1.0));
    op.blend_to_op(&target, &SplinePlayback::default());
}

#[test]
#[should_panic(expected = "cannot blend to")]
fn constant_given_empty_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::ScaleY, 1.0);
    let mut op = MatrixOperation::new(&init, &mut engine);

    let empty = MatrixOperationInit::motivated(1, MatrixOperationType::ScaleY, translate_init());
    op.blend_to_op(&empty, &SplinePlayback::default());
}

#[test]
#[should_panic(expected = "set_target on constant operation")]
fn set_target_on_constant_panics() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(1, MatrixOperationType::TranslateZ, 0.0);
    let mut op = MatrixOperation::new(&init, &mut engine);
    op.set_target(&MotiveTarget1f::target(1.0, 0.0, 1.0));
}

#[test]
#[should_panic(expected = "exceeds maximum")]
fn invalid_id_panics_at_construction() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(INVALID_MATRIX_OP_ID, MatrixOperationType::TranslateX, 0.0);
    let _ = MatrixOperation::new(&init, &mut engine);
}

// ============================================================================
// Motivator-driven operations
// ============================================================================

#[test]
fn initial_value_with_zero_blend_is_immediate() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::with_initial_value(7, MatrixOperationType::ScaleZ, translate_init(), 2.5);
    let mut op = MatrixOperation::new(&init, &mut engine);

    assert!(op.is_motivated());
    assert_eq!(engine.motivators_created(), 1);
    assert!(approx(op.value(), 2.5));

    op.advance(1.0 / 60.0);
    assert!(approx(op.value(), 2.5));
    assert_eq!(op.time_remaining(), 0.0);
}

#[test]
fn empty_descriptor_leaves_motivator_untouched() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::motivated(1, MatrixOperationType::TranslateX, translate_init());
    let mut op = MatrixOperation::new(&init, &mut engine);
    assert_eq!(op.value(), 0.0);

    let go = MatrixOperationInit::with_initial_value(1, MatrixOperationType::TranslateX, translate_init(), 6.0);
    op.blend_to_op(&go, &SplinePlayback::default());
    op.blend_to_op(&init, &SplinePlayback::default());
    assert!(approx(op.value(), 6.0));
}

#[test]
fn initial_value_blend_eases_from_current_value() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::with_initial_value(1, MatrixOperationType::TranslateX, translate_init(), 0.0);
    let mut op = MatrixOperation::new(&init, &mut engine);

    let next = MatrixOperationInit::with_initial_value(1, MatrixOperationType::TranslateX, translate_init(), 10.0);
    op.blend_to_op(&next, &SplinePlayback::default().with_blend(1.0));

    assert!(approx(op.value(), 0.0), "retargeting must not jump");
    assert!(approx(op.time_remaining(), 1.0));

    op.advance(0.05);
    let early = op.value();
    assert!(early > 0.0 && early < 10.0);

    for _ in 0..40 {
        op.advance(0.05);
    }
    assert!(approx(op.value(), 10.0));
    assert_eq!(op.time_remaining(), 0.0);
}

#[test]
fn target_descriptor_passes_through_waypoints() {
    let mut engine = MotiveEngine::default();
    let target = MotiveTarget1f::from_nodes([
        motif::animation::MotiveNode1f::new(4.0, 0.0, 0.5),
        motif::animation::MotiveNode1f::new(-2.0, 0.0, 1.0),
    ])
    .unwrap();
    let init = MatrixOperationInit::with_target(1, MatrixOperationType::TranslateZ, translate_init(), target);
    let mut op = MatrixOperation::new(&init, &mut engine);

    assert!(approx(op.time_remaining(), 1.0));
    for _ in 0..10 {
        op.advance(0.05);
    }
    assert!(approx(op.value(), 4.0));

    for _ in 0..10 {
        op.advance(0.05);
    }
    assert!(approx(op.value(), -2.0));
}

#[test]
fn blendable_compares_ids_only() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::constant(9, MatrixOperationType::RotateAboutX, 0.0);
    let op = MatrixOperation::new(&init, &mut engine);

    let same_id_other_kind =
        MatrixOperationInit::with_spline(9, MatrixOperationType::ScaleY, translate_init(), spline_of_length(1.0));
    let other_id_same_kind = MatrixOperationInit::constant(10, MatrixOperationType::RotateAboutX, 0.0);

    assert!(op.blendable(&init));
    assert!(op.blendable(&same_id_other_kind));
    assert!(!op.blendable(&other_id_same_kind));
}

#[test]
fn blend_to_default_heads_for_neutral_value() {
    let mut engine = MotiveEngine::default();
    let cases = [
        (MatrixOperationType::TranslateX, 0.0),
        (MatrixOperationType::RotateAboutZ, 0.0),
        (MatrixOperationType::ScaleY, 1.0),
        (MatrixOperationType::ScaleUniformly, 1.0),
    ];

    for (op_type, neutral) in cases {
        let init = MatrixOperationInit::with_initial_value(1, op_type, MotivatorInit::for_op(op_type), 2.0);
        let mut op = MatrixOperation::new(&init, &mut engine);
        assert!(approx(op.value(), 2.0));

        op.blend_to_default(0.5);
        let motivator = op.value_motivator().unwrap();
        assert!(approx(motivator.target_value(), neutral), "{op_type}");
        assert!(approx(op.value(), 2.0), "{op_type} must ease, not jump");

        for _ in 0..20 {
            op.advance(0.05);
        }
        assert!(approx(op.value(), neutral), "{op_type}");

        op.set_target(&MotiveTarget1f::current(2.0));
        op.blend_to_default(0.0);
        assert!(approx(op.value(), neutral), "{op_type} snaps with zero blend");
    }
}

#[test]
fn rotation_blends_the_short_way_around() {
    let mut engine = MotiveEngine::default();
    let op_type = MatrixOperationType::RotateAboutY;
    let init = MatrixOperationInit::with_initial_value(1, op_type, MotivatorInit::for_op(op_type), PI - 0.1);
    let mut op = MatrixOperation::new(&init, &mut engine);

    let across = MatrixOperationInit::with_initial_value(1, op_type, MotivatorInit::for_op(op_type), -PI + 0.1);
    op.blend_to_op(&across, &SplinePlayback::default().with_blend(1.0));

    let motivator = op.value_motivator().unwrap();
    assert!(approx(motivator.difference(), 0.2));

    for _ in 0..10 {
        op.advance(0.05);
        let v = op.value();
        assert!(v.abs() > PI - 0.2, "went the long way: {v}");
    }
}

#[test]
fn playback_rate_scales_spline_time() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::with_spline(1, MatrixOperationType::TranslateX, translate_init(), spline_of_length(10.0));
    let mut op = MatrixOperation::new(&init, &mut engine);
    assert!(approx(op.time_remaining(), 10.0));

    op.set_playback_rate(2.0);
    assert!(approx(op.time_remaining(), 5.0));
}

#[test]
fn advancing_by_time_remaining_reaches_the_end() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::with_spline(1, MatrixOperationType::TranslateX, translate_init(), spline_of_length(10.0));
    let mut op = MatrixOperation::new(&init, &mut engine);

    op.advance(op.time_remaining());
    assert_eq!(op.time_remaining(), 0.0);
    assert!(approx(op.value(), 1.0));

    let target = MatrixOperationInit::with_target(1, MatrixOperationType::TranslateX, translate_init(), MotiveTarget1f::target(-3.0, 0.0, 2.5));
    op.blend_to_op(&target, &SplinePlayback::default());
    op.advance(op.time_remaining());
    assert_eq!(op.time_remaining(), 0.0);
    assert!(approx(op.value(), -3.0));
}

#[test]
fn value_motivator_allows_direct_control() {
    let mut engine = MotiveEngine::default();
    let init = MatrixOperationInit::motivated(1, MatrixOperationType::RotateAboutX, MotivatorInit::for_op(MatrixOperationType::RotateAboutX));
    let mut op = MatrixOperation::new(&init, &mut engine);

    op.value_motivator_mut()
        .unwrap()
        .set_target(&MotiveTarget1f::current(FRAC_PI_2));
    assert!(approx(op.value(), FRAC_PI_2));
}
