//! Walk-to-run transition demo.
//!
//! Builds a "walk" animation for one node, plays it for a second, then blends
//! to a "run" animation and prints the node's operation values every tenth
//! of a second.
//!
//! ```text
//! RUST_LOG=debug cargo run -p op_blend -- [engine_settings.json]
//! ```

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use anyhow::Context;
use motif::prelude::*;

const TICK: MotiveTime = 1.0 / 60.0;

fn bob(height: f32, length: f32) -> motif::Result<Arc<Spline>> {
    let half = 0.5 * length;
    Spline::from_nodes(vec![
        SplineNode::new(0.0, 0.0, 0.0),
        SplineNode::new(half, height, 0.0),
        SplineNode::new(length, 0.0, 0.0),
    ])
    .map(Arc::new)
}

fn walk(ops: &mut MatrixOpArray) -> motif::Result<()> {
    ops.clear(MatrixOpArray::DEFAULT_EXPECTED_NUM_OPS);
    ops.add_const_op(1, MatrixOperationType::RotateAboutX, FRAC_PI_2);
    ops.add_op_with_spline(
        2,
        MatrixOperationType::TranslateY,
        MotivatorInit::for_op(MatrixOperationType::TranslateY),
        bob(0.1, 1.0)?,
    );
    ops.add_op_with_value(
        3,
        MatrixOperationType::RotateAboutY,
        MotivatorInit::for_op(MatrixOperationType::RotateAboutY),
        0.2,
    );
    Ok(())
}

fn run(ops: &mut MatrixOpArray) -> motif::Result<()> {
    ops.clear(MatrixOpArray::DEFAULT_EXPECTED_NUM_OPS);
    ops.add_op_with_spline(
        2,
        MatrixOperationType::TranslateY,
        MotivatorInit::for_op(MatrixOperationType::TranslateY),
        bob(0.3, 0.6)?,
    );
    ops.add_op_with_value(
        4,
        MatrixOperationType::ScaleY,
        MotivatorInit::for_op(MatrixOperationType::ScaleY),
        0.9,
    );
    Ok(())
}

fn print_node(time: MotiveTime, node: &MatrixOpSequence) {
    let values: Vec<String> = node
        .ops()
        .iter()
        .map(|op| format!("{}#{}={:+.3}", op.op_type(), op.id(), op.value()))
        .collect();
    println!("t={time:.2}  {}", values.join("  "));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading engine settings from {path}"))?;
            serde_json::from_str(&text).context("parsing engine settings")?
        }
        None => EngineSettings::default(),
    };
    log::info!("Engine settings: {settings:?}");

    let mut engine = MotiveEngine::new(settings);
    let mut ops = MatrixOpArray::default();

    walk(&mut ops)?;
    log::info!("Walk lasts {:.2}s", ops.end_time());
    let mut node = MatrixOpSequence::new(&ops, &mut engine);

    let mut time = 0.0;
    for frame in 0..60 {
        node.advance(TICK);
        time += TICK;
        if frame % 6 == 0 {
            print_node(time, &node);
        }
    }

    run(&mut ops)?;
    log::info!("Blending to run ({:.2}s)", ops.end_time());
    let playback = SplinePlayback::default().with_blend(0.25).looping();
    node.blend_to_ops(&ops, &playback, &mut engine);

    for frame in 0..60 {
        node.advance(TICK);
        time += TICK;
        if frame % 6 == 0 {
            print_node(time, &node);
        }
    }

    let origin = node.matrix().transform_point3(glam::Vec3::ZERO);
    println!("final origin: {origin}");
    log::info!("{} motivators created", engine.motivators_created());
    Ok(())
}
