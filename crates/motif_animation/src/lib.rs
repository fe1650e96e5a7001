//! Matrix operations, motivators and blending for the Motif animation engine.
//!
//! A transform is built from an ordered list of scalar operations (rotate,
//! translate, scale). Each operation is either constant or driven by a
//! [`Motivator1f`]. When one animation replaces another, operations are
//! matched by [`MatrixOpId`] and retargeted in place so that nothing pops.
//!
//! # Modules
//!
//! - [`matrix_op`]: operation kinds and ids
//! - [`op_init`] / [`op_array`]: descriptors and the per-animation builder
//! - [`operation`]: the runtime operation
//! - [`sequence`]: a node's live operations and the transition protocol
//! - [`motivator`], [`target`], [`spline`], [`playback`]: the value engine
//! - [`settle`]: rest detection and twitches

pub mod curve;
pub mod matrix_op;
pub mod motivator;
pub mod op_array;
pub mod op_init;
pub mod operation;
pub mod playback;
pub mod sequence;
pub mod settle;
pub mod spline;
pub mod target;

pub use matrix_op::{
    INVALID_MATRIX_OP_ID, MAX_MATRIX_OP_ID, MatrixOpId, MatrixOperationType, checked_op_id,
};
pub use motivator::{EngineSettings, MotiveEngine, Motivator1f, MotivatorInit};
pub use op_array::MatrixOpArray;
pub use op_init::{MatrixOpValue, MatrixOperationInit};
pub use operation::MatrixOperation;
pub use playback::SplinePlayback;
pub use sequence::MatrixOpSequence;
pub use settle::{Settled1f, TwitchDirection, twitch};
pub use spline::{Spline, SplineCursor, SplineNode};
pub use target::{MotiveNode1f, MotiveTarget1f};
