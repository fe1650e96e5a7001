//! # Motif
//!
//! Blendable, motivator-driven matrix operations for real-time animation.
//!
//! This umbrella crate re-exports the workspace crates:
//!
//! - [`motif_core`]: errors, ranges, angle policy and time
//! - [`animation`] ([`motif_animation`]): operations, descriptors,
//!   motivators and sequences
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::f32::consts::FRAC_PI_2;
//! use std::sync::Arc;
//! use motif::prelude::*;
//!
//! let mut engine = MotiveEngine::default();
//!
//! let mut walk = MatrixOpArray::default();
//! walk.add_const_op(1, MatrixOperationType::RotateAboutX, FRAC_PI_2);
//! walk.add_op_with_spline(
//!     2,
//!     MatrixOperationType::TranslateY,
//!     MotivatorInit::for_op(MatrixOperationType::TranslateY),
//!     Arc::new(Spline::ease(0.0, 1.0, 10.0)),
//! );
//!
//! let mut node = MatrixOpSequence::new(&walk, &mut engine);
//! node.advance(1.0 / 60.0);
//! let transform = node.matrix();
//! ```

pub use glam;
pub use motif_animation as animation;
pub use motif_core;

pub use motif_animation::{
    MatrixOpArray, MatrixOpId, MatrixOpSequence, MatrixOperation, MatrixOperationInit,
    MatrixOperationType, MotiveEngine, MotiveTarget1f, Motivator1f, MotivatorInit, Spline,
    SplinePlayback,
};
pub use motif_core::{MotifError, MotiveTime, Result};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use motif_animation::{
        EngineSettings, MatrixOpArray, MatrixOpId, MatrixOpSequence, MatrixOpValue,
        MatrixOperation, MatrixOperationInit, MatrixOperationType, MotiveEngine, MotiveNode1f,
        MotiveTarget1f, Motivator1f, MotivatorInit, Settled1f, Spline, SplineNode,
        SplinePlayback, TwitchDirection,
    };
    pub use motif_core::{ANGLE_RANGE, MotifError, MotiveTime, Range};
}
