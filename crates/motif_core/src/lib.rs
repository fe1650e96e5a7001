//! Core utilities and foundational types for the Motif animation engine.
//!
//! This crate provides:
//! - [`errors`]: the recoverable error type [`MotifError`] and `Result` alias
//! - [`range`]: closed and modular `f32` intervals
//! - [`angle`]: the canonical `(-π, π]` angle policy
//! - [`time`]: the animation time unit

pub mod angle;
pub mod errors;
pub mod range;
pub mod time;

pub use angle::{ANGLE_RANGE, is_angle_in_range, normalize_angle};
pub use errors::{MotifError, Result};
pub use range::Range;
pub use time::{MOTIVE_TIME_ENDLESS, MotiveTime};
