//! Error Types
//!
//! This module defines the recoverable error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`MotifError`] covers failures at the authoring
//! boundary, where animation data arrives from outside the engine:
//! - Malformed spline data (empty, unsorted or non-finite nodes)
//! - Raw operation kinds or ids that do not map to a valid value
//! - Malformed multi-node targets
//!
//! Misuse of a runtime operation (for example writing a constant into a
//! motivator-driven operation) is a caller bug and panics instead; it never
//! surfaces as a [`MotifError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use motif_core::errors::{MotifError, Result};
//!
//! fn load_curve() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Motif engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotifError {
    // ========================================================================
    // Spline Errors
    // ========================================================================
    /// A spline needs at least one node.
    #[error("Spline has no nodes")]
    EmptySpline,

    /// Spline nodes must be strictly increasing in x.
    #[error("Spline node {index} at x = {x} does not come after x = {previous_x}")]
    UnsortedSplineNodes {
        /// Index of the offending node
        index: usize,
        /// x coordinate of the offending node
        x: f32,
        /// x coordinate of the node before it
        previous_x: f32,
    },

    /// A spline node contained NaN or infinity.
    #[error("Spline node {index} is not finite")]
    NonFiniteSplineNode {
        /// Index of the offending node
        index: usize,
    },

    // ========================================================================
    // Target Errors
    // ========================================================================
    /// Target nodes must be ordered by non-decreasing time.
    #[error("Target node {index} at time {time} comes before time {previous_time}")]
    UnsortedTargetNodes {
        /// Index of the offending node
        index: usize,
        /// Time of the offending node
        time: f32,
        /// Time of the node before it
        previous_time: f32,
    },

    // ========================================================================
    // Operation Errors
    // ========================================================================
    /// A raw byte does not name a matrix operation kind.
    #[error("Unknown matrix operation type: {0}")]
    UnknownOperationType(u8),

    /// Operation ids above the reserved maximum cannot identify an operation.
    #[error("Matrix operation id {id} exceeds the maximum of {max}")]
    OperationIdOutOfRange {
        /// The rejected id
        id: u8,
        /// The largest usable id
        max: u8,
    },
}

/// Alias for `Result<T, MotifError>`.
pub type Result<T> = std::result::Result<T, MotifError>;
