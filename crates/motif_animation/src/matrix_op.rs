//! Matrix operation taxonomy.
//!
//! A transform is built by concatenating scalar operations, each a rotation
//! about an axis, a translation along an axis, or a scale. This module names
//! the kinds of operation and answers pure questions about them.

use std::fmt;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use motif_core::{ANGLE_RANGE, MotifError, Range};

/// Identifies an operation within an animation so that it can be blended with
/// the same operation in another animation.
///
/// An animation may have three `TranslateX` operations for one matrix: into a
/// scale pivot, out of the scale pivot, and the final translation. Another
/// animation without scaling may only have the final one. Ids say which
/// operations correspond.
pub type MatrixOpId = u8;

/// Largest id that names a real operation.
pub const MAX_MATRIX_OP_ID: MatrixOpId = 254;

/// Reserved id that never names an operation.
pub const INVALID_MATRIX_OP_ID: MatrixOpId = 255;

/// Validates a raw id coming from animation data.
pub fn checked_op_id(id: u8) -> Result<MatrixOpId, MotifError> {
    if id <= MAX_MATRIX_OP_ID {
        Ok(id)
    } else {
        Err(MotifError::OperationIdOutOfRange {
            id,
            max: MAX_MATRIX_OP_ID,
        })
    }
}

/// The kind of scalar operation applied to a matrix.
///
/// Variants are ordered so that rotations, translations and scales each form
/// a contiguous block.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum MatrixOperationType {
    #[default]
    Invalid,
    RotateAboutX,
    RotateAboutY,
    RotateAboutZ,
    TranslateX,
    TranslateY,
    TranslateZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    ScaleUniformly,
}

impl MatrixOperationType {
    /// Every valid operation kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::RotateAboutX,
        Self::RotateAboutY,
        Self::RotateAboutZ,
        Self::TranslateX,
        Self::TranslateY,
        Self::TranslateZ,
        Self::ScaleX,
        Self::ScaleY,
        Self::ScaleZ,
        Self::ScaleUniformly,
    ];

    #[inline]
    #[must_use]
    pub fn is_rotate(self) -> bool {
        Self::RotateAboutX <= self && self <= Self::RotateAboutZ
    }

    #[inline]
    #[must_use]
    pub fn is_translate(self) -> bool {
        Self::TranslateX <= self && self <= Self::TranslateZ
    }

    #[inline]
    #[must_use]
    pub fn is_scale(self) -> bool {
        Self::ScaleX <= self && self <= Self::ScaleUniformly
    }

    /// The value at which this operation leaves the transform unchanged.
    ///
    /// An operation that constantly returns its default value can be dropped.
    #[inline]
    #[must_use]
    pub fn default_value(self) -> f32 {
        if self.is_scale() { 1.0 } else { 0.0 }
    }

    /// Range that values of this operation are normalised into before
    /// blending. Rotations use the angle range so that a blend never goes
    /// the long way around; every other kind is unconstrained.
    #[inline]
    #[must_use]
    pub fn valid_range(self) -> Range {
        if self.is_rotate() {
            ANGLE_RANGE
        } else {
            Range::INVALID
        }
    }

    /// Debug name of the operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid Matrix Operation",
            Self::RotateAboutX => "Rotate About X",
            Self::RotateAboutY => "Rotate About Y",
            Self::RotateAboutZ => "Rotate About Z",
            Self::TranslateX => "Translate X",
            Self::TranslateY => "Translate Y",
            Self::TranslateZ => "Translate Z",
            Self::ScaleX => "Scale X",
            Self::ScaleY => "Scale Y",
            Self::ScaleZ => "Scale Z",
            Self::ScaleUniformly => "Scale Uniformly",
        }
    }

    /// The matrix this operation contributes when driven by `value`.
    #[must_use]
    pub fn matrix(self, value: f32) -> Mat4 {
        match self {
            Self::Invalid => Mat4::IDENTITY,
            Self::RotateAboutX => Mat4::from_rotation_x(value),
            Self::RotateAboutY => Mat4::from_rotation_y(value),
            Self::RotateAboutZ => Mat4::from_rotation_z(value),
            Self::TranslateX => Mat4::from_translation(Vec3::X * value),
            Self::TranslateY => Mat4::from_translation(Vec3::Y * value),
            Self::TranslateZ => Mat4::from_translation(Vec3::Z * value),
            Self::ScaleX => Mat4::from_scale(Vec3::new(value, 1.0, 1.0)),
            Self::ScaleY => Mat4::from_scale(Vec3::new(1.0, value, 1.0)),
            Self::ScaleZ => Mat4::from_scale(Vec3::new(1.0, 1.0, value)),
            Self::ScaleUniformly => Mat4::from_scale(Vec3::splat(value)),
        }
    }
}

impl fmt::Display for MatrixOperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for MatrixOperationType {
    type Error = MotifError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Invalid),
            1..=10 => Ok(Self::ALL[usize::from(raw) - 1]),
            _ => Err(MotifError::UnknownOperationType(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_above_max_are_rejected() {
        assert_eq!(checked_op_id(0), Ok(0));
        assert_eq!(checked_op_id(MAX_MATRIX_OP_ID), Ok(MAX_MATRIX_OP_ID));
        assert_eq!(
            checked_op_id(INVALID_MATRIX_OP_ID),
            Err(MotifError::OperationIdOutOfRange { id: 255, max: 254 })
        );
    }

    #[test]
    fn raw_values_follow_declaration_order() {
        for op in MatrixOperationType::ALL {
            assert_eq!(MatrixOperationType::try_from(op as u8), Ok(op));
        }
        assert_eq!(MatrixOperationType::try_from(0), Ok(MatrixOperationType::Invalid));
    }

    #[test]
    fn invalid_is_in_no_family() {
        let op = MatrixOperationType::Invalid;
        assert!(!op.is_rotate() && !op.is_translate() && !op.is_scale());
        assert_eq!(op.matrix(3.0), Mat4::IDENTITY);
    }
}
