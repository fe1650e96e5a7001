//! Closed intervals over `f32`.
//!
//! A [`Range`] either describes a real interval or is [`Range::INVALID`],
//! which stands for "no constraint". Modular (wrapping) ranges such as the
//! angle range are normalised with [`Range::normalize_wildly`].

use serde::{Deserialize, Serialize};

/// A closed interval `[start, end]`.
///
/// An interval with `start > end` is invalid and means "unconstrained".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start: f32,
    pub end: f32,
}

impl Default for Range {
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl Range {
    /// The unconstrained range. Finite so that it survives serialisation.
    pub const INVALID: Self = Self {
        start: 1.0,
        end: -1.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn middle(&self) -> f32 {
        0.5 * (self.start + self.end)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, x: f32) -> bool {
        self.start <= x && x <= self.end
    }

    /// Clamps `x` into the range. Invalid ranges return `x` unchanged.
    #[inline]
    #[must_use]
    pub fn clamp(&self, x: f32) -> f32 {
        if self.is_valid() {
            x.clamp(self.start, self.end)
        } else {
            x
        }
    }

    /// Wraps `x` into `(start, end]`, treating the range as modular.
    ///
    /// Works for any finite `x`, however far outside the range it lies.
    /// Invalid ranges return `x` unchanged.
    #[must_use]
    pub fn normalize_wildly(&self, x: f32) -> f32 {
        if !self.is_valid() || !x.is_finite() {
            return x;
        }
        let length = self.length();
        if length <= 0.0 {
            return self.start;
        }

        // Shift into [0, length), then back to (start, end].
        let offset = (x - self.start).rem_euclid(length);
        if offset == 0.0 {
            self.end
        } else {
            self.start + offset
        }
    }

    /// Shortest signed distance from `from` to `to` in a modular range.
    ///
    /// For invalid ranges this is plain subtraction.
    #[must_use]
    pub fn modular_difference(&self, from: f32, to: f32) -> f32 {
        if !self.is_valid() {
            return to - from;
        }
        let half = 0.5 * self.length();
        let diff = (to - from + half).rem_euclid(self.length()) - half;
        // rem_euclid maps +half onto -half; keep the positive representative.
        if diff == -half { half } else { diff }
    }
}
