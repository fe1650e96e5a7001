//! Predefined curves for motivators to follow.
//!
//! A [`Spline`] is a read-only sequence of Hermite nodes `(x, y, derivative)`
//! sorted by x. Splines are authored once and shared between every operation
//! that plays them, so motivators hold them through an `Arc`.

use serde::{Deserialize, Serialize};

use motif_core::{MotifError, Result};

use crate::curve::{hermite, hermite_derivative};

const MAX_SCAN_OFFSET: usize = 3;

/// One node of a spline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineNode {
    pub x: f32,
    pub y: f32,
    pub derivative: f32,
}

impl SplineNode {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, derivative: f32) -> Self {
        Self { x, y, derivative }
    }
}

/// Remembers the last segment sampled so that forward playback finds the next
/// segment in O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineCursor {
    pub last_index: usize,
}

/// A piecewise cubic Hermite curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SplineNode>", into = "Vec<SplineNode>")]
pub struct Spline {
    nodes: Vec<SplineNode>,
}

impl TryFrom<Vec<SplineNode>> for Spline {
    type Error = MotifError;

    fn try_from(nodes: Vec<SplineNode>) -> Result<Self> {
        Self::from_nodes(nodes)
    }
}

impl From<Spline> for Vec<SplineNode> {
    fn from(spline: Spline) -> Self {
        spline.nodes
    }
}

impl Spline {
    /// Builds a spline from nodes sorted by strictly increasing x.
    pub fn from_nodes(nodes: Vec<SplineNode>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(MotifError::EmptySpline);
        }
        for (index, node) in nodes.iter().enumerate() {
            if !(node.x.is_finite() && node.y.is_finite() && node.derivative.is_finite()) {
                return Err(MotifError::NonFiniteSplineNode { index });
            }
            if index > 0 && node.x <= nodes[index - 1].x {
                return Err(MotifError::UnsortedSplineNodes {
                    index,
                    x: node.x,
                    previous_x: nodes[index - 1].x,
                });
            }
        }
        Ok(Self { nodes })
    }

    /// A flat curve at `y` from x = 0 to x = `length`.
    #[must_use]
    pub fn constant(y: f32, length: f32) -> Self {
        let mut nodes = vec![SplineNode::new(0.0, y, 0.0)];
        if length > 0.0 {
            nodes.push(SplineNode::new(length, y, 0.0));
        }
        Self { nodes }
    }

    /// A smooth ease from `start` to `end` over x in `[0, length]`.
    #[must_use]
    pub fn ease(start: f32, end: f32, length: f32) -> Self {
        if length <= 0.0 {
            return Self::constant(end, 0.0);
        }
        Self {
            nodes: vec![
                SplineNode::new(0.0, start, 0.0),
                SplineNode::new(length, end, 0.0),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[SplineNode] {
        &self.nodes
    }

    #[inline]
    #[must_use]
    pub fn start_x(&self) -> f32 {
        self.nodes[0].x
    }

    #[inline]
    #[must_use]
    pub fn end_x(&self) -> f32 {
        self.nodes[self.nodes.len() - 1].x
    }

    #[inline]
    #[must_use]
    pub fn start_y(&self) -> f32 {
        self.nodes[0].y
    }

    #[inline]
    #[must_use]
    pub fn end_y(&self) -> f32 {
        self.nodes[self.nodes.len() - 1].y
    }

    #[inline]
    #[must_use]
    pub fn length_x(&self) -> f32 {
        self.end_x() - self.start_x()
    }

    /// Samples the curve at `x`, clamping outside `[start_x, end_x]`.
    #[must_use]
    pub fn evaluate(&self, x: f32) -> f32 {
        let index = self.segment_by_search(x);
        self.evaluate_segment(index, x)
    }

    /// Slope of the curve at `x`. Zero outside `[start_x, end_x]`.
    #[must_use]
    pub fn derivative(&self, x: f32) -> f32 {
        let index = self.segment_by_search(x);
        self.derivative_segment(index, x)
    }

    /// Samples the curve at `x`, starting the segment search at `cursor`.
    pub fn evaluate_with_cursor(&self, x: f32, cursor: &mut SplineCursor) -> f32 {
        let index = self.segment_with_cursor(x, cursor);
        self.evaluate_segment(index, x)
    }

    /// Slope at `x`, starting the segment search at `cursor`.
    pub fn derivative_with_cursor(&self, x: f32, cursor: &mut SplineCursor) -> f32 {
        let index = self.segment_with_cursor(x, cursor);
        self.derivative_segment(index, x)
    }

    fn segment_by_search(&self, x: f32) -> usize {
        let next_idx = self.nodes.partition_point(|n| n.x <= x);
        next_idx.saturating_sub(1)
    }

    /// Index of the segment `[nodes[i].x, nodes[i + 1].x)` containing `x`.
    ///
    /// Scans a few segments around the cursor before falling back to a
    /// binary search, which covers normal playback, reverse playback and
    /// loop resets.
    fn segment_with_cursor(&self, x: f32, cursor: &mut SplineCursor) -> usize {
        let len = self.nodes.len();
        if len == 1 {
            cursor.last_index = 0;
            return 0;
        }

        let i = cursor.last_index.min(len - 1);
        let x_curr = self.nodes[i].x;

        let found = if x >= x_curr {
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if x >= self.nodes[len - 1].x {
                        res = Some(len - 1);
                    }
                    break;
                }
                if x < self.nodes[idx + 1].x {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if x >= self.nodes[idx].x {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let index = found.unwrap_or_else(|| self.segment_by_search(x));
        cursor.last_index = index;
        index
    }

    fn evaluate_segment(&self, index: usize, x: f32) -> f32 {
        let len = self.nodes.len();
        if index >= len - 1 {
            return self.end_y();
        }
        let n0 = &self.nodes[index];
        let n1 = &self.nodes[index + 1];
        if x <= n0.x {
            return n0.y;
        }
        let dx = n1.x - n0.x;
        let t = ((x - n0.x) / dx).clamp(0.0, 1.0);
        hermite(n0.y, n0.derivative, n1.y, n1.derivative, t, dx)
    }

    fn derivative_segment(&self, index: usize, x: f32) -> f32 {
        let len = self.nodes.len();
        if index >= len - 1 {
            return 0.0;
        }
        let n0 = &self.nodes[index];
        let n1 = &self.nodes[index + 1];
        if x < n0.x {
            return 0.0;
        }
        let dx = n1.x - n0.x;
        let t = ((x - n0.x) / dx).clamp(0.0, 1.0);
        hermite_derivative(n0.y, n0.derivative, n1.y, n1.derivative, t, dx)
    }
}
