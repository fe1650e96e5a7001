//! Waypoint targets for one-dimensional motivators.
//!
//! A [`MotiveTarget1f`] is an ordered list of `(value, velocity, time)` nodes.
//! Times are relative to the moment the target is handed to a motivator and
//! must be non-decreasing. A node at time `0` overrides the motivator's current
//! state instead of being eased towards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use motif_core::{MotifError, MotiveTime, Result};

/// One waypoint of a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotiveNode1f {
    pub value: f32,
    pub velocity: f32,
    pub time: MotiveTime,
}

impl MotiveNode1f {
    #[inline]
    #[must_use]
    pub const fn new(value: f32, velocity: f32, time: MotiveTime) -> Self {
        Self {
            value,
            velocity,
            time,
        }
    }
}

/// Most targets are a single ease, occasionally a snap followed by an ease.
type NodeVec = SmallVec<[MotiveNode1f; 3]>;

/// An ordered sequence of waypoints for a motivator to pass through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<MotiveNode1f>", into = "Vec<MotiveNode1f>")]
pub struct MotiveTarget1f {
    nodes: NodeVec,
}

impl TryFrom<Vec<MotiveNode1f>> for MotiveTarget1f {
    type Error = MotifError;

    fn try_from(nodes: Vec<MotiveNode1f>) -> Result<Self> {
        Self::from_nodes(nodes)
    }
}

impl From<MotiveTarget1f> for Vec<MotiveNode1f> {
    fn from(target: MotiveTarget1f) -> Self {
        target.nodes.into_vec()
    }
}

impl MotiveTarget1f {
    /// Jump immediately to `value`, at rest.
    #[must_use]
    pub fn current(value: f32) -> Self {
        Self::current_with_velocity(value, 0.0)
    }

    /// Jump immediately to `value` moving at `velocity`.
    #[must_use]
    pub fn current_with_velocity(value: f32, velocity: f32) -> Self {
        let mut nodes = NodeVec::new();
        nodes.push(MotiveNode1f::new(value, velocity, 0.0));
        Self { nodes }
    }

    /// Ease from the motivator's current state to `value`, arriving with
    /// `velocity` after `time`. A non-positive `time` jumps immediately.
    #[must_use]
    pub fn target(value: f32, velocity: f32, time: MotiveTime) -> Self {
        let mut nodes = NodeVec::new();
        nodes.push(MotiveNode1f::new(value, velocity, time.max(0.0)));
        Self { nodes }
    }

    /// Jump to `current`, then ease to `target` over `time`.
    #[must_use]
    pub fn current_to_target(current: MotiveNode1f, target: MotiveNode1f) -> Self {
        let mut nodes = NodeVec::new();
        nodes.push(MotiveNode1f { time: 0.0, ..current });
        nodes.push(target);
        Self { nodes }
    }

    /// Builds a target from arbitrary waypoints.
    ///
    /// Fails if the node times are decreasing or negative.
    pub fn from_nodes(nodes: impl IntoIterator<Item = MotiveNode1f>) -> Result<Self> {
        let nodes: NodeVec = nodes.into_iter().collect();
        let mut previous_time = 0.0;
        for (index, node) in nodes.iter().enumerate() {
            if node.time < previous_time {
                return Err(MotifError::UnsortedTargetNodes {
                    index,
                    time: node.time,
                    previous_time,
                });
            }
            previous_time = node.time;
        }
        Ok(Self { nodes })
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[MotiveNode1f] {
        &self.nodes
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Time at which the last waypoint is reached.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> MotiveTime {
        self.nodes.last().map_or(0.0, |n| n.time)
    }

    /// Value of the last waypoint, if any.
    #[inline]
    #[must_use]
    pub fn end_value(&self) -> Option<f32> {
        self.nodes.last().map(|n| n.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_targets_are_validated() {
        let json = r#"[
            {"value": 1.0, "velocity": 0.0, "time": 0.0},
            {"value": 4.0, "velocity": 0.0, "time": 0.5}
        ]"#;
        let target: MotiveTarget1f = serde_json::from_str(json).unwrap();
        assert_eq!(target.end_time(), 0.5);
        assert_eq!(target.end_value(), Some(4.0));

        let unsorted = r#"[
            {"value": 1.0, "velocity": 0.0, "time": 2.0},
            {"value": 4.0, "velocity": 0.0, "time": 1.0}
        ]"#;
        let err = serde_json::from_str::<MotiveTarget1f>(unsorted).unwrap_err();
        assert!(err.to_string().contains("comes before"), "{err}");

        let negative = r#"[{"value": 1.0, "velocity": 0.0, "time": -1.0}]"#;
        assert!(serde_json::from_str::<MotiveTarget1f>(negative).is_err());
    }

    #[test]
    fn serializes_as_node_list() {
        let target = MotiveTarget1f::target(2.0, 0.5, 1.0);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"[{"value":2.0,"velocity":0.5,"time":1.0}]"#);
        let back: MotiveTarget1f = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
    }
}
