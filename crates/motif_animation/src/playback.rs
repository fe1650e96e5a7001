//! Spline playback configuration.
//!
//! [`SplinePlayback`] tells a motivator how to play a [`Spline`](crate::Spline):
//! where to start, how fast, whether to loop, and how long to ease in from
//! whatever the motivator was doing before.
//!
//! Playback settings are plain data and can be loaded from animation
//! configuration files; every field has a default.
//!
//! ```rust,ignore
//! let playback: SplinePlayback = serde_json::from_str(r#"{ "blend_x": 0.25 }"#)?;
//! assert_eq!(playback.playback_rate, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use motif_core::MotiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplinePlayback {
    /// Spline x coordinate to begin playing from.
    pub start_x: f32,
    /// Speed multiplier. Negative values play backwards, zero pauses.
    pub playback_rate: f32,
    /// Duration of the ease from the motivator's current value onto the
    /// spline. Zero jumps straight onto the spline.
    pub blend_x: MotiveTime,
    /// Loop back to the start on reaching the end, instead of holding.
    pub repeat: bool,
}

impl Default for SplinePlayback {
    #[inline]
    fn default() -> Self {
        Self {
            start_x: 0.0,
            playback_rate: 1.0,
            blend_x: 0.0,
            repeat: false,
        }
    }
}

impl SplinePlayback {
    #[inline]
    #[must_use]
    pub fn with_blend(mut self, blend_x: MotiveTime) -> Self {
        self.blend_x = blend_x;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rate(mut self, playback_rate: f32) -> Self {
        self.playback_rate = playback_rate;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_start(mut self, start_x: f32) -> Self {
        self.start_x = start_x;
        self
    }

    #[inline]
    #[must_use]
    pub fn looping(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Advances a spline x coordinate by `dx`, wrapping or clamping at the ends.
///
/// Returns the new x and whether playback has come to rest at an end.
pub(crate) fn advance_x(x: f32, dx: f32, start_x: f32, end_x: f32, repeat: bool) -> (f32, bool) {
    let length = end_x - start_x;
    let x = x + dx;
    if length <= 0.0 {
        return (start_x, true);
    }

    if repeat {
        // Standard loop: modulo, also for reverse playback.
        let wrapped = start_x + (x - start_x).rem_euclid(length);
        (wrapped, false)
    } else if x >= end_x {
        (end_x, dx >= 0.0)
    } else if x <= start_x {
        (start_x, dx <= 0.0)
    } else {
        (x, false)
    }
}
