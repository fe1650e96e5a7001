//! Rest detection and small velocity kicks for motivators.

use serde::{Deserialize, Serialize};

use crate::motivator::Motivator1f;
use crate::target::MotiveTarget1f;

/// Direction in which [`twitch`] boosts a motivator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwitchDirection {
    #[default]
    None,
    Positive,
    Negative,
}

/// Decides whether a motivator is "at the target" and "stopped".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settled1f {
    /// At the target when the absolute distance to it is at most this.
    pub max_difference: f32,
    /// Stopped when the absolute velocity is at most this.
    pub max_velocity: f32,
}

impl Settled1f {
    #[inline]
    #[must_use]
    pub const fn new(max_difference: f32, max_velocity: f32) -> Self {
        Self {
            max_difference,
            max_velocity,
        }
    }

    #[inline]
    #[must_use]
    pub fn settled(&self, difference: f32, velocity: f32) -> bool {
        difference.abs() <= self.max_difference && velocity.abs() <= self.max_velocity
    }

    #[inline]
    #[must_use]
    pub fn motivator_settled(&self, motivator: &Motivator1f) -> bool {
        self.settled(motivator.difference(), motivator.velocity())
    }
}

/// Kicks a settled motivator with `velocity` in `direction`.
///
/// Useful to acknowledge input that cannot change state: the value jolts and
/// then eases back to where it was. Motivators still in motion are left alone.
pub fn twitch(
    direction: TwitchDirection,
    velocity: f32,
    settled: &Settled1f,
    motivator: &mut Motivator1f,
) {
    let velocity = match direction {
        TwitchDirection::None => return,
        TwitchDirection::Positive => velocity,
        TwitchDirection::Negative => -velocity,
    };
    if settled.motivator_settled(motivator) {
        log::trace!("Twitching motivator at {} with velocity {velocity}", motivator.value());
        motivator.set_target(&MotiveTarget1f::current_with_velocity(
            motivator.value(),
            velocity,
        ));
    }
}
