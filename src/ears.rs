//! Ear resolvers.
//!
//! Ear positions are numbered clockwise in 36° steps, position 0 being 0°.

use crate::config::{BATTERY_BUCKET, MAX_BATTERY_BUCKET, MAX_SHOWN_TEAMMATES};
use crate::facts::CycleFacts;
use crate::indicator::Indicator;
use crate::resolver::Resolver;
use crate::time::TimeDuration;
use crate::types::{LightState, Side};
use crate::vector::IndicatorVector;

/// Left ear positions that blink while the GameController is lost (144°, 324°).
pub const GAME_CONTROLLER_ALARM_POSITIONS: [usize; 2] = [4, 9];

/// Left ear position pairs lit per connected teammate, in order.
pub const TEAMMATE_POSITION_PAIRS: [[usize; 2]; MAX_SHOWN_TEAMMATES] =
    [[0, 1], [2, 3], [5, 6], [7, 8]];

/// Highest lit ear position for a battery charge fraction.
///
/// Positions `0..=bucket` are lit, so an empty battery still lights one
/// position and a full one lights all ten.
pub fn battery_bucket(battery_level: f32) -> usize {
    let bucket = (battery_level / BATTERY_BUCKET) as i32;
    bucket.clamp(0, MAX_BATTERY_BUCKET as i32) as usize
}

/// Shows the battery level as a filling ring on the right ear.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightEar;

impl<D: TimeDuration> Resolver<D> for RightEar {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        for position in 0..=battery_bucket(facts.battery_level) {
            leds.set(Indicator::ear(Side::Right, position), LightState::On);
        }
    }
}

/// Shows teammate count and GameController loss on the left ear.
///
/// The two effects use disjoint positions and may show together.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftEar;

impl<D: TimeDuration> Resolver<D> for LeftEar {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if facts.game_controller_lost() {
            for position in GAME_CONTROLLER_ALARM_POSITIONS {
                leds.set(Indicator::ear(Side::Left, position), LightState::Blinking);
            }
        }

        let shown = facts.connected_teammates.min(MAX_SHOWN_TEAMMATES);
        for pair in &TEAMMATE_POSITION_PAIRS[..shown] {
            for &position in pair {
                leds.set(Indicator::ear(Side::Left, position), LightState::On);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_bucket_floors_and_saturates() {
        assert_eq!(battery_bucket(0.0), 0);
        assert_eq!(battery_bucket(0.09), 0);
        assert_eq!(battery_bucket(0.55), 5);
        assert_eq!(battery_bucket(0.82), 8);
        assert_eq!(battery_bucket(1.0), 9);
        assert_eq!(battery_bucket(1.7), 9);
        assert_eq!(battery_bucket(-0.2), 0);
    }

    #[test]
    fn alarm_and_teammate_positions_are_disjoint() {
        for pair in TEAMMATE_POSITION_PAIRS {
            for position in pair {
                assert!(!GAME_CONTROLLER_ALARM_POSITIONS.contains(&position));
            }
        }
    }
}
