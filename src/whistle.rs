//! Whistle overlay.
//!
//! Runs after every other resolver. While a whistle was heard recently it
//! overwrites both ears, the head ring and the red and green chest channels
//! with fast blinking.

use crate::facts::CycleFacts;
use crate::indicator::{Indicator, IndicatorGroup};
use crate::logging::log_trace;
use crate::resolver::Resolver;
use crate::time::TimeDuration;
use crate::types::{Channel, LightState};
use crate::vector::IndicatorVector;

/// Groups the overlay covers completely.
pub const WHISTLE_GROUPS: [IndicatorGroup; 3] = [
    IndicatorGroup::LeftEar,
    IndicatorGroup::RightEar,
    IndicatorGroup::Head,
];

/// Chest channels the overlay covers.
pub const WHISTLE_CHEST_CHANNELS: [Channel; 2] = [Channel::Red, Channel::Green];

/// Flashes a cross-cutting set of LEDs while a whistle is heard.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhistleOverlay;

impl<D: TimeDuration> Resolver<D> for WhistleOverlay {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if !facts.whistle_heard() {
            return;
        }

        log_trace!("whistle overlay active");
        for group in WHISTLE_GROUPS {
            leds.fill_group(group, LightState::FastBlinking);
        }
        for channel in WHISTLE_CHEST_CHANNELS {
            leds.set(Indicator::chest(channel), LightState::FastBlinking);
        }
    }
}
