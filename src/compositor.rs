//! Translates semantic colors into per-channel writes on an eye.

use crate::colors::EyeColor;
use crate::indicator::{EYE_RING_POSITIONS, Indicator};
use crate::types::{Channel, LightState, Side};
use crate::vector::IndicatorVector;
use palette::Srgb;

/// Paints `color` on every ring position of the eye on `side`.
///
/// `base` is the intensity of the fully driven channels and must be `On` or
/// `Off`. Half-driven channels get `Half` when `base` is `On` and `Off`
/// otherwise. Channels the color does not use are left untouched.
///
/// # Panics
/// Panics if `base` is neither `On` nor `Off`.
pub fn apply_color(leds: &mut IndicatorVector, side: Side, color: EyeColor, base: LightState) {
    apply_levels(leds, side, color.srgb(), base);
}

/// Paints raw channel levels on every ring position of the eye on `side`.
///
/// Each component of `levels` must be exactly 0.0 (untouched), 0.5 (half) or
/// 1.0 (full).
///
/// # Panics
/// Panics if a component has any other value, or if `base` is neither `On`
/// nor `Off`. Both indicate a malformed call, not a runtime condition.
pub fn apply_levels(leds: &mut IndicatorVector, side: Side, levels: Srgb, base: LightState) {
    assert!(
        matches!(base, LightState::On | LightState::Off),
        "eye base intensity must be On or Off"
    );

    let half = if base == LightState::Off {
        LightState::Off
    } else {
        LightState::Half
    };

    let channels = [
        (Channel::Red, levels.red),
        (Channel::Green, levels.green),
        (Channel::Blue, levels.blue),
    ];

    for (channel, level) in channels {
        if level == 0.0 {
            continue;
        }

        let state = if level == 0.5 {
            half
        } else if level == 1.0 {
            base
        } else {
            panic!("unknown eye color");
        };

        for position in 0..EYE_RING_POSITIONS {
            leds.set(Indicator::eye(side, channel, position), state);
        }
    }
}
