//! The complete per-cycle LED state vector.

use crate::indicator::{EYE_RING_POSITIONS, INDICATOR_COUNT, Indicator, IndicatorGroup};
use crate::types::{Channel, LightState, Side};
use heapless::Vec;
use palette::Srgb;

/// One [`LightState`] for every indicator of the robot.
///
/// The vector is always fully populated. A fresh vector, and any vector after
/// [`reset`](Self::reset), has every indicator `Off`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorVector {
    states: [LightState; INDICATOR_COUNT],
}

impl IndicatorVector {
    /// Creates a vector with every indicator off.
    pub const fn new() -> Self {
        Self {
            states: [LightState::Off; INDICATOR_COUNT],
        }
    }

    /// Turns every indicator off.
    pub fn reset(&mut self) {
        self.states = [LightState::Off; INDICATOR_COUNT];
    }

    /// Returns the state of `indicator`.
    #[inline]
    pub fn get(&self, indicator: Indicator) -> LightState {
        self.states[indicator.index()]
    }

    /// Sets the state of `indicator`.
    #[inline]
    pub fn set(&mut self, indicator: Indicator, state: LightState) {
        self.states[indicator.index()] = state;
    }

    /// The states of one group, in layout order.
    pub fn group(&self, group: IndicatorGroup) -> &[LightState] {
        &self.states[group.range()]
    }

    /// Sets every indicator of `group` to `state`.
    pub fn fill_group(&mut self, group: IndicatorGroup, state: LightState) {
        self.states[group.range()].fill(state);
    }

    /// Iterates over all indicators with their states.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, LightState)> + '_ {
        Indicator::all().zip(self.states.iter().copied())
    }

    /// Raw states in layout order.
    pub fn as_slice(&self) -> &[LightState] {
        &self.states
    }

    /// Number of indicators currently in `state`.
    pub fn count(&self, state: LightState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// The indicators of `group` that are not off.
    pub fn lit_in(&self, group: IndicatorGroup) -> Vec<Indicator, INDICATOR_COUNT> {
        Indicator::in_group(group)
            .filter(|&indicator| self.get(indicator).is_lit())
            .collect()
    }

    /// Indicators whose state differs from `previous`.
    ///
    /// Lets an actuator push only the LEDs that changed since the last cycle.
    pub fn changed_since(&self, previous: &IndicatorVector) -> Vec<Indicator, INDICATOR_COUNT> {
        self.iter()
            .filter(|&(indicator, state)| previous.get(indicator) != state)
            .map(|(indicator, _)| indicator)
            .collect()
    }

    /// Approximate rendered color of one eye.
    ///
    /// Each channel is the mean brightness over the ring positions of that
    /// channel block. Blinking states count as full brightness.
    pub fn eye_preview(&self, side: Side) -> Srgb {
        let level = |channel: Channel| {
            let sum: f32 = (0..EYE_RING_POSITIONS)
                .map(|position| self.get(Indicator::eye(side, channel, position)).brightness())
                .sum();
            sum / EYE_RING_POSITIONS as f32
        };

        Srgb::new(level(Channel::Red), level(Channel::Green), level(Channel::Blue))
    }
}

impl Default for IndicatorVector {
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Index<Indicator> for IndicatorVector {
    type Output = LightState;

    fn index(&self, indicator: Indicator) -> &Self::Output {
        &self.states[indicator.index()]
    }
}

impl core::ops::IndexMut<Indicator> for IndicatorVector {
    fn index_mut(&mut self, indicator: Indicator) -> &mut Self::Output {
        &mut self.states[indicator.index()]
    }
}
