//! Shared test infrastructure for robot-led-handler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use robot_led_handler::{
    Channel, CycleFacts, EYE_RING_POSITIONS, GameState, Indicator, IndicatorGroup,
    IndicatorVector, LedActuator, LightState, Side, TimeDuration,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

pub fn ms(millis: u64) -> TestDuration {
    TestDuration(millis)
}

// ============================================================================
// Mock Actuator
// ============================================================================

/// Mock actuator that records every vector it receives
pub struct MockActuator {
    history: heapless::Vec<IndicatorVector, 8>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&IndicatorVector> {
        self.history.last()
    }

    pub fn history(&self) -> &[IndicatorVector] {
        &self.history
    }
}

impl LedActuator for MockActuator {
    fn apply(&mut self, leds: &IndicatorVector) {
        let _ = self.history.push(leds.clone());
    }
}

// ============================================================================
// Fact Helpers
// ============================================================================

/// A connected robot in the playing state that sees nothing and hears nothing
pub fn playing() -> CycleFacts<TestDuration> {
    CycleFacts {
        since_game_controller_packet: ms(0),
        game_state: GameState::Playing,
        ..CycleFacts::default()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// State of one eye channel, asserting all ring positions agree
pub fn eye_channel(leds: &IndicatorVector, side: Side, channel: Channel) -> LightState {
    let first = leds.get(Indicator::eye(side, channel, 0));
    for position in 1..EYE_RING_POSITIONS {
        assert_eq!(
            leds.get(Indicator::eye(side, channel, position)),
            first,
            "eye ring positions disagree"
        );
    }
    first
}

/// Red, green and blue state of one eye
pub fn eye(leds: &IndicatorVector, side: Side) -> [LightState; 3] {
    Channel::ALL.map(|channel| eye_channel(leds, side, channel))
}

/// Red, green and blue state of a three-channel group (chest or foot)
pub fn triad(leds: &IndicatorVector, group: IndicatorGroup) -> [LightState; 3] {
    let states = leds.group(group);
    [states[0], states[1], states[2]]
}

/// Lit ear positions in ascending order
pub fn lit_ear_positions(leds: &IndicatorVector, side: Side) -> heapless::Vec<usize, 10> {
    let group = IndicatorGroup::ear(side);
    leds.group(group)
        .iter()
        .enumerate()
        .filter(|(_, state)| state.is_lit())
        .map(|(position, _)| position)
        .collect()
}
