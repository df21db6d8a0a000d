//! Chest button resolver.

use crate::facts::{CycleFacts, GameState, RobotMode};
use crate::indicator::Indicator;
use crate::resolver::Resolver;
use crate::rules::{Rule, first_match};
use crate::time::TimeDuration;
use crate::types::{Channel, LightState};
use crate::vector::IndicatorVector;

/// Channel writes performed when a chest rule wins.
pub type ChestWrites = &'static [(Channel, LightState)];

const BLUE_BLINKING: ChestWrites = &[(Channel::Blue, LightState::Blinking)];
const RED_BLUE: ChestWrites = &[(Channel::Red, LightState::On), (Channel::Blue, LightState::On)];
const RED: ChestWrites = &[(Channel::Red, LightState::On)];
const GREEN_BLUE: ChestWrites = &[(Channel::Green, LightState::On), (Channel::Blue, LightState::On)];
const BLUE: ChestWrites = &[(Channel::Blue, LightState::On)];
const RED_HALF_GREEN: ChestWrites = &[(Channel::Red, LightState::On), (Channel::Green, LightState::Half)];
const GREEN: ChestWrites = &[(Channel::Green, LightState::On)];

/// Number of rules in the chest cascade.
pub const CHEST_RULES: usize = 7;

/// Chest rules, highest priority first.
///
/// Robot mode comes first, then penalties, then the game state. Game states
/// without a rule (finished, unknown) leave the chest off.
pub fn chest_rules<D: TimeDuration>() -> [Rule<CycleFacts<D>, ChestWrites>; CHEST_RULES] {
    [
        Rule::new(
            "unstiff",
            |f: &CycleFacts<D>| f.robot_mode == RobotMode::Unstiff,
            BLUE_BLINKING,
        ),
        Rule::new(
            "calibration",
            |f: &CycleFacts<D>| f.robot_mode == RobotMode::Calibration,
            RED_BLUE,
        ),
        Rule::new(
            "penalized",
            |f: &CycleFacts<D>| f.is_penalized(),
            RED,
        ),
        Rule::new(
            "standby",
            |f: &CycleFacts<D>| f.game_state == GameState::Standby,
            GREEN_BLUE,
        ),
        Rule::new(
            "ready",
            |f: &CycleFacts<D>| f.game_state == GameState::Ready,
            BLUE,
        ),
        Rule::new(
            "set",
            |f: &CycleFacts<D>| f.game_state == GameState::Set,
            RED_HALF_GREEN,
        ),
        Rule::new(
            "playing",
            |f: &CycleFacts<D>| f.game_state == GameState::Playing,
            GREEN,
        ),
    ]
}

/// Shows robot mode, penalty or game state on the chest button.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chest;

impl<D: TimeDuration> Resolver<D> for Chest {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if let Some(rule) = first_match(&chest_rules(), facts) {
            for &(channel, state) in rule.outcome {
                leds.set(Indicator::chest(channel), state);
            }
        }
    }
}
