//! Eye resolvers.
//!
//! The left eye reports perception (what the robot currently sees), the right
//! eye reports the assigned role. During standby both eyes show referee
//! gesture feedback instead.

use crate::colors::EyeColor;
use crate::compositor::apply_color;
use crate::facts::{CycleFacts, GameState};
use crate::resolver::Resolver;
use crate::rules::{Rule, first_match};
use crate::time::TimeDuration;
use crate::types::{LightState, Side};
use crate::vector::IndicatorVector;

/// Number of rules in the left eye cascade.
pub const LEFT_EYE_RULES: usize = 6;

/// Number of rules in the right eye standby cascade.
pub const STANDBY_EYE_RULES: usize = 2;

/// Referee feedback shared by both eyes: green once a gesture was measured.
pub fn standby_rules<D: TimeDuration>() -> [Rule<CycleFacts<D>, EyeColor>; STANDBY_EYE_RULES] {
    [
        Rule::new(
            "standby-measured",
            |f: &CycleFacts<D>| f.game_state == GameState::Standby && f.referee_measures > 0,
            EyeColor::Green,
        ),
        Rule::new(
            "standby-unmeasured",
            |f: &CycleFacts<D>| f.game_state == GameState::Standby,
            EyeColor::Red,
        ),
    ]
}

/// Left eye rules, highest priority first.
///
/// Lost ground contact beats everything, then standby feedback, then the
/// ball/feature perception flags.
pub fn left_eye_rules<D: TimeDuration>() -> [Rule<CycleFacts<D>, EyeColor>; LEFT_EYE_RULES] {
    let [measured, unmeasured] = standby_rules::<D>();
    [
        Rule::new(
            "no-ground-contact",
            |f: &CycleFacts<D>| !f.ground_contact,
            EyeColor::Yellow,
        ),
        measured,
        unmeasured,
        Rule::new(
            "ball-and-feature",
            |f: &CycleFacts<D>| f.ball_seen() && f.feature_seen(),
            EyeColor::Red,
        ),
        Rule::new("ball", |f: &CycleFacts<D>| f.ball_seen(), EyeColor::White),
        Rule::new("feature", |f: &CycleFacts<D>| f.feature_seen(), EyeColor::Blue),
    ]
}

/// Shows ground contact, standby feedback and perception on the left eye.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftEye;

impl<D: TimeDuration> Resolver<D> for LeftEye {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if let Some(rule) = first_match(&left_eye_rules(), facts) {
            apply_color(leds, Side::Left, rule.outcome, LightState::On);
        }
    }
}

/// Shows standby feedback or the assigned role on the right eye.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightEye;

impl<D: TimeDuration> Resolver<D> for RightEye {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if let Some(rule) = first_match(&standby_rules(), facts) {
            apply_color(leds, Side::Right, rule.outcome, LightState::On);
            return;
        }

        match facts.role.eye_color() {
            Some(color) => apply_color(leds, Side::Right, color, LightState::On),
            None => apply_color(leds, Side::Right, EyeColor::White, LightState::Off),
        }
    }
}
