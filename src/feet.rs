//! Foot resolvers.
//!
//! The left foot shows the own jersey color, the right foot shows kickoff
//! and penalty shootout information.

use crate::facts::{CycleFacts, GamePhase, GameState, TeamColor};
use crate::indicator::Indicator;
use crate::resolver::Resolver;
use crate::rules::{Rule, first_match};
use crate::time::TimeDuration;
use crate::types::{Channel, LightState, Side};
use crate::vector::IndicatorVector;

/// Channel writes performed on one foot.
pub type FootWrites = &'static [(Channel, LightState)];

const NOTHING: FootWrites = &[];
const RED: FootWrites = &[(Channel::Red, LightState::On)];
const GREEN: FootWrites = &[(Channel::Green, LightState::On)];
const BLUE: FootWrites = &[(Channel::Blue, LightState::On)];
const RED_GREEN: FootWrites = &[(Channel::Red, LightState::On), (Channel::Green, LightState::On)];
const WHITE: FootWrites = &[
    (Channel::Red, LightState::On),
    (Channel::Green, LightState::On),
    (Channel::Blue, LightState::On),
];
const ORANGE: FootWrites = &[(Channel::Green, LightState::Half), (Channel::Red, LightState::On)];
const PURPLE: FootWrites = &[(Channel::Red, LightState::On), (Channel::Blue, LightState::On)];
const BROWN: FootWrites = &[(Channel::Red, LightState::Half), (Channel::Green, LightState::Half)];
const GRAY: FootWrites = &[
    (Channel::Blue, LightState::Half),
    (Channel::Red, LightState::Half),
    (Channel::Green, LightState::Half),
];

/// How the left foot approximates each jersey color with three channels.
///
/// Several colors are composites of two or three channels. Black and unknown
/// colors have no representation.
pub fn jersey_writes(color: TeamColor) -> FootWrites {
    match color {
        TeamColor::Orange => ORANGE,
        TeamColor::Red => RED,
        TeamColor::White => WHITE,
        TeamColor::Yellow => RED_GREEN,
        TeamColor::Green => GREEN,
        TeamColor::Purple => PURPLE,
        TeamColor::Blue => BLUE,
        TeamColor::Gray => GRAY,
        TeamColor::Brown => BROWN,
        TeamColor::Black | TeamColor::Unknown(_) => NOTHING,
    }
}

/// Number of rules in the right foot cascade.
pub const RIGHT_FOOT_RULES: usize = 3;

fn penalty_shootout_initial<D: TimeDuration>(facts: &CycleFacts<D>) -> bool {
    facts.game_state == GameState::Initial && facts.game_phase == GamePhase::PenaltyShoot
}

/// Right foot rules, highest priority first.
pub fn right_foot_rules<D: TimeDuration>() -> [Rule<CycleFacts<D>, FootWrites>; RIGHT_FOOT_RULES] {
    [
        Rule::new(
            "shootout-kicker",
            |f: &CycleFacts<D>| penalty_shootout_initial(f) && f.own_team_kicks(),
            GREEN,
        ),
        Rule::new("shootout-keeper", penalty_shootout_initial::<D>, RED_GREEN),
        Rule::new(
            "own-kickoff",
            |f: &CycleFacts<D>| {
                f.game_controller_recent() && f.game_state.is_at_or_before_set() && f.own_team_kicks()
            },
            WHITE,
        ),
    ]
}

fn write_foot(leds: &mut IndicatorVector, side: Side, writes: FootWrites) {
    for &(channel, state) in writes {
        leds.set(Indicator::foot(side, channel), state);
    }
}

/// Shows the own jersey color on the left foot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftFoot;

impl<D: TimeDuration> Resolver<D> for LeftFoot {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        write_foot(leds, Side::Left, jersey_writes(facts.field_player_color));
    }
}

/// Shows shootout role or an upcoming own kickoff on the right foot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightFoot;

impl<D: TimeDuration> Resolver<D> for RightFoot {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        if let Some(rule) = first_match(&right_foot_rules(), facts) {
            write_foot(leds, Side::Right, rule.outcome);
        }
    }
}
