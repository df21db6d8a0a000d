//! The read-only snapshot of robot and game state for one cycle.
//!
//! Enumerations that arrive as raw GameController codes provide `from_raw`.
//! Codes this crate does not know map to an `Unknown` variant, which every
//! resolver treats like a state without an entry: its LEDs stay off.

use crate::colors::EyeColor;
use crate::config::{
    BALL_SEEN_TIMEOUT_MS, FEATURE_SEEN_TIMEOUT_MS, GAME_CONTROLLER_TIMEOUT_MS, WHISTLE_TIMEOUT_MS,
};
use crate::time::TimeDuration;

/// Game state as announced by the GameController.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Initial,
    Ready,
    Set,
    Playing,
    Finished,
    /// Waiting for the referee to signal the transition to ready.
    Standby,
    Unknown(u8),
}

impl GameState {
    /// Decodes a GameController state code.
    pub const fn from_raw(code: u8) -> Self {
        match code {
            0 => GameState::Initial,
            1 => GameState::Ready,
            2 => GameState::Set,
            3 => GameState::Playing,
            4 => GameState::Finished,
            5 => GameState::Standby,
            other => GameState::Unknown(other),
        }
    }

    /// The GameController code of this state.
    pub const fn code(self) -> u8 {
        match self {
            GameState::Initial => 0,
            GameState::Ready => 1,
            GameState::Set => 2,
            GameState::Playing => 3,
            GameState::Finished => 4,
            GameState::Standby => 5,
            GameState::Unknown(code) => code,
        }
    }

    /// True for states whose code does not exceed `Set`.
    ///
    /// Follows code order, so `Standby` is not included.
    pub const fn is_at_or_before_set(self) -> bool {
        self.code() <= GameState::Set.code()
    }
}

/// Game phase as announced by the GameController.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    Normal,
    PenaltyShoot,
    Overtime,
    Timeout,
    Unknown(u8),
}

impl GamePhase {
    /// Decodes a GameController phase code.
    pub const fn from_raw(code: u8) -> Self {
        match code {
            0 => GamePhase::Normal,
            1 => GamePhase::PenaltyShoot,
            2 => GamePhase::Overtime,
            3 => GamePhase::Timeout,
            other => GamePhase::Unknown(other),
        }
    }
}

/// Jersey color of the own field players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TeamColor {
    Blue,
    Red,
    Yellow,
    Black,
    White,
    Green,
    Orange,
    Purple,
    Brown,
    Gray,
    Unknown(u8),
}

impl TeamColor {
    /// Decodes a GameController team color code.
    pub const fn from_raw(code: u8) -> Self {
        match code {
            0 => TeamColor::Blue,
            1 => TeamColor::Red,
            2 => TeamColor::Yellow,
            3 => TeamColor::Black,
            4 => TeamColor::White,
            5 => TeamColor::Green,
            6 => TeamColor::Orange,
            7 => TeamColor::Purple,
            8 => TeamColor::Brown,
            9 => TeamColor::Gray,
            other => TeamColor::Unknown(other),
        }
    }
}

/// Penalty currently applied to this robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Penalty {
    None,
    IllegalBallContact,
    PlayerPushing,
    IllegalMotionInSet,
    InactivePlayer,
    IllegalPosition,
    LeavingTheField,
    RequestForPickup,
    LocalGameStuck,
    IllegalPositionInSet,
    PlayerStance,
    Substitute,
    Manual,
    Unknown(u8),
}

impl Penalty {
    /// Decodes a GameController penalty code.
    pub const fn from_raw(code: u8) -> Self {
        match code {
            0 => Penalty::None,
            1 => Penalty::IllegalBallContact,
            2 => Penalty::PlayerPushing,
            3 => Penalty::IllegalMotionInSet,
            4 => Penalty::InactivePlayer,
            5 => Penalty::IllegalPosition,
            6 => Penalty::LeavingTheField,
            7 => Penalty::RequestForPickup,
            8 => Penalty::LocalGameStuck,
            9 => Penalty::IllegalPositionInSet,
            10 => Penalty::PlayerStance,
            14 => Penalty::Substitute,
            15 => Penalty::Manual,
            other => Penalty::Unknown(other),
        }
    }
}

/// Operating mode of the robot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotMode {
    #[default]
    Active,
    /// Joints released by hand.
    Unstiff,
    Calibration,
}

/// Tactical role assigned by the behavior layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    #[default]
    Undefined,
    Goalie,
    Striker,
    Libero,
    Supporter,
    Jolly,
    DefenderOne,
    DefenderTwo,
    PassiveSearcher,
    ActiveSearcher,
}

impl Role {
    /// The right eye color announcing this role, if it has one.
    pub const fn eye_color(self) -> Option<EyeColor> {
        match self {
            Role::Striker => Some(EyeColor::Red),
            Role::Libero => Some(EyeColor::White),
            Role::Supporter => Some(EyeColor::Green),
            Role::Jolly => Some(EyeColor::Yellow),
            Role::DefenderOne => Some(EyeColor::Blue),
            Role::DefenderTwo => Some(EyeColor::Cyan),
            Role::PassiveSearcher | Role::ActiveSearcher => Some(EyeColor::Magenta),
            Role::Undefined | Role::Goalie => None,
        }
    }
}

/// Everything the LED handler may look at during one cycle.
///
/// Built once per cycle by the host and never modified during synthesis.
///
/// # Type Parameters
/// * `D` - The duration type used for all elapsed-time facts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleFacts<D: TimeDuration> {
    /// Time since the last GameController packet arrived.
    pub since_game_controller_packet: D,
    /// Time since the ball was last seen.
    pub since_ball_seen: D,
    /// Time since a field feature was last seen.
    pub since_feature_seen: D,
    /// Time since a whistle was last detected.
    pub since_whistle: D,
    /// Monotonic frame time of this cycle.
    pub cycle_time: D,
    /// Battery charge fraction, nominally 0.0-1.0.
    pub battery_level: f32,
    pub battery_charging: bool,
    pub connected_teammates: usize,
    pub ground_contact: bool,
    /// Referee gestures measured so far during standby.
    pub referee_measures: u32,
    pub game_state: GameState,
    pub game_phase: GamePhase,
    /// Team number of the team that kicks off.
    pub kicking_team: u8,
    pub own_team_number: u8,
    pub field_player_color: TeamColor,
    pub robot_mode: RobotMode,
    pub penalty: Penalty,
    /// The team message budget is used up.
    pub packets_exhausted: bool,
    pub role: Role,
}

impl<D: TimeDuration> CycleFacts<D> {
    /// The ball was seen within [`BALL_SEEN_TIMEOUT_MS`].
    #[inline]
    pub fn ball_seen(&self) -> bool {
        self.since_ball_seen.as_millis() < BALL_SEEN_TIMEOUT_MS
    }

    /// A field feature was seen within [`FEATURE_SEEN_TIMEOUT_MS`].
    #[inline]
    pub fn feature_seen(&self) -> bool {
        self.since_feature_seen.as_millis() < FEATURE_SEEN_TIMEOUT_MS
    }

    /// A whistle was detected within [`WHISTLE_TIMEOUT_MS`].
    #[inline]
    pub fn whistle_heard(&self) -> bool {
        self.since_whistle.as_millis() < WHISTLE_TIMEOUT_MS
    }

    /// No GameController packet for longer than the timeout.
    #[inline]
    pub fn game_controller_lost(&self) -> bool {
        self.since_game_controller_packet.as_millis() > GAME_CONTROLLER_TIMEOUT_MS
    }

    /// A GameController packet arrived within the timeout.
    #[inline]
    pub fn game_controller_recent(&self) -> bool {
        self.since_game_controller_packet.as_millis() < GAME_CONTROLLER_TIMEOUT_MS
    }

    /// The own team is the kicking team.
    #[inline]
    pub fn own_team_kicks(&self) -> bool {
        self.kicking_team == self.own_team_number
    }

    /// Any penalty other than `None` is applied.
    #[inline]
    pub fn is_penalized(&self) -> bool {
        self.penalty != Penalty::None
    }
}

impl<D: TimeDuration> Default for CycleFacts<D> {
    /// A robot standing on the field in `Initial` that has never heard from
    /// anyone or seen anything.
    fn default() -> Self {
        let never = D::from_millis(u64::MAX);
        Self {
            since_game_controller_packet: never,
            since_ball_seen: never,
            since_feature_seen: never,
            since_whistle: never,
            cycle_time: D::ZERO,
            battery_level: 1.0,
            battery_charging: false,
            connected_teammates: 0,
            ground_contact: true,
            referee_measures: 0,
            game_state: GameState::Initial,
            game_phase: GamePhase::Normal,
            kicking_team: 0,
            own_team_number: 1,
            field_player_color: TeamColor::Blue,
            robot_mode: RobotMode::Active,
            penalty: Penalty::None,
            packets_exhausted: false,
            role: Role::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn raw_codes_round_trip_through_game_state() {
        for code in 0..=5 {
            assert_eq!(GameState::from_raw(code).code(), code);
        }
        assert_eq!(GameState::from_raw(42), GameState::Unknown(42));
    }

    #[test]
    fn standby_is_not_at_or_before_set() {
        assert!(GameState::Initial.is_at_or_before_set());
        assert!(GameState::Ready.is_at_or_before_set());
        assert!(GameState::Set.is_at_or_before_set());
        assert!(!GameState::Playing.is_at_or_before_set());
        assert!(!GameState::Standby.is_at_or_before_set());
        assert!(!GameState::Unknown(7).is_at_or_before_set());
    }

    #[test]
    fn unknown_codes_are_kept() {
        assert_eq!(TeamColor::from_raw(9), TeamColor::Gray);
        assert_eq!(TeamColor::from_raw(10), TeamColor::Unknown(10));
        assert_eq!(Penalty::from_raw(14), Penalty::Substitute);
        assert_eq!(Penalty::from_raw(11), Penalty::Unknown(11));
        assert_eq!(GamePhase::from_raw(1), GamePhase::PenaltyShoot);
    }

    #[test]
    fn recency_thresholds_are_strict() {
        let facts = CycleFacts {
            since_ball_seen: Duration::from_millis(250),
            since_feature_seen: Duration::from_millis(249),
            since_whistle: Duration::from_millis(200),
            since_game_controller_packet: Duration::from_millis(2000),
            ..CycleFacts::default()
        };

        assert!(!facts.ball_seen());
        assert!(facts.feature_seen());
        assert!(!facts.whistle_heard());
        // Exactly at the timeout the controller is neither lost nor recent.
        assert!(!facts.game_controller_lost());
        assert!(!facts.game_controller_recent());
    }

    #[test]
    fn default_facts_describe_an_idle_robot() {
        let facts = CycleFacts::<Duration>::default();
        assert!(facts.game_controller_lost());
        assert!(!facts.ball_seen());
        assert!(!facts.whistle_heard());
        assert!(!facts.own_team_kicks());
        assert!(!facts.is_penalized());
    }

    #[test]
    fn searcher_roles_share_magenta() {
        assert_eq!(Role::PassiveSearcher.eye_color(), Some(EyeColor::Magenta));
        assert_eq!(Role::ActiveSearcher.eye_color(), Some(EyeColor::Magenta));
        assert_eq!(Role::Goalie.eye_color(), None);
    }
}
