#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`CycleFacts`**: Read-only snapshot of robot and game state for one control cycle
//! - **`IndicatorVector`**: One `LightState` for every LED of the robot, fully populated every cycle
//! - **`Indicator`** / **`IndicatorGroup`**: Stable LED indices and the physical groups they form
//! - **`Resolver`**: Computes one group's LED states from the facts
//! - **`LedHandler`**: Runs every resolver in a fixed order and owns the head ring animation counter
//! - **`LedActuator`**: Trait to implement for your LED hardware
//! - **`EyeColor`**: Semantic eye colors, composited onto red/green/blue triads
//! - **`TimeDuration`**: Trait to implement for your duration type
//!
//! Synthesis never fails. The only panics are contract violations on direct
//! compositor calls, documented on [`compositor::apply_levels`].

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod logging;

pub mod chest;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod ears;
pub mod eyes;
pub mod facts;
pub mod feet;
pub mod handler;
pub mod head;
pub mod indicator;
pub mod resolver;
pub mod rules;
pub mod time;
pub mod types;
pub mod vector;
pub mod whistle;

pub use chest::Chest;
pub use colors::EyeColor;
pub use compositor::{apply_color, apply_levels};
pub use ears::{LeftEar, RightEar};
pub use eyes::{LeftEye, RightEye};
pub use facts::{CycleFacts, GamePhase, GameState, Penalty, Role, RobotMode, TeamColor};
pub use feet::{LeftFoot, RightFoot};
pub use handler::{LedActuator, LedHandler};
pub use head::{HeadRing, HeadRingMode};
pub use indicator::{
    EAR_POSITIONS, EYE_RING_POSITIONS, HEAD_CIRCLE, HEAD_LEDS, HeadLed, INDICATOR_COUNT, Indicator,
    IndicatorGroup,
};
pub use resolver::Resolver;
pub use rules::{Rule, first_match};
pub use time::TimeDuration;
pub use types::{Channel, IndicatorError, LightState, Side};
pub use vector::IndicatorVector;
pub use whistle::WhistleOverlay;
