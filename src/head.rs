//! Head ring resolver.
//!
//! The head ring idles dark. While charging it shows a two-LED comet
//! running around the ring; while out of team message packets during play it
//! cycles a three-frame flashing pattern.

use crate::config::{CHARGING_LIGHT_SLOWNESS, OUT_OF_PACKETS_FRAMES, OUT_OF_PACKETS_LIGHT_SLOWNESS_MS};
use crate::facts::{CycleFacts, GameState};
use crate::indicator::{HEAD_CIRCLE, HEAD_LEDS, HeadLed, Indicator, IndicatorGroup};
use crate::logging::{log_debug, log_trace};
use crate::resolver::Resolver;
use crate::time::TimeDuration;
use crate::types::LightState;
use crate::vector::IndicatorVector;

/// Period of the charging counter in cycles.
pub const CHARGING_PERIOD: u16 = HEAD_LEDS as u16 * CHARGING_LIGHT_SLOWNESS;

/// Lit head elements for each out-of-packets frame.
pub const OUT_OF_PACKETS_PATTERNS: [[HeadLed; 4]; OUT_OF_PACKETS_FRAMES as usize] = [
    [
        HeadLed::FrontLeft1,
        HeadLed::FrontRight1,
        HeadLed::RearLeft2,
        HeadLed::RearRight2,
    ],
    [
        HeadLed::FrontLeft0,
        HeadLed::FrontRight0,
        HeadLed::RearLeft1,
        HeadLed::RearRight1,
    ],
    [
        HeadLed::MiddleLeft0,
        HeadLed::MiddleRight0,
        HeadLed::RearLeft0,
        HeadLed::RearRight0,
    ],
];

/// What the head ring shows this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeadRingMode {
    /// Ring dark.
    Idle,
    /// Charging comet.
    Charging,
    /// Out of team message packets while playing.
    PacketStarved,
}

impl HeadRingMode {
    /// Selects the mode for `facts`. Charging takes precedence.
    pub fn for_facts<D: TimeDuration>(facts: &CycleFacts<D>) -> Self {
        if facts.battery_charging {
            HeadRingMode::Charging
        } else if facts.packets_exhausted && facts.game_state == GameState::Playing {
            HeadRingMode::PacketStarved
        } else {
            HeadRingMode::Idle
        }
    }
}

/// Frame of the out-of-packets animation shown at `cycle_time`.
pub fn out_of_packets_frame<D: TimeDuration>(cycle_time: D) -> usize {
    ((cycle_time.as_millis() / OUT_OF_PACKETS_LIGHT_SLOWNESS_MS) % OUT_OF_PACKETS_FRAMES) as usize
}

/// Drives the head ring. Owns the charging animation counter.
///
/// The counter only advances on cycles that show the charging comet and
/// persists across cycles, including cycles in other modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadRing {
    charging_counter: u16,
}

impl HeadRing {
    /// Creates a resolver with the counter at zero.
    pub const fn new() -> Self {
        Self { charging_counter: 0 }
    }

    /// Creates a resolver with a chosen counter value.
    ///
    /// Values outside the charging period are wrapped into it.
    pub const fn with_counter(counter: u16) -> Self {
        Self {
            charging_counter: counter % CHARGING_PERIOD,
        }
    }

    /// Current value of the charging counter.
    pub const fn counter(&self) -> u16 {
        self.charging_counter
    }

    /// The two ring elements lit for the current counter value.
    pub fn comet(&self) -> [HeadLed; 2] {
        let step = (self.charging_counter / CHARGING_LIGHT_SLOWNESS) as usize;
        [HEAD_CIRCLE[step], HEAD_CIRCLE[(step + 1) % HEAD_LEDS]]
    }

    fn advance(&mut self) {
        self.charging_counter = (self.charging_counter + 1) % CHARGING_PERIOD;
        if self.charging_counter == 0 {
            log_debug!("charging sweep wrapped");
        }
    }
}

impl<D: TimeDuration> Resolver<D> for HeadRing {
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        let mode = HeadRingMode::for_facts(facts);
        log_trace!("head ring mode: {}", mode);

        match mode {
            HeadRingMode::Charging => {
                leds.fill_group(IndicatorGroup::Head, LightState::Off);
                self.advance();
                for led in self.comet() {
                    leds.set(Indicator::head(led), LightState::On);
                }
            }
            HeadRingMode::PacketStarved => {
                leds.fill_group(IndicatorGroup::Head, LightState::Off);
                let frame = out_of_packets_frame(facts.cycle_time);
                for led in OUT_OF_PACKETS_PATTERNS[frame] {
                    leds.set(Indicator::head(led), LightState::On);
                }
            }
            HeadRingMode::Idle => {}
        }
    }
}
