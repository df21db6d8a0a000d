//! The per-cycle LED synthesis pipeline.
//!
//! Provides [`LedHandler`], which turns one [`CycleFacts`] snapshot into a
//! complete [`IndicatorVector`], and the [`LedActuator`] trait through which
//! the result is handed to the hardware.

use crate::chest::Chest;
use crate::ears::{LeftEar, RightEar};
use crate::eyes::{LeftEye, RightEye};
use crate::facts::CycleFacts;
use crate::feet::{LeftFoot, RightFoot};
use crate::head::HeadRing;
use crate::resolver::Resolver;
use crate::time::TimeDuration;
use crate::vector::IndicatorVector;
use crate::whistle::WhistleOverlay;

/// Trait for abstracting the LED hardware.
///
/// Implement this for whatever drives the physical LEDs. The handler hands
/// over each finished vector and expects nothing back. Handle any hardware
/// errors internally - this method cannot fail.
pub trait LedActuator {
    /// Applies a complete set of LED states.
    fn apply(&mut self, leds: &IndicatorVector);
}

/// Synthesizes LED states once per control cycle.
///
/// The handler is deterministic: the output depends only on the facts of the
/// current cycle and on the head ring's charging counter, the only state kept
/// between cycles. Call it from a single scheduler, one cycle at a time.
#[derive(Debug, Clone, Default)]
pub struct LedHandler {
    head: HeadRing,
}

impl LedHandler {
    /// Creates a handler with the charging counter at zero.
    pub const fn new() -> Self {
        Self {
            head: HeadRing::new(),
        }
    }

    /// Creates a handler whose head ring starts at `counter`.
    pub const fn with_head_counter(counter: u16) -> Self {
        Self {
            head: HeadRing::with_counter(counter),
        }
    }

    /// The head ring resolver and its charging counter.
    pub fn head(&self) -> &HeadRing {
        &self.head
    }

    /// Computes this cycle's LED states into a fresh vector.
    pub fn synthesize<D: TimeDuration>(&mut self, facts: &CycleFacts<D>) -> IndicatorVector {
        let mut leds = IndicatorVector::new();
        self.update_into(facts, &mut leds);
        leds
    }

    /// Computes this cycle's LED states into `leds`, overwriting all of it.
    ///
    /// Order: reset, right eye, left eye, chest, left foot, right foot, right
    /// ear, left ear, head ring, whistle overlay. The overlay runs last so it
    /// wins on every LED it touches.
    pub fn update_into<D: TimeDuration>(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector) {
        leds.reset();

        RightEye.resolve(facts, leds);
        LeftEye.resolve(facts, leds);
        Chest.resolve(facts, leds);
        LeftFoot.resolve(facts, leds);
        RightFoot.resolve(facts, leds);
        RightEar.resolve(facts, leds);
        LeftEar.resolve(facts, leds);
        self.head.resolve(facts, leds);
        WhistleOverlay.resolve(facts, leds);
    }

    /// Computes this cycle's LED states and hands them to `actuator`.
    pub fn update<D: TimeDuration, A: LedActuator>(&mut self, facts: &CycleFacts<D>, actuator: &mut A) {
        let leds = self.synthesize(facts);
        actuator.apply(&leds);
    }
}
