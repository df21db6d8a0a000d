//! The common interface of all LED group resolvers.

use crate::facts::CycleFacts;
use crate::time::TimeDuration;
use crate::vector::IndicatorVector;

/// Computes the LED states of one indicator group for the current cycle.
///
/// A resolver only writes the indicators of its own group, unless it is
/// documented as an overlay. It reads nothing from `leds` written by other
/// resolvers.
pub trait Resolver<D: TimeDuration> {
    /// Writes this cycle's decisions into `leds`.
    fn resolve(&mut self, facts: &CycleFacts<D>, leds: &mut IndicatorVector);
}
