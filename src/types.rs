//! Core value types shared by every resolver.

/// The discrete state of a single LED.
///
/// Only the state is named here. The actuation side owns the physical
/// waveform behind `Blinking` and `FastBlinking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LightState {
    /// LED dark.
    #[default]
    Off = 0,

    /// LED at full intensity.
    On = 1,

    /// LED at half intensity.
    Half = 2,

    /// LED blinking at the normal rate.
    Blinking = 3,

    /// LED blinking at the fast rate.
    FastBlinking = 4,
}

impl LightState {
    /// Nominal brightness in the range 0.0-1.0.
    ///
    /// Both blinking states report full brightness.
    #[inline]
    pub fn brightness(self) -> f32 {
        match self {
            LightState::Off => 0.0,
            LightState::Half => 0.5,
            LightState::On | LightState::Blinking | LightState::FastBlinking => 1.0,
        }
    }

    /// Returns true for every state except `Off`.
    #[inline]
    pub fn is_lit(self) -> bool {
        self != LightState::Off
    }
}

impl From<LightState> for u8 {
    fn from(state: LightState) -> Self {
        state as u8
    }
}

impl TryFrom<u8> for LightState {
    type Error = IndicatorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LightState::Off),
            1 => Ok(LightState::On),
            2 => Ok(LightState::Half),
            3 => Ok(LightState::Blinking),
            4 => Ok(LightState::FastBlinking),
            _ => Err(IndicatorError::InvalidLightState(code)),
        }
    }
}

/// One color channel of a triad-based LED group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in layout order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Offset of this channel within a red/green/blue block.
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Which half of the body an LED group sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Errors raised when converting raw host values into indicator types.
///
/// Synthesis itself never fails; these only come up at the actuation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Raw indicator index outside the fixed layout.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of indicators in the layout.
        count: usize,
    },

    /// Raw light state code with no matching state.
    InvalidLightState(u8),
}

impl core::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndicatorError::OutOfRange { index, count } => {
                write!(f, "indicator index {} out of range (layout has {})", index, count)
            }
            IndicatorError::InvalidLightState(code) => {
                write!(f, "light state code {} is not a valid state", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndicatorError {}
