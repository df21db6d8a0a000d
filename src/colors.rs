//! Semantic eye colors.
//!
//! Each color is described by the per-channel levels it drives on an eye's
//! red/green/blue triads. Only the levels 0.0, 0.5 and 1.0 occur.

use palette::Srgb;

/// Channel levels for `EyeColor::Red`.
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
/// Channel levels for `EyeColor::Green`.
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
/// Channel levels for `EyeColor::Blue`.
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
/// Channel levels for `EyeColor::White`.
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
/// Channel levels for `EyeColor::Magenta`.
pub const MAGENTA: Srgb = Srgb::new(0.5, 0.0, 1.0);
/// Channel levels for `EyeColor::Yellow`.
pub const YELLOW: Srgb = Srgb::new(1.0, 0.5, 0.0);
/// Channel levels for `EyeColor::Cyan`.
///
/// Half green with full blue, the same pattern magenta and yellow use.
pub const CYAN: Srgb = Srgb::new(0.0, 0.5, 1.0);

/// A named color an eye can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EyeColor {
    Red,
    Green,
    Blue,
    White,
    Magenta,
    Yellow,
    Cyan,
}

impl EyeColor {
    /// The channel levels this color drives.
    #[inline]
    pub const fn srgb(self) -> Srgb {
        match self {
            EyeColor::Red => RED,
            EyeColor::Green => GREEN,
            EyeColor::Blue => BLUE,
            EyeColor::White => WHITE,
            EyeColor::Magenta => MAGENTA,
            EyeColor::Yellow => YELLOW,
            EyeColor::Cyan => CYAN,
        }
    }
}

impl From<EyeColor> for Srgb {
    fn from(color: EyeColor) -> Self {
        color.srgb()
    }
}
