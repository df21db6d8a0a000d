//! The fixed LED layout of the robot.
//!
//! Every physical LED has a stable index. Groups are contiguous ranges:
//!
//! | Group      | Indices | Contents                                            |
//! |------------|---------|-----------------------------------------------------|
//! | Left eye   | 0-23    | red, green, blue blocks of 8 ring positions (45°)   |
//! | Right eye  | 24-47   | same as left eye                                    |
//! | Left ear   | 48-57   | 10 ring positions (36°)                             |
//! | Right ear  | 58-67   | 10 ring positions (36°)                             |
//! | Chest      | 68-70   | red, green, blue                                    |
//! | Head       | 71-82   | 12 ring elements, see [`HeadLed`]                   |
//! | Left foot  | 83-85   | red, green, blue                                    |
//! | Right foot | 86-88   | red, green, blue                                    |

use crate::types::{Channel, IndicatorError, Side};

/// Ring positions per color channel of one eye.
pub const EYE_RING_POSITIONS: usize = 8;

/// Indicators in one eye (three channel blocks).
pub const EYE_LEDS: usize = EYE_RING_POSITIONS * 3;

/// Ring positions of one ear.
pub const EAR_POSITIONS: usize = 10;

/// Elements of the head ring.
pub const HEAD_LEDS: usize = 12;

/// Total number of indicators.
pub const INDICATOR_COUNT: usize = 2 * EYE_LEDS + 2 * EAR_POSITIONS + 3 + HEAD_LEDS + 2 * 3;

/// A physically co-located cluster of indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorGroup {
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    Chest,
    Head,
    LeftFoot,
    RightFoot,
}

impl IndicatorGroup {
    /// All groups in layout order.
    pub const ALL: [IndicatorGroup; 8] = [
        IndicatorGroup::LeftEye,
        IndicatorGroup::RightEye,
        IndicatorGroup::LeftEar,
        IndicatorGroup::RightEar,
        IndicatorGroup::Chest,
        IndicatorGroup::Head,
        IndicatorGroup::LeftFoot,
        IndicatorGroup::RightFoot,
    ];

    /// Index of the first indicator of the group.
    pub const fn base(self) -> usize {
        match self {
            IndicatorGroup::LeftEye => 0,
            IndicatorGroup::RightEye => EYE_LEDS,
            IndicatorGroup::LeftEar => 2 * EYE_LEDS,
            IndicatorGroup::RightEar => 2 * EYE_LEDS + EAR_POSITIONS,
            IndicatorGroup::Chest => 2 * EYE_LEDS + 2 * EAR_POSITIONS,
            IndicatorGroup::Head => 2 * EYE_LEDS + 2 * EAR_POSITIONS + 3,
            IndicatorGroup::LeftFoot => 2 * EYE_LEDS + 2 * EAR_POSITIONS + 3 + HEAD_LEDS,
            IndicatorGroup::RightFoot => 2 * EYE_LEDS + 2 * EAR_POSITIONS + 6 + HEAD_LEDS,
        }
    }

    /// Number of indicators in the group.
    pub const fn len(self) -> usize {
        match self {
            IndicatorGroup::LeftEye | IndicatorGroup::RightEye => EYE_LEDS,
            IndicatorGroup::LeftEar | IndicatorGroup::RightEar => EAR_POSITIONS,
            IndicatorGroup::Head => HEAD_LEDS,
            IndicatorGroup::Chest | IndicatorGroup::LeftFoot | IndicatorGroup::RightFoot => 3,
        }
    }

    /// Index range covered by the group.
    pub const fn range(self) -> core::ops::Range<usize> {
        self.base()..self.base() + self.len()
    }

    /// Returns true if `indicator` belongs to this group.
    pub fn contains(self, indicator: Indicator) -> bool {
        self.range().contains(&indicator.index())
    }

    /// The eye group on `side`.
    pub const fn eye(side: Side) -> Self {
        match side {
            Side::Left => IndicatorGroup::LeftEye,
            Side::Right => IndicatorGroup::RightEye,
        }
    }

    /// The ear group on `side`.
    pub const fn ear(side: Side) -> Self {
        match side {
            Side::Left => IndicatorGroup::LeftEar,
            Side::Right => IndicatorGroup::RightEar,
        }
    }

    /// The foot group on `side`.
    pub const fn foot(side: Side) -> Self {
        match side {
            Side::Left => IndicatorGroup::LeftFoot,
            Side::Right => IndicatorGroup::RightFoot,
        }
    }
}

/// The elements of the head ring in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HeadLed {
    RearLeft0,
    RearLeft1,
    RearLeft2,
    RearRight0,
    RearRight1,
    RearRight2,
    MiddleRight0,
    FrontRight0,
    FrontRight1,
    FrontLeft0,
    FrontLeft1,
    MiddleLeft0,
}

/// Head ring elements in the order they sit around the skull.
///
/// The charging sweep walks this order, not the layout order.
pub const HEAD_CIRCLE: [HeadLed; HEAD_LEDS] = [
    HeadLed::FrontLeft1,
    HeadLed::FrontLeft0,
    HeadLed::MiddleLeft0,
    HeadLed::RearLeft0,
    HeadLed::RearLeft1,
    HeadLed::RearLeft2,
    HeadLed::RearRight2,
    HeadLed::RearRight1,
    HeadLed::RearRight0,
    HeadLed::MiddleRight0,
    HeadLed::FrontRight0,
    HeadLed::FrontRight1,
];

/// One physical LED, identified by its stable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator(u8);

impl Indicator {
    /// An eye LED.
    ///
    /// # Panics
    /// Panics if `position` is not below [`EYE_RING_POSITIONS`].
    pub const fn eye(side: Side, channel: Channel, position: usize) -> Self {
        assert!(position < EYE_RING_POSITIONS, "eye ring position out of range");
        let group = IndicatorGroup::eye(side);
        Indicator((group.base() + channel.offset() * EYE_RING_POSITIONS + position) as u8)
    }

    /// An ear LED.
    ///
    /// # Panics
    /// Panics if `position` is not below [`EAR_POSITIONS`].
    pub const fn ear(side: Side, position: usize) -> Self {
        assert!(position < EAR_POSITIONS, "ear position out of range");
        Indicator((IndicatorGroup::ear(side).base() + position) as u8)
    }

    /// A chest button LED.
    pub const fn chest(channel: Channel) -> Self {
        Indicator((IndicatorGroup::Chest.base() + channel.offset()) as u8)
    }

    /// A head ring LED.
    pub const fn head(led: HeadLed) -> Self {
        Indicator((IndicatorGroup::Head.base() + led as usize) as u8)
    }

    /// A foot LED.
    pub const fn foot(side: Side, channel: Channel) -> Self {
        Indicator((IndicatorGroup::foot(side).base() + channel.offset()) as u8)
    }

    /// The stable index of this indicator.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The group this indicator belongs to.
    pub fn group(self) -> IndicatorGroup {
        IndicatorGroup::ALL
            .into_iter()
            .find(|group| group.contains(self))
            .unwrap_or(IndicatorGroup::RightFoot)
    }

    /// Iterates over every indicator in layout order.
    pub fn all() -> impl Iterator<Item = Indicator> {
        (0..INDICATOR_COUNT).map(|index| Indicator(index as u8))
    }

    /// Iterates over the indicators of `group`.
    pub fn in_group(group: IndicatorGroup) -> impl Iterator<Item = Indicator> {
        group.range().map(|index| Indicator(index as u8))
    }
}

impl TryFrom<usize> for Indicator {
    type Error = IndicatorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < INDICATOR_COUNT {
            Ok(Indicator(index as u8))
        } else {
            Err(IndicatorError::OutOfRange {
                index,
                count: INDICATOR_COUNT,
            })
        }
    }
}

impl From<Indicator> for usize {
    fn from(indicator: Indicator) -> Self {
        indicator.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_tile_the_layout() {
        let mut next = 0;
        for group in IndicatorGroup::ALL {
            assert_eq!(group.base(), next);
            next += group.len();
        }
        assert_eq!(next, INDICATOR_COUNT);
        assert_eq!(INDICATOR_COUNT, 89);
    }

    #[test]
    fn every_indicator_has_exactly_one_group() {
        for indicator in Indicator::all() {
            let owners = IndicatorGroup::ALL
                .iter()
                .filter(|group| group.contains(indicator))
                .count();
            assert_eq!(owners, 1);
        }
        assert_eq!(Indicator::all().count(), INDICATOR_COUNT);
    }

    #[test]
    fn eye_channels_are_blocks_of_eight() {
        assert_eq!(Indicator::eye(Side::Left, Channel::Red, 0).index(), 0);
        assert_eq!(Indicator::eye(Side::Left, Channel::Red, 7).index(), 7);
        assert_eq!(Indicator::eye(Side::Left, Channel::Green, 0).index(), 8);
        assert_eq!(Indicator::eye(Side::Left, Channel::Blue, 0).index(), 16);
        assert_eq!(Indicator::eye(Side::Right, Channel::Red, 0).index(), 24);
        assert_eq!(
            Indicator::eye(Side::Right, Channel::Blue, 7).group(),
            IndicatorGroup::RightEye
        );
    }

    #[test]
    fn named_constructors_land_in_their_group() {
        assert_eq!(Indicator::ear(Side::Left, 9).group(), IndicatorGroup::LeftEar);
        assert_eq!(Indicator::ear(Side::Right, 0).group(), IndicatorGroup::RightEar);
        assert_eq!(Indicator::chest(Channel::Blue).group(), IndicatorGroup::Chest);
        assert_eq!(Indicator::head(HeadLed::MiddleLeft0).group(), IndicatorGroup::Head);
        assert_eq!(
            Indicator::head(HeadLed::MiddleLeft0).index(),
            IndicatorGroup::Head.base() + HEAD_LEDS - 1
        );
        assert_eq!(Indicator::foot(Side::Left, Channel::Red).group(), IndicatorGroup::LeftFoot);
        assert_eq!(Indicator::foot(Side::Right, Channel::Blue).index(), 88);
    }

    #[test]
    fn head_circle_visits_each_element_once() {
        for led in HEAD_CIRCLE {
            assert_eq!(HEAD_CIRCLE.iter().filter(|&&other| other == led).count(), 1);
        }
    }

    #[test]
    fn raw_index_conversion_is_checked() {
        assert_eq!(Indicator::try_from(88).map(usize::from), Ok(88));
        assert_eq!(
            Indicator::try_from(89),
            Err(IndicatorError::OutOfRange { index: 89, count: 89 })
        );
    }

    #[test]
    #[should_panic(expected = "ear position out of range")]
    fn ear_position_is_bounded() {
        let _ = Indicator::ear(Side::Left, EAR_POSITIONS);
    }
}
