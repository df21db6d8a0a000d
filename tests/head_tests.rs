//! Integration tests for the head ring resolver

mod common;
use common::*;

use robot_led_handler::head::{CHARGING_PERIOD, OUT_OF_PACKETS_PATTERNS};
use robot_led_handler::{
    CycleFacts, GameState, HEAD_CIRCLE, HeadLed, HeadRing, Indicator, IndicatorGroup,
    IndicatorVector, LightState, Resolver,
};

fn lit_head(leds: &IndicatorVector) -> heapless::Vec<Indicator, 12> {
    leds.lit_in(IndicatorGroup::Head).into_iter().collect()
}

fn charging() -> CycleFacts<TestDuration> {
    CycleFacts {
        battery_charging: true,
        ..playing()
    }
}

fn expected(leds: &[HeadLed]) -> heapless::Vec<Indicator, 12> {
    let mut indicators: heapless::Vec<Indicator, 12> =
        leds.iter().map(|&led| Indicator::head(led)).collect();
    indicators.sort_unstable();
    indicators
}

#[test]
fn idle_head_stays_dark() {
    let mut head = HeadRing::new();
    let mut leds = IndicatorVector::new();
    head.resolve(&playing(), &mut leds);

    assert!(lit_head(&leds).is_empty());
    assert_eq!(head.counter(), 0);
}

#[test]
fn charging_lights_two_neighbours() {
    let mut head = HeadRing::new();
    let mut leds = IndicatorVector::new();
    head.resolve(&charging(), &mut leds);

    assert_eq!(head.counter(), 1);
    assert_eq!(lit_head(&leds), expected(&[HEAD_CIRCLE[0], HEAD_CIRCLE[1]]));
    assert_eq!(leds.count(LightState::On), 2);
}

#[test]
fn charging_clears_stale_head_states() {
    let mut head = HeadRing::new();
    let mut leds = IndicatorVector::new();
    leds.fill_group(IndicatorGroup::Head, LightState::FastBlinking);

    head.resolve(&charging(), &mut leds);
    assert_eq!(leds.count(LightState::FastBlinking), 0);
    assert_eq!(lit_head(&leds).len(), 2);
}

#[test]
fn comet_advances_every_slowness_cycles() {
    let mut head = HeadRing::with_counter(4);
    let mut leds = IndicatorVector::new();
    head.resolve(&charging(), &mut leds);

    assert_eq!(head.counter(), 5);
    assert_eq!(lit_head(&leds), expected(&[HEAD_CIRCLE[1], HEAD_CIRCLE[2]]));
}

#[test]
fn charging_sweep_is_periodic() {
    let mut head = HeadRing::new();
    let mut first_period = heapless::Vec::<IndicatorVector, 60>::new();

    for _ in 0..CHARGING_PERIOD {
        let mut leds = IndicatorVector::new();
        head.resolve(&charging(), &mut leds);
        first_period.push(leds).unwrap();
    }
    assert_eq!(head.counter(), 0);

    for previous in &first_period {
        let mut leds = IndicatorVector::new();
        head.resolve(&charging(), &mut leds);
        assert_eq!(&leds, previous);
    }
}

#[test]
fn counter_holds_while_not_charging() {
    let mut head = HeadRing::with_counter(17);
    let mut leds = IndicatorVector::new();
    head.resolve(&playing(), &mut leds);
    assert_eq!(head.counter(), 17);
}

#[test]
fn packet_starvation_cycles_three_frames() {
    let mut head = HeadRing::new();

    for (frame, pattern) in OUT_OF_PACKETS_PATTERNS.iter().enumerate() {
        let facts = CycleFacts {
            packets_exhausted: true,
            cycle_time: ms(frame as u64 * 200 + 50),
            ..playing()
        };
        let mut leds = IndicatorVector::new();
        head.resolve(&facts, &mut leds);

        assert_eq!(lit_head(&leds), expected(pattern));
    }

    // Frame 0 again after a full cycle.
    let facts = CycleFacts {
        packets_exhausted: true,
        cycle_time: ms(600),
        ..playing()
    };
    let mut leds = IndicatorVector::new();
    head.resolve(&facts, &mut leds);
    assert_eq!(lit_head(&leds), expected(&OUT_OF_PACKETS_PATTERNS[0]));
    assert_eq!(head.counter(), 0);
}

#[test]
fn packet_starvation_only_while_playing() {
    let mut head = HeadRing::new();
    let facts = CycleFacts {
        packets_exhausted: true,
        game_state: GameState::Set,
        ..playing()
    };
    let mut leds = IndicatorVector::new();
    head.resolve(&facts, &mut leds);
    assert!(lit_head(&leds).is_empty());
}
