//! Integration tests for the digit multiplexer

mod common;
use common::*;

use segment_stopwatch::{
    Digit, DigitPosition, MultiplexConfig, Multiplexer, Place, Readout, SegmentPattern, Stopwatch,
    encode,
};

type TestMux<'t> = Multiplexer<'t, TestInstant, MockDisplay, SteppingTimeSource>;

fn digit(d: u8) -> Digit {
    Digit::new(d).unwrap()
}

#[test]
fn new_blanks_the_display() {
    let clock = SteppingTimeSource::new(1);
    let mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    assert_eq!(mux.display().ops(), &[DisplayOp::Blank]);
}

#[test]
fn refresh_scans_tenths_ones_tens_in_order() {
    let clock = SteppingTimeSource::new(1);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    mux.refresh(digit(7), digit(3), digit(2));

    let display = mux.release();
    let expected = [
        DisplayOp::Blank,
        DisplayOp::Blank,
        DisplayOp::Enable(DigitPosition::Digit4),
        DisplayOp::Segments(encode(digit(7)).with_dot()),
        DisplayOp::Blank,
        DisplayOp::Enable(DigitPosition::Digit3),
        DisplayOp::Segments(encode(digit(3))),
        DisplayOp::Blank,
        DisplayOp::Enable(DigitPosition::Digit2),
        DisplayOp::Segments(encode(digit(2))),
    ];
    assert_eq!(display.ops(), &expected);
}

#[test]
fn never_more_than_one_position_active() {
    let clock = SteppingTimeSource::new(1);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    for ticks in [0, 17, 237, 999] {
        mux.show(Readout::from_ticks(ticks));
    }

    assert_eq!(mux.display().max_active(), 1);
}

#[test]
fn leftmost_digit_is_never_enabled() {
    let clock = SteppingTimeSource::new(1);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    mux.show(Readout::from_ticks(888));

    assert!(
        !mux.display()
            .ops()
            .contains(&DisplayOp::Enable(DigitPosition::Digit1))
    );
}

#[test]
fn only_the_tenths_place_carries_the_dot() {
    let clock = SteppingTimeSource::new(1);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    mux.show(Readout::from_ticks(111));

    for (position, pattern) in mux.display().lit() {
        let dotted = pattern.contains(SegmentPattern::DOT);
        assert_eq!(dotted, position == DigitPosition::Digit4, "{:?}", position);
    }
}

#[test]
fn dot_place_is_configurable() {
    let clock = SteppingTimeSource::new(1);
    let config = MultiplexConfig::new(TestDuration(1), Place::Ones);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, config);

    mux.show(Readout::from_ticks(17));

    let lit = mux.display().lit();
    assert_eq!(lit[0], (DigitPosition::Digit4, encode(digit(7))));
    assert_eq!(lit[1], (DigitPosition::Digit3, encode(digit(1)).with_dot()));
    assert_eq!(lit[2], (DigitPosition::Digit2, encode(digit(0))));
}

#[test]
fn each_digit_is_held_for_the_configured_time() {
    let clock = SteppingTimeSource::new(1);
    let config = MultiplexConfig::new(TestDuration(5), Place::Tenths);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, config);

    mux.show(Readout::ZERO);

    // Three holds of at least 5 ms each.
    assert!(clock.elapsed().0 >= 15);
}

#[test]
fn zero_hold_does_not_wait() {
    let clock = SteppingTimeSource::new(1);
    let config = MultiplexConfig::new(TestDuration(0), Place::Tenths);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, config);

    mux.show(Readout::ZERO);

    assert_eq!(clock.elapsed(), TestDuration(0));
}

#[test]
fn blank_turns_everything_off() {
    let clock = SteppingTimeSource::new(1);
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    mux.show(Readout::from_ticks(5));
    assert!(mux.display().is_active(DigitPosition::Digit2));

    mux.blank();
    for position in DigitPosition::ALL {
        assert!(!mux.display().is_active(position));
    }
}

#[test]
fn refresh_loop_shows_stopwatch_frames() {
    let clock = SteppingTimeSource::new(1);
    let stopwatch = Stopwatch::new();
    let mut mux = TestMux::new(MockDisplay::new(), &clock, MultiplexConfig::default());

    stopwatch.on_button();
    for _ in 0..17 {
        stopwatch.on_tick();
    }
    stopwatch.on_button();

    for _ in 0..3 {
        mux.display_mut().clear_ops();
        if let Some(readout) = stopwatch.frame() {
            mux.show(readout);
        }
        let lit = mux.display().lit();
        assert_eq!(lit[0], (DigitPosition::Digit4, encode(digit(7)).with_dot()));
        assert_eq!(lit[1], (DigitPosition::Digit3, encode(digit(1))));
        assert_eq!(lit[2], (DigitPosition::Digit2, encode(digit(0))));
        stopwatch.on_tick();
    }
}
