//! Digit multiplexing for a shared-segment display.
//!
//! Provides [`Multiplexer`], which lights one digit position at a time and
//! relies on persistence of vision to present a stable readout, and the
//! [`SegmentDisplay`] trait for hardware abstraction.

use crate::readout::Readout;
use crate::segments::{Digit, SegmentPattern, encode};
use crate::time::{TimeDuration, TimeInstant, TimeSource, spin_for};

/// Default time each digit stays lit per pass, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 1;

/// Trait for abstracting a four-digit display with shared segment lines.
///
/// Implement this for your wiring (direct GPIO, shift register, port writes)
/// to let the multiplexer drive it. Methods cannot fail; handle any hardware
/// errors internally.
pub trait SegmentDisplay {
    /// Deactivates every digit position and clears all segment lines.
    fn blank(&mut self);

    /// Activates a single digit position.
    ///
    /// Only called right after [`blank`](SegmentDisplay::blank), so at most
    /// one position is active at any time.
    fn enable(&mut self, position: DigitPosition);

    /// Drives the shared segment lines with `pattern`.
    fn set_segments(&mut self, pattern: SegmentPattern);
}

/// Physical digit slot, counted from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    /// Leftmost digit. Never lit by the stopwatch.
    Digit1,
    Digit2,
    Digit3,
    /// Rightmost digit.
    Digit4,
}

impl DigitPosition {
    /// All positions, left to right.
    pub const ALL: [DigitPosition; 4] = [
        DigitPosition::Digit1,
        DigitPosition::Digit2,
        DigitPosition::Digit3,
        DigitPosition::Digit4,
    ];

    /// Zero-based index from the left.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Decimal place of the readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Place {
    Tenths,
    Ones,
    Tens,
}

impl Place {
    /// Order in which places are lit during one refresh pass.
    pub const SCAN_ORDER: [Place; 3] = [Place::Tenths, Place::Ones, Place::Tens];

    /// Digit slot showing this place.
    #[inline]
    pub const fn position(self) -> DigitPosition {
        match self {
            Place::Tenths => DigitPosition::Digit4,
            Place::Ones => DigitPosition::Digit3,
            Place::Tens => DigitPosition::Digit2,
        }
    }

    /// Picks this place's digit out of a readout.
    #[inline]
    pub const fn digit_of(self, readout: &Readout) -> Digit {
        match self {
            Place::Tenths => readout.tenths,
            Place::Ones => readout.ones,
            Place::Tens => readout.tens,
        }
    }
}

/// Multiplexer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplexConfig<D: TimeDuration> {
    /// How long each digit stays lit per pass.
    pub hold: D,

    /// Place that carries the decimal point.
    pub dot: Place,
}

impl<D: TimeDuration> MultiplexConfig<D> {
    /// Creates a configuration.
    pub fn new(hold: D, dot: Place) -> Self {
        Self { hold, dot }
    }
}

impl<D: TimeDuration> Default for MultiplexConfig<D> {
    fn default() -> Self {
        Self {
            hold: D::from_millis(DEFAULT_HOLD_MS),
            dot: Place::Tenths,
        }
    }
}

/// Drives a [`SegmentDisplay`] one digit at a time.
///
/// A single [`refresh`](Multiplexer::refresh) lights each of the three places
/// once; call it continuously from the main loop to sustain the readout.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Display implementation type
/// * `T` - Time source implementation type
pub struct Multiplexer<'t, I: TimeInstant, S: SegmentDisplay, T: TimeSource<I>> {
    display: S,
    time_source: &'t T,
    config: MultiplexConfig<I::Duration>,
}

impl<'t, I: TimeInstant, S: SegmentDisplay, T: TimeSource<I>> Multiplexer<'t, I, S, T> {
    /// Creates a multiplexer and blanks the display.
    pub fn new(mut display: S, time_source: &'t T, config: MultiplexConfig<I::Duration>) -> Self {
        display.blank();

        Self {
            display,
            time_source,
            config,
        }
    }

    /// Runs one multiplexing pass: tenths, then ones, then tens.
    ///
    /// Each step blanks the display, enables exactly one position, drives
    /// its pattern and holds for the configured duration. The last digit
    /// stays lit when this returns.
    pub fn refresh(&mut self, tenths: Digit, ones: Digit, tens: Digit) {
        self.show(Readout::new(tenths, ones, tens));
    }

    /// Runs one multiplexing pass over a readout.
    pub fn show(&mut self, readout: Readout) {
        for place in Place::SCAN_ORDER {
            self.light(place, place.digit_of(&readout));
        }
    }

    /// Turns the whole display off.
    pub fn blank(&mut self) {
        self.display.blank();
    }

    fn light(&mut self, place: Place, digit: Digit) {
        let mut pattern = encode(digit);
        if place == self.config.dot {
            pattern = pattern.with_dot();
        }

        self.display.blank();
        self.display.enable(place.position());
        self.display.set_segments(pattern);
        spin_for::<I, T>(self.time_source, self.config.hold);
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MultiplexConfig<I::Duration> {
        &self.config
    }

    /// Returns a reference to the underlying display.
    pub fn display(&self) -> &S {
        &self.display
    }

    /// Returns a mutable reference to the underlying display.
    pub fn display_mut(&mut self) -> &mut S {
        &mut self.display
    }

    /// Consumes the multiplexer and returns the display.
    pub fn release(self) -> S {
        self.display
    }
}
