use embedded_hal::digital::v2::OutputPin;
use segment_stopwatch::{DigitPosition, SegmentDisplay, SegmentPattern};

/// Segment bit driven by each entry of the segment pin array
const SEGMENT_ORDER: [u8; 8] = [
    SegmentPattern::A,
    SegmentPattern::B,
    SegmentPattern::C,
    SegmentPattern::D,
    SegmentPattern::E,
    SegmentPattern::F,
    SegmentPattern::G,
    SegmentPattern::DOT,
];

/// Four-digit seven-segment display wired directly to GPIO pins
///
/// This wrapper implements the SegmentDisplay trait required by the
/// multiplexer. Segment lines are active high; digit selects are active low
/// for a common-cathode module switched by the MCU pin itself.
pub struct GpioSegmentDisplay<P: OutputPin> {
    segments: [P; 8],
    digits: [P; 4],
    select_active_low: bool,
}

impl<P: OutputPin> GpioSegmentDisplay<P> {
    /// Create a new display driver
    ///
    /// # Arguments
    /// * `segments` - Pins for segments A..G followed by the decimal point
    /// * `digits` - Digit select pins, leftmost first
    /// * `select_active_low` - true if driving a select pin low turns its digit on
    pub fn new(segments: [P; 8], digits: [P; 4], select_active_low: bool) -> Self {
        let mut display = Self {
            segments,
            digits,
            select_active_low,
        };
        display.blank();
        display
    }

    fn drive(pin: &mut P, high: bool) {
        // Pin errors are Infallible on this target
        if high {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}

impl<P: OutputPin> SegmentDisplay for GpioSegmentDisplay<P> {
    fn blank(&mut self) {
        let off = self.select_active_low;
        for pin in self.digits.iter_mut() {
            Self::drive(pin, off);
        }
        for pin in self.segments.iter_mut() {
            Self::drive(pin, false);
        }
    }

    fn enable(&mut self, position: DigitPosition) {
        let on = !self.select_active_low;
        Self::drive(&mut self.digits[position.index()], on);
    }

    fn set_segments(&mut self, pattern: SegmentPattern) {
        for (pin, bit) in self.segments.iter_mut().zip(SEGMENT_ORDER) {
            Self::drive(pin, pattern.contains(bit));
        }
    }
}
