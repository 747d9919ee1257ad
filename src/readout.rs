//! The three displayed digits of a tick count.

use crate::segments::Digit;

/// Tenths, ones and tens digits of an elapsed time in tenths of a second.
///
/// Used both for the live value derived from the tick counter and for the
/// value latched when the stopwatch stops. Only the lowest three decimal places
/// of a count are representable; higher places are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    /// Tenths of a second.
    pub tenths: Digit,
    /// Whole seconds.
    pub ones: Digit,
    /// Tens of seconds.
    pub tens: Digit,
}

impl Readout {
    /// All three digits zero.
    pub const ZERO: Readout = Readout {
        tenths: Digit::ZERO,
        ones: Digit::ZERO,
        tens: Digit::ZERO,
    };

    /// Creates a readout from individual digits.
    #[inline]
    pub const fn new(tenths: Digit, ones: Digit, tens: Digit) -> Self {
        Self { tenths, ones, tens }
    }

    /// Splits a tick count into its three lowest decimal digits.
    #[inline]
    pub const fn from_ticks(ticks: u32) -> Self {
        Self {
            tenths: Digit::from_place(ticks, 1),
            ones: Digit::from_place(ticks, 10),
            tens: Digit::from_place(ticks, 100),
        }
    }

    /// Reassembles the digits into a tick count (`ticks mod 1000`).
    #[inline]
    pub const fn as_ticks(&self) -> u32 {
        self.tens.value() as u32 * 100 + self.ones.value() as u32 * 10 + self.tenths.value() as u32
    }
}

impl core::fmt::Display for Readout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}.{}", self.tens, self.ones, self.tenths)
    }
}
