//! Seven-segment encoding.
//!
//! Provides [`Digit`], a decimal digit that is valid by construction, and
//! [`SegmentPattern`], the on/off state of the seven segment lines plus the
//! decimal point. [`encode`] maps one to the other through a fixed table.
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD  DP
//! ```

/// A single decimal digit in the range `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit zero.
    pub const ZERO: Digit = Digit(0);

    /// Creates a digit, rejecting values above 9.
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Extracts the decimal place selected by `divisor` from `value`.
    ///
    /// Computes `(value / divisor) % 10`, so `divisor = 1` yields the lowest
    /// digit, `10` the next one, and so on. A zero divisor yields zero.
    #[inline]
    pub const fn from_place(value: u32, divisor: u32) -> Self {
        if divisor == 0 {
            return Digit::ZERO;
        }
        Digit(((value / divisor) % 10) as u8)
    }

    /// Returns the numeric value of this digit.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value is not a single decimal digit.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "{} is not a decimal digit (expected 0-9)", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}

/// Combined state of the segment lines for one digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(pub u8);

impl SegmentPattern {
    /// Segment A (top horizontal)
    pub const A: u8 = 0b0100_0000;
    /// Segment B (top right vertical)
    pub const B: u8 = 0b0010_0000;
    /// Segment C (bottom right vertical)
    pub const C: u8 = 0b0001_0000;
    /// Segment D (bottom horizontal)
    pub const D: u8 = 0b0000_1000;
    /// Segment E (bottom left vertical)
    pub const E: u8 = 0b0000_0100;
    /// Segment F (top left vertical)
    pub const F: u8 = 0b0000_0010;
    /// Segment G (middle horizontal)
    pub const G: u8 = 0b0000_0001;
    /// Decimal point
    pub const DOT: u8 = 0b1000_0000;

    /// All lines off.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// Returns this pattern with the decimal point lit.
    #[inline]
    pub const fn with_dot(self) -> Self {
        SegmentPattern(self.0 | Self::DOT)
    }

    /// Checks whether the given segment bit(s) are lit.
    #[inline]
    pub const fn contains(&self, segment: u8) -> bool {
        (self.0 & segment) != 0
    }

    /// Returns the raw bit pattern.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }
}

impl core::ops::BitOr for SegmentPattern {
    type Output = SegmentPattern;
    fn bitor(self, rhs: SegmentPattern) -> Self::Output {
        SegmentPattern(self.0 | rhs.0)
    }
}

impl core::ops::BitOr<u8> for SegmentPattern {
    type Output = SegmentPattern;
    fn bitor(self, rhs: u8) -> Self::Output {
        SegmentPattern(self.0 | rhs)
    }
}

const A: u8 = SegmentPattern::A;
const B: u8 = SegmentPattern::B;
const C: u8 = SegmentPattern::C;
const D: u8 = SegmentPattern::D;
const E: u8 = SegmentPattern::E;
const F: u8 = SegmentPattern::F;
const G: u8 = SegmentPattern::G;

/// Digit shapes, indexed by value.
const LUT: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

/// Returns the segment pattern that renders `digit`.
///
/// The decimal point is never part of the result; OR in [`SegmentPattern::DOT`]
/// or call [`SegmentPattern::with_dot`] to light it.
#[inline]
pub const fn encode(digit: Digit) -> SegmentPattern {
    SegmentPattern(LUT[digit.0 as usize])
}
