//! Stopwatch operating modes.

/// The three operating modes, cycled by the button.
///
/// The discriminants are the raw values stored in the shared mode cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Standby. The counter is held at zero and the display reads zero.
    #[default]
    Idle = 0,
    /// Counting. The display tracks the live counter.
    Running = 1,
    /// Frozen. The display shows the value latched on entry.
    Stopped = 2,
}

impl Mode {
    /// Number of modes in the cycle.
    pub const COUNT: u8 = 3;

    /// Returns the next mode in the cycle (`(mode + 1) mod 3`).
    pub const fn next(self) -> Self {
        match self {
            Mode::Idle => Mode::Running,
            Mode::Running => Mode::Stopped,
            Mode::Stopped => Mode::Idle,
        }
    }

    /// Returns the raw value of this mode.
    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Mode::Idle),
            1 => Ok(Mode::Running),
            2 => Ok(Mode::Stopped),
            other => Err(ModeError::Corrupted(other)),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.as_raw()
    }
}

/// Raised when the shared mode cell holds a value outside the defined modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// Raw mode value that matches no [`Mode`].
    Corrupted(u8),
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModeError::Corrupted(raw) => {
                write!(f, "corrupted mode value {} (expected 0-{})", raw, Mode::COUNT - 1)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModeError {}
