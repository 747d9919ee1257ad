//! Time abstraction traits for platform-agnostic timing.
//!
//! The stopwatch itself counts hardware ticks and never reads a clock. These
//! traits exist for the [`Multiplexer`](crate::Multiplexer), which holds each
//! digit lit for a wall-clock duration instead of a loop-iteration count.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter should use wrapping
    /// subtraction so a hold spanning the wrap still terminates.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Busy-waits until `duration` has elapsed on `time_source`.
///
/// Returns immediately for a zero duration.
pub fn spin_for<I, T>(time_source: &T, duration: I::Duration)
where
    I: TimeInstant,
    T: TimeSource<I>,
{
    if duration == I::Duration::ZERO {
        return;
    }

    let target = duration.as_millis();
    let start = time_source.now();
    while time_source.now().duration_since(start).as_millis() < target {
        core::hint::spin_loop();
    }
}
