//! Event-based control for the stopwatch.

use crate::mode::Mode;
use crate::stopwatch::Stopwatch;

/// Asynchronous inputs to the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchEvent {
    /// One timer period elapsed.
    Tick,
    /// Button edge detected.
    ButtonPress,
}

/// Result of handling a [`StopwatchEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventOutcome {
    /// Counter value after a tick.
    Counted(u32),
    /// Mode entered after a button press.
    Entered(Mode),
}

impl Stopwatch {
    /// Handles an event by dispatching to the matching handler.
    ///
    /// Convenience for event-queue driven setups, where interrupt handlers
    /// post events instead of calling the stopwatch directly.
    pub fn handle_event(&self, event: StopwatchEvent) -> EventOutcome {
        match event {
            StopwatchEvent::Tick => EventOutcome::Counted(self.on_tick()),
            StopwatchEvent::ButtonPress => EventOutcome::Entered(self.on_button()),
        }
    }
}
