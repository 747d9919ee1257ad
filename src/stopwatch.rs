//! Shared stopwatch state for interrupt handlers and the foreground loop.
//!
//! Provides [`Stopwatch`], which owns the tick counter, the mode and the
//! latched readout, and the [`InterruptLine`] trait for pending-flag handling.
//!
//! The timer interrupt calls [`Stopwatch::on_tick`], the button interrupt calls
//! [`Stopwatch::on_button`], and the main loop calls [`Stopwatch::frame`] once
//! per iteration to learn what to display.

use core::cell::Cell;
use critical_section::Mutex;

use crate::mode::{Mode, ModeError};
use crate::readout::Readout;

/// Trait for abstracting the pending flag of an interrupt source.
///
/// Implement this for the timer and input-edge peripherals so the handlers
/// can acknowledge them. A flag left set re-fires the interrupt on return.
pub trait InterruptLine {
    /// Returns true if this line has a pending request.
    fn is_pending(&mut self) -> bool;

    /// Clears the pending request.
    fn clear_pending(&mut self);
}

/// Stopwatch state shared between interrupt and foreground contexts.
///
/// Each field sits in its own critical-section cell. `new` is `const`, so the
/// usual setup is a `static` declared next to the entry point:
///
/// ```rust
/// use segment_stopwatch::Stopwatch;
///
/// static STOPWATCH: Stopwatch = Stopwatch::new();
/// ```
///
/// The counter counts ticks of [`TICK_PERIOD_MS`](crate::TICK_PERIOD_MS) and
/// wraps silently at `u32::MAX`.
pub struct Stopwatch {
    ticks: Mutex<Cell<u32>>,
    mode: Mutex<Cell<u8>>,
    latched: Mutex<Cell<Readout>>,
}

impl Stopwatch {
    /// Creates a stopwatch in `Idle` with a zero counter and zero latch.
    pub const fn new() -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
            mode: Mutex::new(Cell::new(Mode::Idle.as_raw())),
            latched: Mutex::new(Cell::new(Readout::ZERO)),
        }
    }

    /// Advances the tick counter by one.
    ///
    /// Called from the periodic timer interrupt. Counts in every mode; the
    /// value only matters while running.
    ///
    /// # Returns
    /// The counter value after the increment.
    pub fn on_tick(&self) -> u32 {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            let next = ticks.get().wrapping_add(1);
            ticks.set(next);
            next
        })
    }

    /// Advances the mode, latching the counter on entry to `Stopped`.
    ///
    /// Called from the button interrupt. The latch is written before the mode
    /// within the same critical section, so `frame` never sees `Stopped`
    /// paired with a stale latch.
    ///
    /// A corrupted mode value advances to `Idle`.
    ///
    /// # Returns
    /// The mode that was entered.
    pub fn on_button(&self) -> Mode {
        critical_section::with(|cs| {
            let mode = self.mode.borrow(cs);
            let next = Mode::try_from(mode.get()).map_or(Mode::Idle, Mode::next);

            if next == Mode::Stopped {
                let ticks = self.ticks.borrow(cs).get();
                self.latched.borrow(cs).set(Readout::from_ticks(ticks));
            }

            mode.set(next.as_raw());
            next
        })
    }

    /// Timer interrupt entry: acknowledges `line` and counts one tick.
    ///
    /// # Returns
    /// * `Some(ticks)` - Counter value after the increment
    /// * `None` - The line was not pending; nothing changed
    pub fn handle_tick_irq<L: InterruptLine>(&self, line: &mut L) -> Option<u32> {
        if !line.is_pending() {
            return None;
        }

        line.clear_pending();
        Some(self.on_tick())
    }

    /// Button interrupt entry: acknowledges `line` and advances the mode.
    ///
    /// # Returns
    /// * `Some(mode)` - The mode that was entered
    /// * `None` - The line was not pending; nothing changed
    pub fn handle_button_irq<L: InterruptLine>(&self, line: &mut L) -> Option<Mode> {
        if !line.is_pending() {
            return None;
        }

        line.clear_pending();
        Some(self.on_button())
    }

    /// Runs one iteration of the refresh loop's decision logic.
    ///
    /// * `Idle` - resets the counter to zero, returns a zero readout
    /// * `Running` - returns the digits of the live counter
    /// * `Stopped` - returns the latched digits
    /// * corrupted mode - resets the mode to `Idle` and returns `None`;
    ///   nothing should be displayed this iteration
    pub fn frame(&self) -> Option<Readout> {
        critical_section::with(|cs| {
            let mode = self.mode.borrow(cs);
            match Mode::try_from(mode.get()) {
                Ok(Mode::Idle) => {
                    self.ticks.borrow(cs).set(0);
                    Some(Readout::ZERO)
                }
                Ok(Mode::Running) => Some(Readout::from_ticks(self.ticks.borrow(cs).get())),
                Ok(Mode::Stopped) => Some(self.latched.borrow(cs).get()),
                Err(ModeError::Corrupted(_)) => {
                    mode.set(Mode::Idle.as_raw());
                    None
                }
            }
        })
    }

    /// Returns the current mode, or the raw value if it is corrupted.
    pub fn mode(&self) -> Result<Mode, ModeError> {
        critical_section::with(|cs| Mode::try_from(self.mode.borrow(cs).get()))
    }

    /// Returns the raw tick counter.
    pub fn ticks(&self) -> u32 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }

    /// Returns the readout captured on the last entry to `Stopped`.
    pub fn latched(&self) -> Readout {
        critical_section::with(|cs| self.latched.borrow(cs).get())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
