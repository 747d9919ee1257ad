use rtt_target::rprintln;

use segment_stopwatch::{Mode, MultiplexConfig, Multiplexer, Stopwatch};
use stm32f0_firmware::time_source::{HalInstant, HalTimeSource};

use crate::hardware_setup::{Button, Display};

/// Type alias for the multiplexer
type Mux<'a> = Multiplexer<'a, HalInstant, Display, HalTimeSource>;

/// Application state containing all runtime data
pub struct AppState<'a> {
    mux: Mux<'a>,
    stopwatch: &'a Stopwatch,
    _button: Button,
    last_mode: Mode,
}

impl<'a> AppState<'a> {
    /// Initialize the application with hardware and shared stopwatch state
    pub fn new(
        display: Display,
        button: Button,
        time_source: &'a HalTimeSource,
        stopwatch: &'a Stopwatch,
    ) -> Self {
        let mux = Multiplexer::new(display, time_source, MultiplexConfig::default());
        let hold = mux.config().hold.0;
        rprintln!("Multiplexer hold: {}ms per digit", hold);

        Self {
            mux,
            stopwatch,
            _button: button,
            last_mode: Mode::Idle,
        }
    }

    /// Report mode changes made by the button interrupt
    fn report_mode_change(&mut self) {
        let Ok(mode) = self.stopwatch.mode() else {
            return;
        };
        if mode == self.last_mode {
            return;
        }

        match mode {
            Mode::Idle => rprintln!("Mode: Idle"),
            Mode::Running => rprintln!("Mode: Running"),
            Mode::Stopped => rprintln!("Mode: Stopped at {}s", self.stopwatch.latched()),
        }
        self.last_mode = mode;
    }

    /// Run the refresh loop
    pub fn run(&mut self) -> ! {
        loop {
            if let Some(readout) = self.stopwatch.frame() {
                self.mux.show(readout);
            }

            self.report_mode_change();
        }
    }
}
