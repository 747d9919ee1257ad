//! Pending-flag handling for the two stopwatch interrupt sources.

use segment_stopwatch::InterruptLine;
use stm32f0xx_hal::{pac, timers::Timer};

/// TIM7 update interrupt, firing once per stopwatch tick
pub struct TickTimer {
    _timer: Timer<pac::TIM7>,
}

impl TickTimer {
    /// Takes ownership of a TIM7 timer that is already listening for timeouts
    pub fn new(timer: Timer<pac::TIM7>) -> Self {
        Self { _timer: timer }
    }
}

impl InterruptLine for TickTimer {
    fn is_pending(&mut self) -> bool {
        // SAFETY: TIM7 is owned by `_timer`; reading SR has no side effects
        unsafe { (*pac::TIM7::ptr()).sr.read().uif().bit_is_set() }
    }

    fn clear_pending(&mut self) {
        // SAFETY: TIM7 is owned by `_timer`; UIF is cleared by writing zero
        unsafe { (*pac::TIM7::ptr()).sr.modify(|_, w| w.uif().clear_bit()) }
    }
}

/// Falling-edge EXTI line for the user button
pub struct ButtonLine {
    exti: pac::EXTI,
}

impl ButtonLine {
    /// Routes PC13 to EXTI13 and enables its falling-edge interrupt
    ///
    /// The SYSCFG clock must already be enabled.
    pub fn new(exti: pac::EXTI, syscfg: &pac::SYSCFG) -> Self {
        // Port C selector is 0b0010
        syscfg.exticr4.modify(|_, w| unsafe { w.exti13().bits(0b0010) });

        exti.rtsr.modify(|_, w| w.tr13().clear_bit());
        exti.ftsr.modify(|_, w| w.tr13().set_bit());
        exti.imr.modify(|_, w| w.mr13().set_bit());

        // Drop anything latched while the line was being configured
        exti.pr.write(|w| w.pif13().set_bit());

        Self { exti }
    }
}

impl InterruptLine for ButtonLine {
    fn is_pending(&mut self) -> bool {
        self.exti.pr.read().pif13().bit_is_set()
    }

    fn clear_pending(&mut self) {
        // Write-one-to-clear; other lines are left untouched
        self.exti.pr.write(|w| w.pif13().set_bit());
    }
}
