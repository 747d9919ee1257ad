use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, Output, Pin, PullUp, PushPull, gpiob, gpioc},
    pac,
    prelude::*,
    time::Hertz,
    timers::{Event, Timer},
};

use segment_stopwatch::TICK_PERIOD_MS;
use stm32f0_firmware::irq::{ButtonLine, TickTimer};
use stm32f0_firmware::seven_segment::GpioSegmentDisplay;

/// Type alias for the display driver
pub type Display = GpioSegmentDisplay<Pin<Output<PushPull>>>;

/// Button type (user button on PC13)
pub type Button = gpioc::PC13<Input<PullUp>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub display: Display,
    pub button: Button,
    pub tick_timer: TickTimer,
    pub button_line: ButtonLine,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts, digit hold timing)
/// - TIM7 setup (stopwatch tick)
/// - Display pins, blanked
/// - Button pin and its falling-edge EXTI line
///
/// Interrupts are configured here but left masked in the NVIC.
///
/// # Returns
/// A `HardwareContext` containing all initialized peripherals ready for use
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // SYSCFG drives EXTI port routing; enable it before RCC is consumed
    dp.RCC.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    // Configure system clock and SysTick
    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    // Split GPIO ports
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    // Setup hardware components
    let display = setup_display(gpiob, gpioc.pc0, gpioc.pc1, gpioc.pc2, gpioc.pc3);
    let button = setup_button(gpioc.pc13);
    let button_line = ButtonLine::new(dp.EXTI, &dp.SYSCFG);
    let tick_timer = setup_tick_timer(dp.TIM7, &mut rcc);

    HardwareContext {
        display,
        button,
        tick_timer,
        button_line,
    }
}

/// Configure the system clock
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure SysTick timer for 1ms interrupts
///
/// The SysTick interrupt handler increments the millisecond counter used to
/// time how long each digit stays lit.
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure TIM7 to raise an update interrupt every stopwatch tick
fn setup_tick_timer(tim7: pac::TIM7, rcc: &mut stm32f0xx_hal::rcc::Rcc) -> TickTimer {
    let mut timer = Timer::tim7(tim7, Hertz(1_000 / TICK_PERIOD_MS), rcc);
    timer.listen(Event::TimeOut);

    rprintln!("TIM7 configured for {}ms ticks", TICK_PERIOD_MS);
    TickTimer::new(timer)
}

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<Floating>>) -> Button {
    let button = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13 (falling edge)");
    button
}

/// Configure the display pins
///
/// - Segments A..G, DP: PB0..PB7 (active high)
/// - Digit selects 1..4: PC0..PC3 (active low, leftmost first)
///
/// # Returns
/// A blanked `Display`
fn setup_display(
    gpiob: gpiob::Parts,
    pc0: gpioc::PC0<Input<Floating>>,
    pc1: gpioc::PC1<Input<Floating>>,
    pc2: gpioc::PC2<Input<Floating>>,
    pc3: gpioc::PC3<Input<Floating>>,
) -> Display {
    let (segments, digits) = cortex_m::interrupt::free(|cs| {
        (
            [
                gpiob.pb0.into_push_pull_output(cs).downgrade(),
                gpiob.pb1.into_push_pull_output(cs).downgrade(),
                gpiob.pb2.into_push_pull_output(cs).downgrade(),
                gpiob.pb3.into_push_pull_output(cs).downgrade(),
                gpiob.pb4.into_push_pull_output(cs).downgrade(),
                gpiob.pb5.into_push_pull_output(cs).downgrade(),
                gpiob.pb6.into_push_pull_output(cs).downgrade(),
                gpiob.pb7.into_push_pull_output(cs).downgrade(),
            ],
            [
                pc0.into_push_pull_output(cs).downgrade(),
                pc1.into_push_pull_output(cs).downgrade(),
                pc2.into_push_pull_output(cs).downgrade(),
                pc3.into_push_pull_output(cs).downgrade(),
            ],
        )
    });

    rprintln!("Display configured (segments PB0-PB7, digits PC0-PC3)");
    GpioSegmentDisplay::new(segments, digits, true)
}
