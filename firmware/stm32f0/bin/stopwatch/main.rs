#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{Interrupt, interrupt};

use segment_stopwatch::Stopwatch;
use stm32f0_firmware::irq::{ButtonLine, TickTimer};
use stm32f0_firmware::time_source::HalTimeSource;

mod app_state;
mod hardware_setup;

use app_state::AppState;

/// Counter, mode and latch shared by both interrupts and the refresh loop
static STOPWATCH: Stopwatch = Stopwatch::new();

static TICK_TIMER: Mutex<RefCell<Option<TickTimer>>> = Mutex::new(RefCell::new(None));
static BUTTON_LINE: Mutex<RefCell<Option<ButtonLine>>> = Mutex::new(RefCell::new(None));

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_firmware::time_source::tick();
}

/// TIM7 interrupt handler - called every stopwatch tick
#[interrupt]
fn TIM7() {
    critical_section::with(|cs| {
        if let Some(timer) = TICK_TIMER.borrow_ref_mut(cs).as_mut() {
            STOPWATCH.handle_tick_irq(timer);
        }
    });
}

/// EXTI4_15 interrupt handler - button falling edge on PC13
#[interrupt]
fn EXTI4_15() {
    critical_section::with(|cs| {
        if let Some(line) = BUTTON_LINE.borrow_ref_mut(cs).as_mut() {
            STOPWATCH.handle_button_irq(line);
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Seven-Segment Stopwatch ===");
    rprintln!("Starting initialization...");

    // Initialize all hardware
    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    // Hand the interrupt sources to their handlers, then unmask them
    critical_section::with(|cs| {
        TICK_TIMER.borrow(cs).replace(Some(hw.tick_timer));
        BUTTON_LINE.borrow(cs).replace(Some(hw.button_line));
    });
    unsafe {
        NVIC::unmask(Interrupt::TIM7);
        NVIC::unmask(Interrupt::EXTI4_15);
    }

    // Create time source
    let time_source = HalTimeSource::new();

    let mut app = AppState::new(hw.display, hw.button, &time_source, &STOPWATCH);

    rprintln!("=== System Ready ===");
    rprintln!("Press button to cycle: standby -> running -> stopped");

    // Run the refresh loop (never returns)
    app.run()
}
