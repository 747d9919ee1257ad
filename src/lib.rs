#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Stopwatch`**: Shared state (tick counter, mode, latched readout) updated by interrupt handlers and read by the main loop
//! - **`Mode`**: `Idle`, `Running` or `Stopped`, cycled by a single button
//! - **`Readout`**: Tenths, ones and tens digits of a tick count
//! - **`Digit`** / **`SegmentPattern`**: A decimal digit and the segment lines that render it
//! - **`Multiplexer`**: Lights one digit position at a time to present a stable readout
//! - **`SegmentDisplay`**: Trait to implement for your display wiring
//! - **`InterruptLine`**: Trait to implement for the pending flag of each interrupt source
//! - **`TimeSource`**: Trait to implement for your timing system (used for digit hold times)
//!
//! The stopwatch counts ticks of [`TICK_PERIOD_MS`]; configuring a hardware
//! timer at that period is up to the board crate.

pub mod event;
pub mod mode;
pub mod multiplexer;
pub mod readout;
pub mod segments;
pub mod stopwatch;
pub mod time;

pub use event::{EventOutcome, StopwatchEvent};
pub use mode::{Mode, ModeError};
pub use multiplexer::{DigitPosition, MultiplexConfig, Multiplexer, Place, SegmentDisplay};
pub use readout::Readout;
pub use segments::{Digit, DigitError, SegmentPattern, encode};
pub use stopwatch::{InterruptLine, Stopwatch};
pub use time::{TimeDuration, TimeInstant, TimeSource};

/// Period of one counter tick in milliseconds.
pub const TICK_PERIOD_MS: u32 = 100;

/// Counter ticks per second.
pub const TICKS_PER_SECOND: u32 = 1000 / TICK_PERIOD_MS;
