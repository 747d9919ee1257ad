#![no_std]

pub mod irq;
pub mod seven_segment;
pub mod time_source;
