//! Shared test infrastructure for segment-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use segment_stopwatch::{
    DigitPosition, InterruptLine, SegmentDisplay, SegmentPattern, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source that moves forward by a fixed step on every read
///
/// Busy-waits in the multiplexer poll the clock, so a frozen clock would
/// never let them finish.
pub struct SteppingTimeSource {
    current_time: Cell<TestInstant>,
    step: u64,
}

impl SteppingTimeSource {
    pub fn new(step_millis: u64) -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            step: step_millis,
        }
    }

    pub fn elapsed(&self) -> TestDuration {
        TestDuration(self.current_time.get().0)
    }
}

impl TimeSource<TestInstant> for SteppingTimeSource {
    fn now(&self) -> TestInstant {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + self.step));
        current
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// A single call made on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    Blank,
    Enable(DigitPosition),
    Segments(SegmentPattern),
}

/// Mock display that records every call and tracks the active positions
pub struct MockDisplay {
    active: [bool; 4],
    max_active: usize,
    ops: heapless::Vec<DisplayOp, 64>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            active: [false; 4],
            max_active: 0,
            ops: heapless::Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Highest number of simultaneously active positions ever observed
    pub fn max_active(&self) -> usize {
        self.max_active
    }

    pub fn is_active(&self, position: DigitPosition) -> bool {
        self.active[position.index()]
    }

    /// Patterns written while each position was enabled, in scan order
    pub fn lit(&self) -> heapless::Vec<(DigitPosition, SegmentPattern), 16> {
        let mut lit = heapless::Vec::new();
        let mut enabled = None;
        for op in self.ops.iter() {
            match *op {
                DisplayOp::Blank => enabled = None,
                DisplayOp::Enable(position) => enabled = Some(position),
                DisplayOp::Segments(pattern) => {
                    if let Some(position) = enabled {
                        let _ = lit.push((position, pattern));
                    }
                }
            }
        }
        lit
    }
}

impl SegmentDisplay for MockDisplay {
    fn blank(&mut self) {
        self.active = [false; 4];
        let _ = self.ops.push(DisplayOp::Blank);
    }

    fn enable(&mut self, position: DigitPosition) {
        self.active[position.index()] = true;
        let count = self.active.iter().filter(|a| **a).count();
        self.max_active = self.max_active.max(count);
        let _ = self.ops.push(DisplayOp::Enable(position));
    }

    fn set_segments(&mut self, pattern: SegmentPattern) {
        let _ = self.ops.push(DisplayOp::Segments(pattern));
    }
}

// ============================================================================
// Mock Interrupt Line
// ============================================================================

/// Mock pending flag that counts acknowledgements
pub struct MockLine {
    pending: bool,
    cleared: u32,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            pending: false,
            cleared: 0,
        }
    }

    /// Simulates the peripheral raising its request
    pub fn raise(&mut self) {
        self.pending = true;
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn cleared(&self) -> u32 {
        self.cleared
    }
}

impl InterruptLine for MockLine {
    fn is_pending(&mut self) -> bool {
        self.pending
    }

    fn clear_pending(&mut self) {
        self.pending = false;
        self.cleared += 1;
    }
}
