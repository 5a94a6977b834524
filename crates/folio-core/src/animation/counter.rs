//! Linear step counter for the about-section stats.

use std::time::Duration;

/// Number of ticks a counter takes to reach its target.
pub const COUNTER_STEPS: u32 = 50;

/// Interval between counter ticks.
pub const COUNTER_TICK: Duration = Duration::from_millis(30);

/// Counts from zero to `target` in [`COUNTER_STEPS`] equal increments.
///
/// The displayed value is the floor of the accumulated value until the
/// accumulated value reaches the target, at which point it is clamped to the
/// target exactly and the counter finishes. No easing.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    current: f64,
    target: u32,
    increment: f64,
    suffix: String,
    finished: bool,
}

impl Counter {
    pub fn new(target: u32, suffix: impl Into<String>) -> Self {
        Self {
            current: 0.0,
            target,
            increment: f64::from(target) / f64::from(COUNTER_STEPS),
            suffix: suffix.into(),
            finished: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value currently on display.
    pub fn value(&self) -> u32 {
        if self.finished {
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    /// Display text, suffix included.
    pub fn text(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }

    /// Run one tick. Returns the new displayed value.
    pub fn advance(&mut self) -> u32 {
        if !self.finished {
            self.current += self.increment;
            if self.current >= f64::from(self.target) {
                self.finished = true;
            }
        }
        self.value()
    }

    /// Run up to `ticks` ticks, stopping early once finished.
    pub fn advance_by(&mut self, ticks: usize) -> u32 {
        for _ in 0..ticks {
            if self.finished {
                break;
            }
            self.advance();
        }
        self.value()
    }
}

/// Yields the displayed value of each remaining tick.
impl Iterator for Counter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        Some(self.advance())
    }
}
