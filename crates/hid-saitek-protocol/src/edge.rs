//! Edge-triggered press counters and saturating encoder accumulators.
//!
//! The panels report level state, not events: a held button stays set in
//! every report, and a detent of encoder rotation pulses a direction bit
//! across one or more consecutive reports. Both types here remember the
//! previous level of each signal so that only the inactive→active edge
//! steps the counter. One implementation, invoked per field.

use serde::{Deserialize, Serialize};

/// Upper bound of a button press counter.
pub const PRESS_COUNT_MAX: u8 = 9;

/// Saturation bound of an encoder/rocker accumulator.
pub const ENCODER_BOUND: i8 = 99;

/// Rising-edge press counter, clamped to `0..=PRESS_COUNT_MAX`.
///
/// The count never decrements on its own; [`EdgeCounter::reset`] is the only
/// way down, and it preserves the level flag so a held button does not
/// produce a phantom edge on the next report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCounter {
    active: bool,
    count: u8,
}

impl EdgeCounter {
    /// Feed the current level; returns true on a rising edge.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.active;
        self.active = level;
        if rising && self.count < PRESS_COUNT_MAX {
            self.count += 1;
        }
        rising
    }

    pub fn pressed(&self) -> bool {
        self.active
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Signed accumulator driven by an increase/decrease signal pair, clamped to
/// `-ENCODER_BOUND..=ENCODER_BOUND`. Saturates at the bound, never wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BipolarAccumulator {
    cw_active: bool,
    ccw_active: bool,
    value: i8,
}

impl BipolarAccumulator {
    /// Feed the current levels of both direction signals. Each rising edge
    /// steps the value by one in its direction; simultaneous edges cancel.
    pub fn update(&mut self, cw: bool, ccw: bool) {
        if cw && !self.cw_active && self.value < ENCODER_BOUND {
            self.value += 1;
        }
        self.cw_active = cw;
        if ccw && !self.ccw_active && self.value > -ENCODER_BOUND {
            self.value -= 1;
        }
        self.ccw_active = ccw;
    }

    pub fn value(&self) -> i8 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
