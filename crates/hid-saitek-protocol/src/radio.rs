//! Radio panel input-report decoding.
//!
//! The panel is two stacked, identical radio heads ("stack 0" above
//! "stack 1"). The 3-byte report carries:
//!
//! - Byte 0: stack 0 mode selector (bits 0..=6, one-hot over the seven
//!   positions), plus the first bit of stack 1's selector (bit 7 = COM1)
//! - Byte 1: the rest of stack 1's selector (bits 0..=5), then the ACT/STBY
//!   swap buttons (bit 6 = stack 0, bit 7 = stack 1)
//! - Byte 2: the dual concentric encoders, one increase/decrease bit pair
//!   per ring
//!
//! Stack 1's selector spanning the byte 0/1 boundary is an internal
//! estimate from USB captures; the mapping lives entirely in the tables
//! below so a corrected capture changes one table.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::digit::DIGIT_BLANK;
use crate::display::DISPLAY_DIGITS;
use crate::edge::{BipolarAccumulator, EdgeCounter};
use crate::ids::{INPUT_REPORT_LEN, report_ids};
use crate::types::DecodeResult;

pub const RADIO_STACK_COUNT: usize = 2;
pub const RADIO_DISPLAY_COUNT: usize = 4;

/// Bit masks of the 3-byte radio panel input report.
mod bits {
    // byte 1
    pub const SWAP_STACK0: u8 = 0x40;
    pub const SWAP_STACK1: u8 = 0x80;

    // byte 2
    pub const S0_OUTER_CW: u8 = 0x01;
    pub const S0_OUTER_CCW: u8 = 0x02;
    pub const S0_INNER_CW: u8 = 0x04;
    pub const S0_INNER_CCW: u8 = 0x08;
    pub const S1_OUTER_CW: u8 = 0x10;
    pub const S1_OUTER_CCW: u8 = 0x20;
    pub const S1_INNER_CW: u8 = 0x40;
    pub const S1_INNER_CCW: u8 = 0x80;
}

/// Position of one stack's 7-way mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadioPanelMode {
    /// No selector bit set for this stack; anomalous, see the multi panel's
    /// equivalent.
    #[default]
    None,
    Com1,
    Com2,
    Nav1,
    Nav2,
    Adf,
    Dme,
    Xpdr,
}

impl RadioPanelMode {
    /// Fixed-width 4-character abbreviation used in the text layout.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Com1 => "COM1",
            Self::Com2 => "COM2",
            Self::Nav1 => "NAV1",
            Self::Nav2 => "NAV2",
            Self::Adf => "ADF ",
            Self::Dme => "DME ",
            Self::Xpdr => "XPDR",
        }
    }
}

/// Priority-ordered (byte, mask, mode) selector tables, one per stack.
/// First match wins; COM1 outranks everything.
const STACK0_MODE_BITS: [(usize, u8, RadioPanelMode); 7] = [
    (0, 0x01, RadioPanelMode::Com1),
    (0, 0x02, RadioPanelMode::Com2),
    (0, 0x04, RadioPanelMode::Nav1),
    (0, 0x08, RadioPanelMode::Nav2),
    (0, 0x10, RadioPanelMode::Adf),
    (0, 0x20, RadioPanelMode::Dme),
    (0, 0x40, RadioPanelMode::Xpdr),
];

const STACK1_MODE_BITS: [(usize, u8, RadioPanelMode); 7] = [
    (0, 0x80, RadioPanelMode::Com1),
    (1, 0x01, RadioPanelMode::Com2),
    (1, 0x02, RadioPanelMode::Nav1),
    (1, 0x04, RadioPanelMode::Nav2),
    (1, 0x08, RadioPanelMode::Adf),
    (1, 0x10, RadioPanelMode::Dme),
    (1, 0x20, RadioPanelMode::Xpdr),
];

/// One radio head: selector, swap button, dual concentric encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStackState {
    pub mode: RadioPanelMode,
    swap: EdgeCounter,
    pub outer: BipolarAccumulator,
    pub inner: BipolarAccumulator,
}

impl RadioStackState {
    pub fn swap_pressed(&self) -> bool {
        self.swap.pressed()
    }

    pub fn swap_presses(&self) -> u8 {
        self.swap.count()
    }
}

/// Decoded and accumulated radio panel state, including the outgoing
/// display digits driven by text writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioPanelState {
    pub stacks: [RadioStackState; RADIO_STACK_COUNT],
    /// Outgoing displays in wire order: stack 0 active, stack 0 standby,
    /// stack 1 active, stack 1 standby.
    pub displays: [[u8; DISPLAY_DIGITS]; RADIO_DISPLAY_COUNT],
}

/// Index into [`RadioPanelState::displays`] for one stack's active or
/// standby window.
pub fn display_index(stack: usize, standby: bool) -> usize {
    stack * 2 + usize::from(standby)
}

impl Default for RadioPanelState {
    fn default() -> Self {
        Self {
            stacks: [RadioStackState::default(), RadioStackState::default()],
            displays: [[DIGIT_BLANK; DISPLAY_DIGITS]; RADIO_DISPLAY_COUNT],
        }
    }
}

impl RadioPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one raw input report; acceptance rules match the multi panel.
    pub fn apply_report(&mut self, report_id: u8, report_type: u8, data: &[u8]) -> DecodeResult {
        if report_id != report_ids::INPUT || report_type != report_ids::INPUT_TYPE {
            return DecodeResult::NotOurs;
        }
        let Some(raw) = data.get(..INPUT_REPORT_LEN) else {
            return DecodeResult::TooShort;
        };

        self.stacks[0].swap.update(raw[1] & bits::SWAP_STACK0 != 0);
        self.stacks[1].swap.update(raw[1] & bits::SWAP_STACK1 != 0);

        self.stacks[0].outer.update(
            raw[2] & bits::S0_OUTER_CW != 0,
            raw[2] & bits::S0_OUTER_CCW != 0,
        );
        self.stacks[0].inner.update(
            raw[2] & bits::S0_INNER_CW != 0,
            raw[2] & bits::S0_INNER_CCW != 0,
        );
        self.stacks[1].outer.update(
            raw[2] & bits::S1_OUTER_CW != 0,
            raw[2] & bits::S1_OUTER_CCW != 0,
        );
        self.stacks[1].inner.update(
            raw[2] & bits::S1_INNER_CW != 0,
            raw[2] & bits::S1_INNER_CCW != 0,
        );

        self.stacks[0].mode = resolve_mode(raw, &STACK0_MODE_BITS, 0);
        self.stacks[1].mode = resolve_mode(raw, &STACK1_MODE_BITS, 1);

        DecodeResult::Accepted
    }

    /// Zero the swap counters and all four encoder accumulators
    /// (reset-after-read). Displays and selector state stay put.
    pub fn reset_counters(&mut self) {
        for stack in &mut self.stacks {
            stack.swap.reset();
            stack.outer.reset();
            stack.inner.reset();
        }
    }
}

fn resolve_mode(
    raw: &[u8],
    table: &[(usize, u8, RadioPanelMode); 7],
    stack: usize,
) -> RadioPanelMode {
    for &(byte, mask, mode) in table {
        if raw.get(byte).is_some_and(|b| b & mask != 0) {
            return mode;
        }
    }
    warn!(stack, "radio panel report carries no mode selector bit");
    RadioPanelMode::None
}
