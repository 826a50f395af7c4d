//! Multi panel (autopilot panel) input-report decoding.
//!
//! The panel sends a 3-byte report on every control change:
//!
//! - Byte 0: mode selector knob (bits 0..=4, one-hot), KNOB rocker
//!   clockwise/counter-clockwise (bits 5/6), AP button (bit 7)
//! - Byte 1: function buttons HDG NAV IAS ALT VS APR REV (bits 0..=6),
//!   auto-throttle arm switch (bit 7)
//! - Byte 2: FLAPS rocker up/down (bits 0/1), pitch-trim wheel
//!   down/up (bits 2/3)
//!
//! Buttons are level-reported; the state machine edge-counts them so a held
//! button registers one press per physical push.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::digit::DIGIT_BLANK;
use crate::display::DISPLAY_DIGITS;
use crate::edge::{BipolarAccumulator, EdgeCounter};
use crate::ids::{INPUT_REPORT_LEN, report_ids};
use crate::types::DecodeResult;

pub const MULTI_BUTTON_COUNT: usize = 8;
pub const MULTI_DISPLAY_COUNT: usize = 2;

/// Bit masks of the 3-byte multi panel input report.
mod bits {
    // byte 0
    pub const MODE_ALT: u8 = 0x01;
    pub const MODE_VS: u8 = 0x02;
    pub const MODE_IAS: u8 = 0x04;
    pub const MODE_HDG: u8 = 0x08;
    pub const MODE_CRS: u8 = 0x10;
    pub const KNOB_CW: u8 = 0x20;
    pub const KNOB_CCW: u8 = 0x40;
    pub const BTN_AP: u8 = 0x80;

    // byte 1
    pub const BTN_HDG: u8 = 0x01;
    pub const BTN_NAV: u8 = 0x02;
    pub const BTN_IAS: u8 = 0x04;
    pub const BTN_ALT: u8 = 0x08;
    pub const BTN_VS: u8 = 0x10;
    pub const BTN_APR: u8 = 0x20;
    pub const BTN_REV: u8 = 0x40;
    pub const AUTO_THROTTLE: u8 = 0x80;

    // byte 2
    pub const FLAPS_UP: u8 = 0x01;
    pub const FLAPS_DOWN: u8 = 0x02;
    pub const TRIM_DOWN: u8 = 0x04;
    pub const TRIM_UP: u8 = 0x08;
}

/// Position of the mode selector knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MultiPanelMode {
    /// No selector bit set in the report. The physical knob always rests on
    /// one position, so this is an anomaly worth a diagnostic, not an error.
    #[default]
    None,
    Alt,
    Vs,
    Ias,
    Hdg,
    Crs,
}

impl MultiPanelMode {
    /// Fixed-width 4-character abbreviation used in the text layout.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Alt => "ALT ",
            Self::Vs => "VS  ",
            Self::Ias => "IAS ",
            Self::Hdg => "HDG ",
            Self::Crs => "CRS ",
        }
    }
}

/// The eight edge-counted buttons, in report and light-bitmask order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiPanelButton {
    Hdg,
    Nav,
    Ias,
    Alt,
    Vs,
    Apr,
    Rev,
    Ap,
}

impl MultiPanelButton {
    pub const ALL: [MultiPanelButton; MULTI_BUTTON_COUNT] = [
        Self::Hdg,
        Self::Nav,
        Self::Ias,
        Self::Alt,
        Self::Vs,
        Self::Apr,
        Self::Rev,
        Self::Ap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hdg => "HDG",
            Self::Nav => "NAV",
            Self::Ias => "IAS",
            Self::Alt => "ALT",
            Self::Vs => "VS",
            Self::Apr => "APR",
            Self::Rev => "REV",
            Self::Ap => "AP",
        }
    }

    /// (report byte, mask) carrying this button's level.
    fn source(self) -> (usize, u8) {
        match self {
            Self::Hdg => (1, bits::BTN_HDG),
            Self::Nav => (1, bits::BTN_NAV),
            Self::Ias => (1, bits::BTN_IAS),
            Self::Alt => (1, bits::BTN_ALT),
            Self::Vs => (1, bits::BTN_VS),
            Self::Apr => (1, bits::BTN_APR),
            Self::Rev => (1, bits::BTN_REV),
            Self::Ap => (0, bits::BTN_AP),
        }
    }
}

/// Decoded and accumulated multi panel state, including the outgoing
/// display digits and indicator-light bitmask driven by text writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiPanelState {
    pub mode: MultiPanelMode,
    buttons: [EdgeCounter; MULTI_BUTTON_COUNT],
    /// Auto-throttle arm switch level. A latching toggle, so a press count
    /// would double-report; the level is the state.
    pub autothrottle: bool,
    pub knob: BipolarAccumulator,
    pub flaps: BipolarAccumulator,
    pub trim: BipolarAccumulator,
    /// Outgoing displays: 0 = upper, 1 = lower.
    pub displays: [[u8; DISPLAY_DIGITS]; MULTI_DISPLAY_COUNT],
    /// Indicator-light bitmask, bit per [`MultiPanelButton`] in `ALL` order.
    pub lights: u8,
}

impl Default for MultiPanelState {
    fn default() -> Self {
        Self {
            mode: MultiPanelMode::None,
            buttons: [EdgeCounter::default(); MULTI_BUTTON_COUNT],
            autothrottle: false,
            knob: BipolarAccumulator::default(),
            flaps: BipolarAccumulator::default(),
            trim: BipolarAccumulator::default(),
            displays: [[DIGIT_BLANK; DISPLAY_DIGITS]; MULTI_DISPLAY_COUNT],
            lights: 0,
        }
    }
}

impl MultiPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one raw input report.
    ///
    /// Reports whose id/type differ from the panel default pass through as
    /// [`DecodeResult::NotOurs`]; a payload under 3 bytes is
    /// [`DecodeResult::TooShort`] and leaves the state untouched.
    pub fn apply_report(&mut self, report_id: u8, report_type: u8, data: &[u8]) -> DecodeResult {
        if report_id != report_ids::INPUT || report_type != report_ids::INPUT_TYPE {
            return DecodeResult::NotOurs;
        }
        let Some(raw) = data.get(..INPUT_REPORT_LEN) else {
            return DecodeResult::TooShort;
        };

        for button in MultiPanelButton::ALL {
            let (byte, mask) = button.source();
            self.buttons[button as usize].update(raw[byte] & mask != 0);
        }
        self.autothrottle = raw[1] & bits::AUTO_THROTTLE != 0;

        self.mode = resolve_mode(raw[0]);

        self.knob
            .update(raw[0] & bits::KNOB_CW != 0, raw[0] & bits::KNOB_CCW != 0);
        self.flaps
            .update(raw[2] & bits::FLAPS_UP != 0, raw[2] & bits::FLAPS_DOWN != 0);
        self.trim
            .update(raw[2] & bits::TRIM_UP != 0, raw[2] & bits::TRIM_DOWN != 0);

        DecodeResult::Accepted
    }

    pub fn button_pressed(&self, button: MultiPanelButton) -> bool {
        self.buttons[button as usize].pressed()
    }

    pub fn button_presses(&self, button: MultiPanelButton) -> u8 {
        self.buttons[button as usize].count()
    }

    pub fn light(&self, index: usize) -> bool {
        index < MULTI_BUTTON_COUNT && self.lights & (1 << index) != 0
    }

    pub fn set_light(&mut self, index: usize, on: bool) {
        if index >= MULTI_BUTTON_COUNT {
            return;
        }
        if on {
            self.lights |= 1 << index;
        } else {
            self.lights &= !(1 << index);
        }
    }

    /// Zero all press counters and accumulators (reset-after-read).
    /// Display, light, level-flag and mode state stay put.
    pub fn reset_counters(&mut self) {
        for counter in &mut self.buttons {
            counter.reset();
        }
        self.knob.reset();
        self.flaps.reset();
        self.trim.reset();
    }
}

/// First matching selector bit wins, in ALT VS IAS HDG CRS priority order.
fn resolve_mode(byte0: u8) -> MultiPanelMode {
    const PRIORITY: [(u8, MultiPanelMode); 5] = [
        (bits::MODE_ALT, MultiPanelMode::Alt),
        (bits::MODE_VS, MultiPanelMode::Vs),
        (bits::MODE_IAS, MultiPanelMode::Ias),
        (bits::MODE_HDG, MultiPanelMode::Hdg),
        (bits::MODE_CRS, MultiPanelMode::Crs),
    ];
    for (mask, mode) in PRIORITY {
        if byte0 & mask != 0 {
            return mode;
        }
    }
    warn!("multi panel report carries no mode selector bit");
    MultiPanelMode::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(state: &mut MultiPanelState, data: [u8; 3]) -> DecodeResult {
        state.apply_report(report_ids::INPUT, report_ids::INPUT_TYPE, &data)
    }

    #[test]
    fn test_alt_mode_only() {
        let mut state = MultiPanelState::new();
        assert_eq!(decode(&mut state, [0x01, 0x00, 0x00]), DecodeResult::Accepted);

        assert_eq!(state.mode, MultiPanelMode::Alt);
        for button in MultiPanelButton::ALL {
            assert!(!state.button_pressed(button));
            assert_eq!(state.button_presses(button), 0);
        }
        assert_eq!(state.knob.value(), 0);
        assert_eq!(state.flaps.value(), 0);
        assert_eq!(state.trim.value(), 0);
    }

    #[test]
    fn test_mode_priority_alt_beats_vs() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [bits::MODE_ALT | bits::MODE_VS, 0x00, 0x00]);
        assert_eq!(state.mode, MultiPanelMode::Alt);
    }

    #[test]
    fn test_mode_none_when_no_bit_set() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        assert_eq!(state.mode, MultiPanelMode::None);
    }

    #[test]
    fn test_hdg_presses_count_edges_not_reports() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [0x00, 0x01, 0x00]);
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        let _ = decode(&mut state, [0x00, 0x01, 0x00]);

        assert_eq!(state.button_presses(MultiPanelButton::Hdg), 2);
        assert!(state.button_pressed(MultiPanelButton::Hdg));
    }

    #[test]
    fn test_identical_reports_are_stable() {
        let mut state = MultiPanelState::new();
        let report = [bits::MODE_IAS | bits::BTN_AP, bits::BTN_NAV, bits::FLAPS_UP];
        let _ = decode(&mut state, report);
        let snapshot = state.clone();
        let _ = decode(&mut state, report);

        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_ap_button_lives_in_byte0() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [bits::BTN_AP, 0x00, 0x00]);
        assert!(state.button_pressed(MultiPanelButton::Ap));
        assert_eq!(state.button_presses(MultiPanelButton::Ap), 1);
    }

    #[test]
    fn test_autothrottle_is_level_not_counted() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [0x00, bits::AUTO_THROTTLE, 0x00]);
        assert!(state.autothrottle);
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        assert!(!state.autothrottle);
    }

    #[test]
    fn test_rockers_accumulate() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [0x00, 0x00, bits::FLAPS_UP]);
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        let _ = decode(&mut state, [0x00, 0x00, bits::FLAPS_UP]);
        let _ = decode(&mut state, [0x00, 0x00, bits::TRIM_DOWN]);
        let _ = decode(&mut state, [0x00, bits::AUTO_THROTTLE, bits::TRIM_DOWN]);

        assert_eq!(state.flaps.value(), 2);
        assert_eq!(state.trim.value(), -1);
    }

    #[test]
    fn test_knob_rocker_both_directions() {
        let mut state = MultiPanelState::new();
        let _ = decode(&mut state, [bits::KNOB_CW, 0x00, 0x00]);
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        let _ = decode(&mut state, [bits::KNOB_CCW, 0x00, 0x00]);
        let _ = decode(&mut state, [0x00, 0x00, 0x00]);
        let _ = decode(&mut state, [bits::KNOB_CCW, 0x00, 0x00]);

        assert_eq!(state.knob.value(), -1);
    }

    #[test]
    fn test_foreign_report_passes_through() {
        let mut state = MultiPanelState::new();
        let result = state.apply_report(0x01, report_ids::INPUT_TYPE, &[0xFF, 0xFF, 0xFF]);
        assert_eq!(result, DecodeResult::NotOurs);
        assert_eq!(state, MultiPanelState::default());

        let result = state.apply_report(report_ids::INPUT, 0x02, &[0xFF, 0xFF, 0xFF]);
        assert_eq!(result, DecodeResult::NotOurs);
    }

    #[test]
    fn test_short_report_rejected_without_mutation() {
        let mut state = MultiPanelState::new();
        let result = state.apply_report(report_ids::INPUT, report_ids::INPUT_TYPE, &[0x01, 0x02]);
        assert_eq!(result, DecodeResult::TooShort);
        assert_eq!(state, MultiPanelState::default());
    }

    #[test]
    fn test_light_bitmask_helpers() {
        let mut state = MultiPanelState::new();
        state.set_light(0, true);
        state.set_light(7, true);
        assert!(state.light(0));
        assert!(state.light(7));
        assert_eq!(state.lights, 0x81);

        state.set_light(0, false);
        assert_eq!(state.lights, 0x80);

        // out of range is a no-op
        state.set_light(8, true);
        assert_eq!(state.lights, 0x80);
        assert!(!state.light(8));
    }
}
