//! Outgoing feature-report encoding (display digits + indicator lights).
//!
//! All functions are pure; the caller hands the finished buffer to the
//! transport unchanged.

use crate::display::DISPLAY_DIGITS;
use crate::ids::report_ids;
use crate::multi::MultiPanelState;
use crate::radio::RadioPanelState;

/// Wire size of the multi panel feature report.
pub const MULTI_FEATURE_REPORT_LEN: usize = 13;

/// Wire size of the radio panel feature report.
pub const RADIO_FEATURE_REPORT_LEN: usize = 23;

/// Encode the multi panel feature report.
///
/// Layout (13 bytes):
/// - Byte 0: report id (`0x00`)
/// - Bytes 1..=5: upper display digit codes
/// - Bytes 6..=10: lower display digit codes
/// - Byte 11: indicator-light bitmask
/// - Byte 12: reserved, zero
pub fn build_multi_feature_report(
    state: &MultiPanelState,
    out: &mut [u8; MULTI_FEATURE_REPORT_LEN],
) -> usize {
    out.fill(0);
    out[0] = report_ids::FEATURE;
    out[1..1 + DISPLAY_DIGITS].copy_from_slice(&state.displays[0]);
    out[1 + DISPLAY_DIGITS..1 + 2 * DISPLAY_DIGITS].copy_from_slice(&state.displays[1]);
    out[11] = state.lights;
    MULTI_FEATURE_REPORT_LEN
}

/// Encode the radio panel feature report.
///
/// Layout (23 bytes):
/// - Byte 0: report id (`0x00`)
/// - Bytes 1..=20: the four displays in wire order (stack 0 active,
///   stack 0 standby, stack 1 active, stack 1 standby), 5 digit codes each
/// - Bytes 21..=22: reserved, zero (the panel has no lights)
pub fn build_radio_feature_report(
    state: &RadioPanelState,
    out: &mut [u8; RADIO_FEATURE_REPORT_LEN],
) -> usize {
    out.fill(0);
    out[0] = report_ids::FEATURE;
    for (index, display) in state.displays.iter().enumerate() {
        let start = 1 + index * DISPLAY_DIGITS;
        out[start..start + DISPLAY_DIGITS].copy_from_slice(display);
    }
    RADIO_FEATURE_REPORT_LEN
}
