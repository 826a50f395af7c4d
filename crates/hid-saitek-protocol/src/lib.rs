//! Saitek Pro Flight panel HID protocol: input-report decoding, display digit
//! codec, text-state serialization, and feature-report encoding.
//!
//! This crate is intentionally I/O-free. It provides pure functions and
//! mutable state types that can be tested without hardware or OS-level HID
//! plumbing; the transport and per-device locking live in the companion
//! `flight-panel-hid-common` and `flight-panel-session` crates.
//!
//! Two panels are covered:
//!
//! * **Multi panel** (autopilot panel, PID `0x0D06`): 8 momentary buttons
//!   with press counters, a 5-way mode selector, an auto-throttle arm
//!   switch, three rocker/encoder accumulators, two 5-digit displays and
//!   8 indicator lights.
//! * **Radio panel** (PID `0x0D05`): two radio stacks, each with a 7-way
//!   mode selector, an ACT/STBY swap button and a dual concentric encoder,
//!   plus four 5-digit displays.
//!
//! ## Wire-format verification status
//!
//! **VID/PID:** VID `0x06A3` (Saitek/Mad Catz) and the radio/multi panel
//! PIDs are confirmed in the Linux kernel (`drivers/hid/hid-ids.h`,
//! `USB_VENDOR_ID_SAITEK`) and community udev rule sets for the Pro Flight
//! series.
//!
//! **Input report layout:** the 3-byte button/encoder layouts in
//! [`multi`] and [`radio`] follow community USB captures of the panels.
//! The radio panel's second mode selector spans the byte 0 / byte 1
//! boundary; that mapping is an internal estimate and is kept behind named
//! mask constants in `radio.rs` so a capture can correct it in one place.
//!
//! **Feature report layout:** report id 0, raw display digit codes, then
//! the light bitmask (multi panel only); sizes 13 (multi) and 23 (radio)
//! bytes as required by the hardware.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod digit;
pub mod display;
pub mod edge;
pub mod ids;
pub mod multi;
pub mod output;
pub mod radio;
pub mod text;
pub mod types;

pub use digit::{DIGIT_BLANK, DIGIT_DOT, DIGIT_MINUS, decode_char, encode_char};
pub use display::{
    DISPLAY_DIGITS, DISPLAY_TEXT_MAX, format_display, format_display_padded, parse_display,
};
pub use edge::{BipolarAccumulator, ENCODER_BOUND, EdgeCounter, PRESS_COUNT_MAX};
pub use ids::{INPUT_REPORT_LEN, SAITEK_VENDOR_ID, product_ids, report_ids};
pub use multi::{MULTI_BUTTON_COUNT, MULTI_DISPLAY_COUNT, MultiPanelButton, MultiPanelMode, MultiPanelState};
pub use output::{
    MULTI_FEATURE_REPORT_LEN, RADIO_FEATURE_REPORT_LEN, build_multi_feature_report,
    build_radio_feature_report,
};
pub use radio::{RADIO_DISPLAY_COUNT, RADIO_STACK_COUNT, RadioPanelMode, RadioPanelState, RadioStackState};
pub use text::{
    MULTI_WRITE_LEN, RADIO_WRITE_LEN, TextFormatError, format_multi, format_radio, parse_multi,
    parse_radio,
};
pub use types::{DecodeResult, PanelCategory, PanelIdentity, ResetMode, identify_panel, is_supported_panel};
