//! Saitek Pro Flight USB vendor and product ID constants.
//!
//! ## Verification status
//!
//! | Field | Status | Source |
//! |-------|--------|--------|
//! | VID 0x06A3 | Confirmed | Linux kernel `hid-ids.h` (`USB_VENDOR_ID_SAITEK`), usb-ids.gowdy.us |
//! | Radio panel PID 0x0D05 | Confirmed (community) | Pro Flight udev rule sets, X-Plane/FSX plugin sources |
//! | Multi panel PID 0x0D06 | Confirmed (community) | Pro Flight udev rule sets, X-Plane/FSX plugin sources |
//! | Switch panel PID 0x0D67 | Confirmed (community) | Pro Flight udev rule sets; recognized here but not driven |
//!
//! The panels predate the Logitech acquisition of Saitek; devices relabelled
//! by Logitech keep the Saitek VID and PIDs.

/// Saitek (Mad Catz) USB Vendor ID.
///
/// Source: Linux kernel `hid-ids.h` (`USB_VENDOR_ID_SAITEK`).
pub const SAITEK_VENDOR_ID: u16 = 0x06A3;

/// Known Pro Flight panel product IDs.
pub mod product_ids {
    /// Pro Flight Radio Panel: two radio stacks, four 5-digit displays.
    pub const PROFLIGHT_RADIO_PANEL: u16 = 0x0D05;

    /// Pro Flight Multi Panel: autopilot buttons, two 5-digit displays,
    /// indicator lights.
    pub const PROFLIGHT_MULTI_PANEL: u16 = 0x0D06;

    /// Pro Flight Switch Panel. Same product family, but it has no digit
    /// displays and a different report layout; recognized so enumeration can
    /// name it, not driven by this crate.
    pub const PROFLIGHT_SWITCH_PANEL: u16 = 0x0D67;
}

/// HID report IDs used by both panels.
pub mod report_ids {
    /// Numbered id carried by incoming button/encoder reports. The panels
    /// use the unnumbered default.
    pub const INPUT: u8 = 0x00;

    /// Report type tag delivered alongside the id; the default input type.
    pub const INPUT_TYPE: u8 = 0x00;

    /// Outgoing feature report id (display digits + lights).
    pub const FEATURE: u8 = 0x00;
}

/// Wire size of one incoming button/encoder report, both panels.
pub const INPUT_REPORT_LEN: usize = 3;
