//! Panel identity, decode outcomes, and session-level flags.

use crate::ids::{SAITEK_VENDOR_ID, product_ids};
use serde::{Deserialize, Serialize};

/// High-level category for Saitek Pro Flight USB products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelCategory {
    RadioPanel,
    MultiPanel,
    Unknown,
}

/// Identity metadata for a Pro Flight product ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelIdentity {
    pub product_id: u16,
    pub name: &'static str,
    pub category: PanelCategory,
    /// Number of 5-digit displays driven through the feature report.
    pub display_count: usize,
    pub has_indicator_lights: bool,
}

/// Identify a Pro Flight product.
pub fn identify_panel(product_id: u16) -> PanelIdentity {
    match product_id {
        product_ids::PROFLIGHT_RADIO_PANEL => PanelIdentity {
            product_id,
            name: "Saitek Pro Flight Radio Panel",
            category: PanelCategory::RadioPanel,
            display_count: 4,
            has_indicator_lights: false,
        },
        product_ids::PROFLIGHT_MULTI_PANEL => PanelIdentity {
            product_id,
            name: "Saitek Pro Flight Multi Panel",
            category: PanelCategory::MultiPanel,
            display_count: 2,
            has_indicator_lights: true,
        },
        product_ids::PROFLIGHT_SWITCH_PANEL => PanelIdentity {
            product_id,
            name: "Saitek Pro Flight Switch Panel",
            category: PanelCategory::Unknown,
            display_count: 0,
            has_indicator_lights: false,
        },
        _ => PanelIdentity {
            product_id,
            name: "Saitek unknown",
            category: PanelCategory::Unknown,
            display_count: 0,
            has_indicator_lights: false,
        },
    }
}

/// Return true when `vendor_id:product_id` is a panel this crate decodes.
pub fn is_supported_panel(vendor_id: u16, product_id: u16) -> bool {
    vendor_id == SAITEK_VENDOR_ID
        && !matches!(identify_panel(product_id).category, PanelCategory::Unknown)
}

/// Outcome of offering one raw input report to a panel state machine.
///
/// `NotOurs` is the expected pass-through outcome for reports belonging to
/// another interface and is distinct from the `TooShort` decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DecodeResult {
    /// Report matched and state was updated.
    Accepted,
    /// Report id/type belongs to something else; state untouched.
    NotOurs,
    /// Payload shorter than the wire format; state untouched.
    TooShort,
}

/// Per-session read semantics for press counters and accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResetMode {
    /// Counters keep accumulating across reads.
    #[default]
    Accumulate,
    /// Every read zeroes counters after formatting, for edge-count polling.
    ResetAfterRead,
}

impl ResetMode {
    /// Single-character form used in the text layouts.
    pub fn flag_char(self) -> char {
        match self {
            Self::Accumulate => 'N',
            Self::ResetAfterRead => 'R',
        }
    }

    /// Inverse of [`flag_char`](Self::flag_char); any other character is
    /// "leave the current mode unchanged" and yields `None`.
    pub fn from_flag_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::Accumulate),
            'R' => Some(Self::ResetAfterRead),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_known_panels() {
        let radio = identify_panel(product_ids::PROFLIGHT_RADIO_PANEL);
        assert_eq!(radio.category, PanelCategory::RadioPanel);
        assert_eq!(radio.display_count, 4);
        assert!(!radio.has_indicator_lights);

        let multi = identify_panel(product_ids::PROFLIGHT_MULTI_PANEL);
        assert_eq!(multi.category, PanelCategory::MultiPanel);
        assert_eq!(multi.display_count, 2);
        assert!(multi.has_indicator_lights);
    }

    #[test]
    fn test_switch_panel_recognized_but_unsupported() {
        let switch = identify_panel(product_ids::PROFLIGHT_SWITCH_PANEL);
        assert_eq!(switch.category, PanelCategory::Unknown);
        assert!(!is_supported_panel(
            SAITEK_VENDOR_ID,
            product_ids::PROFLIGHT_SWITCH_PANEL
        ));
    }

    #[test]
    fn test_supported_requires_saitek_vid() {
        assert!(is_supported_panel(
            SAITEK_VENDOR_ID,
            product_ids::PROFLIGHT_MULTI_PANEL
        ));
        assert!(!is_supported_panel(
            0x046D,
            product_ids::PROFLIGHT_MULTI_PANEL
        ));
    }

    #[test]
    fn test_reset_mode_flag_chars() {
        assert_eq!(ResetMode::Accumulate.flag_char(), 'N');
        assert_eq!(ResetMode::ResetAfterRead.flag_char(), 'R');
        assert_eq!(ResetMode::from_flag_char('N'), Some(ResetMode::Accumulate));
        assert_eq!(
            ResetMode::from_flag_char('R'),
            Some(ResetMode::ResetAfterRead)
        );
        assert_eq!(ResetMode::from_flag_char('x'), None);
    }
}
