//! The per-device panel session.

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::error::{SessionError, SessionResult};
use flight_panel_hid_common::PanelDevice;
use flight_panel_hid_saitek_protocol::{
    DecodeResult, MULTI_FEATURE_REPORT_LEN, MultiPanelState, PanelCategory, PanelIdentity,
    RADIO_FEATURE_REPORT_LEN, RadioPanelState, ResetMode, build_multi_feature_report,
    build_radio_feature_report, format_multi, format_radio, identify_panel, parse_multi,
    parse_radio,
};

/// The two incompatible panel state layouts behind one tag. Every call site
/// matches exhaustively; one panel's bytes can never be read as the other's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Multi(MultiPanelState),
    Radio(RadioPanelState),
}

impl Panel {
    fn apply_report(&mut self, report_id: u8, report_type: u8, data: &[u8]) -> DecodeResult {
        match self {
            Self::Multi(state) => state.apply_report(report_id, report_type, data),
            Self::Radio(state) => state.apply_report(report_id, report_type, data),
        }
    }

    fn reset_counters(&mut self) {
        match self {
            Self::Multi(state) => state.reset_counters(),
            Self::Radio(state) => state.reset_counters(),
        }
    }

    fn render(&self, mode: ResetMode) -> String {
        match self {
            Self::Multi(state) => format_multi(state, mode),
            Self::Radio(state) => format_radio(state, mode),
        }
    }

    fn build_feature_report(&self) -> Vec<u8> {
        match self {
            Self::Multi(state) => {
                let mut out = [0u8; MULTI_FEATURE_REPORT_LEN];
                build_multi_feature_report(state, &mut out);
                out.to_vec()
            }
            Self::Radio(state) => {
                let mut out = [0u8; RADIO_FEATURE_REPORT_LEN];
                build_radio_feature_report(state, &mut out);
                out.to_vec()
            }
        }
    }
}

struct SessionState {
    panel: Panel,
    reset_mode: ResetMode,
}

/// One attached panel: decoded state and reset-mode flag behind a
/// reader/writer lock, plus the outgoing transport behind its own mutex.
///
/// The state lock is never held across a transport write; a feature report
/// is assembled under the state lock and transmitted after it is released.
/// Sessions are independent — no cross-session ordering exists to deadlock
/// on.
pub struct PanelSession {
    identity: PanelIdentity,
    state: RwLock<SessionState>,
    transport: Mutex<Box<dyn PanelDevice>>,
}

impl PanelSession {
    pub fn new(identity: PanelIdentity, panel: Panel, transport: Box<dyn PanelDevice>) -> Self {
        Self {
            identity,
            state: RwLock::new(SessionState {
                panel,
                reset_mode: ResetMode::default(),
            }),
            transport: Mutex::new(transport),
        }
    }

    /// Build a session for whatever panel the transport identifies as.
    ///
    /// The device is dropped (and thereby closed) when its product id is not
    /// one this crate drives.
    pub fn attach(transport: Box<dyn PanelDevice>) -> SessionResult<Self> {
        let product_id = transport.device_info().product_id;
        let identity = identify_panel(product_id);
        let panel = match identity.category {
            PanelCategory::MultiPanel => Panel::Multi(MultiPanelState::new()),
            PanelCategory::RadioPanel => Panel::Radio(RadioPanelState::new()),
            PanelCategory::Unknown => return Err(SessionError::UnsupportedProduct(product_id)),
        };
        debug!(panel = identity.name, "attached panel session");
        Ok(Self::new(identity, panel, transport))
    }

    pub fn identity(&self) -> &PanelIdentity {
        &self.identity
    }

    /// Offer one raw input report; exclusive access for the duration of the
    /// decode.
    pub fn deliver_report(&self, report_id: u8, report_type: u8, data: &[u8]) -> DecodeResult {
        let mut state = self.state.write();
        let result = state.panel.apply_report(report_id, report_type, data);
        if result == DecodeResult::TooShort {
            warn!(
                panel = self.identity.name,
                len = data.len(),
                "input report shorter than wire format"
            );
        }
        result
    }

    /// Render the panel state as its fixed-field text line.
    ///
    /// Shared access in accumulate mode. In reset-after-read mode the read
    /// zeroes every counter after formatting, so it takes the writer lock;
    /// the flag is re-checked there since it may change between locks.
    pub fn format_state(&self) -> String {
        {
            let state = self.state.read();
            if state.reset_mode == ResetMode::Accumulate {
                return state.panel.render(state.reset_mode);
            }
        }

        let mut state = self.state.write();
        let text = state.panel.render(state.reset_mode);
        if state.reset_mode == ResetMode::ResetAfterRead {
            state.panel.reset_counters();
        }
        text
    }

    /// Apply a text write: parse displays/lights/flag, then build the
    /// feature report and hand it to the transport.
    ///
    /// A transmission failure surfaces as [`SessionError::Transmit`] after
    /// the in-memory state was already updated; there is no rollback.
    pub fn write_state(&self, buf: &[u8]) -> SessionResult<usize> {
        let (consumed, report) = {
            let mut state = self.state.write();
            let SessionState { panel, reset_mode } = &mut *state;
            let consumed = match panel {
                Panel::Multi(multi) => parse_multi(multi, reset_mode, buf)?,
                Panel::Radio(radio) => parse_radio(radio, reset_mode, buf)?,
            };
            (consumed, state.panel.build_feature_report())
        };

        let mut transport = self.transport.lock();
        if let Err(e) = transport.send_feature_report(&report) {
            warn!(panel = self.identity.name, error = %e, "feature report transmission failed");
            return Err(e.into());
        }
        Ok(consumed)
    }
}
