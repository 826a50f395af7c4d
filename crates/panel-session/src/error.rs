//! Session-level error type.

use flight_panel_hid_common::PanelHidError;
use flight_panel_hid_saitek_protocol::TextFormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("text payload rejected: {0}")]
    Format(#[from] TextFormatError),

    /// The in-memory state was already updated when transmission failed;
    /// memory and device diverge until the next successful write.
    #[error("feature report transmission failed: {0}")]
    Transmit(#[from] PanelHidError),

    #[error("product id {0:#06x} is not a panel this crate drives")]
    UnsupportedProduct(u16),
}

pub type SessionResult<T> = Result<T, SessionError>;
