//! Common HID utilities for flight-panel protocol implementations
//!
//! This crate provides the plumbing shared by the panel protocol and session
//! crates: device metadata, the transport traits a panel session talks
//! through, a mock transport for tests, and a `hidapi`-backed transport for
//! real hardware.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod device_info;
pub mod transport;

pub use device_info::*;
pub use transport::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelHidError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    Open(String),

    #[error("Failed to read input report: {0}")]
    Read(String),

    #[error("Failed to send feature report: {0}")]
    FeatureReport(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PanelHidResult<T> = Result<T, PanelHidError>;
