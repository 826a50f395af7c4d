//! `hidapi`-backed transport
//!
//! Real-hardware implementation of the transport traits. Feature reports go
//! through `hid_send_feature_report`, which is what the panels' display and
//! indicator-light registers are driven by.

use crate::{PanelDevice, PanelDeviceInfo, PanelHidError, PanelHidResult, PanelPort};
use async_trait::async_trait;
use hidapi::HidApi;
use std::ffi::CString;
use std::sync::Mutex;
use tracing::{debug, warn};

fn info_from_hidapi(raw: &hidapi::DeviceInfo) -> PanelDeviceInfo {
    let mut info = PanelDeviceInfo::new(
        raw.vendor_id(),
        raw.product_id(),
        raw.path().to_string_lossy().into_owned(),
    );
    if let Some(serial) = raw.serial_number() {
        info = info.with_serial(serial);
    }
    if let Some(product) = raw.product_string() {
        info = info.with_product_name(product);
    }
    info
}

pub struct HidapiPanelDevice {
    device: hidapi::HidDevice,
    info: PanelDeviceInfo,
    connected: bool,
}

impl HidapiPanelDevice {
    /// Open the first device matching `vendor_id:product_id`.
    pub fn open(api: &HidApi, vendor_id: u16, product_id: u16) -> PanelHidResult<Self> {
        let info = api
            .device_list()
            .find(|d| d.vendor_id() == vendor_id && d.product_id() == product_id)
            .map(info_from_hidapi)
            .ok_or_else(|| {
                PanelHidError::DeviceNotFound(format!("{vendor_id:04x}:{product_id:04x}"))
            })?;
        let device = api
            .open(vendor_id, product_id)
            .map_err(|e| PanelHidError::Open(e.to_string()))?;
        debug!(label = %info.label(), path = %info.path, "opened panel device");
        Ok(Self {
            device,
            info,
            connected: true,
        })
    }

    /// Open a device by its platform path, as returned by enumeration.
    pub fn open_path(api: &HidApi, path: &str) -> PanelHidResult<Self> {
        let cpath =
            CString::new(path).map_err(|e| PanelHidError::Open(format!("bad path: {e}")))?;
        let device = api
            .open_path(&cpath)
            .map_err(|e| PanelHidError::Open(e.to_string()))?;
        let info = api
            .device_list()
            .find(|d| d.path().to_string_lossy() == path)
            .map(info_from_hidapi)
            .unwrap_or_else(|| PanelDeviceInfo::new(0, 0, path));
        Ok(Self {
            device,
            info,
            connected: true,
        })
    }
}

impl PanelDevice for HidapiPanelDevice {
    fn send_feature_report(&mut self, data: &[u8]) -> PanelHidResult<()> {
        if !self.connected {
            return Err(PanelHidError::Disconnected);
        }
        self.device.send_feature_report(data).map_err(|e| {
            warn!(label = %self.info.label(), error = %e, "feature report send failed");
            PanelHidError::FeatureReport(e.to_string())
        })
    }

    fn read_input_report(&mut self, timeout_ms: i32) -> PanelHidResult<Vec<u8>> {
        if !self.connected {
            return Err(PanelHidError::Disconnected);
        }
        let mut buf = [0u8; 64];
        let n = self
            .device
            .read_timeout(&mut buf, timeout_ms)
            .map_err(|e| PanelHidError::Read(e.to_string()))?;
        Ok(buf[..n].to_vec())
    }

    fn device_info(&self) -> &PanelDeviceInfo {
        &self.info
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn close(&mut self) -> PanelHidResult<()> {
        self.connected = false;
        Ok(())
    }
}

/// Enumeration port over a shared `HidApi` handle.
///
/// `HidApi` is not `Sync`, so the handle lives behind a mutex; enumeration is
/// not a hot path.
pub struct HidapiPanelPort {
    api: Mutex<HidApi>,
    vendor_filter: Option<u16>,
}

impl HidapiPanelPort {
    pub fn new() -> PanelHidResult<Self> {
        let api = HidApi::new().map_err(|e| PanelHidError::Open(e.to_string()))?;
        Ok(Self {
            api: Mutex::new(api),
            vendor_filter: None,
        })
    }

    /// Restrict enumeration to one USB vendor id.
    pub fn with_vendor_filter(mut self, vendor_id: u16) -> Self {
        self.vendor_filter = Some(vendor_id);
        self
    }
}

#[async_trait]
impl PanelPort for HidapiPanelPort {
    async fn list_panels(&self) -> PanelHidResult<Vec<PanelDeviceInfo>> {
        let mut api = self.api.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = api.refresh_devices() {
            warn!(error = %e, "device refresh failed, listing cached devices");
        }
        Ok(api
            .device_list()
            .filter(|d| self.vendor_filter.is_none_or(|v| d.vendor_id() == v))
            .map(info_from_hidapi)
            .collect())
    }

    async fn open_panel(&self, path: &str) -> PanelHidResult<Box<dyn PanelDevice>> {
        let api = self.api.lock().unwrap_or_else(|e| e.into_inner());
        let device = HidapiPanelDevice::open_path(&api, path)?;
        Ok(Box::new(device))
    }
}
