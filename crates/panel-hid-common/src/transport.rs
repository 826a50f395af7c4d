//! Transport traits for panel I/O
//!
//! A `PanelDevice` is one opened panel: input reports come in, feature
//! reports (display digits, indicator lights) go out. A `PanelPort`
//! enumerates and opens panels. The `mock` module provides an in-memory
//! implementation for tests.

use crate::{PanelDeviceInfo, PanelHidError, PanelHidResult};
use async_trait::async_trait;

pub trait PanelDevice: Send {
    /// Send one outgoing feature report (display digits + lights).
    fn send_feature_report(&mut self, data: &[u8]) -> PanelHidResult<()>;

    /// Read one raw input report, waiting up to `timeout_ms`.
    fn read_input_report(&mut self, timeout_ms: i32) -> PanelHidResult<Vec<u8>>;

    fn device_info(&self) -> &PanelDeviceInfo;

    fn is_connected(&self) -> bool;

    fn close(&mut self) -> PanelHidResult<()>;
}

#[async_trait]
pub trait PanelPort: Send + Sync {
    async fn list_panels(&self) -> PanelHidResult<Vec<PanelDeviceInfo>>;

    async fn open_panel(&self, path: &str) -> PanelHidResult<Box<dyn PanelDevice>>;
}

pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// In-memory `PanelDevice` with queued input reports and a recorded
    /// feature-report history. Clones share the underlying queues, so a test
    /// can keep a handle while the session owns the boxed device.
    #[derive(Clone)]
    pub struct MockPanelDevice {
        info: PanelDeviceInfo,
        input_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
        feature_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
        fail_sends: Arc<Mutex<bool>>,
    }

    impl MockPanelDevice {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self {
                info: PanelDeviceInfo::new(vendor_id, product_id, path),
                input_queue: Arc::new(Mutex::new(VecDeque::new())),
                feature_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
                fail_sends: Arc::new(Mutex::new(false)),
            }
        }

        pub fn queue_input(&self, data: Vec<u8>) {
            let mut queue = self.input_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(data);
        }

        pub fn feature_history(&self) -> Vec<Vec<u8>> {
            let history = self
                .feature_history
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        /// Make every subsequent `send_feature_report` fail, without marking
        /// the device disconnected.
        pub fn set_send_failure(&self, fail: bool) {
            let mut flag = self.fail_sends.lock().unwrap_or_else(|e| e.into_inner());
            *flag = fail;
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }
    }

    impl PanelDevice for MockPanelDevice {
        fn send_feature_report(&mut self, data: &[u8]) -> PanelHidResult<()> {
            if !self.is_connected() {
                return Err(PanelHidError::Disconnected);
            }
            let failing = *self.fail_sends.lock().unwrap_or_else(|e| e.into_inner());
            if failing {
                return Err(PanelHidError::FeatureReport(
                    "injected send failure".to_string(),
                ));
            }
            let mut history = self
                .feature_history
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            history.push(data.to_vec());
            Ok(())
        }

        fn read_input_report(&mut self, _timeout_ms: i32) -> PanelHidResult<Vec<u8>> {
            if !self.is_connected() {
                return Err(PanelHidError::Disconnected);
            }
            let mut queue = self.input_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue
                .pop_front()
                .ok_or_else(|| PanelHidError::Read("no queued input report".to_string()))
        }

        fn device_info(&self) -> &PanelDeviceInfo {
            &self.info
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }

        fn close(&mut self) -> PanelHidResult<()> {
            self.disconnect();
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockPanelPort {
        devices: Vec<MockPanelDevice>,
    }

    impl MockPanelPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_device(&mut self, device: MockPanelDevice) {
            self.devices.push(device);
        }
    }

    #[async_trait]
    impl PanelPort for MockPanelPort {
        async fn list_panels(&self) -> PanelHidResult<Vec<PanelDeviceInfo>> {
            Ok(self
                .devices
                .iter()
                .map(|d| d.device_info().clone())
                .collect())
        }

        async fn open_panel(&self, path: &str) -> PanelHidResult<Box<dyn PanelDevice>> {
            for device in &self.devices {
                if device.device_info().path == path {
                    return Ok(Box::new(device.clone()));
                }
            }
            Err(PanelHidError::DeviceNotFound(path.to_string()))
        }
    }
}
