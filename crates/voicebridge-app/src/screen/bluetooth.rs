//! Device pairing screen.
//!
//! Scans for a fixed time after being entered, then offers a rescan. Scanning
//! is cosmetic: the device list always comes from the store.

use voicebridge_core::{DeviceStatus, ViewState};

use crate::{AppAction, KeyInput, ScreenContext};

/// How long a scan lasts, in milliseconds.
pub const SCAN_DURATION_MS: u64 = 5_000;

/// Device list with a selection cursor and a scan timer.
#[derive(Debug, Clone, Default)]
pub struct BluetoothScreen {
    selected: usize,
    scan_until_ms: Option<u64>,
}

impl BluetoothScreen {
    /// Create the screen. Scanning starts when the router enters it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted device.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether a scan is in progress.
    pub fn is_scanning(&self) -> bool {
        self.scan_until_ms.is_some()
    }

    /// Start a scan that ends [`SCAN_DURATION_MS`] after `now_ms`.
    pub fn start_scan(&mut self, now_ms: u64) {
        tracing::debug!("bluetooth scan started");
        self.scan_until_ms = Some(now_ms.saturating_add(SCAN_DURATION_MS));
    }

    /// Finish the scan once its time is up.
    pub fn tick(&mut self, now_ms: u64) -> Vec<AppAction> {
        match self.scan_until_ms {
            Some(until) if now_ms >= until => {
                self.scan_until_ms = None;
                tracing::debug!("bluetooth scan complete");
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    pub(crate) fn reset(&mut self) {
        self.selected = 0;
        self.scan_until_ms = None;
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyInput,
        ctx: &mut ScreenContext<'_>,
    ) -> Vec<AppAction> {
        let device_count = ctx.store.state().devices.len();

        match key {
            KeyInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.selected = (self.selected + 1).min(device_count.saturating_sub(1));
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                let Some(device) = ctx.store.state().devices.get(self.selected) else {
                    return vec![];
                };
                if device.status == DeviceStatus::Connected {
                    return vec![];
                }
                let device_id = device.id.clone();
                tracing::info!(%device_id, "connect requested");
                ctx.store.connect_device(device_id)
            },
            KeyInput::Char('r') if !self.is_scanning() => {
                self.start_scan(ctx.now_ms);
                vec![AppAction::Render]
            },
            KeyInput::Esc => ctx.store.set_view(ViewState::Settings),
            _ => vec![],
        }
    }
}
