//! Debounced persistence of window geometry and sidebar width.
//!
//! A configure event arms a single deadline. Further events while it is
//! armed only replace the pending values, so a burst of resizes ends in one
//! write.

use crate::kernel::services::ports::{SettingKey, SettingValue, SettingsStore, WindowGeometry};
use crate::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub geometry: WindowGeometry,
    pub sidebar_width: i32,
}

impl WindowState {
    pub fn load(store: &dyn SettingsStore) -> Self {
        let geometry = match store.get(SettingKey::WindowGeometry) {
            SettingValue::WindowGeometry(geometry) => geometry,
            SettingValue::Int(_) => WindowGeometry::default(),
        };
        let sidebar_width = match store.get(SettingKey::SidebarWidth) {
            SettingValue::Int(width) => width,
            SettingValue::WindowGeometry(_) => {
                crate::kernel::services::ports::settings::DEFAULT_SIDEBAR_WIDTH
            }
        };
        Self {
            geometry,
            sidebar_width,
        }
    }
}

pub struct WindowStateSaver {
    debounce: Duration,
    deadline: Option<Instant>,
    pending: Option<WindowState>,
}

impl WindowStateSaver {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            deadline: None,
            pending: None,
        }
    }

    pub fn on_configure(&mut self, state: WindowState, now: Instant) {
        self.pending = Some(state);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.debounce);
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Writes the pending state once the deadline has passed.
    pub fn poll(&mut self, now: Instant, store: &mut dyn SettingsStore) -> Result<bool> {
        let Some(deadline) = self.deadline else {
            return Ok(false);
        };
        if now < deadline {
            return Ok(false);
        }
        self.flush(store)
    }

    /// Writes the pending state immediately.
    pub fn flush(&mut self, store: &mut dyn SettingsStore) -> Result<bool> {
        self.deadline = None;
        let Some(state) = self.pending.take() else {
            return Ok(false);
        };
        store.set(
            SettingKey::WindowGeometry,
            SettingValue::WindowGeometry(state.geometry),
        )?;
        store.set(SettingKey::SidebarWidth, SettingValue::Int(state.sidebar_width))?;
        tracing::debug!(?state, "window state saved");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/window_state.rs"]
mod tests;
