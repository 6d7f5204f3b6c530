use super::Workbench;
use crate::kernel::services::bus::KernelMessage;
use crate::kernel::services::ports::{RenderSurface, ScriptRequest};
use crate::Result;
use std::sync::mpsc::TryRecvError;
use std::time::Instant;

impl<S: RenderSurface> Workbench<S> {
    /// One turn of the event loop. Returns whether anything changed.
    ///
    /// A failed save stops the turn; the remaining messages are handled on
    /// the next one.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        let mut changed = false;
        changed |= self.poll_kernel_bus()?;
        changed |= self.sidebar.poll_buffer_events();
        changed |= self.poll_watcher();
        changed |= self.window_state.poll(now, self.settings.as_mut())?;
        Ok(changed)
    }

    fn poll_kernel_bus(&mut self) -> Result<bool> {
        let mut changed = false;
        loop {
            match self.bus_rx.try_recv() {
                Ok(KernelMessage::ScriptResult { request, result }) => match request {
                    ScriptRequest::SaveBuffer(target) => {
                        changed |= self.buffers.on_change(&target, &result)?;
                    }
                },
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(changed)
    }

    fn poll_watcher(&mut self) -> bool {
        let Some(watcher) = self.watcher.as_mut() else {
            return false;
        };
        if !watcher.drain() {
            return false;
        }
        tracing::debug!("folders changed on disk");
        self.sidebar.refresh()
    }
}
