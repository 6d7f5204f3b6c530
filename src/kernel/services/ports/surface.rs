//! Contract of the embedded web rendering surface.
//!
//! The surface is opaque: it loads URIs, evaluates scripts and reports a few
//! navigation events. Script evaluation is asynchronous; the result comes
//! back on the kernel bus when the surface resolves the `ScriptReply`.

use crate::kernel::services::bus::{KernelBusSender, KernelMessage};
use crate::models::BufferRef;

/// What a pending script result is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRequest {
    /// Persist the editor's live text into the referenced buffer.
    SaveBuffer(BufferRef),
}

/// One-shot completion handle for `RenderSurface::run_script`.
#[derive(Clone)]
pub struct ScriptReply {
    bus: KernelBusSender,
    request: ScriptRequest,
}

impl ScriptReply {
    pub fn new(bus: KernelBusSender, request: ScriptRequest) -> Self {
        Self { bus, request }
    }

    pub fn request(&self) -> &ScriptRequest {
        &self.request
    }

    /// Posts the script's string result. Dropping the reply instead means the
    /// script never completes.
    pub fn resolve(self, result: impl Into<String>) {
        let msg = KernelMessage::ScriptResult {
            request: self.request,
            result: result.into(),
        };
        if self.bus.send(msg).is_err() {
            tracing::debug!("script result dropped: kernel bus closed");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    LoadChanged {
        can_go_back: bool,
        can_go_forward: bool,
    },
    TitleChanged(String),
}

pub trait RenderSurface {
    fn load(&mut self, uri: &str);

    /// Starts evaluating `script`; the surface calls `reply.resolve` with the
    /// string form of the result once it is available.
    fn run_script(&mut self, script: &str, reply: ScriptReply);
}
