//! Operations a page may call through `app://edit/<path>?api=<name>`.

use crate::kernel::buffers::BufferRegistry;
use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::services::ports::{RenderSurface, ScriptReply, ScriptRequest};
use crate::models::{BufferId, BufferRef};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

pub const SAVED_ACK: &str = "saved";
pub const GET_VALUE_SCRIPT: &str = "window.hmd.getValue()";

pub type ApiArgs = FxHashMap<String, String>;

type Handler =
    fn(&ApiArgs, &BufferRegistry, &KernelBusSender, &mut dyn RenderSurface) -> Option<String>;

const HANDLERS: &[(&str, Handler)] = &[("on_change", on_change)];

pub fn lookup(name: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, handler)| handler)
}

/// Asks the surface for the editor's live text; the save happens when the
/// script result reaches the bus. Acknowledges immediately, but only for a
/// target that names a registered buffer.
fn on_change(
    args: &ApiArgs,
    buffers: &BufferRegistry,
    bus: &KernelBusSender,
    surface: &mut dyn RenderSurface,
) -> Option<String> {
    let target = BufferRef {
        id: args
            .get("buffer_id")
            .and_then(|raw| raw.parse::<BufferId>().ok()),
        path: args.get("path").map(PathBuf::from),
    };
    if buffers.resolve(&target).is_none() {
        tracing::debug!(?target, "on_change: no such buffer");
        return None;
    }
    tracing::debug!(?target, "on_change: fetching editor text");
    let reply = ScriptReply::new(bus.clone(), ScriptRequest::SaveBuffer(target));
    surface.run_script(GET_VALUE_SCRIPT, reply);
    Some(SAVED_ACK.to_string())
}
