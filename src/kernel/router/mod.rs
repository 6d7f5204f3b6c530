//! Resolver for the `app://` scheme the editor surface loads from.
//!
//! - `app://data/<relative>`: static asset under the asset root.
//! - `app://edit/<path>`: editor page bound to an open buffer.
//! - `app://edit/<path>?api=<name>&...`: allow-listed operation, plain-text
//!   answer.
//!
//! Anything else, and any failure along the way, is an empty response.

pub mod api;
pub mod assets;
pub mod page;
pub mod uri;

use crate::core::AppContext;
use crate::kernel::buffers::BufferRegistry;
use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::services::ports::RenderSurface;
use std::path::Path;

pub use uri::{edit_uri, AppUri};

pub const HTML: &str = "text/html; charset=utf-8";
pub const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Response {
    pub fn new(body: impl Into<Vec<u8>>, content_type: &'static str) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    pub fn not_found() -> Self {
        Self::new(Vec::new(), HTML)
    }

    /// Empty bodies mean "nothing here"; callers treat them as failure.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

pub struct ContentRouter {
    ctx: AppContext,
    bus: KernelBusSender,
}

impl ContentRouter {
    pub fn new(ctx: AppContext, bus: KernelBusSender) -> Self {
        Self { ctx, bus }
    }

    pub fn resolve(
        &self,
        uri: &str,
        buffers: &BufferRegistry,
        surface: &mut dyn RenderSurface,
    ) -> Response {
        let Some(parsed) = AppUri::parse(uri) else {
            tracing::debug!(uri, "routing miss");
            return Response::not_found();
        };
        tracing::debug!(uri, "serving");

        let response = match parsed {
            AppUri::Data(relative) => self.serve_asset(&relative),
            AppUri::Page(path) => self.serve_page(&path, buffers),
            AppUri::Api { name, args, .. } => self.call_api(&name, &args, buffers, surface),
        };
        response.unwrap_or_else(Response::not_found)
    }

    fn serve_asset(&self, relative: &Path) -> Option<Response> {
        let path = assets::resolve_asset(&self.ctx.config().asset_root, relative)?;
        let files = self.ctx.files();
        if !files.is_file(&path) {
            return None;
        }
        match files.read_file_bytes(&path) {
            Ok(bytes) => Some(Response::new(bytes, assets::content_type_for(&path))),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "asset unreadable");
                None
            }
        }
    }

    fn serve_page(&self, path: &Path, buffers: &BufferRegistry) -> Option<Response> {
        let Some(buffer) = buffers.find_by_path(path) else {
            tracing::debug!(path = %path.display(), "no buffer for page");
            return None;
        };
        if self.ctx.files().is_dir(buffer.path()) {
            return None;
        }
        let text = page::document_text(&self.ctx, buffer)?;
        let template = page::load_template(&self.ctx);
        let Some(html) = page::render(&template, buffer, &text) else {
            tracing::warn!("editor template has no textarea");
            return None;
        };
        Some(Response::new(html, HTML))
    }

    fn call_api(
        &self,
        name: &str,
        args: &api::ApiArgs,
        buffers: &BufferRegistry,
        surface: &mut dyn RenderSurface,
    ) -> Option<Response> {
        let Some(handler) = api::lookup(name) else {
            tracing::debug!(name, "unknown api");
            return None;
        };
        let answer = handler(args, buffers, &self.bus, surface)?;
        Some(Response::new(answer, TEXT))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/router/mod.rs"]
mod tests;
