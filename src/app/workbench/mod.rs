//! Workbench: owns the kernel pieces and the rendering surface, and wires
//! the host window's events through them.

use crate::core::AppContext;
use crate::kernel::services::adapters::WorkspaceWatcher;
use crate::kernel::services::bus::{kernel_bus, KernelBusReceiver};
use crate::kernel::services::ports::{RenderSurface, SettingsStore, SurfaceEvent, WindowGeometry};
use crate::kernel::{edit_uri, BufferRegistry, ContentRouter, Response, Sidebar, SidebarEvent};
use crate::models::{BufferId, NodeId, RenameOp};
use crate::Result;
use std::path::Path;
use std::time::Instant;

mod tick;
pub mod window_state;


pub use window_state::{WindowState, WindowStateSaver};

pub struct Workbench<S> {
    buffers: BufferRegistry,
    sidebar: Sidebar,
    router: ContentRouter,
    surface: S,
    bus_rx: KernelBusReceiver,
    settings: Box<dyn SettingsStore>,
    window_state: WindowStateSaver,
    watcher: Option<WorkspaceWatcher>,
    current: Option<BufferId>,
    title: String,
    can_go_back: bool,
    can_go_forward: bool,
}

impl<S: RenderSurface> Workbench<S> {
    pub fn new(ctx: AppContext, surface: S, settings: Box<dyn SettingsStore>) -> Self {
        let (bus, bus_rx) = kernel_bus();
        let mut buffers = BufferRegistry::new(ctx.clone());
        let buffer_events = buffers.subscribe();
        let debounce = ctx.config().save_debounce;
        Self {
            sidebar: Sidebar::new(ctx.clone(), buffer_events),
            router: ContentRouter::new(ctx, bus),
            buffers,
            surface,
            bus_rx,
            settings,
            window_state: WindowStateSaver::new(debounce),
            watcher: None,
            current: None,
            title: String::new(),
            can_go_back: false,
            can_go_forward: false,
        }
    }

    /// Starts watching the sidebar roots for outside changes.
    pub fn enable_watcher(&mut self) -> std::result::Result<(), notify::Error> {
        let mut watcher = WorkspaceWatcher::new()?;
        watcher.sync_roots(&self.sidebar.root_paths());
        self.watcher = Some(watcher);
        Ok(())
    }

    pub fn buffers(&self) -> &BufferRegistry {
        &self.buffers
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    pub fn current_buffer(&self) -> Option<BufferId> {
        self.current
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    /// Window geometry and sidebar width to restore on startup.
    pub fn initial_window_state(&self) -> WindowState {
        WindowState::load(self.settings.as_ref())
    }

    pub fn add_root(&mut self, path: &Path) -> NodeId {
        let id = self.sidebar.add_root(path);
        self.sync_watcher();
        id
    }

    /// Opens `path` in the surface, registering a buffer on first use.
    pub fn open_document(&mut self, path: &Path) -> BufferId {
        let buffer = self.buffers.find_or_create(path);
        let id = buffer.id();
        let uri = edit_uri(buffer.path());
        tracing::info!(%id, path = %buffer.path().display(), "opening document");
        self.surface.load(&uri);
        self.current = Some(id);
        id
    }

    /// Answers a scheme request from the surface.
    pub fn handle_uri(&mut self, uri: &str) -> Response {
        self.router.resolve(uri, &self.buffers, &mut self.surface)
    }

    /// Selection in the sidebar. Files open; folders toggle.
    pub fn activate_node(&mut self, id: NodeId) -> Option<BufferId> {
        match self.sidebar.activate(id)? {
            SidebarEvent::FileSelected(path) => Some(self.open_document(&path)),
        }
    }

    /// In-place rename from the sidebar.
    pub fn rename_node(&mut self, id: NodeId, new_name: &str) -> Result<Option<RenameOp>> {
        let op = self.sidebar.rename_node(id, new_name, &mut self.buffers)?;
        if op.is_some() {
            self.after_rename();
        }
        Ok(op)
    }

    /// Renames an arbitrary path, with the same cascade as a sidebar rename.
    pub fn rename_path(&mut self, old: &Path, new: &Path) -> Result<RenameOp> {
        let op = RenameOp::new(old, new);
        self.buffers.rename(&op)?;
        self.after_rename();
        Ok(op)
    }

    fn after_rename(&mut self) {
        self.sidebar.poll_buffer_events();
        self.sync_watcher();
    }

    /// Creates the next free untitled document in `dir` and opens it.
    pub fn new_document(&mut self, dir: &Path) -> Result<BufferId> {
        let path = self.sidebar.create_document(dir)?;
        Ok(self.open_document(&path))
    }

    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::LoadChanged {
                can_go_back,
                can_go_forward,
            } => {
                self.can_go_back = can_go_back;
                self.can_go_forward = can_go_forward;
            }
            SurfaceEvent::TitleChanged(title) => self.title = title,
        }
    }

    pub fn on_window_configured(&mut self, geometry: WindowGeometry, sidebar_width: i32, now: Instant) {
        self.window_state.on_configure(
            WindowState {
                geometry,
                sidebar_width,
            },
            now,
        );
    }

    /// The window is going away: write any pending window state now.
    pub fn hide(&mut self) -> Result<()> {
        self.window_state.flush(self.settings.as_mut())?;
        Ok(())
    }

    fn sync_watcher(&mut self) {
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.sync_roots(&self.sidebar.root_paths());
        }
    }
}
