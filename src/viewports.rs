use crate::render::backend::TargetId;
use std::collections::HashMap;

/// Opaque identifier of a host surface (an OS-level window), marshaled
/// from the host as a raw 64-bit handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Opaque identifier of a GUI-library platform viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportId(u64);

impl ViewportId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct ViewportEntry {
    window: WindowId,
    target: TargetId,
}

/// Bidirectional map between host surfaces and GUI-library platform
/// viewports, each viewport carrying the render target the overlay draws
/// into. Entries come and go in lockstep with host window open/close
/// notifications; the registry itself only answers identifier lookups.
#[derive(Debug, Default)]
pub struct ViewportRegistry {
    by_window: HashMap<WindowId, ViewportId>,
    entries: HashMap<ViewportId, ViewportEntry>,
    main: Option<ViewportId>,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the process's primary display surface as the default
    /// platform viewport. Rebinding replaces the previous main binding.
    pub fn set_main_window(&mut self, window: WindowId, viewport: ViewportId, target: TargetId) {
        self.register(window, viewport, target);
        self.main = Some(viewport);
    }

    /// Registers a window/viewport pair. Re-registering a viewport
    /// replaces its previous binding.
    pub fn register(&mut self, window: WindowId, viewport: ViewportId, target: TargetId) {
        if let Some(entry) = self.entries.insert(viewport, ViewportEntry { window, target }) {
            self.by_window.remove(&entry.window);
        }
        self.by_window.insert(window, viewport);
    }

    /// Removes both directions of a viewport's binding, returning its
    /// render target when it was registered.
    pub fn unregister(&mut self, viewport: ViewportId) -> Option<TargetId> {
        let entry = self.entries.remove(&viewport)?;
        self.by_window.remove(&entry.window);
        if self.main == Some(viewport) {
            self.main = None;
        }
        Some(entry.target)
    }

    pub fn target_of(&self, viewport: ViewportId) -> Option<TargetId> {
        self.entries.get(&viewport).map(|e| e.target)
    }

    pub fn window_of(&self, viewport: ViewportId) -> Option<WindowId> {
        self.entries.get(&viewport).map(|e| e.window)
    }

    pub fn viewport_of(&self, window: WindowId) -> Option<ViewportId> {
        self.by_window.get(&window).copied()
    }

    pub fn main_viewport(&self) -> Option<ViewportId> {
        self.main
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
