use crate::render::backend::{FrameViewport, Renderer, TargetId};
use anyhow::Result;

/// Renderer used when nothing can be presented: headless displays, or as
/// the last fallback tier when no other variant could be constructed.
/// Every operation is a no-op.
pub struct DummyRenderer;

impl DummyRenderer {
    /// Creates a new instance of the dummy renderer.
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl Renderer for DummyRenderer {
    fn name(&self) -> &'static str {
        "gui_overlay_dummy"
    }

    fn init_viewport(&mut self, _target: TargetId) {}

    fn close_viewport(&mut self, _target: TargetId) {}

    fn render(&mut self, _frames: &[FrameViewport<'_>]) {}

    fn on_hide(&mut self) {}
}
