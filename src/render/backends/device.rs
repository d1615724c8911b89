use crate::render::backend::{FrameViewport, Renderer, RenderingDevice, TargetId};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Synchronous GPU renderer: draw data is submitted through the device on
/// the calling thread, inside the logic-thread `render` call. Selected
/// when the host runs GPU submission on the same thread as the logic
/// tick.
pub struct DeviceRenderer {
    device: Arc<dyn RenderingDevice>,
    /// Viewport targets with a live framebuffer on the device side.
    seen: HashSet<TargetId>,
}

impl DeviceRenderer {
    pub fn new(device: Arc<dyn RenderingDevice>) -> Result<Self> {
        device.prepare()?;
        Ok(Self {
            device,
            seen: HashSet::new(),
        })
    }

    fn free_all(&mut self) {
        for target in self.seen.drain() {
            self.device.free_framebuffer(target);
        }
    }
}

impl Renderer for DeviceRenderer {
    fn name(&self) -> &'static str {
        "gui_overlay_device"
    }

    fn init_viewport(&mut self, target: TargetId) {
        // a rapidly re-created target must not reuse a stale framebuffer
        if self.seen.remove(&target) {
            self.device.free_framebuffer(target);
        }
    }

    fn close_viewport(&mut self, target: TargetId) {
        if self.seen.remove(&target) {
            self.device.free_framebuffer(target);
        }
    }

    fn render(&mut self, frames: &[FrameViewport<'_>]) {
        for frame in frames {
            if frame.minimized || frame.draw.is_empty() {
                continue;
            }
            let fb = self.device.framebuffer(frame.target);
            self.seen.insert(frame.target);
            if let Err(e) = self.device.submit(fb, frame.draw.data()) {
                log::warn!("gui_overlay: draw submission failed for target {:?}: {e}", fb);
            }
        }
        self.device.free_unused_textures();
    }

    fn on_hide(&mut self) {
        self.free_all();
    }
}

impl Drop for DeviceRenderer {
    fn drop(&mut self) {
        self.free_all();
    }
}
