use crate::render::backend::{FrameViewport, Renderer, RenderingDevice, TargetId};
use crate::render::handoff::HandoffSlot;
use crate::render::snapshot::DrawSnapshot;
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// GPU renderer for hosts whose compositor submits on a dedicated render
/// thread, decoupled from the logic thread by up to one frame.
///
/// `render` never reaches the device's draw path. It deep-clones every
/// active viewport's draw list into a [`DrawSnapshot`], resolves the
/// framebuffer identifier, and publishes the batch into a
/// [`HandoffSlot`]. The host calls [`RenderHook::on_frame_pre_draw`] from
/// its render thread at the compositor's pre-draw point to consume it.
pub struct DeviceThreadSafeRenderer {
    device: Arc<dyn RenderingDevice>,
    slot: Arc<HandoffSlot<DrawSnapshot>>,
    /// Viewport targets with a live framebuffer on the device side.
    seen: HashSet<TargetId>,
}

impl DeviceThreadSafeRenderer {
    pub fn new(device: Arc<dyn RenderingDevice>) -> Result<Self> {
        device.prepare()?;
        Ok(Self {
            device,
            slot: Arc::new(HandoffSlot::new()),
            seen: HashSet::new(),
        })
    }

    /// Hook handle for the host's render-thread pre-draw point. Cloneable;
    /// it keeps the slot and device alive independently of the renderer.
    pub fn hook(&self) -> RenderHook {
        RenderHook {
            device: self.device.clone(),
            slot: self.slot.clone(),
        }
    }

    fn free_all(&mut self) {
        for target in self.seen.drain() {
            self.device.free_framebuffer(target);
        }
    }
}

impl Renderer for DeviceThreadSafeRenderer {
    fn name(&self) -> &'static str {
        "gui_overlay_device_mt"
    }

    fn init_viewport(&mut self, target: TargetId) {
        if self.seen.remove(&target) {
            self.device.free_framebuffer(target);
        }
    }

    fn close_viewport(&mut self, target: TargetId) {
        if self.seen.remove(&target) {
            self.device.free_framebuffer(target);
        }
        // any snapshot still in flight for this target is skipped by the
        // hook's validity check
    }

    fn render(&mut self, frames: &[FrameViewport<'_>]) {
        let mut batch = Vec::with_capacity(frames.len());
        for frame in frames {
            if frame.minimized || frame.draw.is_empty() {
                continue;
            }
            let fb = self.device.framebuffer(frame.target);
            self.seen.insert(frame.target);
            batch.push((fb, DrawSnapshot::clone_list(frame.draw)));
        }
        // latest frame wins: if the render thread skipped a cycle, the
        // unconsumed batch is dropped by this swap
        self.slot.publish(batch);
    }

    fn on_hide(&mut self) {
        self.free_all();
    }
}

impl Drop for DeviceThreadSafeRenderer {
    fn drop(&mut self) {
        self.free_all();
    }
}

/// Cloneable handle the host compositor invokes from its render thread.
#[derive(Clone)]
pub struct RenderHook {
    device: Arc<dyn RenderingDevice>,
    slot: Arc<HandoffSlot<DrawSnapshot>>,
}

impl RenderHook {
    /// Takes the pending batch (empty if none) and submits each snapshot
    /// whose framebuffer is still valid. A target invalidated between
    /// clone and submission is an expected race: the pair is skipped
    /// silently, never retried. The whole batch is dropped afterwards;
    /// snapshots are single-use.
    pub fn on_frame_pre_draw(&self) {
        let batch = self.slot.take();
        for (target, snapshot) in &batch {
            if !self.device.is_valid(*target) {
                continue;
            }
            if let Err(e) = self.device.submit(*target, snapshot.data()) {
                log::warn!("gui_overlay: draw submission failed for target {:?}: {e}", target);
            }
        }
        self.device.free_unused_textures();
    }
}
