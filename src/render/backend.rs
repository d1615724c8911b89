use crate::render::draw_list::{DrawData, DrawList};
use crate::viewports::ViewportId;

/// Size of a surface in pixels. It's a simple struct to hold width and height.
#[derive(Clone, Copy, Debug, Default)]
#[derive(PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-area surface cannot be presented.
    pub fn is_zero(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Opaque 64-bit render-target identifier marshaled from the host engine.
///
/// Constructed only from host-supplied raw handles; this crate never
/// fabricates one. The 64-bit width is what the startup pointer-width
/// check guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

impl TargetId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// One platform viewport's slice of a finalized frame, handed to
/// [`Renderer::render`] with the registry lookups already resolved.
#[derive(Debug)]
pub struct FrameViewport<'a> {
    pub viewport: ViewportId,
    /// Render target bound to the viewport.
    pub target: TargetId,
    /// Minimized viewports are skipped by every variant.
    pub minimized: bool,
    pub draw: &'a DrawList,
}

/// Uniform per-viewport render contract across backend variants. All
/// calls occur on the logic thread; the thread-safe variant moves work to
/// the render thread through its own hook, not through this trait.
pub trait Renderer {
    fn name(&self) -> &'static str;

    /// A platform viewport's render target came into existence. Safe to
    /// call again for a target that was re-created rapidly.
    fn init_viewport(&mut self, target: TargetId);

    /// The target is going away; release anything held for it.
    fn close_viewport(&mut self, target: TargetId);

    /// Consumes the finalized draw lists for every active viewport.
    /// Minimized and zero-sized viewports are skipped; targets may appear
    /// or disappear between consecutive calls.
    fn render(&mut self, frames: &[FrameViewport<'_>]);

    /// The overlay's host-visible surface became invisible. Releases
    /// per-frame transients (cached framebuffers) while keeping
    /// persistent state alive.
    fn on_hide(&mut self);
}

/// GPU device seam the buffered and thread-safe variants submit through.
///
/// Implementations must be internally synchronized: the thread-safe
/// variant resolves framebuffers on the logic thread and submits from the
/// host's render thread.
pub trait RenderingDevice: Send + Sync {
    /// Compiles pipeline state and allocates shared buffers for overlay
    /// submission. Called once when a GPU variant is constructed.
    fn prepare(&self) -> anyhow::Result<()>;

    /// Get-or-create the framebuffer for a viewport's render target. An
    /// identifier-level operation; no GPU mutation happens on the caller's
    /// thread.
    fn framebuffer(&self, viewport: TargetId) -> TargetId;

    /// True while `target` still refers to a live framebuffer.
    fn is_valid(&self, target: TargetId) -> bool;

    /// Issues the draw calls in `draw` against `target`.
    fn submit(&self, target: TargetId, draw: DrawData<'_>) -> anyhow::Result<()>;

    /// Drops textures no draw command referenced this frame.
    fn free_unused_textures(&self);

    /// Releases the framebuffer cached for `viewport`, if any.
    fn free_framebuffer(&self, viewport: TargetId);
}

/// 2D compositing seam used by the Canvas variant. Logic-thread only; no
/// GPU buffer access behind it.
pub trait CanvasDevice {
    /// Draws `draw` onto `target`, replacing its previous contents.
    fn draw(&mut self, target: TargetId, draw: DrawData<'_>) -> anyhow::Result<()>;

    /// Clears everything previously drawn onto `target`.
    fn clear(&mut self, target: TargetId);
}

/// Host display facts sampled once at startup, used by the capability
/// probe in [`OverlayContext::init`](crate::context::OverlayContext::init).
pub trait HostDisplay {
    /// True when no display is attached; forces the Dummy variant.
    fn is_headless(&self) -> bool;

    /// Whether the host schedules GPU submission on a dedicated render
    /// thread. Reported from startup configuration rather than the
    /// verified runtime scheduling mode; best-effort.
    fn separate_render_thread(&self) -> bool;
}
