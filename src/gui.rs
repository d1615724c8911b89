use crate::config::FontSpec;
use crate::event::InputEvent;
use crate::render::backend::SurfaceSize;
use crate::render::DrawList;
use crate::viewports::ViewportId;
use bitflags::bitflags;
use std::path::Path;

bitflags! {
    /// Per-viewport state flags reported by the GUI library.
    pub struct ViewportFlags: u32 {
        /// Zero-area / not presented. Minimized viewports are excluded
        /// from rendering and from handoff batches.
        const MINIMIZED = 0b0001;
    }
}

/// One platform window the GUI library renders into, together with its
/// finalized draw output for the current frame.
#[derive(Debug, Clone)]
pub struct PlatformViewport {
    pub id: ViewportId,
    pub flags: ViewportFlags,
    pub draw: DrawList,
}

impl PlatformViewport {
    pub fn is_minimized(&self) -> bool {
        self.flags.contains(ViewportFlags::MINIMIZED)
    }
}

/// The GUI library context handle.
///
/// Implemented by the host's binding to the immediate-mode library.
/// [`OverlayContext`](crate::context::OverlayContext) owns exactly one of
/// these and drives it once per tick; widget, layout, and styling
/// internals stay on the other side of this seam. Settings persistence
/// (the ini file) is delegated entirely to the library given a resolved
/// filename.
pub trait GuiLibrary {
    /// Registers identification strings for the embedding backend and the
    /// active renderer variant.
    fn set_backend_info(&mut self, platform: &str, renderer: &str);

    /// Path for settings persistence; `None` disables it.
    fn set_ini_filename(&mut self, path: Option<&Path>);

    /// UI scale factor applied to style metrics and font rasterization.
    fn set_scale(&mut self, scale: f32);

    /// Feeds a font asset to the atlas builder. `merge` appends glyphs to
    /// the previously added font instead of starting a new one.
    fn add_font(&mut self, font: &FontSpec, merge: bool) -> anyhow::Result<()>;

    /// Appends the library's built-in font.
    fn add_default_font(&mut self);

    /// Packs everything added so far into the atlas texture.
    fn rebuild_font_atlas(&mut self) -> anyhow::Result<()>;

    /// Applies one translated input event to the library's io state.
    fn apply_input(&mut self, event: &InputEvent);

    /// Begins a frame: advances internal timing and pushes the display
    /// size.
    fn new_frame(&mut self, delta: f64, display_size: SurfaceSize);

    /// Ends the frame, finalizing every platform viewport's draw list.
    fn end_frame(&mut self);

    /// Finalized per-viewport output. Valid until the next `new_frame`;
    /// the library is free to reuse these buffers afterwards.
    fn viewports(&self) -> &[PlatformViewport];
}
