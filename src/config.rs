use crate::errors::OverlayError;
use std::path::PathBuf;
use std::sync::Arc;

/// Renderer variant requested by configuration. The effective variant may
/// be downgraded by the capability probe in
/// [`OverlayContext::init`](crate::context::OverlayContext::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Dummy,
    Canvas,
    RenderingDevice,
}

/// Font asset handed to the GUI library's atlas builder. Loading and
/// packing happen on the library side; this is just the raw bytes plus
/// placement instructions.
#[derive(Clone)]
pub struct FontSpec {
    /// Raw font-file bytes; shared so configs stay cheap to clone.
    pub data: Arc<[u8]>,
    /// Glyph size in pixels.
    pub size_px: u32,
    /// Merge into the previous font instead of starting a new one.
    pub merge: bool,
}

impl std::fmt::Debug for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSpec")
            .field("len", &self.data.len())
            .field("size_px", &self.size_px)
            .field("merge", &self.merge)
            .finish()
    }
}

/// Configuration consumed by
/// [`OverlayContext::init`](crate::context::OverlayContext::init).
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// UI scale factor; must be > 0 or the configuration is rejected.
    pub scale: f32,
    /// Display layer ordering number for the overlay.
    pub layer: i32,
    /// Settings-persistence path; `None` disables persistence.
    pub ini_filename: Option<PathBuf>,
    /// Requested renderer variant.
    pub renderer: RendererKind,
    /// Fonts to load, in order. The first font starts the atlas and never
    /// merges.
    pub fonts: Vec<FontSpec>,
    /// Append the library's built-in font after the configured ones.
    pub add_default_font: bool,
    /// Gamepad axis dead zone applied by the input router.
    pub joy_axis_dead_zone: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            layer: 128,
            ini_filename: None,
            renderer: RendererKind::RenderingDevice,
            fonts: Vec::new(),
            add_default_font: true,
            joy_axis_dead_zone: 0.15,
        }
    }
}

impl OverlayConfig {
    pub(crate) fn validate(&self) -> Result<(), OverlayError> {
        if !(self.scale > 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "scale must be > 0, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
