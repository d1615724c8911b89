use crate::config::{OverlayConfig, RendererKind};
use crate::errors::OverlayError;
use crate::event::InputEvent;
use crate::gui::GuiLibrary;
use crate::input::InputRouter;
use crate::render::backend::{
    CanvasDevice, FrameViewport, HostDisplay, Renderer, RenderingDevice, SurfaceSize, TargetId,
};
use crate::render::backends::canvas::CanvasRenderer;
use crate::render::backends::device::DeviceRenderer;
use crate::render::backends::device_threaded::{DeviceThreadSafeRenderer, RenderHook};
use crate::render::backends::dummy::DummyRenderer;
use crate::viewports::{ViewportId, ViewportRegistry, WindowId};
use std::sync::Arc;

/// Backend identification string registered with the GUI library.
const BACKEND_PLATFORM_NAME: &str = "gui_overlay";

/// Everything the host supplies for renderer construction. Each seam is
/// optional where the capability can genuinely be absent; the probe in
/// [`OverlayContext::init`] downgrades accordingly.
pub struct HostServices {
    pub display: Box<dyn HostDisplay>,
    /// GPU device seam; `None` when GPU-backed rendering is unavailable
    /// (e.g. a compatibility rendering path).
    pub device: Option<Arc<dyn RenderingDevice>>,
    /// 2D compositing seam; `None` when unreachable.
    pub canvas: Option<Box<dyn CanvasDevice>>,
}

/// Orchestrates the GUI library for a host engine: owns the library
/// context handle and the active renderer, drives the per-frame
/// update/render cycle, and routes input and viewport lifecycle.
///
/// The host owns the lifecycle: construct with [`init`](Self::init), call
/// [`update`](Self::update) and [`render`](Self::render) once per tick,
/// and drop (or [`dispose`](Self::dispose)) when done. Re-initialization
/// means disposing the previous context before constructing a new one;
/// the renderer is only ever replaced together with the context, never on
/// its own.
pub struct OverlayContext {
    /// `None` only after `dispose`.
    gui: Option<Box<dyn GuiLibrary>>,
    renderer: Option<Box<dyn Renderer>>,
    hook: Option<RenderHook>,
    input: InputRouter,
    viewports: ViewportRegistry,
    scale: f32,
    layer: i32,
    display_size: SurfaceSize,
    visible: bool,
    /// Guards against recursive frame begin/end.
    in_frame: bool,
}

impl OverlayContext {
    /// Selects a renderer variant by capability probe, wires the GUI
    /// library's io and fonts, and returns the ready context.
    ///
    /// Probe order: headless display forces Dummy; a RenderingDevice
    /// request without a reachable device downgrades to Canvas; with a
    /// device, a separate render thread selects the thread-safe variant,
    /// otherwise the buffered one. Construction failure of a GPU variant
    /// degrades one tier to Canvas (warning) or, when Canvas is
    /// unreachable too, to Dummy (error); it never aborts the process.
    ///
    /// Fatal configuration errors: a pointer width other than 64 bits
    /// (handle marshaling assumes 64-bit identifiers) and a non-positive
    /// scale.
    pub fn init(
        config: OverlayConfig,
        mut gui: Box<dyn GuiLibrary>,
        host: HostServices,
    ) -> Result<Self, OverlayError> {
        let pointer_bits = 8 * std::mem::size_of::<usize>() as u32;
        if pointer_bits != 64 {
            return Err(OverlayError::PointerWidth(pointer_bits));
        }
        config.validate()?;

        let HostServices {
            display,
            device,
            canvas,
        } = host;
        let (renderer, hook) = build_renderer(config.renderer, display.as_ref(), device, canvas);

        gui.set_backend_info(BACKEND_PLATFORM_NAME, renderer.name());
        gui.set_scale(config.scale);
        gui.set_ini_filename(config.ini_filename.as_deref());

        for (i, font) in config.fonts.iter().enumerate() {
            // the first font starts the atlas and never merges
            let merge = i > 0 && font.merge;
            gui.add_font(font, merge)?;
        }
        if config.add_default_font {
            gui.add_default_font();
        }
        gui.rebuild_font_atlas()?;

        Ok(Self {
            gui: Some(gui),
            renderer: Some(renderer),
            hook,
            input: InputRouter::new(config.joy_axis_dead_zone),
            viewports: ViewportRegistry::new(),
            scale: config.scale,
            layer: config.layer,
            display_size: SurfaceSize::default(),
            visible: true,
            in_frame: false,
        })
    }

    /// Advances timing, pushes the display size, routes buffered input,
    /// and begins a new frame. Must be called exactly once per host tick,
    /// before any per-frame GUI calls.
    pub fn update(&mut self, delta: f64, display_size: SurfaceSize) -> Result<(), OverlayError> {
        if self.in_frame {
            return Err(OverlayError::FrameInProgress);
        }
        let gui = self.gui.as_mut().ok_or(OverlayError::Disposed)?;

        self.display_size = display_size;
        for event in self.input.drain() {
            gui.apply_input(&event);
        }
        gui.new_frame(delta, display_size);
        self.in_frame = true;
        Ok(())
    }

    /// Finalizes the frame's per-viewport draw lists and hands them to
    /// the active renderer. Must be called exactly once per tick, after
    /// all GUI calls.
    pub fn render(&mut self) -> Result<(), OverlayError> {
        if !self.in_frame {
            return Err(OverlayError::NoFrame);
        }
        let gui = self.gui.as_mut().ok_or(OverlayError::Disposed)?;
        let renderer = self.renderer.as_mut().ok_or(OverlayError::Disposed)?;
        self.in_frame = false;

        gui.end_frame();

        let mut frames = Vec::new();
        for vp in gui.viewports() {
            // a viewport whose window already closed has no target left
            let Some(target) = self.viewports.target_of(vp.id) else {
                continue;
            };
            frames.push(FrameViewport {
                viewport: vp.id,
                target,
                minimized: vp.is_minimized(),
                draw: &vp.draw,
            });
        }
        renderer.render(&frames);
        Ok(())
    }

    /// Queues a translated host input event for the next update.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Binds the process's primary display surface as the default
    /// platform viewport.
    pub fn set_main_window(
        &mut self,
        window: WindowId,
        viewport: ViewportId,
        target: TargetId,
    ) -> Result<(), OverlayError> {
        let renderer = self.renderer.as_mut().ok_or(OverlayError::Disposed)?;
        self.viewports.set_main_window(window, viewport, target);
        renderer.init_viewport(target);
        Ok(())
    }

    /// The host opened a window that needs overlay rendering.
    pub fn register_viewport(
        &mut self,
        window: WindowId,
        viewport: ViewportId,
        target: TargetId,
    ) -> Result<(), OverlayError> {
        let renderer = self.renderer.as_mut().ok_or(OverlayError::Disposed)?;
        self.viewports.register(window, viewport, target);
        renderer.init_viewport(target);
        Ok(())
    }

    /// The window behind `viewport` closed.
    pub fn close_viewport(&mut self, viewport: ViewportId) {
        let Some(target) = self.viewports.unregister(viewport) else {
            return;
        };
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.close_viewport(target);
        }
    }

    /// Overlay visibility changed. Hiding releases the renderer's
    /// per-frame transients and stops input routing until shown again.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.input.set_enabled(visible);
        if !visible {
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.on_hide();
            }
        }
    }

    pub fn set_scale(&mut self, scale: f32) -> Result<(), OverlayError> {
        if !(scale > 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "scale must be > 0, got {scale}"
            )));
        }
        let gui = self.gui.as_mut().ok_or(OverlayError::Disposed)?;
        self.scale = scale;
        gui.set_scale(scale);
        Ok(())
    }

    pub fn set_joy_axis_dead_zone(&mut self, dead_zone: f32) {
        self.input.set_dead_zone(dead_zone);
    }

    pub fn set_ini_filename(&mut self, path: Option<&std::path::Path>) -> Result<(), OverlayError> {
        let gui = self.gui.as_mut().ok_or(OverlayError::Disposed)?;
        gui.set_ini_filename(path);
        Ok(())
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn display_size(&self) -> SurfaceSize {
        self.display_size
    }

    pub fn viewports(&self) -> &ViewportRegistry {
        &self.viewports
    }

    /// Name of the active renderer variant, `None` after dispose.
    pub fn renderer_name(&self) -> Option<&'static str> {
        self.renderer.as_ref().map(|r| r.name())
    }

    /// Pre-draw hook for the host's render thread. `Some` only while the
    /// thread-safe variant is active.
    pub fn render_hook(&self) -> Option<RenderHook> {
        self.hook.clone()
    }

    /// Releases the renderer and the GUI library context handle, renderer
    /// first. Safe to call once; once the handle is cleared a second call
    /// is a no-op.
    pub fn dispose(&mut self) {
        if self.gui.is_none() {
            return;
        }
        self.hook = None;
        self.renderer = None;
        self.gui = None;
    }
}

impl Drop for OverlayContext {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Capability probe and fallback chain for renderer construction.
fn build_renderer(
    requested: RendererKind,
    display: &dyn HostDisplay,
    device: Option<Arc<dyn RenderingDevice>>,
    canvas: Option<Box<dyn CanvasDevice>>,
) -> (Box<dyn Renderer>, Option<RenderHook>) {
    let mut kind = requested;

    if display.is_headless() {
        kind = RendererKind::Dummy;
    }

    // fall back to Canvas when no GPU device is reachable
    if kind == RendererKind::RenderingDevice && device.is_none() {
        kind = RendererKind::Canvas;
    }

    match kind {
        RendererKind::Dummy => (Box::new(DummyRenderer), None),
        RendererKind::Canvas => (canvas_or_dummy(canvas), None),
        RendererKind::RenderingDevice => {
            if let Some(device) = device {
                if display.separate_render_thread() {
                    match DeviceThreadSafeRenderer::new(device) {
                        Ok(renderer) => {
                            let hook = renderer.hook();
                            return (Box::new(renderer), Some(hook));
                        }
                        Err(e) => {
                            log::warn!("gui_overlay: falling back to canvas renderer ({e})");
                        }
                    }
                } else {
                    match DeviceRenderer::new(device) {
                        Ok(renderer) => return (Box::new(renderer), None),
                        Err(e) => {
                            log::warn!("gui_overlay: falling back to canvas renderer ({e})");
                        }
                    }
                }
            }
            (canvas_or_dummy(canvas), None)
        }
    }
}

fn canvas_or_dummy(canvas: Option<Box<dyn CanvasDevice>>) -> Box<dyn Renderer> {
    let Some(canvas) = canvas else {
        log::error!("gui_overlay: failed to init renderer");
        return Box::new(DummyRenderer);
    };
    match CanvasRenderer::new(canvas) {
        Ok(renderer) => Box::new(renderer),
        Err(e) => {
            log::error!("gui_overlay: failed to init renderer ({e})");
            Box::new(DummyRenderer)
        }
    }
}
