use crate::render::backend::{CanvasDevice, FrameViewport, Renderer, TargetId};
use anyhow::Result;
use std::collections::HashSet;

/// Synchronous renderer that submits through the host's 2D compositing
/// primitives. Selected when GPU-backed rendering is unavailable (e.g. a
/// compatibility rendering path), or as the first fallback tier when a
/// GPU variant fails to construct.
pub struct CanvasRenderer {
    canvas: Box<dyn CanvasDevice>,
    /// Targets with content drawn onto them since the last clear.
    active: HashSet<TargetId>,
}

impl CanvasRenderer {
    pub fn new(canvas: Box<dyn CanvasDevice>) -> Result<Self> {
        Ok(Self {
            canvas,
            active: HashSet::new(),
        })
    }

    fn clear_all(&mut self) {
        for target in self.active.drain() {
            self.canvas.clear(target);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn name(&self) -> &'static str {
        "gui_overlay_canvas"
    }

    fn init_viewport(&mut self, _target: TargetId) {
        // canvas items are created lazily on first draw
    }

    fn close_viewport(&mut self, target: TargetId) {
        if self.active.remove(&target) {
            self.canvas.clear(target);
        }
    }

    fn render(&mut self, frames: &[FrameViewport<'_>]) {
        for frame in frames {
            if frame.minimized || frame.draw.is_empty() {
                continue;
            }
            if let Err(e) = self.canvas.draw(frame.target, frame.draw.data()) {
                log::warn!("gui_overlay: canvas draw failed for target {:?}: {e}", frame.target);
                continue;
            }
            self.active.insert(frame.target);
        }
    }

    fn on_hide(&mut self) {
        self.clear_all();
    }
}

impl Drop for CanvasRenderer {
    fn drop(&mut self) {
        self.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_list::{DrawCmd, DrawData, DrawList, DrawVert, TextureId};
    use crate::viewports::ViewportId;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        draws: Vec<(TargetId, usize)>,
        clears: Vec<TargetId>,
    }

    struct StubCanvas(Rc<RefCell<Recorded>>);

    impl CanvasDevice for StubCanvas {
        fn draw(&mut self, target: TargetId, draw: DrawData<'_>) -> Result<()> {
            self.0.borrow_mut().draws.push((target, draw.indices.len()));
            Ok(())
        }

        fn clear(&mut self, target: TargetId) {
            self.0.borrow_mut().clears.push(target);
        }
    }

    fn triangle() -> DrawList {
        let mut list = DrawList::new();
        list.vertices.push(DrawVert::new([0.0, 0.0], [0.0, 0.0], [255; 4]));
        list.vertices.push(DrawVert::new([2.0, 0.0], [1.0, 0.0], [255; 4]));
        list.vertices.push(DrawVert::new([0.0, 2.0], [0.0, 1.0], [255; 4]));
        list.indices.extend([0, 1, 2]);
        list.commands.push(DrawCmd {
            clip_rect: [0.0, 0.0, 2.0, 2.0],
            texture: TextureId::from_raw(1),
            idx_offset: 0,
            idx_count: 3,
            vtx_offset: 0,
        });
        list
    }

    fn frame(target: u64, minimized: bool, draw: &DrawList) -> FrameViewport<'_> {
        FrameViewport {
            viewport: ViewportId::from_raw(target),
            target: TargetId::from_raw(target),
            minimized,
            draw,
        }
    }

    #[test]
    fn draws_active_viewports_and_skips_minimized() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut renderer = CanvasRenderer::new(Box::new(StubCanvas(recorded.clone()))).unwrap();

        let visible = triangle();
        let hidden = triangle();
        renderer.render(&[frame(1, false, &visible), frame(2, true, &hidden)]);

        let rec = recorded.borrow();
        assert_eq!(rec.draws.len(), 1);
        assert_eq!(rec.draws[0], (TargetId::from_raw(1), 3));
    }

    #[test]
    fn hide_clears_every_drawn_target_once() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut renderer = CanvasRenderer::new(Box::new(StubCanvas(recorded.clone()))).unwrap();

        let draw = triangle();
        renderer.render(&[frame(1, false, &draw), frame(2, false, &draw)]);
        renderer.on_hide();
        // a second hide with nothing drawn in between is a no-op
        renderer.on_hide();

        let mut clears = recorded.borrow().clears.clone();
        clears.sort_by_key(|t| t.to_raw());
        assert_eq!(clears, vec![TargetId::from_raw(1), TargetId::from_raw(2)]);
    }

    #[test]
    fn drop_releases_drawn_targets() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        {
            let mut renderer =
                CanvasRenderer::new(Box::new(StubCanvas(recorded.clone()))).unwrap();
            let draw = triangle();
            renderer.render(&[frame(5, false, &draw)]);
        }
        assert_eq!(recorded.borrow().clears, vec![TargetId::from_raw(5)]);
    }
}
