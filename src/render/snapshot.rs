use crate::render::draw_list::{DrawCmd, DrawData, DrawList, DrawVert};

/// Owned, immutable copy of one viewport's draw commands for one frame.
///
/// The GUI library reuses or frees its own draw-list storage at the start
/// of the next frame, so draw data that crosses the frame (or thread)
/// boundary must capture independence first. A snapshot never shares
/// storage with its source after construction, and is consumed exactly
/// once by whichever thread currently owns it; moving it through the
/// [`HandoffSlot`](crate::render::handoff::HandoffSlot) transfers that
/// ownership.
#[derive(Debug)]
pub struct DrawSnapshot {
    vertices: Vec<DrawVert>,
    indices: Vec<u16>,
    commands: Vec<DrawCmd>,
}

impl DrawSnapshot {
    /// Deep-copies `list` into an owned snapshot.
    pub fn clone_list(list: &DrawList) -> Self {
        Self {
            vertices: list.vertices.clone(),
            indices: list.indices.clone(),
            commands: list.commands.clone(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Borrowed view for submission.
    pub fn data(&self) -> DrawData<'_> {
        DrawData {
            vertices: &self.vertices,
            indices: &self.indices,
            commands: &self.commands,
        }
    }
}
