//! Draw lists and draw commands.
//!
//! This module defines the GPU-facing shape of the GUI library's per-frame
//! output: a [`DrawList`] carrying one viewport's vertex buffer, index
//! buffer, and [`DrawCmd`] table for one frame. The library owns these
//! buffers only transiently; anything that must outlive the producing
//! frame is deep-copied into a
//! [`DrawSnapshot`](crate::render::snapshot::DrawSnapshot).
//!
//! Submission seams take a borrowed [`DrawData`] view, so a transient
//! `DrawList` and an owned snapshot go through the same signature.
//!
//! # Example
//!
//! ```rust
//! use gui_overlay::render::{DrawCmd, DrawList, DrawVert, TextureId};
//!
//! let mut list = DrawList::new();
//! list.vertices.push(DrawVert::new([0.0, 0.0], [0.0, 0.0], [255; 4]));
//! list.vertices.push(DrawVert::new([8.0, 0.0], [1.0, 0.0], [255; 4]));
//! list.vertices.push(DrawVert::new([0.0, 8.0], [0.0, 1.0], [255; 4]));
//! list.indices.extend([0, 1, 2]);
//! list.commands.push(DrawCmd {
//!     clip_rect: [0.0, 0.0, 8.0, 8.0],
//!     texture: TextureId::from_raw(1),
//!     idx_offset: 0,
//!     idx_count: 3,
//!     vtx_offset: 0,
//! });
//! assert!(!list.is_empty());
//! ```

/// Texture reference bound by a draw command.
///
/// Opaque 64-bit handle marshaled from the GUI library's atlas or from a
/// user texture registration; never fabricated by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u64);

impl TextureId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// A single GUI vertex: screen position, atlas coordinate, packed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawVert {
    /// Position in viewport pixels.
    pub pos: [f32; 2],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// RGBA color, 8 bits per channel.
    pub col: [u8; 4],
}

impl DrawVert {
    pub fn new(pos: [f32; 2], uv: [f32; 2], col: [u8; 4]) -> Self {
        Self { pos, uv, col }
    }
}

/// One draw call: a clipped, textured range of the index buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    /// Scissor rectangle as `[min_x, min_y, max_x, max_y]` in pixels.
    pub clip_rect: [f32; 4],
    /// Texture bound for this call.
    pub texture: TextureId,
    /// First index consumed by this call.
    pub idx_offset: u32,
    /// Number of indices consumed by this call.
    pub idx_count: u32,
    /// Value added to each index before vertex lookup.
    pub vtx_offset: u32,
}

/// One viewport's draw commands for one frame.
///
/// Indices are `u16` with a per-command [`vtx_offset`](DrawCmd::vtx_offset),
/// following the immediate-mode library convention.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<DrawVert>,
    pub indices: Vec<u16>,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    /// Creates a new, empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the list produces no geometry.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() || self.indices.is_empty()
    }

    /// Clears all buffers, keeping their allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
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

/// Borrowed view over draw buffers, accepted by the device and canvas
/// submission seams.
#[derive(Debug, Clone, Copy)]
pub struct DrawData<'a> {
    pub vertices: &'a [DrawVert],
    pub indices: &'a [u16],
    pub commands: &'a [DrawCmd],
}
