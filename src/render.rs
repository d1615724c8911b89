pub mod backend;

/// Rendering backend variants for the overlay.
pub mod backends {
    /// Synchronous 2D-primitive backend
    pub mod canvas;
    /// Synchronous GPU backend
    pub mod device;
    /// Clone-and-publish GPU backend for threaded hosts
    pub mod device_threaded;
    pub mod dummy;
}

mod draw_list;
pub use draw_list::*;

mod handoff;
pub use handoff::*;

mod snapshot;
pub use snapshot::*;
