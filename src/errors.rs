#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("unsupported pointer width ({0} bits): handle marshaling requires 64-bit identifiers")]
    PointerWidth(u32),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("a frame is already in progress")]
    FrameInProgress,

    #[error("no frame in progress")]
    NoFrame,

    #[error("context already disposed")]
    Disposed,

    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
