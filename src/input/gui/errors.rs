/// Failures of the window or presentation layer. All of them end the process.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("presentation surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize presentation surface: {0}")]
    SurfaceResize(#[from] pixels::TextureError),
}
