use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum MandelbrotError {
    #[error("zoom must be finite and greater than zero, got {0}")]
    InvalidZoom(f64),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error(
        "pixel (x: {}, y: {}) is outside the {}x{} frame",
        .pixel.x, .pixel.y, .resolution.width(), .resolution.height()
    )]
    PixelOutsideFrame { pixel: Point, resolution: Resolution },
}
