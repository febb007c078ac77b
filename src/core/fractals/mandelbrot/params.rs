use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Immutable per-frame inputs to the evaluator, in the evaluator's precision.
///
/// Construction is the only place zoom is validated, so everything downstream can
/// divide by it unconditionally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameParams {
    resolution: Resolution,
    offset: Complex,
    zoom: f32,
    max_iterations: u32,
}

impl FrameParams {
    pub fn new(
        resolution: Resolution,
        offset: Complex,
        zoom: f32,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom(f64::from(zoom)));
        }

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            resolution,
            offset,
            zoom,
            max_iterations,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
