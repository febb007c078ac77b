use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::FrameParams;

pub const DEFAULT_ZOOM: f64 = 200.0;
pub const DEFAULT_OFFSET: ViewOffset = ViewOffset { x: -0.5, y: 0.0 };
pub const DEFAULT_MAX_ITERATIONS: u32 = 1500;

/// Multiplier applied to the zoom per scroll step.
pub const ZOOM_FACTOR: f64 = 1.1;

/// Complex-plane point shown at the centre of the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewOffset {
    pub x: f64,
    pub y: f64,
}

/// Where the viewer is looking and how hard it looks.
///
/// `zoom` is pixels per unit of the complex plane and is always strictly positive.
/// It is unbounded: repeated zooming eventually exceeds what the single-precision
/// evaluator can resolve, which shows up as banding rather than an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset: ViewOffset,
    max_iterations: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ViewState {
    pub fn new(zoom: f64, offset: ViewOffset, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom(zoom));
        }

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            zoom,
            offset,
            max_iterations,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> ViewOffset {
        self.offset
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Narrows the view to the single-precision parameters one frame is evaluated with.
    pub fn snapshot(&self, resolution: Resolution) -> Result<FrameParams, MandelbrotError> {
        FrameParams::new(
            resolution,
            Complex {
                real: self.offset.x as f32,
                imag: self.offset.y as f32,
            },
            self.zoom as f32,
            self.max_iterations,
        )
    }

    pub(crate) fn scale_zoom(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    pub(crate) fn divide_zoom(&mut self, factor: f64) {
        self.zoom /= factor;
    }

    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }
}
