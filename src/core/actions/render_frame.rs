use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::EscapeTimeColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::FrameParams;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderFrameError {
    #[error("mandelbrot evaluation failed: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Renders one frame, evaluating pixel rows in parallel.
pub fn render_frame(params: &FrameParams) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*params);
    let iterations = generate_fractal_parallel_rayon(params.resolution(), &algorithm)?;

    colourise(&iterations, params)
}

/// Single-threaded counterpart of [`render_frame`]. Produces identical output.
pub fn render_frame_serial(params: &FrameParams) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*params);
    let iterations = generate_fractal_serial(params.resolution(), &algorithm)?;

    colourise(&iterations, params)
}

fn colourise(iterations: &[u32], params: &FrameParams) -> Result<PixelBuffer, RenderFrameError> {
    let colour_map = EscapeTimeColourMap::new(params.max_iterations())?;

    Ok(generate_pixel_buffer(iterations, params.resolution(), &colour_map)?)
}
