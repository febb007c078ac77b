use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_map::EscapeTimeColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::FrameParams;

/// `|z|²` bailout. Changing it moves the rendered boundary.
pub const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Result of evaluating a single pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelEvaluation {
    pub c: Complex,
    pub iterations: u32,
    pub colour: Colour,
}

/// Escape-time evaluator for one frame. Holds nothing but the frame's parameters,
/// so any number of pixels can be computed concurrently from a shared reference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    params: FrameParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex(pixel, &self.params)?;

        Ok(escape_time(c, self.params.max_iterations()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: FrameParams) -> Self {
        Self { params }
    }
}

/// Maps a pixel to the complex plane: the image centre lands on the view offset and
/// the top row gets the largest imaginary part.
pub fn pixel_to_complex(pixel: Point, params: &FrameParams) -> Result<Complex, MandelbrotError> {
    let resolution = params.resolution();

    if !resolution.contains_point(pixel) {
        return Err(MandelbrotError::PixelOutsideFrame { pixel, resolution });
    }

    let half_width = resolution.width() as f32 * 0.5;
    let half_height = resolution.height() as f32 * 0.5;
    let zoom = params.zoom();
    let offset = params.offset();

    Ok(Complex {
        real: (pixel.x as f32 - half_width) / zoom + offset.real,
        imag: (half_height - pixel.y as f32) / zoom + offset.imag,
    })
}

/// Number of iterations of `z ← z² + c` from `z = 0` before `|z|² ≥ 4`, capped at
/// `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}

/// Full per-pixel evaluation: coordinate mapping, escape time and colour.
pub fn evaluate_pixel(pixel: Point, params: &FrameParams) -> Result<PixelEvaluation, MandelbrotError> {
    let c = pixel_to_complex(pixel, params)?;
    let iterations = escape_time(c, params.max_iterations());
    let colour = EscapeTimeColourMap::new(params.max_iterations())?.map(iterations);

    Ok(PixelEvaluation {
        c,
        iterations,
        colour,
    })
}
