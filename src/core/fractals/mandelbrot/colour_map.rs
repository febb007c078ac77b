use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Colours an escape time as `(t, t², t / 2)` where `t = iterations / max_iterations`.
/// Points that never escape come out as `(1, 1, 0.5)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTimeColourMap {
    max_iterations: u32,
}

impl EscapeTimeColourMap {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl ColourMap for EscapeTimeColourMap {
    type T = u32;

    fn map(&self, iterations: u32) -> Colour {
        let t = iterations.min(self.max_iterations) as f32 / self.max_iterations as f32;

        Colour::opaque(t, t * t, t * 0.5)
    }
}
