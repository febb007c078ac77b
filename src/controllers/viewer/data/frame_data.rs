use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::params::FrameParams;

#[derive(Debug)]
pub struct FrameData {
    /// Monotonic frame counter, starting at 1.
    pub sequence: u64,
    pub params: FrameParams,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
