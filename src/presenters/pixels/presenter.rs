use pixels::{Pixels, SurfaceTexture};
use tracing::warn;
use winit::window::Window;

use crate::controllers::viewer::data::frame_data::FrameData;
use crate::controllers::viewer::ports::frame_sink::FrameSink;
use crate::core::data::resolution::Resolution;
use crate::input::gui::errors::ViewerError;

/// Shows rendered frames in the window through a `pixels` framebuffer.
///
/// The framebuffer keeps the configured resolution; the surface is scaled to the
/// window by `pixels`.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    resolution: Resolution,
    has_frame: bool,
    last_presented_sequence: u64,
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        if frame.pixel_buffer.resolution() != self.resolution {
            warn!(
                frame_width = frame.pixel_buffer.resolution().width(),
                frame_height = frame.pixel_buffer.resolution().height(),
                "dropping frame with mismatched resolution"
            );
            return;
        }

        if frame.sequence <= self.last_presented_sequence {
            return;
        }

        self.pixels
            .frame_mut()
            .copy_from_slice(frame.pixel_buffer.buffer());
        self.has_frame = true;
        self.last_presented_sequence = frame.sequence;
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, ViewerError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        Ok(Self {
            pixels,
            resolution,
            has_frame: false,
            last_presented_sequence: 0,
        })
    }

    /// Zero-sized surfaces (minimised windows) are skipped.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    pub fn render(&mut self) -> Result<(), ViewerError> {
        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()?;
        Ok(())
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}
