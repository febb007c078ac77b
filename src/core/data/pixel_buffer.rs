use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

pub const BYTES_PER_PIXEL: usize = 4;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} buffer",
        .pixel.x, .pixel.y, .resolution.width(), .resolution.height()
    )]
    PixelOutsideBounds { pixel: Point, resolution: Resolution },
    #[error("resolution requires {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image, laid out the way the presentation surface expects it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = resolution_to_buffer_size(resolution);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; 4], PixelBufferError> {
        let index = self
            .resolution
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            })?;
        let start = index * BYTES_PER_PIXEL;

        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.buffer[start..start + BYTES_PER_PIXEL]);
        Ok(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_allocates_zeroed_rgba_buffer() {
        let buffer = PixelBuffer::new(resolution(4, 3));

        assert_eq!(buffer.buffer().len(), 4 * 3 * BYTES_PER_PIXEL);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_rejects_mismatched_length() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![0; 15]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_pixel_reads_row_major_rgba() {
        let data: Vec<u8> = (0..24).collect();
        let buffer = PixelBuffer::from_data(resolution(3, 2), data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), [0, 1, 2, 3]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), [16, 17, 18, 19]);
    }

    #[test]
    fn test_pixel_outside_bounds_fails() {
        let buffer = PixelBuffer::new(resolution(3, 2));
        let pixel = Point { x: 3, y: 0 };

        let result = buffer.pixel(pixel);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: resolution(3, 2)
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "pixel at x:3, y:0 outside of 3x2 buffer"
        );
    }
}
