use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::resolution::Resolution;

/// Colours one value per pixel into an RGBA buffer, in parallel.
///
/// `input` must be row-major and hold exactly one value per pixel of `resolution`.
pub fn generate_pixel_buffer<CMap>(
    input: &[CMap::T],
    resolution: Resolution,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    CMap: ColourMap + Sync,
    CMap::T: Copy + Sync,
{
    let expected = resolution.pixel_count() * BYTES_PER_PIXEL;
    let actual = input.len() * BYTES_PER_PIXEL;

    if expected != actual {
        return Err(PixelBufferError::BoundsMismatch { expected, actual });
    }

    let mut buffer = vec![0; expected];
    buffer
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(input.par_iter())
        .for_each(|(pixel, &value)| {
            pixel.copy_from_slice(&colour_map.map(value).to_rgba8());
        });

    PixelBuffer::from_data(resolution, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    struct GreyMap {}

    impl ColourMap for GreyMap {
        type T = u8;

        fn map(&self, value: u8) -> Colour {
            let v = f32::from(value) / 255.0;
            Colour::opaque(v, v, v)
        }
    }

    #[test]
    fn test_generates_rgba_per_value() {
        let resolution = Resolution::new(2, 2).unwrap();

        let buffer = generate_pixel_buffer(&[0, 51, 102, 255], resolution, &GreyMap {}).unwrap();

        assert_eq!(
            buffer.buffer(),
            &[
                0, 0, 0, 255, 51, 51, 51, 255, 102, 102, 102, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_preserves_row_major_order() {
        let resolution = Resolution::new(3, 2).unwrap();

        let buffer =
            generate_pixel_buffer(&[0, 0, 0, 0, 0, 255], resolution, &GreyMap {}).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }).unwrap(), [255, 255, 255, 255]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_rejects_input_of_wrong_length() {
        let resolution = Resolution::new(2, 2).unwrap();

        let result = generate_pixel_buffer(&[0, 0, 0], resolution, &GreyMap {});

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected: 16,
                actual: 12
            })
        );
    }
}
